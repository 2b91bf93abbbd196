//! Headless replay of a scripted pointer session through the cursor engine.
//!
//! Input arrives at 120 Hz while frames run at 60 Hz, so the log shows the
//! spring, trail and idle hide behaving with input and render decoupled.
//!
//! Usage: `cursor-replay [duration_ms] [seed]`

use anyhow::Context;
use cursor_core::{CursorParams, PointerTrailEngine, RawInput, RenderFrame};
use glam::Vec2;

const INPUT_PERIOD_MS: u64 = 8;
const FRAME_PERIOD_MS: u64 = 16;
const MOVE_UNTIL_MS: u64 = 2_000;
const PRESS_WINDOW_MS: (u64, u64) = (800, 1_000);
const HOVER_WINDOW_MS: (u64, u64) = (1_200, 1_400);

fn pointer_path(t_ms: u64) -> Vec2 {
    let t = t_ms as f32 / 1000.0;
    Vec2::new(
        400.0 + 250.0 * (t * 2.1).sin(),
        300.0 + 150.0 * (t * 3.3).sin(),
    )
}

fn inputs_at(t_ms: u64) -> Vec<RawInput<'static>> {
    let mut out = Vec::new();
    if t_ms < MOVE_UNTIL_MS {
        let p = pointer_path(t_ms);
        out.push(RawInput::MouseMove { x: p.x, y: p.y });
    }
    if t_ms == PRESS_WINDOW_MS.0 {
        out.push(RawInput::MouseDown);
    }
    if t_ms == PRESS_WINDOW_MS.1 {
        out.push(RawInput::MouseUp);
    }
    if t_ms == HOVER_WINDOW_MS.0 {
        out.push(RawInput::Over { actionable: true });
    }
    if t_ms == HOVER_WINDOW_MS.1 {
        out.push(RawInput::Over { actionable: false });
    }
    out
}

fn log_frame(t_ms: u64, f: &RenderFrame) {
    log::info!(
        "t={:>5}ms glyph=({:>7.1},{:>7.1}) mode={:?} scale={:.2} opacity={:.0} particles={}",
        t_ms,
        f.glyph.x,
        f.glyph.y,
        f.state.mode(),
        f.style.scale,
        f.style.opacity,
        f.particles.len()
    );
    for p in &f.particles {
        log::trace!(
            "    #{:<4} ({:>6.1},{:>6.1}) size={:>4.1} age={:>3}ms opacity={:.2} scale={:.2}",
            p.id,
            p.x,
            p.y,
            p.size_px,
            p.age_ms,
            p.look.opacity,
            p.look.scale
        );
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let duration_ms: u64 = match args.next() {
        Some(s) => s.parse().context("duration_ms must be an integer")?,
        None => 3_000,
    };
    let seed: u64 = match args.next() {
        Some(s) => s.parse().context("seed must be an integer")?,
        None => 42,
    };

    let mut engine = PointerTrailEngine::new(CursorParams::default(), seed)?;
    engine.activate(0);

    let mut emitted_max = 0usize;
    let mut t = 0;
    while t <= duration_ms {
        if t % INPUT_PERIOD_MS == 0 {
            for raw in inputs_at(t) {
                engine.handle(&raw, t);
            }
        }
        if t % FRAME_PERIOD_MS == 0 {
            let frame = engine.frame(t);
            emitted_max = emitted_max.max(frame.particles.len());
            if t % (FRAME_PERIOD_MS * 8) == 0 {
                log_frame(t, &frame);
            }
        }
        t += 1;
    }

    engine.deactivate();
    log::info!(
        "replayed {}ms, peak live particles {}, final visible={}",
        duration_ms,
        emitted_max,
        engine.state().is_visible
    );
    Ok(())
}
