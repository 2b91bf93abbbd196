//! The pointer trail engine: one object the platform layer feeds with raw
//! input and polls once per display frame.

use crate::decay::ParticleLook;
use crate::error::ConfigError;
use crate::input::{self, PointerEvent, RawInput};
use crate::motion::{MotionFilter, SmoothedPosition};
use crate::params::CursorParams;
use crate::style::GlyphStyle;
use crate::trail::TrailGenerator;
use crate::visibility::{CursorState, VisibilityController};
use glam::Vec2;

/// A live particle plus everything needed to draw it this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleView {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub size_px: f32,
    pub age_ms: u64,
    pub look: ParticleLook,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderFrame {
    /// Top-left of the glyph box, already offset by half the glyph size.
    pub glyph: SmoothedPosition,
    pub state: CursorState,
    pub style: GlyphStyle,
    /// Most recent first.
    pub particles: Vec<ParticleView>,
}

pub struct PointerTrailEngine {
    params: CursorParams,
    motion: MotionFilter,
    trail: TrailGenerator,
    visibility: VisibilityController,
    active: bool,
    last_frame_ms: Option<u64>,
}

impl PointerTrailEngine {
    pub fn new(params: CursorParams, seed: u64) -> Result<Self, ConfigError> {
        params.validate()?;
        // independent streams so trail emission never shifts the breathing sequence
        let breath_seed = seed ^ 0x9E37_79B9_7F4A_7C15;
        Ok(Self {
            motion: MotionFilter::new(params.spring, params.glyph_half_size_px),
            trail: TrailGenerator::new(&params, seed),
            visibility: VisibilityController::new(&params, breath_seed),
            params,
            active: false,
            last_frame_ms: None,
        })
    }

    pub fn params(&self) -> &CursorParams {
        &self.params
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self, now_ms: u64) {
        if self.active {
            return;
        }
        self.active = true;
        self.last_frame_ms = None;
        self.visibility.start(now_ms);
        log::info!("[engine] activated at {}ms", now_ms);
    }

    /// Cancels every pending timer and clears the trail. Safe to call twice.
    pub fn deactivate(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.visibility.stop();
        self.trail.clear();
        self.last_frame_ms = None;
        log::info!("[engine] deactivated");
    }

    /// Applies one platform event to every component. Returns the normalized
    /// event, or `None` when the engine is inactive or the event carried
    /// nothing usable.
    pub fn handle(&mut self, raw: &RawInput<'_>, now_ms: u64) -> Option<PointerEvent> {
        if !self.active {
            return None;
        }
        let ev = input::normalize(raw, now_ms)?;
        match ev {
            PointerEvent::Move(sample) => {
                self.visibility.on_move(sample.timestamp_ms);
                self.motion.set_target(&sample);
                self.trail.on_sample(&sample);
            }
            PointerEvent::Press { down } => self.visibility.on_press(down, now_ms),
            PointerEvent::Hover { actionable } => self.visibility.on_hover(actionable),
        }
        Some(ev)
    }

    /// Advances the spring and timers to `now_ms` and snapshots the output.
    pub fn frame(&mut self, now_ms: u64) -> RenderFrame {
        if self.active {
            let dt_sec = self
                .last_frame_ms
                .map(|last| now_ms.saturating_sub(last) as f32 / 1000.0)
                .unwrap_or(0.0);
            self.last_frame_ms = Some(now_ms);
            self.motion.step(dt_sec);
            self.visibility.tick(now_ms);
            self.trail.expire(now_ms);
        }
        self.snapshot(now_ms)
    }

    pub fn snapshot(&self, now_ms: u64) -> RenderFrame {
        let lifetime = self.trail.lifetime_ms();
        let particles = self
            .trail
            .live(now_ms)
            .map(|(p, age_ms)| ParticleView {
                id: p.id,
                x: p.x,
                y: p.y,
                size_px: p.size_px,
                age_ms,
                look: ParticleLook::at(age_ms, lifetime),
            })
            .collect();
        let state = *self.visibility.state();
        RenderFrame {
            glyph: self.motion.position(),
            state,
            style: GlyphStyle::from_state(&state),
            particles,
        }
    }

    pub fn state(&self) -> &CursorState {
        self.visibility.state()
    }

    pub fn hide_deadline(&self) -> Option<u64> {
        self.visibility.hide_deadline()
    }

    pub fn trail(&self) -> &TrailGenerator {
        &self.trail
    }

    pub fn last_position(&self) -> Vec2 {
        self.trail.last_position()
    }

    pub fn motion(&self) -> &MotionFilter {
        &self.motion
    }
}
