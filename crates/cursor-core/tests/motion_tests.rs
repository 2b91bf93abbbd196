// Host-side tests for the glyph spring follower.

use cursor_core::*;
use glam::Vec2;

fn at(x: f32, y: f32) -> PointerSample {
    PointerSample {
        x,
        y,
        timestamp_ms: 0,
        kind: PointerKind::Mouse,
    }
}

fn filter() -> MotionFilter {
    MotionFilter::new(SpringParams::default(), GLYPH_HALF_SIZE_PX)
}

#[test]
fn converges_to_centred_target_without_overshoot() {
    let mut f = filter();
    f.set_target(&at(116.0, 116.0));
    let mut prev = f.position().x;
    for _ in 0..120 {
        f.step(1.0 / 60.0);
        let x = f.position().x;
        assert!(x >= prev - 1e-4, "moved backwards: {prev} -> {x}");
        assert!(x <= 100.0 + 1e-3, "overshot: {x}");
        prev = x;
    }
    let p = f.position();
    assert!((p.x - 100.0).abs() < 0.01 && (p.y - 100.0).abs() < 0.01);
    assert!(f.velocity().length() < 0.1);
}

#[test]
fn step_size_does_not_change_the_path() {
    let mut coarse = filter();
    let mut fine = filter();
    coarse.set_target(&at(300.0, 50.0));
    fine.set_target(&at(300.0, 50.0));

    coarse.step(0.1);
    for _ in 0..10 {
        fine.step(0.01);
    }
    let a = coarse.position();
    let b = fine.position();
    assert!((a.x - b.x).abs() < 0.05, "{} vs {}", a.x, b.x);
    assert!((a.y - b.y).abs() < 0.05, "{} vs {}", a.y, b.y);
}

#[test]
fn only_latest_target_matters_between_frames() {
    let mut burst = filter();
    let mut single = filter();
    for x in [10.0, 80.0, 150.0, 220.0] {
        burst.set_target(&at(x, 0.0));
    }
    single.set_target(&at(220.0, 0.0));
    burst.step(1.0 / 60.0);
    single.step(1.0 / 60.0);
    assert_eq!(burst.position(), single.position());
}

#[test]
fn very_long_frame_settles_on_target() {
    let mut f = filter();
    f.set_target(&at(500.0, 400.0));
    f.step(30.0);
    let p = f.position();
    assert!((Vec2::new(p.x, p.y) - f.target()).length() < 1e-3);
}

#[test]
fn overdamped_spring_is_slower_but_still_monotonic() {
    let stiff = SpringParams {
        stiffness: 700.0,
        damping_ratio: 2.5,
    };
    let mut over = MotionFilter::new(stiff, GLYPH_HALF_SIZE_PX);
    let mut crit = filter();
    over.set_target(&at(216.0, 16.0));
    crit.set_target(&at(216.0, 16.0));
    let mut prev = over.position().x;
    for _ in 0..30 {
        over.step(1.0 / 60.0);
        crit.step(1.0 / 60.0);
        let x = over.position().x;
        assert!(x >= prev - 1e-4 && x <= 200.0 + 1e-3);
        prev = x;
    }
    assert!(over.position().x < crit.position().x);
}
