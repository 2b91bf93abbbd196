// Host-side tests for idle hide, press/hover flags and breathing, driven
// through the engine with a simulated millisecond clock.

use cursor_core::*;

fn engine() -> PointerTrailEngine {
    let mut e = PointerTrailEngine::new(CursorParams::default(), 7).expect("default params");
    e.activate(0);
    e
}

fn move_to(e: &mut PointerTrailEngine, x: f32, y: f32, t: u64) {
    e.handle(&RawInput::MouseMove { x, y }, t);
}

#[test]
fn hidden_until_first_input() {
    let mut e = engine();
    assert!(!e.frame(0).state.is_visible);
    move_to(&mut e, 10.0, 10.0, 5);
    assert!(e.state().is_visible);
}

#[test]
fn hides_exactly_after_idle_timeout() {
    let mut e = engine();
    move_to(&mut e, 10.0, 10.0, 1000);
    assert!(e.frame(1499).state.is_visible);
    assert!(!e.frame(1500).state.is_visible);
}

#[test]
fn move_before_deadline_restarts_countdown() {
    let mut e = engine();
    move_to(&mut e, 10.0, 10.0, 1000);
    move_to(&mut e, 12.0, 10.0, 1499);
    assert_eq!(e.hide_deadline(), Some(1999));
    assert!(e.frame(1500).state.is_visible);
    assert!(e.frame(1998).state.is_visible);
    assert!(!e.frame(1999).state.is_visible);
}

#[test]
fn touch_move_reveals_like_mouse() {
    let mut e = engine();
    let touches = [glam::Vec2::new(40.0, 40.0)];
    e.handle(&RawInput::TouchMove { touches: &touches }, 100);
    assert!(e.state().is_visible);
    assert_eq!(e.hide_deadline(), Some(600));
}

#[test]
fn hover_and_click_are_independent() {
    let mut e = engine();
    e.handle(&RawInput::MouseDown, 10);
    e.handle(&RawInput::Over { actionable: true }, 20);
    assert!(e.state().is_clicking);
    assert!(e.state().is_hovering);
    assert_eq!(e.state().mode(), CursorMode::Clicking);

    e.handle(&RawInput::MouseUp, 30);
    assert!(!e.state().is_clicking);
    assert!(e.state().is_hovering);
    assert_eq!(e.state().mode(), CursorMode::Hovering);
}

#[test]
fn press_survives_idle_hide() {
    let mut e = engine();
    e.handle(&RawInput::TouchStart, 0);
    let f = e.frame(500);
    assert!(!f.state.is_visible);
    assert!(f.state.is_clicking);
}

#[test]
fn hover_is_level_triggered() {
    let mut e = engine();
    e.handle(&RawInput::Over { actionable: true }, 0);
    assert!(e.frame(10_000).state.is_hovering, "no timeout on hover");
    e.handle(&RawInput::Over { actionable: false }, 10_001);
    assert!(!e.state().is_hovering);
}

#[test]
fn breathing_is_frozen_while_hovering() {
    let mut e = engine();
    e.handle(&RawInput::Over { actionable: true }, 1);
    let frozen = e.state().breath_scale;
    for t in [500, 1000, 1500, 2000] {
        assert_eq!(e.frame(t).state.breath_scale, frozen);
    }
    e.handle(&RawInput::Over { actionable: false }, 2100);
    let s = e.frame(2500).state.breath_scale;
    assert!((BREATH_SCALE_MIN..=BREATH_SCALE_MAX).contains(&s));
}

#[test]
fn breathing_is_frozen_while_clicking() {
    let mut e = engine();
    e.frame(500);
    let before = e.state().breath_scale;
    e.handle(&RawInput::MouseDown, 600);
    for t in [1000, 1500, 2000] {
        assert_eq!(e.frame(t).state.breath_scale, before);
    }
}

#[test]
fn breathing_rerolls_within_range_when_idle() {
    let mut e = engine();
    let mut seen = Vec::new();
    for k in 1..=20u64 {
        let s = e.frame(k * BREATH_PERIOD_MS).state.breath_scale;
        assert!((BREATH_SCALE_MIN..=BREATH_SCALE_MAX).contains(&s));
        seen.push(s);
    }
    assert!(seen.windows(2).any(|w| w[0] != w[1]));
}

#[test]
fn frames_between_ticks_do_not_reroll() {
    let mut e = engine();
    let first = e.frame(500).state.breath_scale;
    assert_eq!(e.frame(700).state.breath_scale, first);
    assert_eq!(e.frame(999).state.breath_scale, first);
}
