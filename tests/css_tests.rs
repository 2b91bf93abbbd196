// Host-side tests for inline style formatting.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod css {
    include!("../src/css.rs");
}

use css::*;
use cursor_core::{CursorState, GlyphStyle, ParticleLook, ParticleView, PARTICLE_LIFETIME_MS};

fn view(age_ms: u64) -> ParticleView {
    ParticleView {
        id: 3,
        x: 12.5,
        y: 40.0,
        size_px: 30.0,
        age_ms,
        look: ParticleLook::at(age_ms, PARTICLE_LIFETIME_MS),
    }
}

#[test]
fn translate_uses_two_decimals() {
    assert_eq!(translate_px(1.0, -2.345), "translate3d(1.00px, -2.35px, 0)");
}

#[test]
fn layer_never_captures_pointer() {
    let css = layer_css();
    assert!(css.contains("pointer-events:none"));
    assert!(css.contains("z-index:99999"));
}

#[test]
fn ring_props_follow_glyph_style() {
    let style = GlyphStyle::from_state(&CursorState {
        is_visible: true,
        is_clicking: true,
        is_hovering: false,
        breath_scale: 1.0,
    });
    let props = ring_props(&style);
    assert_eq!(props[0], ("opacity", "1".to_string()));
    assert_eq!(props[1], ("transform", "scale(0.500)".to_string()));
    assert_eq!(props[2].1, "#915eff");
}

#[test]
fn dot_hides_while_hovering() {
    assert!(dot_css(false).contains("display:none"));
    assert!(dot_css(true).contains("display:block"));
}

#[test]
fn bubble_is_placed_once_and_animated_per_frame() {
    let base = bubble_base_css(&view(0));
    assert!(base.contains("left:12.50px"));
    assert!(base.contains("width:30.00px"));

    let props = bubble_props(&view(0));
    assert_eq!(props[0], ("opacity", "0.700".to_string()));
    assert_eq!(
        props[1],
        ("transform", "translate(-50%, -50%) scale(0.800)".to_string())
    );
    assert_eq!(props[2], ("border-width", "2.00px".to_string()));
}

#[test]
fn finished_bubble_is_transparent() {
    let props = bubble_props(&view(PARTICLE_LIFETIME_MS));
    assert_eq!(props[0].1, "0.000");
    assert_eq!(props[2].1, "0.00px");
}
