// Inline style strings for the glyph and bubbles.
//
// Kept free of `web_sys` so the formatting can be tested on the host.

use super::constants::*;
use cursor_core::{GlyphStyle, ParticleView, GLYPH_SIZE_PX};

pub fn layer_css() -> String {
    format!(
        "position:fixed;inset:0;pointer-events:none;overflow:hidden;z-index:{};",
        LAYER_Z_INDEX
    )
}

pub fn glyph_base_css() -> String {
    format!(
        "position:fixed;top:0;left:0;width:{s}px;height:{s}px;will-change:transform;",
        s = GLYPH_SIZE_PX
    )
}

pub fn ring_base_css() -> String {
    format!(
        "position:absolute;inset:0;border-radius:50%;border:{b}px solid;box-sizing:border-box;\
         backdrop-filter:blur(4px);transition:opacity {o}ms, border-color {c}ms, transform {s}ms ease-out;",
        b = RING_BORDER_PX,
        o = OPACITY_FADE_MS,
        c = BORDER_FADE_MS,
        s = SCALE_EASE_MS
    )
}

pub fn core_css(filled: bool) -> String {
    format!(
        "position:absolute;inset:0;border-radius:50%;opacity:{};background:{};",
        CORE_OPACITY,
        if filled { "#ffffff" } else { "transparent" }
    )
}

pub fn dot_css(visible: bool) -> String {
    format!(
        "position:absolute;top:50%;left:50%;width:{d}px;height:{d}px;margin:-{h}px 0 0 -{h}px;\
         border-radius:50%;background:#ffffff;display:{};",
        if visible { "block" } else { "none" },
        d = DOT_SIZE_PX,
        h = DOT_SIZE_PX * 0.5
    )
}

#[inline]
pub fn translate_px(x: f32, y: f32) -> String {
    format!("translate3d({:.2}px, {:.2}px, 0)", x, y)
}

#[inline]
pub fn scale(s: f32) -> String {
    format!("scale({:.3})", s)
}

/// Per-frame properties of the ring as `(property, value)` pairs.
pub fn ring_props(style: &GlyphStyle) -> [(&'static str, String); 4] {
    [
        ("opacity", format!("{}", style.opacity)),
        ("transform", scale(style.scale)),
        ("border-color", style.border_color.to_string()),
        ("box-shadow", style.glow.to_string()),
    ]
}

/// Static placement of a bubble, set once when its node is created.
pub fn bubble_base_css(view: &ParticleView) -> String {
    format!(
        "position:absolute;left:{x:.2}px;top:{y:.2}px;width:{s:.2}px;height:{s:.2}px;\
         border-radius:50%;border-style:solid;background-color:{fill};border-color:{border};\
         box-shadow:{shadow};",
        x = view.x,
        y = view.y,
        s = view.size_px,
        fill = BUBBLE_FILL,
        border = BUBBLE_BORDER,
        shadow = BUBBLE_SHADOW
    )
}

/// Per-frame properties of a bubble, evaluated from its decay look.
pub fn bubble_props(view: &ParticleView) -> [(&'static str, String); 3] {
    [
        ("opacity", format!("{:.3}", view.look.opacity)),
        (
            "transform",
            format!("translate(-50%, -50%) {}", scale(view.look.scale)),
        ),
        ("border-width", format!("{:.2}px", view.look.border_px)),
    ]
}
