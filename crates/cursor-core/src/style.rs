//! Glyph appearance derived from [`CursorState`].

use crate::constants::{CLICK_SCALE, HOVER_SCALE};
use crate::visibility::{CursorMode, CursorState};

pub const ACCENT: &str = "#915eff";
pub const HOVER_BORDER: &str = "#ffffff";
pub const IDLE_BORDER: &str = "rgba(255, 255, 255, 0.3)";
pub const CLICK_GLOW: &str = "0 0 20px 5px rgba(145, 94, 255, 0.8)";
pub const IDLE_GLOW: &str = "0 0 10px rgba(255, 255, 255, 0.2)";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphStyle {
    pub scale: f32,
    /// Target opacity; the renderer fades toward it.
    pub opacity: f32,
    pub border_color: &'static str,
    pub glow: &'static str,
    /// Solid core while pressed.
    pub filled: bool,
    pub show_center_dot: bool,
}

impl GlyphStyle {
    pub fn from_state(state: &CursorState) -> Self {
        let (scale, border_color) = match state.mode() {
            CursorMode::Clicking => (CLICK_SCALE, ACCENT),
            CursorMode::Hovering => (HOVER_SCALE, HOVER_BORDER),
            CursorMode::Moving | CursorMode::Idle => (state.breath_scale, IDLE_BORDER),
        };
        Self {
            scale,
            opacity: if state.is_visible { 1.0 } else { 0.0 },
            border_color,
            glow: if state.is_clicking { CLICK_GLOW } else { IDLE_GLOW },
            filled: state.is_clicking,
            show_center_dot: !state.is_hovering,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_takes_precedence_over_hovering() {
        let s = CursorState {
            is_visible: true,
            is_clicking: true,
            is_hovering: true,
            breath_scale: 1.1,
        };
        let style = GlyphStyle::from_state(&s);
        assert_eq!(style.scale, CLICK_SCALE);
        assert_eq!(style.border_color, ACCENT);
        assert!(style.filled);
        assert!(!style.show_center_dot);
    }

    #[test]
    fn idle_glyph_breathes_and_hides() {
        let s = CursorState {
            breath_scale: 1.05,
            ..CursorState::default()
        };
        let style = GlyphStyle::from_state(&s);
        assert_eq!(style.scale, 1.05);
        assert_eq!(style.opacity, 0.0);
        assert_eq!(style.glow, IDLE_GLOW);
    }
}
