// DOM and styling constants for the web front-end.
// Behavioural tuning lives in `cursor_core::constants`.

// Mounting
pub const MOUNT_ID: &str = "cyber-cursor"; // auto-mounted at start when present
pub const LAYER_CLASS: &str = "cyber-cursor-layer";
pub const GLYPH_CLASS: &str = "cyber-cursor-glyph";
pub const RING_CLASS: &str = "cyber-cursor-ring";
pub const CORE_CLASS: &str = "cyber-cursor-core";
pub const DOT_CLASS: &str = "cyber-cursor-dot";
pub const PARTICLE_CLASS: &str = "cyber-cursor-bubble";
pub const LAYER_Z_INDEX: u32 = 99_999;

// Glyph transitions (ms)
pub const OPACITY_FADE_MS: u32 = 300;
pub const BORDER_FADE_MS: u32 = 200;
pub const SCALE_EASE_MS: u32 = 180;

// Glyph ring
pub const RING_BORDER_PX: f32 = 2.0;
pub const CORE_OPACITY: f32 = 0.6;
pub const DOT_SIZE_PX: f32 = 4.0;

// Spray bubbles
pub const BUBBLE_FILL: &str = "rgba(145, 94, 255, 0.05)";
pub const BUBBLE_BORDER: &str = "rgba(145, 94, 255, 0.6)";
pub const BUBBLE_SHADOW: &str =
    "inset 0 0 15px rgba(145, 94, 255, 0.2), 0 0 5px rgba(255, 255, 255, 0.1)";

// Optional overrides read from the mount element
pub const ATTR_TRAIL_CAPACITY: &str = "data-trail-capacity";
pub const ATTR_EMIT_DISTANCE: &str = "data-emit-distance";
pub const ATTR_IDLE_HIDE_MS: &str = "data-idle-hide-ms";
pub const ATTR_SPRING_STIFFNESS: &str = "data-spring-stiffness";
