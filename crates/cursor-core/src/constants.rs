// Tuning constants shared by the web front-end and the replay harness.
// `CursorParams::default()` is built from these.

// Trail buffer
pub const TRAIL_CAPACITY: usize = 15; // most recent particles kept
pub const EMIT_DISTANCE_PX: f32 = 20.0; // displacement since last emission needed for a new particle
pub const JITTER_PX: f32 = 15.0; // per-axis spray offset bound
pub const PARTICLE_SIZE_MIN_PX: f32 = 20.0;
pub const PARTICLE_SIZE_MAX_PX: f32 = 60.0;
pub const PARTICLE_LIFETIME_MS: u64 = 600;

// Visibility and breathing
pub const IDLE_HIDE_MS: u64 = 500; // quiet period before the glyph hides
pub const BREATH_PERIOD_MS: u64 = 500;
pub const BREATH_SCALE_MIN: f32 = 0.9;
pub const BREATH_SCALE_MAX: f32 = 1.2;

// Glyph
pub const GLYPH_SIZE_PX: f32 = 32.0;
pub const GLYPH_HALF_SIZE_PX: f32 = GLYPH_SIZE_PX * 0.5; // centres the glyph on the pointer
pub const OFFSCREEN_PX: f32 = -100.0; // start position before any input arrives

// Glyph scale per mode
pub const CLICK_SCALE: f32 = 0.5;
pub const HOVER_SCALE: f32 = 2.5;

// Spring follower
pub const SPRING_STIFFNESS: f32 = 700.0;
pub const SPRING_DAMPING_RATIO: f32 = 1.0; // 1 = critical
