//! Platform-free core of the cyber cursor.
//!
//! The web front-end and the replay harness both drive a
//! [`PointerTrailEngine`]: raw input goes in through [`PointerTrailEngine::handle`],
//! and [`PointerTrailEngine::frame`] returns what to draw.

pub mod constants;
pub mod decay;
pub mod engine;
pub mod error;
pub mod input;
pub mod motion;
pub mod params;
pub mod style;
pub mod timer;
pub mod trail;
pub mod visibility;

pub use constants::*;
pub use decay::ParticleLook;
pub use engine::{ParticleView, PointerTrailEngine, RenderFrame};
pub use error::ConfigError;
pub use input::{
    is_actionable, normalize, HoverTarget, PointerEvent, PointerKind, PointerSample, RawInput,
    Subscriptions, WINDOW_EVENTS,
};
pub use motion::{MotionFilter, SmoothedPosition};
pub use params::{CursorParams, SpringParams};
pub use style::GlyphStyle;
pub use trail::{TrailGenerator, TrailParticle};
pub use visibility::{CursorMode, CursorState, VisibilityController};
