//! Engine configuration.
//!
//! Every field has a default taken from [`crate::constants`]; front-ends may
//! override individual values (the web mount reads `data-*` attributes) and
//! must call [`CursorParams::validate`] before handing them to the engine.

use crate::constants::*;
use crate::error::ConfigError;

/// Spring follower parameters for the cursor glyph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    /// 1.0 is critical damping; values above are overdamped.
    pub damping_ratio: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping_ratio: SPRING_DAMPING_RATIO,
        }
    }
}

impl SpringParams {
    /// Natural angular frequency for unit mass.
    #[inline]
    pub fn omega(&self) -> f32 {
        self.stiffness.sqrt()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CursorParams {
    pub trail_capacity: usize,
    pub emit_distance_px: f32,
    pub jitter_px: f32,
    pub particle_size_px: (f32, f32),
    pub particle_lifetime_ms: u64,
    pub idle_hide_ms: u64,
    pub breath_period_ms: u64,
    pub breath_scale: (f32, f32),
    pub glyph_half_size_px: f32,
    pub spring: SpringParams,
}

impl Default for CursorParams {
    fn default() -> Self {
        Self {
            trail_capacity: TRAIL_CAPACITY,
            emit_distance_px: EMIT_DISTANCE_PX,
            jitter_px: JITTER_PX,
            particle_size_px: (PARTICLE_SIZE_MIN_PX, PARTICLE_SIZE_MAX_PX),
            particle_lifetime_ms: PARTICLE_LIFETIME_MS,
            idle_hide_ms: IDLE_HIDE_MS,
            breath_period_ms: BREATH_PERIOD_MS,
            breath_scale: (BREATH_SCALE_MIN, BREATH_SCALE_MAX),
            glyph_half_size_px: GLYPH_HALF_SIZE_PX,
            spring: SpringParams::default(),
        }
    }
}

impl CursorParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trail_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        non_negative("emit_distance_px", self.emit_distance_px)?;
        non_negative("jitter_px", self.jitter_px)?;
        non_negative("glyph_half_size_px", self.glyph_half_size_px)?;
        range("particle_size_px", self.particle_size_px)?;
        range("breath_scale", self.breath_scale)?;
        positive_ms("particle_lifetime_ms", self.particle_lifetime_ms)?;
        positive_ms("idle_hide_ms", self.idle_hide_ms)?;
        positive_ms("breath_period_ms", self.breath_period_ms)?;

        let SpringParams {
            stiffness,
            damping_ratio,
        } = self.spring;
        if !(stiffness.is_finite() && stiffness > 0.0) {
            return Err(ConfigError::NonPositive {
                field: "spring.stiffness",
                value: stiffness as f64,
            });
        }
        if !damping_ratio.is_finite() || damping_ratio < 1.0 {
            return Err(ConfigError::Underdamped(damping_ratio));
        }
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive {
            field,
            value: value as f64,
        })
    }
}

fn range(field: &'static str, (min, max): (f32, f32)) -> Result<(), ConfigError> {
    if min.is_finite() && max.is_finite() && min >= 0.0 && min <= max {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange { field, min, max })
    }
}

fn positive_ms(field: &'static str, value: u64) -> Result<(), ConfigError> {
    if value > 0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive {
            field,
            value: value as f64,
        })
    }
}
