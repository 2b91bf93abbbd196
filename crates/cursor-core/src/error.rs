use thiserror::Error;

/// Rejected engine configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("trail capacity must be at least 1")]
    ZeroCapacity,

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must be a non-empty, non-negative range, got {min}..{max}")]
    InvalidRange {
        field: &'static str,
        min: f32,
        max: f32,
    },

    #[error("spring damping ratio {0} is below critical (1.0)")]
    Underdamped(f32),
}
