use thiserror::Error;

/// Construction-time contract violations.
///
/// Configuration is validated once when the engine is built and never
/// silently clamped; a bad value here means the caller's config is wrong.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("spring mass must be > 0 (got {0})")]
    NonPositiveMass(f32),
    #[error("spring stiffness must be > 0 (got {0})")]
    NonPositiveStiffness(f32),
    #[error("spring damping must be >= 0 (got {0})")]
    NegativeDamping(f32),
    #[error("particle pool capacity must be >= 1")]
    ZeroCapacity,
    #[error("shape range inverted: min {min} > max {max}")]
    InvertedRange { min: f32, max: f32 },
    #[error("particle lifespan must be > 0 ms (got {0})")]
    NonPositiveLifespan(f64),
    #[error("throttle window must be > 0 ms (got {0})")]
    NonPositiveThrottle(f64),
    #[error("parallax input span must be > 0 (got {x} x {y})")]
    NonPositiveInputSpan { x: f32, y: f32 },
    #[error("noise period must be > 0 ms (got {0})")]
    NonPositivePeriod(f64),
    #[error("noise frequency range invalid: {min}..{max}")]
    InvalidFrequencyRange { min: f32, max: f32 },
}
