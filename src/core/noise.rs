use super::error::ConfigError;

/// Periods and ranges of the three time-derived contour parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseConfig {
    /// Horizontal pan: sawtooth over `[-drift_range, drift_range]`.
    pub drift_x_period_ms: f64,
    /// Vertical pan, same shape on its own period.
    pub drift_y_period_ms: f64,
    pub drift_range: f32,
    /// Breathing spatial frequency: triangular wave, apex at mid-period.
    pub frequency_period_ms: f64,
    pub frequency_min: f32,
    pub frequency_max: f32,
}

impl NoiseConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for period in [
            self.drift_x_period_ms,
            self.drift_y_period_ms,
            self.frequency_period_ms,
        ] {
            if !(period > 0.0) {
                return Err(ConfigError::NonPositivePeriod(period));
            }
        }
        if !(self.frequency_min > 0.0 && self.frequency_min <= self.frequency_max) {
            return Err(ConfigError::InvalidFrequencyRange {
                min: self.frequency_min,
                max: self.frequency_max,
            });
        }
        Ok(())
    }
}

/// Per-tick parameters handed to the external edge-extraction filter
/// (turbulence base frequency plus pan offsets).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NoiseFilterParams {
    pub base_frequency: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

/// Derives the drifting-contour filter parameters from a monotonic clock.
/// Stateless: every value is a pure function of the elapsed time, so the
/// controller never accumulates drift of its own.
pub struct NoiseFieldController {
    config: NoiseConfig,
}

impl NoiseFieldController {
    pub fn new(config: NoiseConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn drift_x(&self, t_ms: f64) -> f32 {
        sawtooth(t_ms, self.config.drift_x_period_ms, self.config.drift_range)
    }

    #[inline]
    pub fn drift_y(&self, t_ms: f64) -> f32 {
        sawtooth(t_ms, self.config.drift_y_period_ms, self.config.drift_range)
    }

    #[inline]
    pub fn base_frequency(&self, t_ms: f64) -> f32 {
        triangle(
            t_ms,
            self.config.frequency_period_ms,
            self.config.frequency_min,
            self.config.frequency_max,
        )
    }

    pub fn params(&self, t_ms: f64) -> NoiseFilterParams {
        NoiseFilterParams {
            base_frequency: self.base_frequency(t_ms),
            offset_x: self.drift_x(t_ms),
            offset_y: self.drift_y(t_ms),
        }
    }
}

/// Linear ramp `-range..range` repeating every `period_ms`.
#[inline]
fn sawtooth(t_ms: f64, period_ms: f64, range: f32) -> f32 {
    let phase = (t_ms.rem_euclid(period_ms) / period_ms) as f32;
    -range + 2.0 * range * phase
}

/// Two linear segments meeting at the midpoint: `min` at the period
/// boundaries, `max` at the half-period.
#[inline]
fn triangle(t_ms: f64, period_ms: f64, min: f32, max: f32) -> f32 {
    let phase = (t_ms.rem_euclid(period_ms) / period_ms) as f32;
    let up = if phase < 0.5 {
        phase * 2.0
    } else {
        2.0 - phase * 2.0
    };
    min + (max - min) * up
}
