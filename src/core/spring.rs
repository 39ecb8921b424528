use super::error::ConfigError;

/// Damped harmonic oscillator parameters.
///
/// `damping^2 >= 4 * stiffness * mass` gives critical/over-damped motion
/// (no overshoot); the "bouncy" presets sit slightly under that line and
/// are allowed a small overshoot past the target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.mass > 0.0) {
            return Err(ConfigError::NonPositiveMass(self.mass));
        }
        if !(self.stiffness > 0.0) {
            return Err(ConfigError::NonPositiveStiffness(self.stiffness));
        }
        if !(self.damping >= 0.0) {
            return Err(ConfigError::NegativeDamping(self.damping));
        }
        Ok(())
    }

    #[inline]
    pub fn is_overdamped(&self) -> bool {
        self.damping * self.damping >= 4.0 * self.stiffness * self.mass
    }
}

/// One animated scalar: current value, velocity, and the target it is
/// pulled toward. Pure state plus a pure step function, so many instances
/// can share a single external clock tick without cross-talk.
#[derive(Clone, Copy, Debug)]
pub struct SpringValue {
    value: f32,
    velocity: f32,
    target: f32,
    config: SpringConfig,
}

impl SpringValue {
    /// `config` must already be validated by the owning pool.
    pub fn new(initial: f32, config: SpringConfig) -> Self {
        Self {
            value: initial,
            velocity: 0.0,
            target: initial,
            config,
        }
    }

    /// Retarget mid-flight; current value and velocity are untouched.
    #[inline]
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump straight to `value`, killing any in-flight motion.
    #[inline]
    pub fn snap(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Advance by `dt` seconds with semi-implicit Euler over
    /// `a = (k * (target - value) - c * velocity) / m`.
    pub fn tick(&mut self, dt_sec: f32) {
        let accel = (self.config.stiffness * (self.target - self.value)
            - self.config.damping * self.velocity)
            / self.config.mass;
        self.velocity += accel * dt_sec;
        self.value += self.velocity * dt_sec;
    }

    #[inline]
    pub fn read(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }
}
