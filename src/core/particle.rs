use super::error::ConfigError;
use super::spring::{SpringConfig, SpringValue};
use rand::prelude::*;
use smallvec::SmallVec;

/// Uniform sampling range for one shape radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeRange {
    pub min: f32,
    pub max: f32,
}

impl ShapeRange {
    pub fn new(min: f32, max: f32) -> Result<Self, ConfigError> {
        let r = Self { min, max };
        r.validate()?;
        Ok(r)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min <= self.max) {
            return Err(ConfigError::InvertedRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn sample(&self, rng: &mut StdRng) -> f32 {
        rng.gen_range(self.min..=self.max)
    }
}

/// Width/height radius ranges drawn independently on each spawn and pulse.
/// The two observed presets ("round" and "dash") live in `constants.rs`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapePolicy {
    pub width: ShapeRange,
    pub height: ShapeRange,
}

impl ShapePolicy {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.width.validate()?;
        self.height.validate()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    /// Mid-life shape re-roll.
    Pulse,
    /// End-of-life: width/height targets to zero.
    Decay,
}

#[derive(Clone, Copy, Debug)]
pub struct ScheduledAction {
    pub fire_at_ms: f64,
    pub kind: ActionKind,
}

/// One reusable trail slot: five animated axes plus the slot's pending
/// lifecycle actions. Slots are allocated once and recycled round-robin;
/// a particle has no identity beyond its pool index.
pub struct Particle {
    pub x: SpringValue,
    pub y: SpringValue,
    pub width: SpringValue,
    pub height: SpringValue,
    pub rotation: SpringValue,
    pending: SmallVec<[ScheduledAction; 2]>,
    rng: StdRng,
}

impl Particle {
    fn new(position_spring: SpringConfig, shape_spring: SpringConfig, rng: StdRng) -> Self {
        Self {
            x: SpringValue::new(0.0, position_spring),
            y: SpringValue::new(0.0, position_spring),
            width: SpringValue::new(0.0, shape_spring),
            height: SpringValue::new(0.0, shape_spring),
            rotation: SpringValue::new(0.0, shape_spring),
            pending: SmallVec::new(),
            rng,
        }
    }

    fn roll_shape(&mut self, shape: &ShapePolicy) {
        let w = shape.width.sample(&mut self.rng);
        let h = shape.height.sample(&mut self.rng);
        let rot = self.rng.gen_range(0.0..360.0);
        self.width.set_target(w);
        self.height.set_target(h);
        self.rotation.set_target(rot);
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PoolConfig {
    pub capacity: usize,
    pub position_spring: SpringConfig,
    pub shape_spring: SpringConfig,
    pub shape: ShapePolicy,
    pub lifespan_ms: f64,
    pub seed: u64,
}

impl PoolConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        self.position_spring.validate()?;
        self.shape_spring.validate()?;
        self.shape.validate()?;
        if !(self.lifespan_ms > 0.0) {
            return Err(ConfigError::NonPositiveLifespan(self.lifespan_ms));
        }
        Ok(())
    }
}

/// Fixed-capacity ring of particle slots with a round-robin cursor.
///
/// `acquire_next` + `spawn` is the only way a slot is retargeted;
/// acquiring a slot clears its pending lifecycle actions first, so an
/// early respawn can never be zeroed by the previous life's decay.
pub struct ParticlePool {
    particles: Vec<Particle>,
    next_index: usize,
    shape: ShapePolicy,
    lifespan_ms: f64,
}

impl ParticlePool {
    pub fn new(config: PoolConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        // Derive per-slot RNGs from the base seed so slots sample
        // independently and stay reproducible.
        let particles = (0..config.capacity)
            .map(|i| {
                let mix = config.seed ^ (i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
                Particle::new(
                    config.position_spring,
                    config.shape_spring,
                    StdRng::seed_from_u64(mix),
                )
            })
            .collect();
        Ok(Self {
            particles,
            next_index: 0,
            shape: config.shape,
            lifespan_ms: config.lifespan_ms,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of not-yet-fired lifecycle actions on a slot.
    pub fn pending_count(&self, slot: usize) -> usize {
        self.particles[slot].pending.len()
    }

    /// Round-robin: returns the least-recently-spawned slot and advances
    /// the cursor. Cancels the slot's pending actions as a side effect.
    pub fn acquire_next(&mut self) -> usize {
        let index = self.next_index;
        self.next_index = (index + 1) % self.particles.len();
        self.particles[index].pending.clear();
        index
    }

    /// Re-target a slot at a new pointer position: position snaps (no
    /// visible lag mid-trail), shape re-rolls and glides, and the pulse
    /// and decay actions are scheduled against the engine clock.
    pub fn spawn(&mut self, slot: usize, x: f32, y: f32, now_ms: f64) {
        let shape = self.shape;
        let lifespan = self.lifespan_ms;
        let p = &mut self.particles[slot];
        p.x.snap(x);
        p.y.snap(y);
        p.roll_shape(&shape);
        p.pending.push(ScheduledAction {
            fire_at_ms: now_ms + lifespan / 2.0,
            kind: ActionKind::Pulse,
        });
        p.pending.push(ScheduledAction {
            fire_at_ms: now_ms + lifespan,
            kind: ActionKind::Decay,
        });
    }

    /// One clock tick: fire due lifecycle actions, then integrate every
    /// axis of every slot by `dt_ms`.
    pub fn tick(&mut self, now_ms: f64, dt_ms: f64) {
        let dt_sec = (dt_ms * 1e-3) as f32;
        let shape = self.shape;
        for p in &mut self.particles {
            let mut i = 0;
            while i < p.pending.len() {
                if p.pending[i].fire_at_ms <= now_ms {
                    let action = p.pending.remove(i);
                    match action.kind {
                        ActionKind::Pulse => p.roll_shape(&shape),
                        ActionKind::Decay => {
                            p.width.set_target(0.0);
                            p.height.set_target(0.0);
                        }
                    }
                } else {
                    i += 1;
                }
            }
            p.x.tick(dt_sec);
            p.y.tick(dt_sec);
            p.width.tick(dt_sec);
            p.height.tick(dt_sec);
            p.rotation.tick(dt_sec);
        }
    }
}
