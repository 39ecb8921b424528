use super::constants::{
    DEFAULT_SEED, LIFESPAN_MS, NOISE_DEFAULTS, PARALLAX_FAR, PARALLAX_NEAR, POOL_CAPACITY,
    SHAPE_ROUND, SPRING_BOUNCY, THROTTLE_WINDOW_MS,
};
use super::error::ConfigError;
use super::mask::{self, MaskEllipse};
use super::noise::{NoiseConfig, NoiseFieldController, NoiseFilterParams};
use super::particle::{ParticlePool, PoolConfig};
use super::pointer::{ParallaxLayer, PointerDispatcher, SurfaceRect};
use glam::Vec2;

/// Full construction-time configuration. Validated fail-fast by
/// `TrailEngine::new`; nothing here is clamped after the fact.
#[derive(Clone, Debug)]
pub struct TrailConfig {
    pub pool: PoolConfig,
    pub throttle_window_ms: f64,
    pub parallax_layers: Vec<ParallaxLayer>,
    pub noise: NoiseConfig,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            pool: PoolConfig {
                capacity: POOL_CAPACITY,
                position_spring: SPRING_BOUNCY,
                shape_spring: SPRING_BOUNCY,
                shape: SHAPE_ROUND,
                lifespan_ms: LIFESPAN_MS,
                seed: DEFAULT_SEED,
            },
            throttle_window_ms: THROTTLE_WINDOW_MS,
            parallax_layers: vec![PARALLAX_NEAR, PARALLAX_FAR],
            noise: NOISE_DEFAULTS,
        }
    }
}

/// Single-threaded facade over the whole trail core: owns the monotonic
/// clock, the pool, the dispatcher, and the noise controller. One `tick`
/// per display frame; pointer events arrive between ticks, never during.
pub struct TrailEngine {
    clock_ms: f64,
    pool: ParticlePool,
    dispatcher: PointerDispatcher,
    noise: NoiseFieldController,
}

impl TrailEngine {
    pub fn new(config: TrailConfig) -> Result<Self, ConfigError> {
        let pool = ParticlePool::new(config.pool)?;
        let dispatcher =
            PointerDispatcher::new(config.throttle_window_ms, config.parallax_layers)?;
        let noise = NoiseFieldController::new(config.noise)?;
        Ok(Self {
            clock_ms: 0.0,
            pool,
            dispatcher,
            noise,
        })
    }

    /// Advance the engine clock and every live spring by `dt_ms`.
    pub fn tick(&mut self, dt_ms: f64) {
        self.clock_ms += dt_ms;
        self.pool.tick(self.clock_ms, dt_ms);
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.clock_ms
    }

    /// Forward a raw pointer-move event; returns `true` when accepted
    /// (i.e. not dropped by the throttle).
    pub fn pointer_moved(&mut self, client: Vec2, rect: SurfaceRect) -> bool {
        self.dispatcher
            .pointer_moved(&mut self.pool, client, rect, self.clock_ms)
    }

    /// Current mask descriptors, one per slot, radii already clamped.
    pub fn compose_mask_into(&self, out: &mut Vec<MaskEllipse>) {
        mask::compose_into(&self.pool, out);
    }

    pub fn noise_params(&self) -> NoiseFilterParams {
        self.noise.params(self.clock_ms)
    }

    /// Per-layer parallax offsets from the last accepted pointer event.
    #[inline]
    pub fn parallax(&self) -> &[Vec2] {
        self.dispatcher.parallax()
    }

    #[inline]
    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }
}
