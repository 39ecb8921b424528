use super::error::ConfigError;
use super::particle::ParticlePool;
use glam::Vec2;

/// Bounding geometry of the interactive surface, in client coordinates.
/// The wasm side fills this from `getBoundingClientRect()`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceRect {
    /// Pointer position relative to the surface origin (top-left).
    #[inline]
    pub fn origin_relative(&self, client: Vec2) -> Vec2 {
        Vec2::new(client.x - self.left, client.y - self.top)
    }

    /// Pointer position relative to the surface center.
    #[inline]
    pub fn center_relative(&self, client: Vec2) -> Vec2 {
        self.origin_relative(client) - Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Low-amplitude translation of one background layer, driven by the
/// centered pointer position: `±input_span` maps linearly to
/// `±amplitude`, clamped at the edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxLayer {
    pub input_span: Vec2,
    pub amplitude: Vec2,
}

impl ParallaxLayer {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.input_span.x > 0.0 && self.input_span.y > 0.0) {
            return Err(ConfigError::NonPositiveInputSpan {
                x: self.input_span.x,
                y: self.input_span.y,
            });
        }
        Ok(())
    }

    /// `input_span` is validated at dispatcher construction, so the
    /// remap here never divides by zero.
    #[inline]
    pub fn offsets(&self, centered: Vec2) -> Vec2 {
        Vec2::new(
            remap(centered.x, self.input_span.x, self.amplitude.x),
            remap(centered.y, self.input_span.y, self.amplitude.y),
        )
    }
}

#[inline]
fn remap(v: f32, in_span: f32, out_span: f32) -> f32 {
    (v / in_span).clamp(-1.0, 1.0) * out_span
}

/// Rate-limited pointer-move handler.
///
/// Leading-edge throttle: the first event in a window is processed
/// immediately and opens the window; everything arriving inside it is
/// dropped, not queued. The throttle clock is independent of the per-slot
/// lifecycle timers.
pub struct PointerDispatcher {
    throttle_window_ms: f64,
    throttle_until_ms: f64,
    layers: Vec<ParallaxLayer>,
    parallax: Vec<Vec2>,
}

impl PointerDispatcher {
    pub fn new(
        throttle_window_ms: f64,
        layers: Vec<ParallaxLayer>,
    ) -> Result<Self, ConfigError> {
        if !(throttle_window_ms > 0.0) {
            return Err(ConfigError::NonPositiveThrottle(throttle_window_ms));
        }
        for layer in &layers {
            layer.validate()?;
        }
        let parallax = vec![Vec2::ZERO; layers.len()];
        Ok(Self {
            throttle_window_ms,
            throttle_until_ms: f64::NEG_INFINITY,
            layers,
            parallax,
        })
    }

    /// Handle one raw pointer-move event. Returns `true` when the event
    /// was accepted; on accept the parallax targets are updated and the
    /// next pool slot is spawned at the surface-relative position.
    pub fn pointer_moved(
        &mut self,
        pool: &mut ParticlePool,
        client: Vec2,
        rect: SurfaceRect,
        now_ms: f64,
    ) -> bool {
        if now_ms < self.throttle_until_ms {
            return false;
        }
        self.throttle_until_ms = now_ms + self.throttle_window_ms;

        let centered = rect.center_relative(client);
        for (offset, layer) in self.parallax.iter_mut().zip(&self.layers) {
            *offset = layer.offsets(centered);
        }

        let local = rect.origin_relative(client);
        let slot = pool.acquire_next();
        pool.spawn(slot, local.x, local.y, now_ms);
        true
    }

    /// Current per-layer offsets, in the order the layers were configured.
    #[inline]
    pub fn parallax(&self) -> &[Vec2] {
        &self.parallax
    }

    #[inline]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }
}
