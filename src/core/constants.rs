use super::noise::NoiseConfig;
use super::particle::{ShapePolicy, ShapeRange};
use super::pointer::ParallaxLayer;
use super::spring::SpringConfig;
use glam::Vec2;

// Engine tuning constants and presets shared by the wasm front-end and the
// host-side tests. These express intended behavior and keep magic numbers
// out of the code.

// Pool and lifecycle
pub const POOL_CAPACITY: usize = 8;
pub const LIFESPAN_MS: f64 = 300.0; // pulse at lifespan/2, decay at lifespan
pub const THROTTLE_WINDOW_MS: f64 = 15.0; // leading-edge pointer throttle
pub const DEFAULT_SEED: u64 = 42;

// Spring presets (stiffness, damping, mass). The default preset is the
// slightly under-damped "bouncy" one; OVERDAMPED settles with no
// overshoot and suits slower, heavier trails.
pub const SPRING_BOUNCY: SpringConfig = SpringConfig {
    stiffness: 500.0,
    damping: 25.0,
    mass: 0.5,
};
pub const SPRING_OVERDAMPED: SpringConfig = SpringConfig {
    stiffness: 169.0,
    damping: 26.0,
    mass: 1.0,
};

// Shape randomization presets. Round blobs vs. elongated dashes; both are
// presets of the same policy, not separate algorithms.
pub const SHAPE_ROUND: ShapePolicy = ShapePolicy {
    width: ShapeRange {
        min: 20.0,
        max: 100.0,
    },
    height: ShapeRange {
        min: 20.0,
        max: 100.0,
    },
};
pub const SHAPE_DASH: ShapePolicy = ShapePolicy {
    width: ShapeRange {
        min: 30.0,
        max: 330.0,
    },
    height: ShapeRange {
        min: 10.0,
        max: 80.0,
    },
};

// Parallax layers, nearest first: centered pointer span -> pixel amplitude
pub const PARALLAX_NEAR: ParallaxLayer = ParallaxLayer {
    input_span: Vec2::new(600.0, 400.0),
    amplitude: Vec2::new(4.0, 3.0),
};
pub const PARALLAX_FAR: ParallaxLayer = ParallaxLayer {
    input_span: Vec2::new(600.0, 400.0),
    amplitude: Vec2::new(2.0, 1.0),
};

// Contour drift/breathing defaults (periods in ms)
pub const NOISE_DEFAULTS: NoiseConfig = NoiseConfig {
    drift_x_period_ms: 80_000.0,
    drift_y_period_ms: 60_000.0,
    drift_range: 100.0,
    frequency_period_ms: 30_000.0,
    frequency_min: 0.015,
    frequency_max: 0.03,
};

// Static parameters of the external edge-extraction filter graph
// (turbulence -> pan -> grayscale -> quantize -> dilate -> edge-subtract
// -> mask onto fill). The controller only derives the per-tick values;
// these describe the fixed pipeline the wasm side builds once.
pub const NOISE_OCTAVES: u32 = 2;
pub const NOISE_SEED: u32 = 10;
pub const BAND_TABLE_VALUES: &str = "0 0.33 0.66 1"; // 4 quantization levels
pub const EDGE_DILATE_RADIUS: f32 = 0.5; // thin contour lines
pub const FILTER_MARGIN_PCT: i32 = 20; // filter region overscan per side
