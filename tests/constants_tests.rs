// Host-side tests for tuning constants and their relationships.
// The crate's lib target is wasm-only, so we include the pure modules directly.

#![allow(dead_code)]
mod engine {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod error {
        include!("../src/core/error.rs");
    }
    pub mod noise {
        include!("../src/core/noise.rs");
    }
    pub mod particle {
        include!("../src/core/particle.rs");
    }
    pub mod pointer {
        include!("../src/core/pointer.rs");
    }
    pub mod spring {
        include!("../src/core/spring.rs");
    }
}

use engine::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn spring_presets_are_valid() {
    assert!(SPRING_BOUNCY.validate().is_ok());
    assert!(SPRING_OVERDAMPED.validate().is_ok());
    // the overdamped preset must actually be over the critical line;
    // the bouncy one sits deliberately under it
    assert!(SPRING_OVERDAMPED.is_overdamped());
    assert!(!SPRING_BOUNCY.is_overdamped());
    // discriminant spelled out: damping^2 must not dip under 4km
    let s = SPRING_OVERDAMPED;
    assert!(s.damping * s.damping >= 4.0 * s.stiffness * s.mass);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn shape_presets_are_valid_ranges() {
    assert!(SHAPE_ROUND.validate().is_ok());
    assert!(SHAPE_DASH.validate().is_ok());
    assert!(SHAPE_ROUND.width.min > 0.0);
    assert!(SHAPE_DASH.height.min > 0.0);
    // the dash preset is wider than tall, that is its point
    assert!(SHAPE_DASH.width.max > SHAPE_DASH.height.max);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn lifecycle_windows_are_in_the_intended_bands() {
    assert!((300.0..=400.0).contains(&LIFESPAN_MS));
    assert!((15.0..=25.0).contains(&THROTTLE_WINDOW_MS));
    // the throttle never outlives a particle's first half-life
    assert!(THROTTLE_WINDOW_MS < LIFESPAN_MS / 2.0);
    assert!(POOL_CAPACITY >= 1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn parallax_presets_are_low_amplitude() {
    for layer in [PARALLAX_NEAR, PARALLAX_FAR] {
        assert!(layer.amplitude.x < layer.input_span.x);
        assert!(layer.amplitude.y < layer.input_span.y);
        assert!(layer.input_span.x > 0.0 && layer.input_span.y > 0.0);
    }
    // near layer moves more than the far one
    assert!(PARALLAX_NEAR.amplitude.x > PARALLAX_FAR.amplitude.x);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn noise_defaults_are_valid_and_slow() {
    assert!(NOISE_DEFAULTS.validate().is_ok());
    // all three curves run on tens-of-seconds periods
    assert!(NOISE_DEFAULTS.drift_x_period_ms >= 30_000.0);
    assert!(NOISE_DEFAULTS.drift_y_period_ms >= 30_000.0);
    assert!(NOISE_DEFAULTS.frequency_period_ms >= 10_000.0);
    assert!(NOISE_DEFAULTS.frequency_min < NOISE_DEFAULTS.frequency_max);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn filter_pipeline_constants_are_sane() {
    assert!(NOISE_OCTAVES >= 1);
    assert!(EDGE_DILATE_RADIUS > 0.0);
    assert!(FILTER_MARGIN_PCT > 0);
    // four quantization levels spanning 0..1
    let levels: Vec<f32> = BAND_TABLE_VALUES
        .split_whitespace()
        .map(|v| v.parse().unwrap())
        .collect();
    assert_eq!(levels.len(), 4);
    assert_eq!(levels[0], 0.0);
    assert_eq!(*levels.last().unwrap(), 1.0);
    assert!(levels.windows(2).all(|w| w[0] < w[1]));
}
