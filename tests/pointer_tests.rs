// Host-side tests for the pointer dispatcher (throttle + parallax).
// The crate's lib target is wasm-only, so we include the pure modules directly.

#![allow(dead_code)]
mod engine {
    pub mod error {
        include!("../src/core/error.rs");
    }
    pub mod spring {
        include!("../src/core/spring.rs");
    }
    pub mod particle {
        include!("../src/core/particle.rs");
    }
    pub mod pointer {
        include!("../src/core/pointer.rs");
    }
}

use engine::particle::*;
use engine::pointer::*;
use engine::spring::SpringConfig;
use glam::Vec2;

const SPRING: SpringConfig = SpringConfig {
    stiffness: 500.0,
    damping: 25.0,
    mass: 0.5,
};

fn make_pool(capacity: usize) -> ParticlePool {
    ParticlePool::new(PoolConfig {
        capacity,
        position_spring: SPRING,
        shape_spring: SPRING,
        shape: ShapePolicy {
            width: ShapeRange {
                min: 20.0,
                max: 100.0,
            },
            height: ShapeRange {
                min: 20.0,
                max: 100.0,
            },
        },
        lifespan_ms: 300.0,
        seed: 7,
    })
    .unwrap()
}

fn layer() -> ParallaxLayer {
    ParallaxLayer {
        input_span: Vec2::new(600.0, 400.0),
        amplitude: Vec2::new(4.0, 3.0),
    }
}

const RECT: SurfaceRect = SurfaceRect {
    left: 100.0,
    top: 50.0,
    width: 1200.0,
    height: 800.0,
};

#[test]
fn leading_edge_throttle_accepts_first_event_per_window() {
    let mut pool = make_pool(8);
    let mut d = PointerDispatcher::new(15.0, vec![layer()]).unwrap();
    let client = Vec2::new(400.0, 300.0);

    let accepted: Vec<bool> = [0.0, 5.0, 10.0, 20.0]
        .iter()
        .map(|&t| d.pointer_moved(&mut pool, client, RECT, t))
        .collect();
    assert_eq!(accepted, vec![true, false, false, true]);
}

#[test]
fn accepted_event_spawns_at_surface_relative_position() {
    let mut pool = make_pool(8);
    let mut d = PointerDispatcher::new(15.0, vec![]).unwrap();
    assert!(d.pointer_moved(&mut pool, Vec2::new(150.0, 80.0), RECT, 0.0));
    // position snaps, so the slot reads back immediately
    let p = &pool.particles()[0];
    assert_eq!(p.x.read(), 50.0);
    assert_eq!(p.y.read(), 30.0);
    assert_eq!(pool.pending_count(0), 2);
}

#[test]
fn dropped_events_spawn_nothing_and_leave_parallax_alone() {
    let mut pool = make_pool(8);
    let mut d = PointerDispatcher::new(15.0, vec![layer()]).unwrap();

    // center + (300, 200) -> half span -> half amplitude
    let at_offset = Vec2::new(RECT.left + 600.0 + 300.0, RECT.top + 400.0 + 200.0);
    assert!(d.pointer_moved(&mut pool, at_offset, RECT, 0.0));
    assert_eq!(d.parallax()[0], Vec2::new(2.0, 1.5));

    // inside the window: dropped, parallax untouched, no second spawn
    let elsewhere = Vec2::new(RECT.left, RECT.top);
    assert!(!d.pointer_moved(&mut pool, elsewhere, RECT, 5.0));
    assert_eq!(d.parallax()[0], Vec2::new(2.0, 1.5));
    assert_eq!(pool.pending_count(1), 0);
}

#[test]
fn parallax_clamps_at_the_input_span() {
    let centered = Vec2::new(1800.0, -1200.0);
    let offsets = layer().offsets(centered);
    assert_eq!(offsets, Vec2::new(4.0, -3.0));
}

#[test]
fn surface_rect_centering() {
    let client = Vec2::new(700.0, 450.0);
    assert_eq!(RECT.origin_relative(client), Vec2::new(600.0, 400.0));
    assert_eq!(RECT.center_relative(client), Vec2::ZERO);
}

#[test]
fn non_positive_throttle_window_is_rejected() {
    assert!(PointerDispatcher::new(0.0, vec![]).is_err());
    assert!(PointerDispatcher::new(-5.0, vec![]).is_err());
    assert!(PointerDispatcher::new(15.0, vec![]).is_ok());
}

#[test]
fn non_positive_parallax_span_is_rejected() {
    let degenerate = ParallaxLayer {
        input_span: Vec2::new(0.0, 400.0),
        amplitude: Vec2::new(4.0, 3.0),
    };
    assert!(PointerDispatcher::new(15.0, vec![degenerate]).is_err());

    let inverted = ParallaxLayer {
        input_span: Vec2::new(600.0, -400.0),
        amplitude: Vec2::new(4.0, 3.0),
    };
    assert!(PointerDispatcher::new(15.0, vec![layer(), inverted]).is_err());

    assert!(PointerDispatcher::new(15.0, vec![layer()]).is_ok());
}
