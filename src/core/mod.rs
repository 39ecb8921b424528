pub mod constants;
pub mod engine;
pub mod error;
pub mod mask;
pub mod noise;
pub mod particle;
pub mod pointer;
pub mod spring;

pub use constants::*;
pub use engine::*;
pub use error::*;
pub use mask::*;
pub use noise::*;
pub use particle::*;
pub use pointer::*;
pub use spring::*;
