//! # weft-types
//!
//! Shared types, identifiers, error types, and simulation constants
//! for the weft cloth simulation engine.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other weft crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod scalar;

pub use error::{WeftError, WeftResult};
pub use ids::{ConstraintId, ParticleId};
pub use scalar::Scalar;

// Re-export the canonical 2D vector type. The whole engine works in
// screen-space pixels, so `glam::Vec2` covers every math need.
pub use glam::Vec2;
