//! Scalar type alias for the simulation.
//!
//! Using `f32` to match `glam::Vec2` and keep state buffers compact.
//! This alias makes it easy to experiment with `f64` precision if needed.

/// The floating-point type used throughout the simulation.
pub type Scalar = f32;
