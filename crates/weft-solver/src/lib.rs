//! # weft-solver
//!
//! The cloth simulation core: position-based Verlet integration over
//! SoA particle buffers, distance constraints relaxed with sequential
//! Gauss–Seidel passes, and the fixed per-tick pipeline.
//!
//! ## Key Types
//!
//! - [`ClothState`] — SoA buffers for positions, previous positions,
//!   accumulated accelerations, and pinned flags
//! - [`ConstraintSet`] — tombstoned distance constraints in fixed
//!   insertion order
//! - [`SolverConfig`] — gravity, timestep, damping, pass count
//! - [`run_tick`] — one physics tick in the fixed stage order

pub mod config;
pub mod constraint;
pub mod relax;
pub mod state;
pub mod tick;

pub use config::SolverConfig;
pub use constraint::{ConstraintSet, DistanceConstraint};
pub use relax::{relax, relax_pass};
pub use state::ClothState;
pub use tick::run_tick;
