//! # weft-lattice
//!
//! Cloth grid construction for the weft engine.
//!
//! A [`LatticeSpec`] describes a rectangular grid of particles (rows,
//! columns, rest distance, origin, pin pattern); [`LatticeSpec::build`]
//! produces a [`Lattice`]: row-major particle positions, pinned flags,
//! and the structural link topology (horizontal + vertical neighbor
//! edges) in a fixed insertion order the solver relies on.

pub mod lattice;
pub mod spec;

pub use lattice::{Lattice, Link};
pub use spec::{LatticeSpec, PinPattern};
