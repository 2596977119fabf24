//! Lattice specification — the grid parameters a full reset rebuilds from.

use serde::{Deserialize, Serialize};
use weft_types::{constants, ParticleId, Scalar, WeftError, WeftResult};

use crate::lattice::Lattice;

/// Which particles start pinned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PinPattern {
    /// No particle starts pinned.
    None,
    /// Every `n`-th particle of the top row (`col % n == 0`).
    TopRowEvery(u32),
    /// The two top corners.
    TopCorners,
    /// An explicit list of particle ids.
    Explicit(Vec<ParticleId>),
}

/// Parameters of a rectangular cloth grid.
///
/// A full reset clears and rebuilds the particle and constraint
/// collections from this spec; no partial rebuild exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatticeSpec {
    /// Number of grid rows.
    pub rows: u32,
    /// Number of grid columns.
    pub cols: u32,
    /// Rest distance between neighboring particles (px).
    pub rest_distance: Scalar,
    /// Position of the top-left particle `[x, y]`.
    pub origin: [Scalar; 2],
    /// Initial pin assignment.
    pub pin_pattern: PinPattern,
}

impl Default for LatticeSpec {
    fn default() -> Self {
        Self {
            rows: constants::DEFAULT_ROWS,
            cols: constants::DEFAULT_COLS,
            rest_distance: constants::DEFAULT_REST_DISTANCE,
            origin: [constants::WINDOW_WIDTH / 3.0, 50.0],
            pin_pattern: PinPattern::TopRowEvery(5),
        }
    }
}

impl LatticeSpec {
    /// Total number of particles in the grid.
    #[inline]
    pub fn particle_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Row-major particle id of grid cell `(row, col)`.
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> ParticleId {
        ParticleId(row * self.cols + col)
    }

    /// Checks the spec for values the builder cannot work with.
    pub fn validate(&self) -> WeftResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(WeftError::InvalidLattice(format!(
                "grid must have at least one row and one column (got {}x{})",
                self.rows, self.cols
            )));
        }
        if !self.rest_distance.is_finite() || self.rest_distance <= 0.0 {
            return Err(WeftError::InvalidLattice(format!(
                "rest distance must be positive and finite (got {})",
                self.rest_distance
            )));
        }
        if let PinPattern::TopRowEvery(n) = self.pin_pattern {
            if n == 0 {
                return Err(WeftError::InvalidLattice(
                    "TopRowEvery stride must be nonzero".into(),
                ));
            }
        }
        if let PinPattern::Explicit(ref ids) = self.pin_pattern {
            let count = self.particle_count();
            for id in ids {
                if id.index() >= count {
                    return Err(WeftError::InvalidLattice(format!(
                        "explicit pin id {} out of range (particle count {})",
                        id.0, count
                    )));
                }
            }
        }
        Ok(())
    }

    /// Whether grid cell `(row, col)` starts pinned under this spec.
    pub fn is_pinned_at(&self, row: u32, col: u32) -> bool {
        match &self.pin_pattern {
            PinPattern::None => false,
            PinPattern::TopRowEvery(n) => row == 0 && col % n == 0,
            PinPattern::TopCorners => row == 0 && (col == 0 || col == self.cols - 1),
            PinPattern::Explicit(ids) => ids.contains(&self.index(row, col)),
        }
    }

    /// Builds the lattice: positions, pinned flags, and link topology.
    pub fn build(&self) -> WeftResult<Lattice> {
        self.validate()?;
        Ok(Lattice::generate(self))
    }
}
