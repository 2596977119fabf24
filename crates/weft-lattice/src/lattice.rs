//! Built lattice data — SoA particle layout plus link topology.

use serde::{Deserialize, Serialize};
use weft_types::{ParticleId, Scalar, Vec2};

use crate::spec::LatticeSpec;

/// A structural link between two neighboring particles.
///
/// Links reference particles by stable row-major index, never by
/// position, so the solver can keep its own state buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// First endpoint.
    pub a: ParticleId,
    /// Second endpoint.
    pub b: ParticleId,
}

/// A built cloth grid.
///
/// Positions are stored SoA in row-major order. The link list holds
/// horizontal and vertical neighbor edges in the order they were
/// inserted: for each cell, the link to the right neighbor first,
/// then the link to the neighbor below. The solver sweeps constraints
/// in exactly this order, so it is part of the lattice contract.
#[derive(Debug, Clone)]
pub struct Lattice {
    /// Grid rows.
    pub rows: u32,
    /// Grid columns.
    pub cols: u32,
    /// X coordinates of all particles.
    pub pos_x: Vec<Scalar>,
    /// Y coordinates of all particles.
    pub pos_y: Vec<Scalar>,
    /// Initial pinned flags.
    pub pinned: Vec<bool>,
    /// Structural links in insertion order.
    pub links: Vec<Link>,
}

impl Lattice {
    /// Generates the lattice without validating the spec.
    /// [`LatticeSpec::build`] is the checked path; this one exists for
    /// callers holding a spec that already passed validation (e.g. a
    /// session reset rebuilding its collections).
    pub fn generate(spec: &LatticeSpec) -> Self {
        let count = spec.particle_count();
        let mut pos_x = Vec::with_capacity(count);
        let mut pos_y = Vec::with_capacity(count);
        let mut pinned = Vec::with_capacity(count);

        for row in 0..spec.rows {
            for col in 0..spec.cols {
                pos_x.push(spec.origin[0] + col as Scalar * spec.rest_distance);
                pos_y.push(spec.origin[1] + row as Scalar * spec.rest_distance);
                pinned.push(spec.is_pinned_at(row, col));
            }
        }

        // Horizontal then vertical link per cell, row-major.
        let mut links = Vec::new();
        for row in 0..spec.rows {
            for col in 0..spec.cols {
                let here = spec.index(row, col);
                if col < spec.cols - 1 {
                    links.push(Link {
                        a: here,
                        b: spec.index(row, col + 1),
                    });
                }
                if row < spec.rows - 1 {
                    links.push(Link {
                        a: here,
                        b: spec.index(row + 1, col),
                    });
                }
            }
        }

        Self {
            rows: spec.rows,
            cols: spec.cols,
            pos_x,
            pos_y,
            pinned,
            links,
        }
    }

    /// Number of particles.
    #[inline]
    pub fn particle_count(&self) -> usize {
        self.pos_x.len()
    }

    /// Number of structural links.
    #[inline]
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Position of particle `id`.
    #[inline]
    pub fn position(&self, id: ParticleId) -> Vec2 {
        Vec2::new(self.pos_x[id.index()], self.pos_y[id.index()])
    }
}
