//! Distance constraints between particle pairs.
//!
//! Constraints are built once from the lattice topology and never
//! removed. A torn constraint is tombstoned (`active = false`) rather
//! than deleted, so constraint ids stay stable for the tear scan and
//! for anything else that references constraints by position.

use serde::{Deserialize, Serialize};
use weft_lattice::Lattice;
use weft_types::{ConstraintId, ParticleId, Scalar};

/// A distance link between two particles.
///
/// `rest_length` is measured from the initial inter-particle distance
/// at construction and is immutable thereafter. `active` makes a
/// one-way true→false transition when the constraint is torn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceConstraint {
    /// First endpoint (stable particle index, non-owning).
    pub a: ParticleId,
    /// Second endpoint.
    pub b: ParticleId,
    /// Rest length, fixed at creation.
    pub rest_length: Scalar,
    /// Tombstone flag. Inactive constraints have no position effect
    /// and are omitted from rendering.
    pub active: bool,
}

/// The constraint collection, in fixed insertion order.
///
/// Relaxation sweeps this list sequentially in insertion order
/// (Gauss–Seidel), so the order is part of the simulated behavior.
#[derive(Debug, Clone)]
pub struct ConstraintSet {
    constraints: Vec<DistanceConstraint>,
}

impl ConstraintSet {
    /// Builds the constraint set from a lattice's structural links,
    /// taking each rest length from the initial particle distance.
    pub fn from_lattice(lattice: &Lattice) -> Self {
        let constraints = lattice
            .links
            .iter()
            .map(|link| {
                let delta = lattice.position(link.b) - lattice.position(link.a);
                DistanceConstraint {
                    a: link.a,
                    b: link.b,
                    rest_length: delta.length(),
                    active: true,
                }
            })
            .collect();
        Self { constraints }
    }

    /// Total number of constraints, torn ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// True when the set holds no constraints at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Number of constraints still active.
    pub fn active_count(&self) -> usize {
        self.constraints.iter().filter(|c| c.active).count()
    }

    /// The constraint with the given id, if it exists.
    #[inline]
    pub fn get(&self, id: ConstraintId) -> Option<&DistanceConstraint> {
        self.constraints.get(id.index())
    }

    /// Iterates all constraints in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &DistanceConstraint> {
        self.constraints.iter()
    }

    /// Iterates `(id, constraint)` pairs for the active constraints only.
    pub fn iter_active(&self) -> impl Iterator<Item = (ConstraintId, &DistanceConstraint)> {
        self.constraints
            .iter()
            .enumerate()
            .filter(|(_, c)| c.active)
            .map(|(i, c)| (ConstraintId(i as u32), c))
    }

    /// Tombstones the constraint. Permanent: nothing short of a full
    /// reset reactivates a torn constraint.
    pub fn deactivate(&mut self, id: ConstraintId) {
        if let Some(c) = self.constraints.get_mut(id.index()) {
            c.active = false;
        }
    }
}
