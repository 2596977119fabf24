//! Strongly-typed identifiers for simulation entities.
//!
//! Newtype wrappers prevent accidental mixing of particle indices
//! with constraint indices. Both index into fixed-size arrays that
//! are never reallocated mid-run, so ids stay stable for the life
//! of a simulation (until a full reset rebuilds the collections).

use serde::{Deserialize, Serialize};

/// Index into the particle state buffers (row-major grid order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticleId(pub u32);

/// Index into the constraint array (fixed insertion order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConstraintId(pub u32);

impl ParticleId {
    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl ConstraintId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for ParticleId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl From<u32> for ConstraintId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}
