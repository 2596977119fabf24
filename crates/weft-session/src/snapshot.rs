//! Scene snapshots — the read-only view handed to the renderer.
//!
//! A snapshot carries everything a rendering collaborator needs for
//! one frame: particle positions with pinned flags (color selection),
//! active constraints as endpoint-position pairs (torn constraints
//! are omitted), and the overlay state for decoration. Snapshots are
//! serializable so headless runs can save them for later inspection.

use serde::{Deserialize, Serialize};
use weft_types::{Scalar, WeftError, WeftResult};

/// Gesture decoration for the current frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OverlayState {
    /// Tear mode, with the in-progress drag polyline if one exists.
    Tear {
        /// Sampled drag points, present only mid-gesture.
        drag: Option<Vec<[Scalar; 2]>>,
    },
    /// Pin mode, with the last known cursor position.
    Pin {
        /// Cursor position for the pin marker.
        cursor: Option<[Scalar; 2]>,
    },
}

/// A complete per-frame scene snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneSnapshot {
    /// Physics tick count at capture time.
    pub tick: u64,
    /// Simulated time in seconds.
    pub sim_time: f64,
    /// Particle positions, interleaved `[x0, y0, x1, y1, ...]`.
    pub positions: Vec<Scalar>,
    /// Per-particle pinned flags.
    pub pinned: Vec<bool>,
    /// Active constraints as endpoint positions `[ax, ay, bx, by]`.
    pub links: Vec<[Scalar; 4]>,
    /// Gesture decoration.
    pub overlay: OverlayState,
}

impl SceneSnapshot {
    /// Number of particles in the snapshot.
    #[inline]
    pub fn particle_count(&self) -> usize {
        self.positions.len() / 2
    }

    /// Number of active (drawable) constraint segments.
    #[inline]
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Minimum and maximum particle Y, or `None` for an empty scene.
    pub fn y_range(&self) -> Option<(Scalar, Scalar)> {
        let mut ys = self.positions.iter().skip(1).step_by(2);
        let first = *ys.next()?;
        let (mut min, mut max) = (first, first);
        for &y in ys {
            min = min.min(y);
            max = max.max(y);
        }
        Some((min, max))
    }

    /// Serializes to compact binary format.
    pub fn to_bytes(&self) -> WeftResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| WeftError::Serialization(e.to_string()))
    }

    /// Deserializes from binary format.
    pub fn from_bytes(data: &[u8]) -> WeftResult<Self> {
        bincode::deserialize(data).map_err(|e| WeftError::Serialization(e.to_string()))
    }
}
