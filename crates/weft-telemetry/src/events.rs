//! Simulation event types.
//!
//! Structured events emitted by the driver at various points in each
//! frame. Events are lightweight value types that carry just enough
//! data to be useful for monitoring and debugging.

use serde::{Deserialize, Serialize};

/// A simulation event emitted by the engine.
///
/// Events are tagged with the physics tick index current when they
/// were emitted (interaction events can fall between ticks).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Physics tick number (0-indexed).
    pub tick: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventKind {
    /// A physics tick started.
    TickBegin {
        /// Simulated time at the start of this tick (seconds).
        sim_time: f64,
    },

    /// A physics tick completed.
    TickEnd {
        /// Wall-clock time for the tick (seconds).
        wall_time: f64,
    },

    /// A tear gesture completed.
    ConstraintTorn {
        /// Number of constraints the gesture severed.
        severed: u32,
    },

    /// A particle's pinned flag toggled.
    PinToggled {
        /// Raw particle index.
        particle: u32,
        /// New pinned state.
        pinned: bool,
    },

    /// The simulation was rebuilt from its lattice spec.
    SimulationReset {
        /// Particle count after the rebuild.
        particles: u32,
        /// Constraint count after the rebuild.
        constraints: u32,
    },

    /// Custom event for extensibility.
    Custom {
        /// Arbitrary label.
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given tick.
    pub fn new(tick: u64, kind: EventKind) -> Self {
        Self { tick, kind }
    }
}
