//! # weft-telemetry
//!
//! Event bus for simulation telemetry. The session emits structured
//! events (tick timing, tears, pin toggles, resets) that can be
//! consumed by pluggable sinks (tracing, test collectors, ...).

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use sinks::{EventSink, TracingSink, VecSink};
