//! # weft-session
//!
//! The fixed-timestep simulation driver.
//!
//! A [`Session`] owns the particle and constraint collections, the
//! interaction state, and a [`StepClock`] accumulator. Each frame the
//! embedding loop drains input events into
//! [`Session::handle_event`] (mutations apply synchronously, before
//! any physics), then calls [`Session::frame`] with the measured
//! elapsed time (zero or more fixed ticks run), then reads
//! [`Session::snapshot`] for rendering.

pub mod clock;
pub mod config;
pub mod scenario;
pub mod session;
pub mod snapshot;

pub use clock::StepClock;
pub use config::SessionConfig;
pub use scenario::{Scenario, ScenarioKind};
pub use session::Session;
pub use snapshot::{OverlayState, SceneSnapshot};
