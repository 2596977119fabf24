//! # weft-interact
//!
//! Runtime topology mutation for the weft engine.
//!
//! Two interactive operations change the cloth while it runs:
//!
//! - **Tearing** — a drag gesture samples a polyline; every active
//!   constraint whose particle segment is crossed by the polyline is
//!   permanently deactivated ([`tear::tear_along`]).
//! - **Pinning** — a proximity click toggles the first particle (in
//!   storage order) within a fixed radius ([`pin::toggle_pin_near`]).
//!
//! [`InteractionState`] is the explicit gesture state (current mode,
//! drag-in-progress polyline, cursor) the driver threads events
//! through; applying an event is a function of `(state, event)` with
//! no process-wide mutable state.

pub mod geometry;
pub mod input;
pub mod pin;
pub mod tear;

pub use geometry::{segments_intersect, Rect};
pub use input::{InputEvent, InteractionMode, InteractionOutcome, InteractionState};
