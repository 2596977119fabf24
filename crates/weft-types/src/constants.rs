//! Simulation constants and compiled-in defaults.
//!
//! The engine works in screen-space pixels with 100 px ≈ 1 m,
//! hence the gravity value of 980.

use crate::scalar::Scalar;

/// Gravitational acceleration (px/s², downward is +Y in screen space).
pub const GRAVITY: Scalar = 980.0;

/// Default fixed physics step (seconds). The simulation ticks 60 times
/// per simulated second regardless of frame rate.
pub const DEFAULT_TIME_STEP: Scalar = 0.016;

/// Default per-tick velocity damping factor. Lowering it makes the
/// cloth bouncier and less resistant to movement.
pub const DEFAULT_DAMPING: Scalar = 0.99;

/// Default number of constraint relaxation passes per tick.
/// More passes give stiffer, more accurate cloth at higher cost.
pub const DEFAULT_RELAXATION_PASSES: u32 = 15;

/// Default cloth grid rows.
pub const DEFAULT_ROWS: u32 = 30;

/// Default cloth grid columns.
pub const DEFAULT_COLS: u32 = 30;

/// Default rest distance between neighboring particles (px).
pub const DEFAULT_REST_DISTANCE: Scalar = 10.0;

/// Pick radius for pin toggling (px). Compared as squared distance.
pub const PIN_RADIUS: Scalar = 10.0;

/// Vertical restitution applied on ground contact.
pub const GROUND_RESTITUTION: Scalar = 0.5;

/// Default window width (px). The core consumes this only to place
/// the cloth, the ground plane, and the reset button.
pub const WINDOW_WIDTH: Scalar = 1080.0;

/// Default window height (px).
pub const WINDOW_HEIGHT: Scalar = 640.0;

/// Epsilon for floating-point comparisons in tests and validation.
pub const EPSILON: Scalar = 1.0e-5;
