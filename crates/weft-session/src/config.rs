//! Session configuration.
//!
//! Bundles the lattice spec, solver parameters, and the interaction
//! layout (pin radius, reset button, ground plane). Everything is a
//! compiled-in default; scenario files can override via serde.

use serde::{Deserialize, Serialize};
use weft_interact::Rect;
use weft_lattice::LatticeSpec;
use weft_solver::SolverConfig;
use weft_types::{constants, Scalar, WeftError, WeftResult};

/// Full configuration of a simulation session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Cloth grid parameters. A reset rebuilds from these.
    pub lattice: LatticeSpec,

    /// Tick pipeline parameters.
    pub solver: SolverConfig,

    /// Pick radius for pin toggling (px).
    pub pin_radius: Scalar,

    /// UI rectangle that triggers a full reset on pointer-down.
    pub reset_button: Rect,

    /// Ground plane height, if any.
    pub ground_y: Option<Scalar>,

    /// Optional window bounds `[width, height]` the cloth is clamped
    /// into after each tick. Disabled by default.
    pub bounds: Option<[Scalar; 2]>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            lattice: LatticeSpec::default(),
            solver: SolverConfig::default(),
            pin_radius: constants::PIN_RADIUS,
            reset_button: Rect::new(
                constants::WINDOW_WIDTH - 120.0,
                constants::WINDOW_HEIGHT - 60.0,
                100.0,
                40.0,
            ),
            ground_y: Some(constants::WINDOW_HEIGHT - 1.0),
            bounds: None,
        }
    }
}

impl SessionConfig {
    /// Checks the whole config tree.
    pub fn validate(&self) -> WeftResult<()> {
        self.lattice.validate()?;
        self.solver.validate()?;
        if !self.pin_radius.is_finite() || self.pin_radius <= 0.0 {
            return Err(WeftError::InvalidConfig(format!(
                "pin radius must be positive and finite (got {})",
                self.pin_radius
            )));
        }
        Ok(())
    }
}
