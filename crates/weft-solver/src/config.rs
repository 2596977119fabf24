//! Solver configuration.
//!
//! All values are compiled-in defaults; nothing is read from the
//! environment. Configs are serializable so scenario files can
//! override them.

use serde::{Deserialize, Serialize};
use weft_types::{constants, Scalar, WeftError, WeftResult};

/// Configuration for the cloth tick pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Gravity `[gx, gy]` in px/s². Screen space, so +Y is down.
    pub gravity: [Scalar; 2],

    /// Fixed physics step duration (seconds).
    pub time_step: Scalar,

    /// Per-tick implied-velocity damping factor (0, 1].
    pub damping: Scalar,

    /// Relaxation passes per tick.
    pub relaxation_passes: u32,

    /// Vertical restitution on ground contact.
    pub restitution: Scalar,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            gravity: [0.0, constants::GRAVITY],
            time_step: constants::DEFAULT_TIME_STEP,
            damping: constants::DEFAULT_DAMPING,
            relaxation_passes: constants::DEFAULT_RELAXATION_PASSES,
            restitution: constants::GROUND_RESTITUTION,
        }
    }
}

impl SolverConfig {
    /// An under-constrained config (few relaxation passes), useful
    /// for eyeballing the elastic behavior of the raw solver.
    pub fn slack() -> Self {
        Self {
            relaxation_passes: 4,
            ..Default::default()
        }
    }

    /// Checks the config for values the pipeline cannot work with.
    pub fn validate(&self) -> WeftResult<()> {
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(WeftError::InvalidConfig(format!(
                "time step must be positive and finite (got {})",
                self.time_step
            )));
        }
        if !self.damping.is_finite() || self.damping <= 0.0 || self.damping > 1.0 {
            return Err(WeftError::InvalidConfig(format!(
                "damping must be in (0, 1] (got {})",
                self.damping
            )));
        }
        if self.relaxation_passes == 0 {
            return Err(WeftError::InvalidConfig(
                "at least one relaxation pass is required".into(),
            ));
        }
        if !self.restitution.is_finite() || !(0.0..=1.0).contains(&self.restitution) {
            return Err(WeftError::InvalidConfig(format!(
                "restitution must be in [0, 1] (got {})",
                self.restitution
            )));
        }
        if self.gravity.iter().any(|g| !g.is_finite()) {
            return Err(WeftError::InvalidConfig("gravity must be finite".into()));
        }
        Ok(())
    }
}
