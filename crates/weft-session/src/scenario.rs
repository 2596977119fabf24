//! Canned scenarios for headless runs and regression testing.

use serde::{Deserialize, Serialize};
use weft_lattice::{LatticeSpec, PinPattern};
use weft_types::{Scalar, WeftResult};

use crate::config::SessionConfig;
use crate::session::Session;

/// Which canned scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    /// The classic 30×30 cloth, every 5th top-row particle pinned,
    /// hanging and swaying under gravity.
    HangingCloth,
    /// A smaller sheet held only by its two top corners, which sags
    /// visibly and stresses the corner constraints.
    CornerSheet,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[ScenarioKind::HangingCloth, ScenarioKind::CornerSheet]
    }

    /// Returns a stable, CLI-friendly name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::HangingCloth => "hanging_cloth",
            ScenarioKind::CornerSheet => "corner_sheet",
        }
    }
}

/// A fully specified headless run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario type.
    pub kind: ScenarioKind,
    /// Session configuration.
    pub config: SessionConfig,
    /// Number of frames to simulate.
    pub frames: u32,
    /// Wall-clock time fed to the accumulator per frame (seconds).
    pub frame_time: Scalar,
}

impl Scenario {
    /// Builds the scenario for a kind.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::HangingCloth => Self::hanging_cloth(),
            ScenarioKind::CornerSheet => Self::corner_sheet(),
        }
    }

    /// The default interactive setup: 30×30 grid, rest distance 10,
    /// every 5th top-row particle pinned, 60 fps for 5 seconds.
    pub fn hanging_cloth() -> Self {
        Self {
            kind: ScenarioKind::HangingCloth,
            config: SessionConfig::default(),
            frames: 300,
            frame_time: 1.0 / 60.0,
        }
    }

    /// A 16×24 sheet pinned at its two top corners.
    pub fn corner_sheet() -> Self {
        let mut config = SessionConfig::default();
        config.lattice = LatticeSpec {
            rows: 16,
            cols: 24,
            pin_pattern: PinPattern::TopCorners,
            ..LatticeSpec::default()
        };
        Self {
            kind: ScenarioKind::CornerSheet,
            config,
            frames: 300,
            frame_time: 1.0 / 60.0,
        }
    }

    /// Creates the session this scenario describes.
    pub fn session(&self) -> WeftResult<Session> {
        Session::new(self.config.clone())
    }
}
