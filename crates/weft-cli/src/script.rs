//! Gesture scripts — timed input events replayed headlessly.
//!
//! A script is a JSON list of `{at, action}` entries. Replay walks the
//! frame clock forward, delivering each event to the session once its
//! timestamp is reached (events within a frame drain before that
//! frame's physics ticks, matching the interactive loop).
//!
//! ```json
//! {
//!   "events": [
//!     { "at": 0.5, "action": { "PointerDown": { "x": 400.0, "y": 40.0 } } },
//!     { "at": 0.6, "action": { "PointerMove": { "x": 400.0, "y": 200.0 } } },
//!     { "at": 0.7, "action": { "PointerUp": { "x": 400.0, "y": 200.0 } } }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use weft_interact::InputEvent;
use weft_session::Session;
use weft_types::{Scalar, Vec2, WeftError, WeftResult};

/// One scripted input action.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum ScriptAction {
    /// Toggle between tear and pin mode.
    ModeToggle,
    /// Press the pointer button.
    PointerDown { x: Scalar, y: Scalar },
    /// Move the pointer.
    PointerMove { x: Scalar, y: Scalar },
    /// Release the pointer button.
    PointerUp { x: Scalar, y: Scalar },
}

impl ScriptAction {
    fn to_input(self) -> InputEvent {
        match self {
            ScriptAction::ModeToggle => InputEvent::ModeToggle,
            ScriptAction::PointerDown { x, y } => InputEvent::PointerDown(Vec2::new(x, y)),
            ScriptAction::PointerMove { x, y } => InputEvent::PointerMove(Vec2::new(x, y)),
            ScriptAction::PointerUp { x, y } => InputEvent::PointerUp(Vec2::new(x, y)),
        }
    }
}

/// A timed script event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScriptEvent {
    /// When to deliver the event (seconds from the start of the run).
    pub at: Scalar,
    /// What to deliver.
    pub action: ScriptAction,
}

/// An ordered gesture script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureScript {
    /// Events, ordered by `at`.
    pub events: Vec<ScriptEvent>,
}

impl GestureScript {
    /// Loads and validates a script file.
    pub fn load(path: &str) -> WeftResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let script: GestureScript = serde_json::from_str(&json)
            .map_err(|e| WeftError::InvalidScript(e.to_string()))?;
        script.validate()?;
        Ok(script)
    }

    /// Rejects unordered or non-finite timestamps.
    pub fn validate(&self) -> WeftResult<()> {
        let mut last = 0.0;
        for (i, event) in self.events.iter().enumerate() {
            if !event.at.is_finite() || event.at < 0.0 {
                return Err(WeftError::InvalidScript(format!(
                    "event {i} has invalid timestamp {}",
                    event.at
                )));
            }
            if event.at < last {
                return Err(WeftError::InvalidScript(format!(
                    "event {i} is out of order ({} after {})",
                    event.at, last
                )));
            }
            last = event.at;
        }
        Ok(())
    }

    /// Timestamp of the last event, or zero for an empty script.
    pub fn duration(&self) -> Scalar {
        self.events.last().map(|e| e.at).unwrap_or(0.0)
    }

    /// Replays the script against a session at a fixed frame cadence,
    /// running one extra second past the last event so the cloth
    /// settles.
    pub fn replay(&self, session: &mut Session, frame_time: Scalar) {
        let total = self.duration() + 1.0;
        let frames = (total / frame_time).ceil() as u32;
        let mut next = 0usize;
        let mut now: Scalar = 0.0;

        for _ in 0..frames {
            now += frame_time;
            while next < self.events.len() && self.events[next].at <= now {
                session.handle_event(self.events[next].action.to_input());
                next += 1;
            }
            session.frame(frame_time);
        }
    }
}
