//! The input state machine.
//!
//! Gesture state (current mode, drag-in-progress polyline, cursor) is
//! an explicit value owned by the driver and threaded through event
//! application, so the topology mutator is a function of
//! `(state, event)` rather than global mutable fields.

use serde::{Deserialize, Serialize};
use weft_solver::{ClothState, ConstraintSet};
use weft_types::{ParticleId, Scalar, Vec2};

use crate::pin::toggle_pin_near;
use crate::tear::tear_along;

/// What pointer gestures currently mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    /// Drags draw a tear line.
    Tear,
    /// Clicks toggle the nearest particle's pinned flag.
    Pin,
}

/// A discrete input event delivered by the windowing collaborator.
///
/// Events are ordered; the driver applies them synchronously and fully
/// before any physics tick of the same frame runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Dedicated mode-toggle signal (key press).
    ModeToggle,
    /// Pointer button pressed.
    PointerDown(Vec2),
    /// Pointer moved.
    PointerMove(Vec2),
    /// Pointer button released.
    PointerUp(Vec2),
}

/// What applying one event did to the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionOutcome {
    /// No topology change.
    None,
    /// The interaction mode flipped.
    ModeChanged(InteractionMode),
    /// A tear gesture completed, severing `severed` constraints
    /// (possibly zero).
    Torn { severed: u32 },
    /// A particle's pinned flag toggled.
    PinToggled { particle: ParticleId, pinned: bool },
}

/// Explicit gesture state threaded through the driver.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    /// Current mode.
    pub mode: InteractionMode,
    /// Polyline sampled so far by an in-progress drag (tear mode).
    pub drag: Option<Vec<Vec2>>,
    /// Last known pointer position, for the pin-mode cursor overlay.
    pub cursor: Option<Vec2>,
}

impl InteractionState {
    /// Starts in tear mode with no gesture in progress.
    pub fn new() -> Self {
        Self {
            mode: InteractionMode::Tear,
            drag: None,
            cursor: None,
        }
    }

    /// True while a drag gesture is being sampled.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Applies one input event, mutating the cloth as the current mode
    /// dictates and returning what happened.
    ///
    /// Mode toggling cancels any drag in progress. A completed drag
    /// commits the tear scan on pointer release; a pin-mode click
    /// toggles at most one particle.
    pub fn apply(
        &mut self,
        event: InputEvent,
        state: &mut ClothState,
        constraints: &mut ConstraintSet,
        pin_radius: Scalar,
    ) -> InteractionOutcome {
        match event {
            InputEvent::ModeToggle => {
                self.mode = match self.mode {
                    InteractionMode::Tear => InteractionMode::Pin,
                    InteractionMode::Pin => InteractionMode::Tear,
                };
                self.drag = None;
                InteractionOutcome::ModeChanged(self.mode)
            }
            InputEvent::PointerDown(p) => {
                self.cursor = Some(p);
                match self.mode {
                    InteractionMode::Tear => {
                        self.drag = Some(vec![p]);
                        InteractionOutcome::None
                    }
                    InteractionMode::Pin => match toggle_pin_near(p, pin_radius, state) {
                        Some((particle, pinned)) => {
                            InteractionOutcome::PinToggled { particle, pinned }
                        }
                        None => InteractionOutcome::None,
                    },
                }
            }
            InputEvent::PointerMove(p) => {
                self.cursor = Some(p);
                if self.mode == InteractionMode::Tear {
                    if let Some(drag) = self.drag.as_mut() {
                        drag.push(p);
                    }
                }
                InteractionOutcome::None
            }
            InputEvent::PointerUp(p) => {
                self.cursor = Some(p);
                match self.drag.take() {
                    Some(path) if self.mode == InteractionMode::Tear => {
                        let severed = tear_along(&path, state, constraints);
                        InteractionOutcome::Torn { severed }
                    }
                    _ => InteractionOutcome::None,
                }
            }
        }
    }
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new()
    }
}
