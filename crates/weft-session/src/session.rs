//! The simulation session — owner of all mutable simulation state.
//!
//! Single-threaded and cooperative: the embedding frame loop drains
//! pending input into [`Session::handle_event`] (topology mutations
//! apply synchronously and fully), then calls [`Session::frame`]
//! (zero or more fixed physics ticks), then takes a snapshot. Every
//! mutation committed during a frame's event drain is visible to
//! every tick executed later in that same frame.

use std::time::Instant;

use weft_interact::{InputEvent, InteractionMode, InteractionOutcome, InteractionState};
use weft_lattice::Lattice;
use weft_solver::{run_tick, ClothState, ConstraintSet};
use weft_telemetry::{EventBus, EventKind, SimulationEvent};
use weft_types::{Scalar, WeftResult};

use crate::clock::StepClock;
use crate::config::SessionConfig;
use crate::snapshot::{OverlayState, SceneSnapshot};

/// A running cloth simulation.
pub struct Session {
    config: SessionConfig,
    state: ClothState,
    constraints: ConstraintSet,
    interaction: InteractionState,
    clock: StepClock,
    tick: u64,
    sim_time: f64,
    bus: EventBus,
}

impl Session {
    /// Creates a session from a validated configuration.
    pub fn new(config: SessionConfig) -> WeftResult<Self> {
        config.validate()?;
        let lattice = config.lattice.build()?;
        let mut state = ClothState::from_lattice(&lattice);
        state.ground_y = config.ground_y;
        let constraints = ConstraintSet::from_lattice(&lattice);
        let clock = StepClock::new(config.solver.time_step);

        Ok(Self {
            config,
            state,
            constraints,
            interaction: InteractionState::new(),
            clock,
            tick: 0,
            sim_time: 0.0,
            bus: EventBus::new(),
        })
    }

    /// The particle state buffers.
    pub fn state(&self) -> &ClothState {
        &self.state
    }

    /// The constraint collection (torn constraints included).
    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// The current gesture state.
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// The current interaction mode.
    pub fn mode(&self) -> InteractionMode {
        self.interaction.mode
    }

    /// The session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Physics ticks run so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Simulated time in seconds.
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    /// The telemetry bus, for registering sinks.
    pub fn bus_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    /// Applies one input event synchronously.
    ///
    /// A pointer-down inside the reset button rectangle pre-empts mode
    /// dispatch and rebuilds the simulation instantly; everything else
    /// goes through the interaction state machine.
    pub fn handle_event(&mut self, event: InputEvent) {
        if let InputEvent::PointerDown(p) = event {
            if self.config.reset_button.contains(p) {
                self.reset();
                return;
            }
        }

        let outcome = self.interaction.apply(
            event,
            &mut self.state,
            &mut self.constraints,
            self.config.pin_radius,
        );
        match outcome {
            InteractionOutcome::Torn { severed } => {
                self.bus.emit(SimulationEvent::new(
                    self.tick,
                    EventKind::ConstraintTorn { severed },
                ));
            }
            InteractionOutcome::PinToggled { particle, pinned } => {
                self.bus.emit(SimulationEvent::new(
                    self.tick,
                    EventKind::PinToggled {
                        particle: particle.0,
                        pinned,
                    },
                ));
            }
            InteractionOutcome::None | InteractionOutcome::ModeChanged(_) => {}
        }
    }

    /// Advances the simulation by `elapsed` wall-clock seconds.
    ///
    /// Runs one fixed tick per whole step in the accumulator and
    /// returns how many ran. Telemetry is flushed afterwards.
    pub fn frame(&mut self, elapsed: Scalar) -> u32 {
        let ticks = self.clock.advance(elapsed);
        for _ in 0..ticks {
            self.tick_once();
        }
        self.bus.flush();
        ticks
    }

    fn tick_once(&mut self) {
        self.bus.emit(SimulationEvent::new(
            self.tick,
            EventKind::TickBegin {
                sim_time: self.sim_time,
            },
        ));
        let started = Instant::now();

        run_tick(&mut self.state, &self.constraints, &self.config.solver);
        if let Some([width, height]) = self.config.bounds {
            self.state.constrain_to_bounds(width, height);
        }

        self.sim_time += f64::from(self.config.solver.time_step);
        self.bus.emit(SimulationEvent::new(
            self.tick,
            EventKind::TickEnd {
                wall_time: started.elapsed().as_secs_f64(),
            },
        ));
        self.tick += 1;
    }

    /// Clears and rebuilds the particle and constraint collections
    /// from the lattice spec, atomically and immediately (not deferred
    /// to the next tick boundary). Interaction mode, tick counters,
    /// and the accumulator carry over.
    pub fn reset(&mut self) {
        let lattice = Lattice::generate(&self.config.lattice);
        let mut state = ClothState::from_lattice(&lattice);
        state.ground_y = self.config.ground_y;
        self.state = state;
        self.constraints = ConstraintSet::from_lattice(&lattice);

        self.bus.emit(SimulationEvent::new(
            self.tick,
            EventKind::SimulationReset {
                particles: self.state.particle_count as u32,
                constraints: self.constraints.len() as u32,
            },
        ));
    }

    /// Produces the read-only view for the rendering collaborator.
    ///
    /// Torn constraints are omitted from the link list.
    pub fn snapshot(&self) -> SceneSnapshot {
        let n = self.state.particle_count;
        let mut positions = Vec::with_capacity(n * 2);
        for i in 0..n {
            positions.push(self.state.pos_x[i]);
            positions.push(self.state.pos_y[i]);
        }

        let links = self
            .constraints
            .iter_active()
            .map(|(_, c)| {
                let pa = self.state.position(c.a);
                let pb = self.state.position(c.b);
                [pa.x, pa.y, pb.x, pb.y]
            })
            .collect();

        let overlay = match self.interaction.mode {
            InteractionMode::Tear => OverlayState::Tear {
                drag: self
                    .interaction
                    .drag
                    .as_ref()
                    .map(|path| path.iter().map(|p| [p.x, p.y]).collect()),
            },
            InteractionMode::Pin => OverlayState::Pin {
                cursor: self.interaction.cursor.map(|p| [p.x, p.y]),
            },
        };

        SceneSnapshot {
            tick: self.tick,
            sim_time: self.sim_time,
            positions,
            pinned: self.state.pinned.clone(),
            links,
            overlay,
        }
    }
}
