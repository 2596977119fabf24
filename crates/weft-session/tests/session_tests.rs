//! Integration tests for weft-session.

use std::sync::{Arc, Mutex};

use weft_interact::{InputEvent, InteractionMode, Rect};
use weft_lattice::{LatticeSpec, PinPattern};
use weft_session::{OverlayState, Scenario, ScenarioKind, SceneSnapshot, Session, SessionConfig, StepClock};
use weft_solver::SolverConfig;
use weft_telemetry::{EventKind, EventSink, SimulationEvent};
use weft_types::{ParticleId, Vec2};

/// A small free-hanging grid placed well away from the reset button.
fn test_config(rows: u32, cols: u32, pin_pattern: PinPattern) -> SessionConfig {
    SessionConfig {
        lattice: LatticeSpec {
            rows,
            cols,
            rest_distance: 10.0,
            origin: [100.0, 100.0],
            pin_pattern,
        },
        solver: SolverConfig::default(),
        pin_radius: 10.0,
        reset_button: Rect::new(960.0, 580.0, 100.0, 40.0),
        ground_y: None,
        bounds: None,
    }
}

// ─── Clock Tests ──────────────────────────────────────────────

#[test]
fn clock_consumes_whole_steps_only() {
    let mut clock = StepClock::new(0.016);
    assert_eq!(clock.advance(0.015), 0);
    assert_eq!(clock.advance(0.015), 1); // 0.030 accumulated
    assert!(clock.pending() > 0.0);
    assert!(clock.pending() < 0.016);
}

#[test]
fn clock_tick_count_is_chunking_independent() {
    // Power-of-two step so accumulator arithmetic is exact.
    let step = 0.015625_f32;

    let mut one_shot = StepClock::new(step);
    let total_a = one_shot.advance(0.25);

    let mut per_frame = StepClock::new(step);
    let mut total_b = 0;
    for _ in 0..16 {
        total_b += per_frame.advance(step);
    }

    let mut quartered = StepClock::new(step);
    let mut total_c = 0;
    for _ in 0..4 {
        total_c += quartered.advance(0.0625);
    }

    assert_eq!(total_a, 16);
    assert_eq!(total_b, 16);
    assert_eq!(total_c, 16);
}

// ─── Determinism Tests ────────────────────────────────────────

#[test]
fn identical_elapsed_time_gives_identical_positions() {
    let mut config = test_config(4, 4, PinPattern::TopCorners);
    config.solver.time_step = 0.015625; // exact in f32

    let mut chunked = Session::new(config.clone()).unwrap();
    let mut whole = Session::new(config).unwrap();

    // Same 0.25 s of wall-clock time, split differently.
    for _ in 0..16 {
        chunked.frame(0.015625);
    }
    whole.frame(0.25);

    assert_eq!(chunked.tick(), 16);
    assert_eq!(whole.tick(), 16);
    assert_eq!(chunked.state().pos_x, whole.state().pos_x);
    assert_eq!(chunked.state().pos_y, whole.state().pos_y);
    assert_eq!(chunked.state().prev_x, whole.state().prev_x);
    assert_eq!(chunked.state().prev_y, whole.state().prev_y);
}

// ─── Event Ordering Tests ─────────────────────────────────────

#[test]
fn mutations_apply_before_the_frames_ticks() {
    let config = test_config(1, 2, PinPattern::None);
    let mut session = Session::new(config).unwrap();

    // Pin particle 0 through the event path, then tick.
    session.handle_event(InputEvent::ModeToggle);
    session.handle_event(InputEvent::PointerDown(Vec2::new(100.0, 100.0)));
    let initial_y = session.state().pos_y[0];

    let step = session.config().solver.time_step;
    session.frame(step);

    // The pin was visible to the tick: particle 0 held, particle 1 fell.
    assert_eq!(session.state().pos_y[0], initial_y);
    assert!(session.state().pos_y[1] > initial_y);
}

// ─── Reset Tests ──────────────────────────────────────────────

#[test]
fn reset_button_rebuilds_instantly() {
    let config = test_config(3, 3, PinPattern::TopCorners);
    let initial = Session::new(config.clone()).unwrap().snapshot();

    let mut session = Session::new(config).unwrap();
    // Deform and tear.
    for _ in 0..30 {
        session.frame(session.config().solver.time_step);
    }
    session.handle_event(InputEvent::PointerDown(Vec2::new(115.0, 95.0)));
    session.handle_event(InputEvent::PointerMove(Vec2::new(115.0, 140.0)));
    session.handle_event(InputEvent::PointerUp(Vec2::new(115.0, 140.0)));
    assert!(session.constraints().active_count() < session.constraints().len());

    // Click inside the reset button; no frame() call in between.
    session.handle_event(InputEvent::PointerDown(Vec2::new(1000.0, 600.0)));

    let after = session.snapshot();
    assert_eq!(after.positions, initial.positions);
    assert_eq!(after.pinned, initial.pinned);
    assert_eq!(session.constraints().active_count(), session.constraints().len());
}

#[test]
fn reset_preserves_interaction_mode() {
    let config = test_config(2, 2, PinPattern::None);
    let mut session = Session::new(config).unwrap();

    session.handle_event(InputEvent::ModeToggle);
    assert_eq!(session.mode(), InteractionMode::Pin);

    session.handle_event(InputEvent::PointerDown(Vec2::new(1000.0, 600.0)));
    assert_eq!(session.mode(), InteractionMode::Pin);
}

// ─── Snapshot Tests ───────────────────────────────────────────

#[test]
fn snapshot_omits_torn_links() {
    let config = test_config(2, 2, PinPattern::None);
    let mut session = Session::new(config).unwrap();
    assert_eq!(session.snapshot().link_count(), 4);

    // Slice the top horizontal link (between (100,100) and (110,100)).
    session.handle_event(InputEvent::PointerDown(Vec2::new(105.0, 95.0)));
    session.handle_event(InputEvent::PointerMove(Vec2::new(105.0, 105.0)));
    session.handle_event(InputEvent::PointerUp(Vec2::new(105.0, 105.0)));

    let snapshot = session.snapshot();
    assert_eq!(snapshot.link_count(), 3);
    assert_eq!(snapshot.particle_count(), 4);
}

#[test]
fn snapshot_reports_pinned_flags() {
    let config = test_config(2, 3, PinPattern::TopRowEvery(2));
    let session = Session::new(config).unwrap();

    let snapshot = session.snapshot();
    assert_eq!(snapshot.pinned, vec![true, false, true, false, false, false]);
}

#[test]
fn snapshot_overlay_tracks_tear_drag() {
    let config = test_config(2, 2, PinPattern::None);
    let mut session = Session::new(config).unwrap();

    session.handle_event(InputEvent::PointerDown(Vec2::new(10.0, 10.0)));
    session.handle_event(InputEvent::PointerMove(Vec2::new(20.0, 20.0)));

    match session.snapshot().overlay {
        OverlayState::Tear { drag: Some(path) } => {
            assert_eq!(path, vec![[10.0, 10.0], [20.0, 20.0]]);
        }
        other => panic!("expected in-progress tear overlay, got {other:?}"),
    }
}

#[test]
fn snapshot_overlay_tracks_pin_cursor() {
    let config = test_config(2, 2, PinPattern::None);
    let mut session = Session::new(config).unwrap();

    session.handle_event(InputEvent::ModeToggle);
    session.handle_event(InputEvent::PointerMove(Vec2::new(55.0, 66.0)));

    match session.snapshot().overlay {
        OverlayState::Pin { cursor } => assert_eq!(cursor, Some([55.0, 66.0])),
        other => panic!("expected pin overlay, got {other:?}"),
    }
}

#[test]
fn snapshot_round_trips_through_bincode() {
    let config = test_config(3, 3, PinPattern::TopCorners);
    let mut session = Session::new(config).unwrap();
    session.frame(0.1);

    let snapshot = session.snapshot();
    let bytes = snapshot.to_bytes().unwrap();
    let back = SceneSnapshot::from_bytes(&bytes).unwrap();

    assert_eq!(back.tick, snapshot.tick);
    assert_eq!(back.positions, snapshot.positions);
    assert_eq!(back.links, snapshot.links);
    assert_eq!(back.overlay, snapshot.overlay);
}

#[test]
fn snapshot_y_range() {
    let snapshot = SceneSnapshot {
        tick: 0,
        sim_time: 0.0,
        positions: vec![0.0, 5.0, 0.0, -2.0, 0.0, 9.0],
        pinned: vec![false; 3],
        links: Vec::new(),
        overlay: OverlayState::Tear { drag: None },
    };
    assert_eq!(snapshot.y_range(), Some((-2.0, 9.0)));
}

#[test]
fn config_round_trips_through_json() {
    let config = SessionConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let back: SessionConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(back.lattice.rows, config.lattice.rows);
    assert_eq!(back.pin_radius, config.pin_radius);
    assert_eq!(back.reset_button, config.reset_button);
    assert_eq!(back.ground_y, config.ground_y);
}

// ─── Telemetry Tests ──────────────────────────────────────────

/// Sink that shares its collected events with the test body.
struct SharedSink(Arc<Mutex<Vec<SimulationEvent>>>);

impl EventSink for SharedSink {
    fn handle(&mut self, event: &SimulationEvent) {
        self.0.lock().unwrap().push(event.clone());
    }
    fn name(&self) -> &str {
        "shared_sink"
    }
}

#[test]
fn session_emits_interaction_and_tick_events() {
    let config = test_config(2, 2, PinPattern::None);
    let mut session = Session::new(config).unwrap();

    let collected = Arc::new(Mutex::new(Vec::new()));
    session
        .bus_mut()
        .add_sink(Box::new(SharedSink(Arc::clone(&collected))));

    session.handle_event(InputEvent::PointerDown(Vec2::new(105.0, 95.0)));
    session.handle_event(InputEvent::PointerMove(Vec2::new(105.0, 105.0)));
    session.handle_event(InputEvent::PointerUp(Vec2::new(105.0, 105.0)));
    session.frame(session.config().solver.time_step);

    let events = collected.lock().unwrap();
    assert!(events
        .iter()
        .any(|e| matches!(e.kind, EventKind::ConstraintTorn { severed: 1 })));
    assert!(events.iter().any(|e| matches!(e.kind, EventKind::TickBegin { .. })));
    assert!(events.iter().any(|e| matches!(e.kind, EventKind::TickEnd { .. })));
}

// ─── Scenario Tests ───────────────────────────────────────────

#[test]
fn scenarios_build_valid_sessions() {
    for &kind in ScenarioKind::all() {
        let scenario = Scenario::from_kind(kind);
        assert!(scenario.session().is_ok(), "{} failed", kind.name());
    }
}

#[test]
fn scenario_names_are_stable() {
    assert_eq!(ScenarioKind::HangingCloth.name(), "hanging_cloth");
    assert_eq!(ScenarioKind::CornerSheet.name(), "corner_sheet");
}

// ─── End-to-End Tests ─────────────────────────────────────────

#[test]
fn small_grid_sags_with_bounded_stretch() {
    // 3×3 grid, rest distance 10, pinned at the two top corners,
    // constant gravity for 500 ticks: the free top-center particle
    // must sag strictly downward while every active constraint stays
    // within ±10% of its rest length throughout.
    let config = test_config(
        3,
        3,
        PinPattern::Explicit(vec![ParticleId(0), ParticleId(2)]),
    );
    let mut session = Session::new(config).unwrap();
    let initial_center_top_y = session.state().pos_y[1];

    let step = session.config().solver.time_step;
    for _ in 0..500 {
        let ran = session.frame(step);
        assert_eq!(ran, 1);

        for (_, c) in session.constraints().iter_active() {
            let len = (session.state().position(c.b) - session.state().position(c.a)).length();
            let stretch = (len - c.rest_length).abs() / c.rest_length;
            assert!(
                stretch <= 0.10,
                "constraint {:?}-{:?} stretched {:.1}% at tick {}",
                c.a,
                c.b,
                stretch * 100.0,
                session.tick()
            );
        }
    }

    assert!(
        session.state().pos_y[1] > initial_center_top_y,
        "center-top particle did not sag"
    );
    // The pinned corners never moved.
    assert_eq!(session.state().pos_y[0], initial_center_top_y);
    assert_eq!(session.state().pos_y[2], initial_center_top_y);
}
