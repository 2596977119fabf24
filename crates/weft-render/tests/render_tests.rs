//! Integration tests for weft-render.

use weft_interact::Rect;
use weft_lattice::{LatticeSpec, PinPattern};
use weft_render::{HeadlessRenderer, JsonFrameExporter, Renderer};
use weft_session::{Session, SessionConfig};
use weft_solver::SolverConfig;

fn small_session() -> Session {
    let config = SessionConfig {
        lattice: LatticeSpec {
            rows: 2,
            cols: 2,
            rest_distance: 10.0,
            origin: [100.0, 100.0],
            pin_pattern: PinPattern::TopCorners,
        },
        solver: SolverConfig::default(),
        pin_radius: 10.0,
        reset_button: Rect::new(960.0, 580.0, 100.0, 40.0),
        ground_y: None,
        bounds: None,
    };
    Session::new(config).unwrap()
}

// ─── Headless Renderer Tests ──────────────────────────────────

#[test]
fn headless_counts_frames() {
    let mut session = small_session();
    let mut renderer = HeadlessRenderer::new();
    renderer.init(&session.config().lattice).unwrap();

    for _ in 0..5 {
        session.frame(0.016);
        renderer.submit_frame(&session.snapshot()).unwrap();
    }
    renderer.finalize().unwrap();

    assert_eq!(renderer.frame_count(), 5);
    assert_eq!(renderer.name(), "headless");
}

// ─── JSON Exporter Tests ──────────────────────────────────────

#[test]
fn json_exporter_writes_animation() {
    let path = std::env::temp_dir().join("weft_render_test_animation.json");
    let path_str = path.to_str().unwrap();

    let mut session = small_session();
    let mut exporter = JsonFrameExporter::new(path_str);
    exporter.init(&session.config().lattice).unwrap();

    for _ in 0..3 {
        session.frame(0.016);
        exporter.submit_frame(&session.snapshot()).unwrap();
    }
    assert_eq!(exporter.frame_count(), 3);
    exporter.finalize().unwrap();

    let json = std::fs::read_to_string(&path).unwrap();
    let animation: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(animation["rows"], 2);
    assert_eq!(animation["cols"], 2);
    assert_eq!(animation["particle_count"], 4);
    let frames = animation["frames"].as_array().unwrap();
    assert_eq!(frames.len(), 3);
    // Four particles, interleaved x/y.
    assert_eq!(frames[0]["positions"].as_array().unwrap().len(), 8);
    // All four structural links are still active.
    assert_eq!(frames[0]["links"].as_array().unwrap().len(), 4);

    std::fs::remove_file(&path).ok();
}
