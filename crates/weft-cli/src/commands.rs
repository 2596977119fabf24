//! CLI command implementations.

use weft_render::{JsonFrameExporter, Renderer};
use weft_session::{Scenario, ScenarioKind, SceneSnapshot, Session};
use weft_telemetry::TracingSink;

use crate::script::GestureScript;

/// Resolves a scenario by its CLI name.
fn resolve_scenario(name: &str) -> Result<Scenario, Box<dyn std::error::Error>> {
    for &kind in ScenarioKind::all() {
        if kind.name() == name {
            return Ok(Scenario::from_kind(kind));
        }
    }
    let available: Vec<&str> = ScenarioKind::all().iter().map(|k| k.name()).collect();
    Err(format!("Unknown scenario: '{name}'. Available: {}", available.join(", ")).into())
}

fn print_summary(session: &Session) {
    let snapshot = session.snapshot();
    let pinned = snapshot.pinned.iter().filter(|&&p| p).count();

    println!("  Ticks:        {}", session.tick());
    println!("  Sim time:     {:.3}s", session.sim_time());
    println!("  Particles:    {} ({} pinned)", snapshot.particle_count(), pinned);
    println!(
        "  Constraints:  {} active / {} total",
        session.constraints().active_count(),
        session.constraints().len()
    );
    if let Some((min_y, max_y)) = snapshot.y_range() {
        println!("  Y range:      [{min_y:.2}, {max_y:.2}]");
    }
}

fn write_snapshot(session: &Session, path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = session.snapshot().to_bytes()?;
    std::fs::write(path, bytes)?;
    println!("Snapshot written to: {path}");
    Ok(())
}

/// Run a scenario headlessly for a fixed duration.
pub fn simulate(
    scenario_name: &str,
    duration: f32,
    snapshot_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("weft Simulation");
    println!("───────────────");

    let scenario = resolve_scenario(scenario_name)?;
    let mut session = scenario.session()?;
    session
        .bus_mut()
        .add_sink(Box::new(TracingSink::new(tracing::Level::INFO)));

    let frames = (duration / scenario.frame_time).round().max(0.0) as u32;
    println!("Scenario: {} ({} frames)", scenario_name, frames);
    println!();

    let wall_start = std::time::Instant::now();
    for _ in 0..frames {
        session.frame(scenario.frame_time);
    }
    let wall = wall_start.elapsed().as_secs_f64();

    print_summary(&session);
    println!("  Wall time:    {wall:.3}s");

    if let Some(path) = snapshot_path {
        write_snapshot(&session, path)?;
    }
    Ok(())
}

/// Run a scenario and write a JSON animation.
pub fn export(
    scenario_name: &str,
    duration: f32,
    output_path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("weft Export");
    println!("───────────");

    let scenario = resolve_scenario(scenario_name)?;
    let mut session = scenario.session()?;

    let frames = (duration / scenario.frame_time).round().max(0.0) as u32;
    println!("Scenario: {} ({} frames)", scenario_name, frames);

    let mut exporter = JsonFrameExporter::new(output_path);
    exporter.init(&session.config().lattice)?;
    for _ in 0..frames {
        session.frame(scenario.frame_time);
        exporter.submit_frame(&session.snapshot())?;
    }
    exporter.finalize()?;

    println!("Animation written to: {output_path} ({} frames)", frames);
    Ok(())
}

/// Inspect a saved scene snapshot.
pub fn inspect(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("weft Snapshot Inspector");
    println!("───────────────────────");
    println!();

    let data = std::fs::read(path)?;
    let snapshot = SceneSnapshot::from_bytes(&data)?;

    let pinned = snapshot.pinned.iter().filter(|&&p| p).count();
    println!("Tick:         {}", snapshot.tick);
    println!("Sim time:     {:.4}s", snapshot.sim_time);
    println!("Particles:    {} ({} pinned)", snapshot.particle_count(), pinned);
    println!("Active links: {}", snapshot.link_count());
    if let Some((min_y, max_y)) = snapshot.y_range() {
        println!("Y range:      [{min_y:.4}, {max_y:.4}]");
    }
    Ok(())
}

/// Replay a gesture script against a scenario.
pub fn run_script(
    script_path: &str,
    scenario_name: &str,
    snapshot_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("weft Gesture Replay");
    println!("───────────────────");

    let script = GestureScript::load(script_path)?;
    let scenario = resolve_scenario(scenario_name)?;
    let mut session = scenario.session()?;
    session
        .bus_mut()
        .add_sink(Box::new(TracingSink::new(tracing::Level::INFO)));

    println!(
        "Scenario: {} | Script: {} events over {:.2}s",
        scenario_name,
        script.events.len(),
        script.duration()
    );
    println!();

    script.replay(&mut session, scenario.frame_time);

    print_summary(&session);
    if let Some(path) = snapshot_path {
        write_snapshot(&session, path)?;
    }
    Ok(())
}
