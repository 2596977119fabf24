//! JSON frame exporter — writes per-frame scene data for inspection.
//!
//! Implements the `Renderer` trait. Captures particle positions,
//! pinned flags, and active link segments at each frame, then
//! serializes the entire animation to a JSON file on `finalize()`.

use serde::Serialize;
use weft_lattice::LatticeSpec;
use weft_session::SceneSnapshot;
use weft_types::{Scalar, WeftError, WeftResult};

use crate::renderer::Renderer;

/// A single frame of captured scene data.
#[derive(Serialize)]
struct FrameData {
    tick: u64,
    /// Interleaved `[x0, y0, x1, y1, ...]`.
    positions: Vec<Scalar>,
    /// Active link segments `[ax, ay, bx, by]`.
    links: Vec<[Scalar; 4]>,
}

/// Complete animation data for JSON export.
#[derive(Serialize)]
struct AnimationData {
    rows: u32,
    cols: u32,
    particle_count: usize,
    pinned: Vec<bool>,
    frames: Vec<FrameData>,
}

/// Exports simulation frames to a JSON file for visual inspection.
///
/// Usage:
/// ```text
/// let mut exporter = JsonFrameExporter::new("cloth.json");
/// exporter.init(&spec)?;
/// // ... run simulation, calling submit_frame() each frame ...
/// exporter.finalize()?; // Writes the JSON file
/// ```
pub struct JsonFrameExporter {
    output_path: String,
    rows: u32,
    cols: u32,
    particle_count: usize,
    pinned: Vec<bool>,
    frames: Vec<FrameData>,
    submitted: u32,
}

impl JsonFrameExporter {
    /// Creates a new exporter that will write to the given path.
    pub fn new(output_path: &str) -> Self {
        Self {
            output_path: output_path.to_string(),
            rows: 0,
            cols: 0,
            particle_count: 0,
            pinned: Vec::new(),
            frames: Vec::new(),
            submitted: 0,
        }
    }
}

impl Renderer for JsonFrameExporter {
    fn init(&mut self, spec: &LatticeSpec) -> WeftResult<()> {
        self.rows = spec.rows;
        self.cols = spec.cols;
        self.particle_count = spec.particle_count();
        Ok(())
    }

    fn submit_frame(&mut self, snapshot: &SceneSnapshot) -> WeftResult<()> {
        // Pinned flags can change frame to frame; keep the latest for
        // the animation header and the positions per frame.
        self.pinned = snapshot.pinned.clone();
        self.frames.push(FrameData {
            tick: snapshot.tick,
            positions: snapshot.positions.clone(),
            links: snapshot.links.clone(),
        });
        self.submitted += 1;
        Ok(())
    }

    fn finalize(&mut self) -> WeftResult<()> {
        let animation = AnimationData {
            rows: self.rows,
            cols: self.cols,
            particle_count: self.particle_count,
            pinned: std::mem::take(&mut self.pinned),
            frames: std::mem::take(&mut self.frames),
        };
        let json = serde_json::to_string(&animation)
            .map_err(|e| WeftError::Serialization(e.to_string()))?;
        std::fs::write(&self.output_path, json)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json_exporter"
    }

    fn frame_count(&self) -> u32 {
        self.submitted
    }
}
