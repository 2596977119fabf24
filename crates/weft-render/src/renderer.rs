//! Renderer trait and HeadlessRenderer stub.
//!
//! The renderer is called once per frame to present the current scene.
//! The headless renderer discards all frames, serving as a no-op for
//! benchmarks and CI.

use weft_lattice::LatticeSpec;
use weft_session::SceneSnapshot;
use weft_types::WeftResult;

/// Trait for rendering simulation output.
///
/// Because tearing changes the drawable constraint set every frame,
/// each snapshot carries its own link segments; `init` only receives
/// the static grid parameters.
pub trait Renderer: Send {
    /// Initialize the renderer with the grid parameters.
    fn init(&mut self, spec: &LatticeSpec) -> WeftResult<()>;

    /// Submit a frame for rendering.
    fn submit_frame(&mut self, snapshot: &SceneSnapshot) -> WeftResult<()>;

    /// Finalize rendering (flush buffers, close files, etc.).
    fn finalize(&mut self) -> WeftResult<()>;

    /// Returns the renderer name.
    fn name(&self) -> &str;

    /// Returns the number of frames submitted.
    fn frame_count(&self) -> u32;
}

/// Headless renderer — discards all frames.
pub struct HeadlessRenderer {
    frames: u32,
}

impl HeadlessRenderer {
    /// Creates a new headless renderer.
    pub fn new() -> Self {
        Self { frames: 0 }
    }
}

impl Default for HeadlessRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for HeadlessRenderer {
    fn init(&mut self, _spec: &LatticeSpec) -> WeftResult<()> {
        Ok(())
    }

    fn submit_frame(&mut self, _snapshot: &SceneSnapshot) -> WeftResult<()> {
        self.frames += 1;
        Ok(())
    }

    fn finalize(&mut self) -> WeftResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}
