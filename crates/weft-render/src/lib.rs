//! # weft-render
//!
//! The rendering collaborator seam.
//!
//! The engine core knows nothing about windows, fonts, or drawing
//! primitives; it hands a [`SceneSnapshot`](weft_session::SceneSnapshot)
//! to a [`Renderer`] once per frame. This crate defines that seam and
//! ships two headless implementations: [`HeadlessRenderer`] (discards
//! frames; benchmarks and CI) and [`JsonFrameExporter`] (writes an
//! animation JSON a viewer can play back).

pub mod json_exporter;
pub mod renderer;

pub use json_exporter::JsonFrameExporter;
pub use renderer::{HeadlessRenderer, Renderer};
