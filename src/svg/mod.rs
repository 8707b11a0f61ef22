//! SVG document model, serialization, and atomic file output

/// Drawing and cell group containers
pub mod document;
/// Structured shape and path types
pub mod element;
/// Markup rendering and atomic writes
pub mod writer;

pub use document::{CellGroup, Drawing, RadialBackground};
pub use element::{PathCommand, Point, Rotation, Shape, Stroke};
