//! Color palettes: parsing, built-in catalogs, and per-cell selection
//!
//! A palette is an ordered, non-empty list of colors. Catalogs come from the
//! built-in set (optionally extended with generated triadic palettes) or a
//! JSON file of hex color arrays.

/// Background gradient derivation and color pair selection
pub mod background;
/// Palette and catalog containers with JSON loading
pub mod catalog;
/// Hex color type and HSL adjustments
pub mod color;

pub use background::{CellColors, derive_background, pick_pair};
pub use catalog::{Palette, PaletteCatalog};
pub use color::Color;
