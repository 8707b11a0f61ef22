//! Palette and catalog types with built-in sets and JSON file loading

use crate::io::configuration::TRIADIC_CHANNEL_STEP;
use crate::io::error::{ArtGridError, Result, invalid_palette};
use crate::palette::color::Color;
use serde::Deserialize;
use std::path::Path;

/// The four hardcoded default palettes
const BUILTIN_PALETTES: [[Color; 5]; 4] = [
    [
        Color::new(0xFF, 0x6B, 0x6B),
        Color::new(0xFF, 0xD1, 0x66),
        Color::new(0x06, 0xD6, 0xA0),
        Color::new(0x11, 0x8A, 0xB2),
        Color::new(0x07, 0x3B, 0x4C),
    ],
    [
        Color::new(0xFA, 0xD0, 0x2C),
        Color::new(0xF2, 0xA1, 0x04),
        Color::new(0xE8, 0x70, 0x07),
        Color::new(0xD5, 0x39, 0x03),
        Color::new(0xA0, 0x1F, 0x02),
    ],
    [
        Color::new(0x22, 0x22, 0x3B),
        Color::new(0x4A, 0x4E, 0x69),
        Color::new(0x9A, 0x8C, 0x98),
        Color::new(0xC9, 0xAD, 0xA7),
        Color::new(0xF2, 0xE9, 0xE4),
    ],
    [
        Color::new(0x00, 0x30, 0x49),
        Color::new(0xD6, 0x28, 0x28),
        Color::new(0xF7, 0x7F, 0x00),
        Color::new(0xFC, 0xBF, 0x49),
        Color::new(0xEA, 0xE2, 0xB7),
    ],
];

/// Ordered, non-empty sequence of colors used for a single artwork
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Create a palette from parsed colors
    ///
    /// # Errors
    ///
    /// Returns an error if `colors` is empty
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(invalid_palette(&"palette holds no colors"));
        }
        Ok(Self { colors })
    }

    /// The palette's colors in order
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of color entries
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette holds no colors (never true for a constructed palette)
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Whether the palette contains the given color
    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }
}

/// Raw palette file shape: a JSON array of arrays of hex color strings
#[derive(Deserialize)]
struct PaletteFile(Vec<Vec<String>>);

/// Ordered list of palettes with bounds-checked selection
#[derive(Debug, Clone)]
pub struct PaletteCatalog {
    palettes: Vec<Palette>,
}

impl PaletteCatalog {
    /// The built-in default palettes
    pub fn builtin() -> Self {
        let palettes = BUILTIN_PALETTES
            .iter()
            .map(|row| Palette {
                colors: row.to_vec(),
            })
            .collect();
        Self { palettes }
    }

    /// The built-in palettes extended with generated triadic palettes
    ///
    /// Walks an RGB lattice with step [`TRIADIC_CHANNEL_STEP`] and derives two
    /// rotated counterparts per base color, shifted by half the channel range.
    pub fn builtin_with_triadic() -> Self {
        let mut catalog = Self::builtin();
        catalog.palettes.extend(triadic_palettes());
        catalog
    }

    /// Load a catalog from a JSON palette file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON of the
    /// expected shape, holds no palettes, or contains an empty palette or an
    /// invalid hex color
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| ArtGridError::PaletteLoad {
            path: path.to_path_buf(),
            source: e,
        })?;

        let PaletteFile(rows) =
            serde_json::from_str(&text).map_err(|e| ArtGridError::PaletteParse {
                path: path.to_path_buf(),
                source: e,
            })?;

        if rows.is_empty() {
            return Err(invalid_palette(&format!(
                "palette file '{}' holds no palettes",
                path.display()
            )));
        }

        let mut palettes = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            if row.is_empty() {
                return Err(invalid_palette(&format!("palette {index} is empty")));
            }
            let colors = row
                .iter()
                .map(|entry| Color::from_hex(entry))
                .collect::<Result<Vec<Color>>>()?;
            palettes.push(Palette { colors });
        }

        Ok(Self { palettes })
    }

    /// Select a palette by index
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of bounds
    pub fn select(&self, index: usize) -> Result<&Palette> {
        self.palettes
            .get(index)
            .ok_or(ArtGridError::PaletteIndex {
                index,
                count: self.palettes.len(),
            })
    }

    /// Number of palettes in the catalog
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    /// Whether the catalog holds no palettes
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}

/// Generate triadic palettes over the 8-bit RGB lattice
fn triadic_palettes() -> Vec<Palette> {
    let half_range = 128;
    let mut palettes = Vec::new();

    for r in (0..256).step_by(TRIADIC_CHANNEL_STEP) {
        for g in (0..256).step_by(TRIADIC_CHANNEL_STEP) {
            for b in (0..256).step_by(TRIADIC_CHANNEL_STEP) {
                let base = Color::new(r as u8, g as u8, b as u8);
                let first = Color::new(
                    ((g + half_range) % 256) as u8,
                    ((b + half_range) % 256) as u8,
                    ((r + half_range) % 256) as u8,
                );
                let second = Color::new(
                    ((b + half_range) % 256) as u8,
                    ((r + half_range) % 256) as u8,
                    ((g + half_range) % 256) as u8,
                );
                palettes.push(Palette {
                    colors: vec![base, first, second],
                });
            }
        }
    }

    palettes
}
