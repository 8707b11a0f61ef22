//! Background gradient derivation and per-cell color pair selection

use crate::palette::catalog::Palette;
use crate::palette::color::Color;
use crate::random::RandomSource;

/// Fallback gradient for palettes too small to derive from
const FALLBACK_INNER: Color = Color::new(0xEE, 0xEE, 0xEE);
const FALLBACK_OUTER: Color = Color::new(0xDD, 0xDD, 0xDD);

/// Saturation and lightness offset applied when deriving the gradient
const GRADIENT_ADJUST: f64 = 0.1;

/// Foreground and background colors for one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellColors {
    /// Color used for the cell's decorative shapes
    pub foreground: Color,
    /// Color used for the cell's backing rect
    pub background: Color,
}

/// Derive the radial background gradient colors for a palette
///
/// Mixes the first two palette entries, desaturates the result, then lightens
/// and darkens it for the gradient's inner and outer stops. Palettes with
/// fewer than two entries fall back to a neutral gray pair.
pub fn derive_background(palette: &Palette) -> (Color, Color) {
    let (Some(&first), Some(&second)) = (palette.colors().first(), palette.colors().get(1)) else {
        return (FALLBACK_INNER, FALLBACK_OUTER);
    };

    let mixed = first.mix(second).desaturated(GRADIENT_ADJUST);
    (
        mixed.lightened(GRADIENT_ADJUST),
        mixed.darkened(GRADIENT_ADJUST),
    )
}

/// Pick a foreground/background pair from the palette
///
/// The background is chosen uniformly among all entries; the foreground is
/// chosen among the entries that differ from it. A palette with a single
/// distinct color uses it for both, keeping every emitted color inside the
/// palette.
pub fn pick_pair(palette: &Palette, rng: &mut RandomSource) -> CellColors {
    let colors = palette.colors();
    let background = rng
        .pick(colors)
        .copied()
        .unwrap_or(FALLBACK_OUTER);

    let remaining: Vec<Color> = colors
        .iter()
        .copied()
        .filter(|&c| c != background)
        .collect();

    let foreground = rng.pick(&remaining).copied().unwrap_or(background);

    CellColors {
        foreground,
        background,
    }
}
