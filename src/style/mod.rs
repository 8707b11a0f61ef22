//! The style registry: named cell-drawing procedures
//!
//! Each style is a stateless mapping from (cell, color pair, chaos, random
//! source) to a shape sequence that fits entirely within the cell bounds.
//! Dispatch is a closed enumeration rather than lookup by name, so an
//! unknown style cannot reach the composer.

/// Circle-based styles
pub mod circles;
/// Stripe and wavy-line styles
pub mod lines;
/// Polygon and rotated-shape styles
pub mod polygons;
/// Letter block style
pub mod text;

use crate::compose::grid::Cell;
use crate::io::configuration::{
    MAX_VARIED_OPACITY, MIN_VARIED_OPACITY, OPACITY_CHANCE_FACTOR, ROTATION_ANGLES,
};
use crate::palette::CellColors;
use crate::random::RandomSource;
use crate::svg::element::{Rotation, Shape};
use std::fmt;

/// Identifier of a cell-drawing style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKind {
    /// Filled circle with optional concentric accents
    Circle,
    /// Two circles at diagonally opposite quarter centers
    OppositeCircles,
    /// Plus or X cross
    Cross,
    /// Half of the cell filled along one edge
    HalfSquare,
    /// Corner-anchored triangle
    DiagonalSquare,
    /// Quarter disk anchored in one corner
    QuarterCircle,
    /// Lattice of dots with chaos-driven dropout and jitter
    Dots,
    /// Single large monospace glyph
    LetterBlock,
    /// Alternating concentric rings
    ConcentricCircles,
    /// Alternating horizontal or vertical bars
    Stripes,
    /// Rotated rectangle, circle, or ellipse
    RotatedShape,
    /// Stacked cubic-curve lines
    WavyLines,
}

impl StyleKind {
    /// Every style, in registry order
    pub const ALL: [Self; 12] = [
        Self::Circle,
        Self::OppositeCircles,
        Self::Cross,
        Self::HalfSquare,
        Self::DiagonalSquare,
        Self::QuarterCircle,
        Self::Dots,
        Self::LetterBlock,
        Self::ConcentricCircles,
        Self::Stripes,
        Self::RotatedShape,
        Self::WavyLines,
    ];

    /// The style's registry name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::OppositeCircles => "opposite_circles",
            Self::Cross => "cross",
            Self::HalfSquare => "half_square",
            Self::DiagonalSquare => "diagonal_square",
            Self::QuarterCircle => "quarter_circle",
            Self::Dots => "dots",
            Self::LetterBlock => "letter_block",
            Self::ConcentricCircles => "concentric_circles",
            Self::Stripes => "stripes",
            Self::RotatedShape => "rotated_shape",
            Self::WavyLines => "wavy_lines",
        }
    }

    /// Look up a style by registry name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// Draw the style into the given cell
    ///
    /// Always returns at least one shape (the cell's backing rect).
    pub fn render(
        self,
        cell: &Cell,
        colors: &CellColors,
        chaos: f64,
        rng: &mut RandomSource,
    ) -> Vec<Shape> {
        match self {
            Self::Circle => circles::circle(cell, colors, chaos, rng),
            Self::OppositeCircles => circles::opposite_circles(cell, colors, chaos, rng),
            Self::Cross => polygons::cross(cell, colors, chaos, rng),
            Self::HalfSquare => polygons::half_square(cell, colors, chaos, rng),
            Self::DiagonalSquare => polygons::diagonal_square(cell, colors, chaos, rng),
            Self::QuarterCircle => polygons::quarter_circle(cell, colors, chaos, rng),
            Self::Dots => circles::dots(cell, colors, chaos, rng),
            Self::LetterBlock => text::letter_block(cell, colors, chaos, rng),
            Self::ConcentricCircles => circles::concentric_circles(cell, colors, chaos, rng),
            Self::Stripes => lines::stripes(cell, colors, chaos, rng),
            Self::RotatedShape => polygons::rotated_shape(cell, colors, chaos, rng),
            Self::WavyLines => lines::wavy_lines(cell, colors, chaos, rng),
        }
    }
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Chaos-gated opacity: varied with probability `chaos × OPACITY_CHANCE_FACTOR`
pub(crate) fn random_opacity(chaos: f64, rng: &mut RandomSource) -> f64 {
    if rng.chance(chaos * OPACITY_CHANCE_FACTOR) {
        let raw = rng.range(MIN_VARIED_OPACITY, MAX_VARIED_OPACITY);
        (raw * 100.0).round() / 100.0
    } else {
        1.0
    }
}

/// Chaos-gated rotation about a pivot; `None` when the cell stays upright
pub(crate) fn random_rotation(
    chaos: f64,
    cx: f64,
    cy: f64,
    rng: &mut RandomSource,
) -> Option<Rotation> {
    if !rng.chance(chaos) {
        return None;
    }
    let degrees = rng.pick(&ROTATION_ANGLES).copied().unwrap_or(0.0);
    if degrees.abs() < f64::EPSILON {
        return None;
    }
    Some(Rotation { degrees, cx, cy })
}

/// Backing rect covering the whole cell
pub(crate) const fn backing_rect(cell: &Cell, colors: &CellColors) -> Shape {
    Shape::rect(cell.x, cell.y, cell.size, cell.size, colors.background)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for kind in StyleKind::ALL {
            assert_eq!(StyleKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(StyleKind::from_name("unknown"), None);
    }

    #[test]
    fn test_zero_chaos_never_rotates_or_fades() {
        let mut rng = RandomSource::from_seed(9);
        for _ in 0..32 {
            assert!(random_rotation(0.0, 5.0, 5.0, &mut rng).is_none());
            assert!((random_opacity(0.0, &mut rng) - 1.0).abs() < f64::EPSILON);
        }
    }
}
