//! Letter block style: one large monospace glyph

use crate::compose::grid::Cell;
use crate::palette::CellColors;
use crate::random::RandomSource;
use crate::style::{backing_rect, random_opacity, random_rotation};
use crate::svg::element::Shape;

/// Glyphs available to the letter block
const CHARACTERS: [char; 48] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '+', '-',
    '*', '/', '=', '#', '@', '&', '%', '$', '!', '?',
];

/// Single centered glyph with chaos-gated size, rotation, and opacity
pub(crate) fn letter_block(
    cell: &Cell,
    colors: &CellColors,
    chaos: f64,
    rng: &mut RandomSource,
) -> Vec<Shape> {
    let mut shapes = vec![backing_rect(cell, colors)];
    let (cx, cy) = cell.center();

    let glyph = rng.pick(&CHARACTERS).copied().unwrap_or('?');
    let size_factor = rng.range(chaos.mul_add(-0.1, 0.6), chaos.mul_add(0.1, 0.9).min(1.0));
    let transform = random_rotation(chaos * 0.8, cx, cy, rng);

    shapes.push(Shape::Text {
        x: cx,
        y: cy,
        glyph,
        font_size: cell.size * size_factor,
        fill: colors.foreground,
        opacity: random_opacity(chaos, rng),
        transform,
    });

    shapes
}
