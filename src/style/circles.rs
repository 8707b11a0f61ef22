//! Circle-based styles: circle, opposite circles, concentric rings, dots

use crate::compose::grid::Cell;
use crate::palette::CellColors;
use crate::random::RandomSource;
use crate::style::{backing_rect, random_opacity};
use crate::svg::element::Shape;

/// Filled circle, sometimes with one or two concentric accents
pub(crate) fn circle(
    cell: &Cell,
    colors: &CellColors,
    chaos: f64,
    rng: &mut RandomSource,
) -> Vec<Shape> {
    let mut shapes = vec![backing_rect(cell, colors)];
    let (cx, cy) = cell.center();
    let half = cell.size / 2.0;

    let main_r = half * rng.range(chaos.mul_add(-0.2, 0.8), 1.0);
    shapes.push(Shape::Circle {
        cx,
        cy,
        r: main_r,
        fill: colors.foreground,
        opacity: random_opacity(chaos, rng),
    });

    if rng.chance(chaos.mul_add(0.3, 0.3)) {
        let inner_factor = rng.range(0.2, 0.5);
        shapes.push(Shape::Circle {
            cx,
            cy,
            r: half * inner_factor,
            fill: colors.background,
            opacity: random_opacity(chaos, rng),
        });
        if rng.chance(chaos * 0.5) {
            shapes.push(Shape::Circle {
                cx,
                cy,
                r: half * inner_factor * 0.5,
                fill: colors.foreground,
                opacity: random_opacity(chaos, rng),
            });
        }
    }

    shapes
}

/// Two circles at diagonally opposite quarter centers
pub(crate) fn opposite_circles(
    cell: &Cell,
    colors: &CellColors,
    chaos: f64,
    rng: &mut RandomSource,
) -> Vec<Shape> {
    let mut shapes = vec![backing_rect(cell, colors)];
    let quarter = cell.size / 4.0;
    let r = cell.size * rng.range(0.15, 0.25);

    // Main diagonal or anti-diagonal placement
    let centers = if rng.chance(0.5) {
        [
            (cell.x + quarter, cell.y + quarter),
            (cell.max_x() - quarter, cell.max_y() - quarter),
        ]
    } else {
        [
            (cell.max_x() - quarter, cell.y + quarter),
            (cell.x + quarter, cell.max_y() - quarter),
        ]
    };

    for (cx, cy) in centers {
        shapes.push(Shape::Circle {
            cx,
            cy,
            r,
            fill: colors.foreground,
            opacity: random_opacity(chaos, rng),
        });
    }

    shapes
}

/// Alternating concentric rings, largest first
pub(crate) fn concentric_circles(
    cell: &Cell,
    colors: &CellColors,
    chaos: f64,
    rng: &mut RandomSource,
) -> Vec<Shape> {
    let mut shapes = vec![backing_rect(cell, colors)];
    let (cx, cy) = cell.center();

    let min_rings = 2 + (chaos * 2.0) as usize;
    let max_rings = 5 + (chaos * 3.0) as usize;
    let rings = rng.range_inclusive(min_rings, max_rings);

    // Worst-case jitter keeps even the outermost ring inside the cell
    let max_jitter = cell.size * 0.05 * chaos * 0.5;
    let max_radius = (cell.size / 2.0 * rng.range(0.85, 1.0)) - max_jitter;

    let mut foreground_turn = true;
    for ring in (1..=rings).rev() {
        let radius = max_radius * ring as f64 / rings as f64;
        if radius < 1.0 {
            continue;
        }
        let fill = if foreground_turn {
            colors.foreground
        } else {
            colors.background
        };
        let jitter_x = (rng.unit() - 0.5) * cell.size * 0.05 * chaos;
        let jitter_y = (rng.unit() - 0.5) * cell.size * 0.05 * chaos;
        shapes.push(Shape::Circle {
            cx: cx + jitter_x,
            cy: cy + jitter_y,
            r: radius,
            fill,
            opacity: random_opacity(chaos, rng),
        });
        foreground_turn = !foreground_turn;
    }

    shapes
}

/// Lattice of dots with chaos-driven dropout and jitter
pub(crate) fn dots(
    cell: &Cell,
    colors: &CellColors,
    chaos: f64,
    rng: &mut RandomSource,
) -> Vec<Shape> {
    let mut shapes = vec![backing_rect(cell, colors)];

    let count_choices: [usize; 4] = [4, 9, 16, if chaos > 0.5 { 25 } else { 16 }];
    let per_side = (rng.pick(&count_choices).copied().unwrap_or(4) as f64).sqrt() as usize;
    let sub = cell.size / per_side as f64;

    for i in 0..per_side {
        for j in 0..per_side {
            if rng.chance(chaos * 0.2) {
                continue;
            }
            // Radius and jitter bounds keep edge dots inside the cell
            let dot_r = sub * rng.range(0.2, 0.35);
            let cx = (i as f64 + 0.5).mul_add(sub, cell.x)
                + (rng.unit() - 0.5) * sub * 0.2 * chaos;
            let cy = (j as f64 + 0.5).mul_add(sub, cell.y)
                + (rng.unit() - 0.5) * sub * 0.2 * chaos;
            shapes.push(Shape::Circle {
                cx,
                cy,
                r: dot_r,
                fill: colors.foreground,
                opacity: random_opacity(chaos, rng),
            });
        }
    }

    shapes
}
