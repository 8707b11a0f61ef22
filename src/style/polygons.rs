//! Polygon styles: cross, half square, diagonal square, quarter circle,
//! rotated shape

use crate::compose::grid::Cell;
use crate::palette::CellColors;
use crate::random::RandomSource;
use crate::style::{backing_rect, random_opacity, random_rotation};
use crate::svg::element::{PathCommand, Point, Shape};
use std::f64::consts::SQRT_2;

/// Plus or X cross, optionally rotated
pub(crate) fn cross(
    cell: &Cell,
    colors: &CellColors,
    chaos: f64,
    rng: &mut RandomSource,
) -> Vec<Shape> {
    let mut shapes = vec![backing_rect(cell, colors)];
    let (cx, cy) = cell.center();

    let is_plus = rng.chance(0.5);
    let thickness_factor = rng.range(chaos.mul_add(-0.1, 0.25), chaos.mul_add(0.1, 0.4));
    let transform = random_rotation(chaos / 2.0, cx, cy, rng);
    let opacity = random_opacity(chaos, rng);

    // A rotated cross is inset so its corners stay inside the cell
    let side = if transform.is_some() {
        cell.size / SQRT_2
    } else {
        cell.size
    };
    let origin_x = cx - side / 2.0;
    let origin_y = cy - side / 2.0;
    let thickness = side * thickness_factor;

    if is_plus {
        shapes.push(Shape::Rect {
            x: origin_x,
            y: cy - thickness / 2.0,
            width: side,
            height: thickness,
            fill: colors.foreground,
            opacity,
            transform,
        });
        shapes.push(Shape::Rect {
            x: cx - thickness / 2.0,
            y: origin_y,
            width: thickness,
            height: side,
            fill: colors.foreground,
            opacity,
            transform,
        });
    } else {
        let line_width = thickness * 0.8;
        let bars = [
            diagonal_bar(
                Point::new(origin_x, origin_y),
                Point::new(origin_x + side, origin_y + side),
                line_width,
            ),
            diagonal_bar(
                Point::new(origin_x + side, origin_y),
                Point::new(origin_x, origin_y + side),
                line_width,
            ),
        ];
        for points in bars {
            shapes.push(Shape::Polygon {
                points,
                fill: colors.foreground,
                opacity,
                transform,
            });
        }
    }

    shapes
}

// Rectangle of the given width along a diagonal, with the endpoints pulled
// inward by half the width so the corners stay inside the square
fn diagonal_bar(start: Point, end: Point, width: f64) -> Vec<Point> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let length = dx.hypot(dy).max(1.0);
    let dir = (dx / length, dy / length);
    let normal = (-dir.1, dir.0);
    let half = width / 2.0;

    let a = Point::new(dir.0.mul_add(half, start.x), dir.1.mul_add(half, start.y));
    let b = Point::new(dir.0.mul_add(-half, end.x), dir.1.mul_add(-half, end.y));

    vec![
        Point::new(normal.0.mul_add(half, a.x), normal.1.mul_add(half, a.y)),
        Point::new(normal.0.mul_add(half, b.x), normal.1.mul_add(half, b.y)),
        Point::new(normal.0.mul_add(-half, b.x), normal.1.mul_add(-half, b.y)),
        Point::new(normal.0.mul_add(-half, a.x), normal.1.mul_add(-half, a.y)),
    ]
}

/// Half of the cell filled along one edge
pub(crate) fn half_square(
    cell: &Cell,
    colors: &CellColors,
    chaos: f64,
    rng: &mut RandomSource,
) -> Vec<Shape> {
    let mut shapes = vec![backing_rect(cell, colors)];
    let opacity = random_opacity(chaos, rng);
    let (cx, cy) = cell.center();

    let points = match rng.index(4) {
        // Top
        0 => vec![
            Point::new(cell.x, cell.y),
            Point::new(cell.max_x(), cell.y),
            Point::new(cell.max_x(), cy),
            Point::new(cell.x, cy),
        ],
        // Right
        1 => vec![
            Point::new(cx, cell.y),
            Point::new(cell.max_x(), cell.y),
            Point::new(cell.max_x(), cell.max_y()),
            Point::new(cx, cell.max_y()),
        ],
        // Bottom
        2 => vec![
            Point::new(cell.x, cy),
            Point::new(cell.max_x(), cy),
            Point::new(cell.max_x(), cell.max_y()),
            Point::new(cell.x, cell.max_y()),
        ],
        // Left
        _ => vec![
            Point::new(cell.x, cell.y),
            Point::new(cx, cell.y),
            Point::new(cx, cell.max_y()),
            Point::new(cell.x, cell.max_y()),
        ],
    };

    shapes.push(Shape::Polygon {
        points,
        fill: colors.foreground,
        opacity,
        transform: None,
    });
    shapes
}

/// Corner-anchored triangle with chaos-gated vertex jitter
pub(crate) fn diagonal_square(
    cell: &Cell,
    colors: &CellColors,
    chaos: f64,
    rng: &mut RandomSource,
) -> Vec<Shape> {
    let mut shapes = vec![backing_rect(cell, colors)];
    let opacity = random_opacity(chaos, rng);

    let mut points = if rng.chance(0.5) {
        vec![
            Point::new(cell.x, cell.y),
            Point::new(cell.max_x(), cell.max_y()),
            Point::new(cell.x, cell.max_y()),
        ]
    } else {
        vec![
            Point::new(cell.max_x(), cell.y),
            Point::new(cell.max_x(), cell.max_y()),
            Point::new(cell.x, cell.y),
        ]
    };

    if rng.chance(chaos * 0.5) {
        let index = rng.index(points.len());
        let jitter_x = (rng.unit() - 0.5) * cell.size * 0.1 * chaos;
        let jitter_y = (rng.unit() - 0.5) * cell.size * 0.1 * chaos;
        if let Some(point) = points.get_mut(index) {
            point.x = (point.x + jitter_x).clamp(cell.x, cell.max_x());
            point.y = (point.y + jitter_y).clamp(cell.y, cell.max_y());
        }
    }

    shapes.push(Shape::Polygon {
        points,
        fill: colors.foreground,
        opacity,
        transform: None,
    });
    shapes
}

/// Quarter disk anchored in one of the four corners
pub(crate) fn quarter_circle(
    cell: &Cell,
    colors: &CellColors,
    chaos: f64,
    rng: &mut RandomSource,
) -> Vec<Shape> {
    let mut shapes = vec![backing_rect(cell, colors)];
    let opacity = random_opacity(chaos, rng);

    let r_factor = rng.range(chaos.mul_add(-0.2, 0.8).max(0.1), 1.0);
    let r = cell.size * r_factor;

    let commands = match rng.index(4) {
        // Top-left
        0 => vec![
            PathCommand::MoveTo(Point::new(cell.x, cell.y)),
            PathCommand::LineTo(Point::new(cell.x + r, cell.y)),
            PathCommand::Arc {
                radius: r,
                end: Point::new(cell.x, cell.y + r),
            },
            PathCommand::Close,
        ],
        // Top-right
        1 => vec![
            PathCommand::MoveTo(Point::new(cell.max_x(), cell.y)),
            PathCommand::LineTo(Point::new(cell.max_x() - r, cell.y)),
            PathCommand::Arc {
                radius: r,
                end: Point::new(cell.max_x(), cell.y + r),
            },
            PathCommand::Close,
        ],
        // Bottom-right
        2 => vec![
            PathCommand::MoveTo(Point::new(cell.max_x(), cell.max_y())),
            PathCommand::LineTo(Point::new(cell.max_x() - r, cell.max_y())),
            PathCommand::Arc {
                radius: r,
                end: Point::new(cell.max_x(), cell.max_y() - r),
            },
            PathCommand::Close,
        ],
        // Bottom-left
        _ => vec![
            PathCommand::MoveTo(Point::new(cell.x, cell.max_y())),
            PathCommand::LineTo(Point::new(cell.x + r, cell.max_y())),
            PathCommand::Arc {
                radius: r,
                end: Point::new(cell.x, cell.max_y() - r),
            },
            PathCommand::Close,
        ],
    };

    shapes.push(Shape::Path {
        commands,
        fill: Some(colors.foreground),
        stroke: None,
        opacity,
    });
    shapes
}

/// Rotated rectangle, circle, or ellipse centered in the cell
pub(crate) fn rotated_shape(
    cell: &Cell,
    colors: &CellColors,
    chaos: f64,
    rng: &mut RandomSource,
) -> Vec<Shape> {
    let mut shapes = vec![backing_rect(cell, colors)];
    let (cx, cy) = cell.center();

    let shape_choice = rng.index(3);
    // Inner extent capped near 1/sqrt(2) so any rotation stays inside the cell
    let inner = cell.size * rng.range(chaos.mul_add(-0.1, 0.5), 0.7);
    let transform = random_rotation(chaos * 1.5, cx, cy, rng);
    let opacity = random_opacity(chaos, rng);

    match shape_choice {
        0 => {
            let width = inner * rng.range(0.7, 1.0);
            let height = inner * rng.range(0.7, 1.0);
            shapes.push(Shape::Rect {
                x: cx - width / 2.0,
                y: cy - height / 2.0,
                width,
                height,
                fill: colors.foreground,
                opacity,
                transform,
            });
        }
        1 => {
            shapes.push(Shape::Circle {
                cx,
                cy,
                r: inner / 2.0,
                fill: colors.foreground,
                opacity,
            });
        }
        _ => {
            let rx = inner / 2.0 * rng.range(0.7, 1.0);
            let ry = inner / 2.0 * rng.range(0.7, 1.0);
            shapes.push(Shape::Ellipse {
                cx,
                cy,
                rx,
                ry,
                fill: colors.foreground,
                opacity,
                transform,
            });
        }
    }

    shapes
}
