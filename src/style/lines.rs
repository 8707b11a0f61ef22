//! Line styles: stripes and wavy lines

use crate::compose::grid::Cell;
use crate::palette::CellColors;
use crate::random::RandomSource;
use crate::style::{backing_rect, random_opacity};
use crate::svg::element::{PathCommand, Point, Shape, Stroke};
use std::f64::consts::PI;

/// Alternating horizontal or vertical bars
pub(crate) fn stripes(
    cell: &Cell,
    colors: &CellColors,
    chaos: f64,
    rng: &mut RandomSource,
) -> Vec<Shape> {
    let mut shapes = vec![backing_rect(cell, colors)];

    let min_stripes = 3 + (chaos * 2.0) as usize;
    let max_stripes = 7 + (chaos * 4.0) as usize;
    let count = rng.range_inclusive(min_stripes, max_stripes);
    let horizontal = rng.chance(0.5);
    let opacity = random_opacity(chaos, rng);

    let base = cell.size / count as f64;
    for i in 0..count {
        let is_foreground = i % 2 == 0 || rng.chance(chaos * 0.3);
        if !is_foreground && rng.chance(chaos * 0.6) {
            continue;
        }
        let fill = if is_foreground {
            colors.foreground
        } else {
            colors.background
        };

        let offset = i as f64 * base;
        let variation = base * rng.range(chaos.mul_add(-0.2, 0.7), chaos.mul_add(0.2, 1.3));
        // Truncate at the cell edge so the last stripe never overruns
        let thickness = variation.min(cell.size - offset);
        if thickness <= 0.0 {
            continue;
        }

        if horizontal {
            shapes.push(Shape::Rect {
                x: cell.x,
                y: cell.y + offset,
                width: cell.size,
                height: thickness,
                fill,
                opacity,
                transform: None,
            });
        } else {
            shapes.push(Shape::Rect {
                x: cell.x + offset,
                y: cell.y,
                width: thickness,
                height: cell.size,
                fill,
                opacity,
                transform: None,
            });
        }
    }

    shapes
}

/// Stacked cubic-curve lines flowing across the cell
pub(crate) fn wavy_lines(
    cell: &Cell,
    colors: &CellColors,
    chaos: f64,
    rng: &mut RandomSource,
) -> Vec<Shape> {
    let mut shapes = vec![backing_rect(cell, colors)];

    let min_lines = 2 + (chaos * 2.0) as usize;
    let max_lines = 5 + (chaos * 3.0) as usize;
    let count = rng.range_inclusive(min_lines, max_lines);
    let horizontal = rng.chance(0.5);
    let stroke_width = cell.size * rng.range(0.02, chaos.mul_add(0.05, 0.05));
    let margin = stroke_width / 2.0;

    for i in 0..count {
        let opacity = random_opacity(chaos, rng);
        let amplitude = cell.size * rng.range(0.05, chaos.mul_add(0.1, 0.2));
        let frequency = rng.range(0.5, 2.0 + chaos);
        let segments = rng.range_inclusive(3, 7);
        let lane = cell.size / (count + 1) as f64 * (i + 1) as f64;
        let step = cell.size / segments as f64;

        let mut commands = Vec::with_capacity(segments + 1);
        if horizontal {
            let base_y = cell.y + lane;
            commands.push(PathCommand::MoveTo(clamped(cell, margin, cell.x, base_y)));
            for seg in 0..segments {
                let s = seg as f64;
                let phase = |t: f64, r: &mut RandomSource| {
                    (t * PI * frequency / segments as f64 + r.unit() * chaos).sin()
                };
                let c1x = step.mul_add(s, cell.x) + rng.range(-10.0, 10.0) * chaos * (cell.size / 100.0);
                let c1y = amplitude.mul_add(phase(s, rng), base_y)
                    + rng.range(-5.0, 5.0) * chaos * (cell.size / 100.0);
                let c2x = step.mul_add(s + 0.5, cell.x)
                    + rng.range(-10.0, 10.0) * chaos * (cell.size / 100.0);
                let c2y = amplitude.mul_add(-phase(s + 0.5, rng), base_y)
                    + rng.range(-5.0, 5.0) * chaos * (cell.size / 100.0);
                let end_x = step.mul_add(s + 1.0, cell.x);
                let end_y = if seg + 1 < segments {
                    amplitude.mul_add(phase(s + 1.0, rng), base_y)
                } else {
                    base_y
                };
                commands.push(PathCommand::CurveTo {
                    control1: clamped(cell, margin, c1x, c1y),
                    control2: clamped(cell, margin, c2x, c2y),
                    end: clamped(cell, margin, end_x, end_y),
                });
            }
        } else {
            let base_x = cell.x + lane;
            commands.push(PathCommand::MoveTo(clamped(cell, margin, base_x, cell.y)));
            for seg in 0..segments {
                let s = seg as f64;
                let phase = |t: f64, r: &mut RandomSource| {
                    (t * PI * frequency / segments as f64 + r.unit() * chaos).sin()
                };
                let c1y = step.mul_add(s, cell.y) + rng.range(-10.0, 10.0) * chaos * (cell.size / 100.0);
                let c1x = amplitude.mul_add(phase(s, rng), base_x)
                    + rng.range(-5.0, 5.0) * chaos * (cell.size / 100.0);
                let c2y = step.mul_add(s + 0.5, cell.y)
                    + rng.range(-10.0, 10.0) * chaos * (cell.size / 100.0);
                let c2x = amplitude.mul_add(-phase(s + 0.5, rng), base_x)
                    + rng.range(-5.0, 5.0) * chaos * (cell.size / 100.0);
                let end_y = step.mul_add(s + 1.0, cell.y);
                let end_x = if seg + 1 < segments {
                    amplitude.mul_add(phase(s + 1.0, rng), base_x)
                } else {
                    base_x
                };
                commands.push(PathCommand::CurveTo {
                    control1: clamped(cell, margin, c1x, c1y),
                    control2: clamped(cell, margin, c2x, c2y),
                    end: clamped(cell, margin, end_x, end_y),
                });
            }
        }

        shapes.push(Shape::Path {
            commands,
            fill: None,
            stroke: Some(Stroke {
                color: colors.foreground,
                width: stroke_width,
            }),
            opacity,
        });
    }

    shapes
}

// Clamping the curve's hull into the cell (inset by the stroke margin)
// bounds the rendered curve as well
fn clamped(cell: &Cell, margin: f64, x: f64, y: f64) -> Point {
    Point::new(
        x.clamp(cell.x + margin, cell.max_x() - margin),
        y.clamp(cell.y + margin, cell.max_y() - margin),
    )
}
