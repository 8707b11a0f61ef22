//! Validates determinism, palette membership, cell containment, and the big
//! block region override through the public composition API

use artgrid::compose::{BigBlockConfig, CellSlot, GridConfig, compose};
use artgrid::palette::{Color, Palette};
use artgrid::style::StyleKind;
use artgrid::svg::element::{PathCommand, Rotation, Shape};
use artgrid::svg::writer;

fn test_palette() -> artgrid::Result<Palette> {
    Palette::new(vec![
        Color::new(0x1A, 0x1A, 0x1A),
        Color::new(0xD6, 0x28, 0x28),
        Color::new(0xFC, 0xBF, 0x49),
    ])
}

fn config_without_big_block(styles: Vec<StyleKind>, chaos: f64, seed: u64) -> GridConfig {
    GridConfig {
        rows: 3,
        cols: 3,
        cell_size: 50,
        styles,
        chaos,
        big_block: None,
        seed: Some(seed),
    }
}

// Conservative hull of a shape: every rendered point lies inside the convex
// hull of these points (curves are bounded by their control points, arcs by
// their endpoints plus the subpath's corner)
fn hull_points(shape: &Shape) -> Vec<(f64, f64)> {
    let rotate = |points: Vec<(f64, f64)>, transform: &Option<Rotation>| -> Vec<(f64, f64)> {
        let Some(rotation) = transform else {
            return points;
        };
        let radians = rotation.degrees.to_radians();
        let (sin, cos) = radians.sin_cos();
        points
            .iter()
            .map(|&(x, y)| {
                let dx = x - rotation.cx;
                let dy = y - rotation.cy;
                (
                    rotation.cx + dx * cos - dy * sin,
                    rotation.cy + dx * sin + dy * cos,
                )
            })
            .collect()
    };

    match shape {
        Shape::Rect {
            x,
            y,
            width,
            height,
            transform,
            ..
        } => rotate(
            vec![
                (*x, *y),
                (x + width, *y),
                (x + width, y + height),
                (*x, y + height),
            ],
            transform,
        ),
        Shape::Circle { cx, cy, r, .. } => {
            vec![(cx - r, cy - r), (cx + r, cy + r)]
        }
        Shape::Ellipse { cx, cy, rx, ry, .. } => {
            // Bounding circle of the ellipse is rotation-invariant
            let radius = rx.max(*ry);
            vec![(cx - radius, cy - radius), (cx + radius, cy + radius)]
        }
        Shape::Polygon {
            points, transform, ..
        } => rotate(points.iter().map(|p| (p.x, p.y)).collect(), transform),
        Shape::Path { commands, .. } => commands
            .iter()
            .flat_map(|command| match command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => vec![(p.x, p.y)],
                PathCommand::Arc { end, .. } => vec![(end.x, end.y)],
                PathCommand::CurveTo {
                    control1,
                    control2,
                    end,
                } => vec![
                    (control1.x, control1.y),
                    (control2.x, control2.y),
                    (end.x, end.y),
                ],
                PathCommand::Close => Vec::new(),
            })
            .collect(),
        Shape::Text { x, y, .. } => vec![(*x, *y)],
    }
}

fn assert_within(shape: &Shape, min_x: f64, min_y: f64, max_x: f64, max_y: f64, context: &str) {
    const TOLERANCE: f64 = 1e-6;
    for (x, y) in hull_points(shape) {
        assert!(
            x >= min_x - TOLERANCE
                && x <= max_x + TOLERANCE
                && y >= min_y - TOLERANCE
                && y <= max_y + TOLERANCE,
            "{context}: point ({x}, {y}) escapes [{min_x}, {min_y}, {max_x}, {max_y}]"
        );
    }
}

#[test]
fn fixed_seed_reproduces_identical_markup() -> artgrid::Result<()> {
    let palette = test_palette()?;
    let config = GridConfig {
        rows: 5,
        cols: 4,
        cell_size: 40,
        chaos: 0.7,
        seed: Some(1234),
        ..GridConfig::default()
    };

    let first = writer::render(&compose(&config, &palette)?.drawing);
    let second = writer::render(&compose(&config, &palette)?.drawing);
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn different_seeds_differ() -> artgrid::Result<()> {
    let palette = test_palette()?;
    let mut config = GridConfig {
        seed: Some(1),
        ..GridConfig::default()
    };
    let first = writer::render(&compose(&config, &palette)?.drawing);
    config.seed = Some(2);
    let second = writer::render(&compose(&config, &palette)?.drawing);
    assert_ne!(first, second);
    Ok(())
}

#[test]
fn every_emitted_color_comes_from_the_palette() -> artgrid::Result<()> {
    let palette = test_palette()?;
    for seed in 0..8 {
        let config = GridConfig {
            chaos: 1.0,
            seed: Some(seed),
            ..GridConfig::default()
        };
        let composition = compose(&config, &palette)?;
        for shape in composition.drawing.shapes() {
            for color in shape.paint_colors() {
                assert!(
                    palette.contains(color),
                    "seed {seed}: color {color} not in palette"
                );
            }
        }
    }
    Ok(())
}

#[test]
fn cell_shapes_stay_inside_their_cells() -> artgrid::Result<()> {
    let palette = test_palette()?;
    for seed in 0..12 {
        for &chaos in &[0.0, 0.5, 1.0] {
            let config = config_without_big_block(StyleKind::ALL.to_vec(), chaos, seed);
            let composition = compose(&config, &palette)?;

            assert_eq!(composition.drawing.cells.len(), 9);
            for (index, cell_group) in composition.drawing.cells.iter().enumerate() {
                let row = index / 3;
                let col = index % 3;
                let min_x = col as f64 * 50.0;
                let min_y = row as f64 * 50.0;
                assert!(!cell_group.shapes.is_empty());
                for shape in &cell_group.shapes {
                    assert_within(
                        shape,
                        min_x,
                        min_y,
                        min_x + 50.0,
                        min_y + 50.0,
                        &format!("seed {seed} chaos {chaos} cell {row},{col}"),
                    );
                }
            }
        }
    }
    Ok(())
}

#[test]
fn zero_styles_are_rejected_before_any_work() -> artgrid::Result<()> {
    let palette = test_palette()?;
    let config = config_without_big_block(Vec::new(), 0.3, 7);
    let result = compose(&config, &palette);
    assert!(matches!(
        result,
        Err(artgrid::ArtGridError::InvalidParameter {
            parameter: "styles",
            ..
        })
    ));
    Ok(())
}

#[test]
fn oversized_big_block_is_rejected() -> artgrid::Result<()> {
    let palette = test_palette()?;
    let config = GridConfig {
        rows: 2,
        cols: 2,
        big_block: Some(BigBlockConfig {
            size: 3,
            anchor: None,
        }),
        seed: Some(1),
        ..GridConfig::default()
    };
    assert!(compose(&config, &palette).is_err());
    Ok(())
}

#[test]
fn single_style_grid_draws_that_style_everywhere() -> artgrid::Result<()> {
    let palette = test_palette()?;
    let config = GridConfig {
        rows: 4,
        cols: 4,
        cell_size: 50,
        styles: vec![StyleKind::Circle],
        chaos: 0.0,
        big_block: None,
        seed: Some(42),
    };

    let composition = compose(&config, &palette)?;
    assert_eq!(composition.drawing.cells.len(), 16);

    for slot in &composition.plan {
        match slot {
            CellSlot::Styled(assignment) => assert_eq!(assignment.style, StyleKind::Circle),
            CellSlot::BigBlock => unreachable!("no big block configured"),
        }
    }

    // Chaos 0.0: one backing rect plus exactly one opaque circle per cell
    for cell_group in &composition.drawing.cells {
        let circles = cell_group
            .shapes
            .iter()
            .filter(|shape| matches!(shape, Shape::Circle { .. }))
            .count();
        assert!(circles >= 1);
        assert!(matches!(
            cell_group.shapes.first(),
            Some(Shape::Rect { .. })
        ));
    }
    Ok(())
}

#[test]
fn anchored_big_block_overrides_its_footprint() -> artgrid::Result<()> {
    let palette = test_palette()?;
    let config = GridConfig {
        rows: 4,
        cols: 4,
        cell_size: 50,
        styles: StyleKind::ALL.to_vec(),
        chaos: 0.3,
        big_block: Some(BigBlockConfig {
            size: 2,
            anchor: Some((0, 0)),
        }),
        seed: Some(42),
    };

    let composition = compose(&config, &palette)?;

    // 16 cells minus the 2x2 footprint
    assert_eq!(composition.drawing.cells.len(), 12);
    for cell_group in &composition.drawing.cells {
        assert_ne!(cell_group.id, "cell_0_0");
        assert_ne!(cell_group.id, "cell_1_0");
        assert_ne!(cell_group.id, "cell_0_1");
        assert_ne!(cell_group.id, "cell_1_1");
    }

    let covered = composition
        .plan
        .indexed_iter()
        .filter(|(_, slot)| matches!(slot, CellSlot::BigBlock))
        .map(|((row, col), _)| (row, col))
        .collect::<Vec<(usize, usize)>>();
    assert_eq!(covered, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);

    // One scaled pattern spanning the 100x100 footprint
    let Some(shapes) = &composition.drawing.big_block else {
        return Err(artgrid::io::error::invalid_palette(&"missing big block"));
    };
    assert!(!shapes.is_empty());
    for shape in shapes {
        assert_within(shape, 0.0, 0.0, 100.0, 100.0, "big block");
    }
    assert!(matches!(
        shapes.first(),
        Some(Shape::Rect { width, height, .. })
            if (width - 100.0).abs() < 1e-9 && (height - 100.0).abs() < 1e-9
    ));
    Ok(())
}

#[test]
fn random_big_block_stays_inside_the_grid() -> artgrid::Result<()> {
    let palette = test_palette()?;
    for seed in 0..16 {
        let config = GridConfig {
            rows: 3,
            cols: 5,
            cell_size: 20,
            styles: StyleKind::ALL.to_vec(),
            chaos: 0.5,
            big_block: Some(BigBlockConfig {
                size: 2,
                anchor: None,
            }),
            seed: Some(seed),
        };
        let composition = compose(&config, &palette)?;
        let Some((placement, _)) = composition.big_block else {
            return Err(artgrid::io::error::invalid_palette(&"missing big block"));
        };
        assert!(placement.row + placement.span <= 3);
        assert!(placement.col + placement.span <= 5);

        if let Some(shapes) = &composition.drawing.big_block {
            for shape in shapes {
                assert_within(shape, 0.0, 0.0, 100.0, 60.0, &format!("seed {seed}"));
            }
        }
    }
    Ok(())
}
