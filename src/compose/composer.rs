//! Single-pass grid composition
//!
//! Validates the configuration, then walks the grid in row-major order
//! assigning a style and color pair to every cell outside the big block
//! footprint. The big block is placed before the pass so skipped cells are
//! known up front, and drawn after the cells as its own group.

use crate::compose::grid::{BigBlockPlacement, Cell, CellAssignment, CellSlot};
use crate::io::configuration::{
    DEFAULT_BIG_BLOCK_SIZE, DEFAULT_CELL_SIZE, DEFAULT_CHAOS, DEFAULT_COLS, DEFAULT_ROWS,
    MAX_BIG_BLOCK_SIZE, MAX_CELL_SIZE, MAX_GRID_DIMENSION, MIN_BIG_BLOCK_SIZE, MIN_CELL_SIZE,
    STYLE_REPEAT_BIAS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::palette::{Palette, derive_background, pick_pair};
use crate::random::RandomSource;
use crate::style::StyleKind;
use crate::svg::document::{Drawing, RadialBackground};
use ndarray::Array2;

/// Big block overlay settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BigBlockConfig {
    /// Footprint edge length in cells
    pub size: u32,
    /// Explicit anchor (row, col); random placement when `None`
    pub anchor: Option<(usize, usize)>,
}

impl Default for BigBlockConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BIG_BLOCK_SIZE,
            anchor: None,
        }
    }
}

/// Generation parameters for one artwork
#[derive(Debug, Clone)]
pub struct GridConfig {
    /// Number of grid rows
    pub rows: usize,
    /// Number of grid columns
    pub cols: usize,
    /// Cell edge length in pixels
    pub cell_size: u32,
    /// Enabled styles (at least one)
    pub styles: Vec<StyleKind>,
    /// Chaos factor in [0.0, 1.0]
    pub chaos: f64,
    /// Optional big block overlay
    pub big_block: Option<BigBlockConfig>,
    /// Optional seed; operating system entropy when `None`
    pub seed: Option<u64>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cell_size: DEFAULT_CELL_SIZE,
            styles: StyleKind::ALL.to_vec(),
            chaos: DEFAULT_CHAOS,
            big_block: Some(BigBlockConfig::default()),
            seed: None,
        }
    }
}

impl GridConfig {
    /// Validate the configuration before any drawing begins
    ///
    /// # Errors
    ///
    /// Returns an error for non-positive or oversized dimensions, a cell
    /// size outside the accepted range, an empty style set, a chaos factor
    /// outside [0, 1], or a big block that does not fit the grid
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.rows > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "rows",
                &self.rows,
                &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
            ));
        }
        if self.cols == 0 || self.cols > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "cols",
                &self.cols,
                &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
            ));
        }
        if self.cell_size < MIN_CELL_SIZE || self.cell_size > MAX_CELL_SIZE {
            return Err(invalid_parameter(
                "cell_size",
                &self.cell_size,
                &format!("must be between {MIN_CELL_SIZE} and {MAX_CELL_SIZE}"),
            ));
        }
        if self.styles.is_empty() {
            return Err(invalid_parameter(
                "styles",
                &"[]",
                &"at least one style must be selected",
            ));
        }
        if !self.chaos.is_finite() || !(0.0..=1.0).contains(&self.chaos) {
            return Err(invalid_parameter(
                "chaos",
                &self.chaos,
                &"must be within [0.0, 1.0]",
            ));
        }

        if let Some(big_block) = self.big_block {
            if big_block.size < MIN_BIG_BLOCK_SIZE || big_block.size > MAX_BIG_BLOCK_SIZE {
                return Err(invalid_parameter(
                    "big_block_size",
                    &big_block.size,
                    &format!("must be between {MIN_BIG_BLOCK_SIZE} and {MAX_BIG_BLOCK_SIZE}"),
                ));
            }
            let span = big_block.size as usize;
            if span > self.rows || span > self.cols {
                return Err(invalid_parameter(
                    "big_block_size",
                    &big_block.size,
                    &format!("does not fit a {}x{} grid", self.rows, self.cols),
                ));
            }
            if let Some((row, col)) = big_block.anchor {
                if row + span > self.rows || col + span > self.cols {
                    return Err(invalid_parameter(
                        "anchor",
                        &format!("{row},{col}"),
                        &"big block footprint exceeds the grid",
                    ));
                }
            }
        }

        Ok(())
    }

    /// Document width in pixels
    pub const fn width(&self) -> f64 {
        self.cols as f64 * self.cell_size as f64
    }

    /// Document height in pixels
    pub const fn height(&self) -> f64 {
        self.rows as f64 * self.cell_size as f64
    }
}

/// The outcome of composing a grid
#[derive(Debug, Clone)]
pub struct Composition {
    /// The accumulated drawing, ready for the writer
    pub drawing: Drawing,
    /// Per-cell assignments in grid order
    pub plan: Array2<CellSlot>,
    /// The big block's placement and assignment, when drawn
    pub big_block: Option<(BigBlockPlacement, CellAssignment)>,
}

/// Compose a grid using the configured seed (or entropy when absent)
///
/// # Errors
///
/// Returns an error if the configuration fails validation
pub fn compose(config: &GridConfig, palette: &Palette) -> Result<Composition> {
    let mut rng = config
        .seed
        .map_or_else(RandomSource::from_entropy, RandomSource::from_seed);
    compose_with(config, palette, &mut rng)
}

/// Compose a grid with an explicitly provided random source
///
/// # Errors
///
/// Returns an error if the configuration fails validation
pub fn compose_with(
    config: &GridConfig,
    palette: &Palette,
    rng: &mut RandomSource,
) -> Result<Composition> {
    config.validate()?;

    let cell_size = f64::from(config.cell_size);
    let mut drawing = Drawing::new(config.width(), config.height());
    let (inner, outer) = derive_background(palette);
    drawing.background = Some(RadialBackground { inner, outer });

    // Placement happens before the cell pass so the skip region is known
    let placement = config.big_block.map(|big_block| {
        let span = big_block.size as usize;
        let (row, col) = big_block.anchor.unwrap_or_else(|| {
            (
                rng.range_inclusive(0, config.rows - span),
                rng.range_inclusive(0, config.cols - span),
            )
        });
        BigBlockPlacement { row, col, span }
    });

    let mut slots = Vec::with_capacity(config.rows * config.cols);
    let mut previous_style = None;

    for row in 0..config.rows {
        for col in 0..config.cols {
            if placement.is_some_and(|p| p.contains(row, col)) {
                slots.push(CellSlot::BigBlock);
                continue;
            }

            let style = choose_style(&config.styles, previous_style, config.chaos, rng);
            previous_style = Some(style);
            let colors = pick_pair(palette, rng);

            let cell = Cell::at(row, col, cell_size);
            let shapes = style.render(&cell, &colors, config.chaos, rng);
            drawing.push_cell(format!("cell_{col}_{row}"), shapes);
            slots.push(CellSlot::Styled(CellAssignment { style, colors }));
        }
    }

    let big_block = placement.map(|p| {
        let style = choose_style(&config.styles, None, config.chaos, rng);
        let colors = pick_pair(palette, rng);
        let region = p.region(cell_size);
        drawing.big_block = Some(style.render(&region, &colors, config.chaos, rng));
        (p, CellAssignment { style, colors })
    });

    let plan = Array2::from_shape_vec((config.rows, config.cols), slots)
        .map_err(|e| invalid_parameter("plan", &"", &e))?;

    Ok(Composition {
        drawing,
        plan,
        big_block,
    })
}

/// Chaos-weighted style choice
///
/// Every enabled style gets a uniform share; the previous cell's style
/// receives an additional `(1 − chaos) × STYLE_REPEAT_BIAS` weight, so low
/// chaos produces runs of the same style and chaos 1.0 selects uniformly.
fn choose_style(
    styles: &[StyleKind],
    previous: Option<StyleKind>,
    chaos: f64,
    rng: &mut RandomSource,
) -> StyleKind {
    let fallback = styles.first().copied().unwrap_or(StyleKind::Circle);
    if styles.len() < 2 {
        return fallback;
    }

    let uniform_share = 1.0 / styles.len() as f64;
    let repeat_bonus = (1.0 - chaos) * STYLE_REPEAT_BIAS;
    let weights: Vec<f64> = styles
        .iter()
        .map(|&kind| {
            if previous == Some(kind) {
                uniform_share + repeat_bonus
            } else {
                uniform_share
            }
        })
        .collect();

    let index = rng.weighted_choice(&weights);
    styles.get(index).copied().unwrap_or(fallback)
}
