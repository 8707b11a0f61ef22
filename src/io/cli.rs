//! Command-line interface for generating grid artwork files

use crate::compose::{BigBlockConfig, GridConfig, compose};
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_CHAOS, DEFAULT_COLS, DEFAULT_PALETTE_INDEX, DEFAULT_ROWS,
    DEFAULT_BIG_BLOCK_SIZE, PREVIEW_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::preview::export_preview;
use crate::io::progress::ProgressManager;
use crate::palette::PaletteCatalog;
use crate::style::StyleKind;
use crate::svg::writer;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Big block anchor position parsed from `ROW,COL`
#[derive(Debug, Clone, Copy)]
pub struct CellAnchor {
    /// Anchor row
    pub row: usize,
    /// Anchor column
    pub col: usize,
}

fn parse_anchor(value: &str) -> std::result::Result<CellAnchor, String> {
    let (row, col) = value
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{value}'"))?;
    let row = row
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid anchor row '{row}': {e}"))?;
    let col = col
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid anchor column '{col}': {e}"))?;
    Ok(CellAnchor { row, col })
}

fn parse_style(value: &str) -> std::result::Result<StyleKind, String> {
    StyleKind::from_name(value.trim()).ok_or_else(|| {
        let known = StyleKind::ALL.map(StyleKind::name).join(", ");
        format!("unknown style '{value}' (available: {known})")
    })
}

#[derive(Parser)]
#[command(name = "artgrid")]
#[command(
    author,
    version,
    about = "Generate grid-based abstract artwork as SVG"
)]
/// Command-line arguments for the artwork generation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Output SVG file path
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Number of grid rows
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Number of grid columns
    #[arg(long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Cell edge length in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// JSON palette file (defaults to the built-in catalog)
    #[arg(short, long)]
    pub palette_file: Option<PathBuf>,

    /// Palette index into the catalog
    #[arg(short = 'i', long, default_value_t = DEFAULT_PALETTE_INDEX)]
    pub palette_index: usize,

    /// Extend the built-in catalog with generated triadic palettes
    #[arg(short, long)]
    pub triadic: bool,

    /// Comma-separated style names (defaults to every style)
    #[arg(long, value_delimiter = ',', value_parser = parse_style)]
    pub styles: Option<Vec<StyleKind>>,

    /// Disable the big block overlay
    #[arg(short = 'n', long)]
    pub no_big_block: bool,

    /// Big block edge length in cells
    #[arg(short = 'b', long, default_value_t = DEFAULT_BIG_BLOCK_SIZE)]
    pub big_block_size: u32,

    /// Big block anchor as ROW,COL (random placement when omitted)
    #[arg(long, value_parser = parse_anchor)]
    pub anchor: Option<CellAnchor>,

    /// Chaos factor in [0.0, 1.0]
    #[arg(short, long, default_value_t = DEFAULT_CHAOS)]
    pub chaos: f64,

    /// Random seed for reproducible generation
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of variations to generate (derived seeds, numbered files)
    #[arg(long, default_value_t = 1)]
    pub count: usize,

    /// Also export a one-pixel-per-cell PNG preview per variation
    #[arg(long)]
    pub preview: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if the big block overlay is enabled
    pub const fn big_block_enabled(&self) -> bool {
        !self.no_big_block
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// The enabled styles, defaulting to the whole registry
    pub fn selected_styles(&self) -> Vec<StyleKind> {
        self.styles
            .clone()
            .unwrap_or_else(|| StyleKind::ALL.to_vec())
    }
}

/// Orchestrates palette resolution, generation, and export
pub struct GenerationRunner {
    cli: Cli,
}

impl GenerationRunner {
    /// Create a runner from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate and save the configured variations
    ///
    /// Validation happens before any file is touched; a failure in one
    /// variation stops the batch with the files written so far intact.
    ///
    /// # Errors
    ///
    /// Returns an error if the palette cannot be resolved, configuration
    /// validation fails, or an output file cannot be written
    pub fn run(&self) -> Result<()> {
        if self.cli.count == 0 {
            return Err(invalid_parameter(
                "count",
                &self.cli.count,
                &"must be at least 1",
            ));
        }

        let catalog = self.load_catalog()?;
        let palette = catalog.select(self.cli.palette_index)?;

        let config = self.grid_config();
        config.validate()?;

        let progress = self
            .cli
            .should_show_progress()
            .then(|| ProgressManager::new(self.cli.count));

        let base = self.base_output();
        for index in 0..self.cli.count {
            let output_path = if self.cli.count == 1 {
                base.clone()
            } else {
                Self::numbered_output(&base, index)
            };

            if let Some(ref pm) = progress {
                pm.start_variation(&output_path);
            }

            let variation = GridConfig {
                seed: self.cli.seed.map(|s| s.wrapping_add(index as u64)),
                ..config.clone()
            };

            let composition = compose(&variation, palette)?;
            writer::write(&composition.drawing, &output_path)?;

            if self.cli.preview {
                export_preview(&composition, &Self::preview_path(&output_path))?;
            }

            if let Some(ref pm) = progress {
                pm.complete_variation();
            }
        }

        if let Some(ref pm) = progress {
            pm.finish();
        }

        Ok(())
    }

    fn load_catalog(&self) -> Result<PaletteCatalog> {
        self.cli.palette_file.as_ref().map_or_else(
            || {
                if self.cli.triadic {
                    Ok(PaletteCatalog::builtin_with_triadic())
                } else {
                    Ok(PaletteCatalog::builtin())
                }
            },
            |path| PaletteCatalog::from_json_file(path),
        )
    }

    fn grid_config(&self) -> GridConfig {
        GridConfig {
            rows: self.cli.rows,
            cols: self.cli.cols,
            cell_size: self.cli.cell_size,
            styles: self.cli.selected_styles(),
            chaos: self.cli.chaos,
            big_block: self.cli.big_block_enabled().then(|| BigBlockConfig {
                size: self.cli.big_block_size,
                anchor: self.cli.anchor.map(|a| (a.row, a.col)),
            }),
            seed: self.cli.seed,
        }
    }

    fn base_output(&self) -> PathBuf {
        let path = &self.cli.output;
        let has_svg_extension = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("svg"));

        if has_svg_extension {
            path.clone()
        } else {
            let name = path
                .file_name()
                .map_or_else(String::new, |n| n.to_string_lossy().into_owned());
            path.with_file_name(format!("{name}.svg"))
        }
    }

    fn numbered_output(base: &Path, index: usize) -> PathBuf {
        let stem = base.file_stem().unwrap_or_default();
        let numbered = format!("{}_{:02}.svg", stem.to_string_lossy(), index + 1);
        base.with_file_name(numbered)
    }

    fn preview_path(svg_path: &Path) -> PathBuf {
        let stem = svg_path.file_stem().unwrap_or_default();
        let name = format!("{}{PREVIEW_SUFFIX}.png", stem.to_string_lossy());
        svg_path.with_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_parsing() {
        let anchor = parse_anchor("2,3").map_err(|e| e.to_string());
        assert!(matches!(anchor, Ok(CellAnchor { row: 2, col: 3 })));
        assert!(parse_anchor("2").is_err());
        assert!(parse_anchor("a,b").is_err());
    }

    #[test]
    fn test_style_parsing() {
        assert_eq!(parse_style(" dots "), Ok(StyleKind::Dots));
        assert!(parse_style("nope").is_err());
    }

    #[test]
    fn test_numbered_output_naming() {
        let base = PathBuf::from("out/art.svg");
        let numbered = GenerationRunner::numbered_output(&base, 0);
        assert_eq!(numbered, PathBuf::from("out/art_01.svg"));
    }

    #[test]
    fn test_preview_path_naming() {
        let path = PathBuf::from("out/art_03.svg");
        assert_eq!(
            GenerationRunner::preview_path(&path),
            PathBuf::from("out/art_03_preview.png")
        );
    }
}
