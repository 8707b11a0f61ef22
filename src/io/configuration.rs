//! Generation constants and runtime configuration defaults

// Grid defaults mirror the interactive surface's initial values
/// Default number of grid rows
pub const DEFAULT_ROWS: usize = 6;
/// Default number of grid columns
pub const DEFAULT_COLS: usize = 6;
/// Default cell edge length in pixels
pub const DEFAULT_CELL_SIZE: u32 = 100;

/// Smallest accepted cell edge length in pixels
pub const MIN_CELL_SIZE: u32 = 10;
/// Largest accepted cell edge length in pixels
pub const MAX_CELL_SIZE: u32 = 500;

// Safety limit to prevent excessive output size
/// Maximum allowed rows or columns
pub const MAX_GRID_DIMENSION: usize = 100;

/// Default chaos factor
pub const DEFAULT_CHAOS: f64 = 0.3;

/// Default palette index into the catalog
pub const DEFAULT_PALETTE_INDEX: usize = 0;

/// Default big block edge length in cells
pub const DEFAULT_BIG_BLOCK_SIZE: u32 = 2;
/// Smallest accepted big block multiplier
pub const MIN_BIG_BLOCK_SIZE: u32 = 2;
/// Largest accepted big block multiplier
pub const MAX_BIG_BLOCK_SIZE: u32 = 3;

// Style selection policy: low chaos favors repeating the previous cell's
// style, chaos 1.0 selects uniformly among the enabled styles
/// Probability weight for repeating the previous style at chaos 0.0
pub const STYLE_REPEAT_BIAS: f64 = 0.6;

// Chaos-gated opacity variation applied by the style functions
/// Fraction of the chaos factor used as the opacity variation probability
pub const OPACITY_CHANCE_FACTOR: f64 = 0.5;
/// Lower bound of the varied opacity range
pub const MIN_VARIED_OPACITY: f64 = 0.6;
/// Upper bound of the varied opacity range
pub const MAX_VARIED_OPACITY: f64 = 0.95;

/// Rotation angles available to chaos-gated transforms, in degrees
pub const ROTATION_ANGLES: [f64; 12] = [
    0.0, 15.0, 30.0, 45.0, 60.0, 75.0, 90.0, -15.0, -30.0, -45.0, -60.0, -75.0,
];

/// Channel step of the RGB lattice used for triadic palette generation
pub const TRIADIC_CHANNEL_STEP: usize = 64;

// Output settings
/// Element id of the radial background gradient
pub const BACKGROUND_GRADIENT_ID: &str = "bg_gradient";
/// Suffix added to preview image filenames
pub const PREVIEW_SUFFIX: &str = "_preview";
