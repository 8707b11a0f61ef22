//! Error types for palette loading, generation, and export operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum ArtGridError {
    /// Failed to read a palette file from the filesystem
    PaletteLoad {
        /// Path to the palette file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Palette file contents are not valid JSON of the expected shape
    PaletteParse {
        /// Path to the palette file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// A color entry is not a valid hex encoding
    InvalidColor {
        /// The offending color string
        value: String,
        /// Explanation of why the value is invalid
        reason: &'static str,
    },

    /// Palette data doesn't meet generation requirements
    InvalidPalette {
        /// Description of what's wrong with the palette data
        reason: String,
    },

    /// Requested palette index exceeds the loaded catalog
    PaletteIndex {
        /// The invalid palette index
        index: usize,
        /// Number of palettes in the catalog
        count: usize,
    },

    /// Generation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to write the generated SVG document to disk
    SvgExport {
        /// Path where the export was attempted
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to save the composition preview image to disk
    PreviewExport {
        /// Path where the export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for ArtGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PaletteLoad { path, source } => {
                write!(
                    f,
                    "Failed to read palette file '{}': {source}",
                    path.display()
                )
            }
            Self::PaletteParse { path, source } => {
                write!(
                    f,
                    "Failed to parse palette file '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidColor { value, reason } => {
                write!(f, "Invalid color '{value}': {reason}")
            }
            Self::InvalidPalette { reason } => {
                write!(f, "Invalid palette data: {reason}")
            }
            Self::PaletteIndex { index, count } => {
                write!(
                    f,
                    "Palette index {index} is out of bounds (catalog holds {count})"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::SvgExport { path, source } => {
                write!(f, "Failed to write SVG to '{}': {source}", path.display())
            }
            Self::PreviewExport { path, source } => {
                write!(
                    f,
                    "Failed to export preview to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ArtGridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PaletteLoad { source, .. }
            | Self::SvgExport { source, .. }
            | Self::FileSystem { source, .. } => Some(source),
            Self::PaletteParse { source, .. } => Some(source),
            Self::PreviewExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, ArtGridError>;

impl From<std::io::Error> for ArtGridError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ArtGridError {
    ArtGridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid palette error
pub fn invalid_palette(reason: &impl ToString) -> ArtGridError {
    ArtGridError::InvalidPalette {
        reason: reason.to_string(),
    }
}
