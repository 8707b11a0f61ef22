//! Input/output operations and error handling

/// Command-line interface and batch generation
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types and helpers
pub mod error;
/// PNG preview export of the composition plan
pub mod preview;
/// Batch progress display
pub mod progress;
