//! PNG preview export: one pixel per cell of the composition plan

use crate::compose::{CellSlot, Composition};
use crate::io::error::{ArtGridError, Result};
use crate::palette::Color;
use image::{ImageBuffer, Rgb};
use std::path::Path;

/// Export the composition plan as a PNG with one pixel per cell
///
/// Styled cells take their background color; big block cells take the big
/// block's background color. Gives a quick thumbnail of the color layout
/// without rasterizing the artwork.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be saved to the given path
pub fn export_preview(composition: &Composition, output_path: &Path) -> Result<()> {
    let (rows, cols) = composition.plan.dim();
    let big_block_color = composition
        .big_block
        .map(|(_, assignment)| assignment.colors.background);

    let mut img = ImageBuffer::new(cols as u32, rows as u32);
    for ((row, col), slot) in composition.plan.indexed_iter() {
        let color = match slot {
            CellSlot::Styled(assignment) => assignment.colors.background,
            CellSlot::BigBlock => big_block_color.unwrap_or(Color::new(0, 0, 0)),
        };
        img.put_pixel(col as u32, row as u32, Rgb([color.r, color.g, color.b]));
    }

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| ArtGridError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path).map_err(|e| ArtGridError::PreviewExport {
        path: output_path.to_path_buf(),
        source: e,
    })
}
