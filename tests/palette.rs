//! Validates palette file loading, catalog selection, and failure modes

use artgrid::ArtGridError;
use artgrid::palette::{Color, PaletteCatalog};
use std::path::PathBuf;

fn write_palette_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let _ = std::fs::write(&path, contents);
    path
}

#[test]
fn valid_palette_file_loads() -> artgrid::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_palette_file(
        &dir,
        "palettes.json",
        r##"[["#1A1A1A", "#2A2A2A"], ["#FF0000", "#00FF00", "#0000FF"]]"##,
    );

    let catalog = PaletteCatalog::from_json_file(&path)?;
    assert_eq!(catalog.len(), 2);

    let palette = catalog.select(1)?;
    assert_eq!(
        palette.colors(),
        &[
            Color::new(0xFF, 0x00, 0x00),
            Color::new(0x00, 0xFF, 0x00),
            Color::new(0x00, 0x00, 0xFF),
        ]
    );
    Ok(())
}

#[test]
fn short_hex_colors_expand() -> artgrid::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_palette_file(&dir, "short.json", r##"[["#123", "#abc"]]"##);

    let catalog = PaletteCatalog::from_json_file(&path)?;
    let palette = catalog.select(0)?;
    assert_eq!(
        palette.colors(),
        &[Color::new(0x11, 0x22, 0x33), Color::new(0xAA, 0xBB, 0xCC)]
    );
    Ok(())
}

#[test]
fn missing_file_is_a_load_error() {
    let result = PaletteCatalog::from_json_file(std::path::Path::new("/nonexistent/palettes.json"));
    assert!(matches!(result, Err(ArtGridError::PaletteLoad { .. })));
}

#[test]
fn malformed_json_is_a_parse_error() -> artgrid::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_palette_file(&dir, "broken.json", r##"[["#FF0000",]"##);
    let result = PaletteCatalog::from_json_file(&path);
    assert!(matches!(result, Err(ArtGridError::PaletteParse { .. })));
    Ok(())
}

#[test]
fn invalid_hex_color_is_rejected() -> artgrid::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_palette_file(&dir, "badcolor.json", r#"[["not-a-color"]]"#);
    let result = PaletteCatalog::from_json_file(&path);
    assert!(matches!(result, Err(ArtGridError::InvalidColor { .. })));
    Ok(())
}

#[test]
fn empty_file_and_empty_palette_are_rejected() -> artgrid::Result<()> {
    let dir = tempfile::tempdir()?;

    let empty_catalog = write_palette_file(&dir, "empty.json", "[]");
    assert!(matches!(
        PaletteCatalog::from_json_file(&empty_catalog),
        Err(ArtGridError::InvalidPalette { .. })
    ));

    let empty_palette = write_palette_file(&dir, "hollow.json", r#"[[]]"#);
    assert!(matches!(
        PaletteCatalog::from_json_file(&empty_palette),
        Err(ArtGridError::InvalidPalette { .. })
    ));
    Ok(())
}

#[test]
fn out_of_bounds_index_is_rejected() {
    let catalog = PaletteCatalog::builtin();
    assert!(matches!(
        catalog.select(99),
        Err(ArtGridError::PaletteIndex {
            index: 99,
            count: 4
        })
    ));
}

#[test]
fn triadic_catalog_extends_builtin() -> artgrid::Result<()> {
    let builtin = PaletteCatalog::builtin();
    let extended = PaletteCatalog::builtin_with_triadic();
    assert!(extended.len() > builtin.len());

    // The builtin palettes stay at the front
    assert_eq!(builtin.select(3)?.colors(), extended.select(3)?.colors());

    // Every generated palette carries a base color and its two rotations
    let triadic = extended.select(builtin.len())?;
    assert_eq!(triadic.len(), 3);
    Ok(())
}
