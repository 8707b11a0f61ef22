//! Validates SVG serialization, atomic writes, and the preview export

use artgrid::compose::{GridConfig, compose};
use artgrid::io::preview::export_preview;
use artgrid::palette::PaletteCatalog;
use artgrid::svg::writer;

fn seeded_config(seed: u64) -> GridConfig {
    GridConfig {
        rows: 3,
        cols: 4,
        cell_size: 25,
        seed: Some(seed),
        ..GridConfig::default()
    }
}

#[test]
fn written_file_matches_rendered_markup() -> artgrid::Result<()> {
    let catalog = PaletteCatalog::builtin();
    let palette = catalog.select(0)?;
    let composition = compose(&seeded_config(5), palette)?;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("art.svg");
    writer::write(&composition.drawing, &path)?;

    let written = std::fs::read_to_string(&path)?;
    assert_eq!(written, writer::render(&composition.drawing));
    assert!(written.starts_with("<?xml"));
    assert!(written.trim_end().ends_with("</svg>"));
    Ok(())
}

#[test]
fn fixed_seed_writes_byte_identical_files() -> artgrid::Result<()> {
    let catalog = PaletteCatalog::builtin();
    let palette = catalog.select(2)?;

    let dir = tempfile::tempdir()?;
    let first_path = dir.path().join("a.svg");
    let second_path = dir.path().join("b.svg");

    writer::write(&compose(&seeded_config(42), palette)?.drawing, &first_path)?;
    writer::write(&compose(&seeded_config(42), palette)?.drawing, &second_path)?;

    assert_eq!(std::fs::read(&first_path)?, std::fs::read(&second_path)?);
    Ok(())
}

#[test]
fn no_temporary_file_remains_after_a_write() -> artgrid::Result<()> {
    let catalog = PaletteCatalog::builtin();
    let palette = catalog.select(0)?;
    let composition = compose(&seeded_config(9), palette)?;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("art.svg");
    writer::write(&composition.drawing, &path)?;

    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir.path())? {
        entries.push(entry?.file_name().to_string_lossy().into_owned());
    }
    assert_eq!(entries, vec!["art.svg".to_string()]);
    Ok(())
}

#[test]
fn failed_write_leaves_existing_output_untouched() -> artgrid::Result<()> {
    let catalog = PaletteCatalog::builtin();
    let palette = catalog.select(0)?;
    let composition = compose(&seeded_config(3), palette)?;

    let dir = tempfile::tempdir()?;
    // A directory at the target path makes the final rename fail
    let path = dir.path().join("blocked.svg");
    std::fs::create_dir(&path)?;
    let marker = path.join("existing.txt");
    std::fs::write(&marker, "keep me")?;

    let result = writer::write(&composition.drawing, &path);
    assert!(result.is_err());

    // The prior contents survive and no temporary file remains
    assert_eq!(std::fs::read_to_string(&marker)?, "keep me");
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir.path())? {
        entries.push(entry?.file_name().to_string_lossy().into_owned());
    }
    assert_eq!(entries, vec!["blocked.svg".to_string()]);
    Ok(())
}

#[test]
fn markup_structure_matches_the_grid() -> artgrid::Result<()> {
    let catalog = PaletteCatalog::builtin();
    let palette = catalog.select(1)?;
    let config = GridConfig {
        rows: 2,
        cols: 3,
        cell_size: 30,
        big_block: None,
        seed: Some(8),
        ..GridConfig::default()
    };
    let markup = writer::render(&compose(&config, palette)?.drawing);

    assert!(markup.contains(r#"width="90px" height="60px" viewBox="0 0 90 60""#));
    assert!(markup.contains(r#"<g id="grid_elements">"#));
    assert!(markup.contains(r#"<g id="cell_0_0">"#));
    assert!(markup.contains(r#"<g id="cell_2_1">"#));
    assert!(!markup.contains("big_block_element"));
    assert!(markup.contains(r#"<radialGradient id="bg_gradient""#));
    Ok(())
}

#[test]
fn big_block_group_is_rendered_last() -> artgrid::Result<()> {
    let catalog = PaletteCatalog::builtin();
    let palette = catalog.select(0)?;
    let markup = writer::render(&compose(&seeded_config(11), palette)?.drawing);

    let grid_at = markup.find(r#"<g id="grid_elements">"#);
    let block_at = markup.find(r#"<g id="big_block_element">"#);
    assert!(grid_at.is_some());
    assert!(block_at > grid_at);
    Ok(())
}

#[test]
fn preview_has_one_pixel_per_cell() -> artgrid::Result<()> {
    let catalog = PaletteCatalog::builtin();
    let palette = catalog.select(0)?;
    let composition = compose(&seeded_config(13), palette)?;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("art_preview.png");
    export_preview(&composition, &path)?;

    let image = image::open(&path).map_err(|e| artgrid::ArtGridError::PreviewExport {
        path: path.clone(),
        source: e,
    })?;
    assert_eq!(image.width(), 4);
    assert_eq!(image.height(), 3);
    Ok(())
}
