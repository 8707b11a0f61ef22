//! SVG serialization and atomic file output
//!
//! Serialization is deterministic: attribute order is fixed, coordinates are
//! rounded to two decimals with trailing zeros trimmed, and the gradient id is
//! constant, so a fixed seed reproduces a byte-identical document.

use crate::io::configuration::BACKGROUND_GRADIENT_ID;
use crate::io::error::{ArtGridError, Result};
use crate::svg::document::Drawing;
use crate::svg::element::{PathCommand, Rotation, Shape};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Render a drawing to SVG markup
pub fn render(drawing: &Drawing) -> String {
    let mut out = String::with_capacity(4096);
    let w = num(drawing.width);
    let h = num(drawing.height);

    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}px" height="{h}px" viewBox="0 0 {w} {h}">"#
    );

    out.push_str("<defs>\n<style>svg * { shape-rendering: crispEdges; }</style>\n");
    if let Some(background) = drawing.background {
        let _ = writeln!(
            out,
            r#"<radialGradient id="{BACKGROUND_GRADIENT_ID}" cx="50%" cy="50%" r="75%" fx="50%" fy="50%">"#
        );
        let _ = writeln!(out, r#"<stop offset="0" stop-color="{}"/>"#, background.inner);
        let _ = writeln!(out, r#"<stop offset="1" stop-color="{}"/>"#, background.outer);
        out.push_str("</radialGradient>\n");
    }
    out.push_str("</defs>\n");

    if drawing.background.is_some() {
        let _ = writeln!(
            out,
            r##"<rect x="0" y="0" width="{w}" height="{h}" fill="url(#{BACKGROUND_GRADIENT_ID})"/>"##
        );
    }

    out.push_str("<g id=\"grid_elements\">\n");
    for cell in &drawing.cells {
        let _ = writeln!(out, r#"<g id="{}">"#, cell.id);
        for shape in &cell.shapes {
            let _ = writeln!(out, "{}", shape_markup(shape));
        }
        out.push_str("</g>\n");
    }
    out.push_str("</g>\n");

    if let Some(shapes) = &drawing.big_block {
        out.push_str("<g id=\"big_block_element\">\n");
        for shape in shapes {
            let _ = writeln!(out, "{}", shape_markup(shape));
        }
        out.push_str("</g>\n");
    }

    out.push_str("</svg>\n");
    out
}

/// Serialize a drawing and write it to disk atomically
///
/// The markup goes to a temporary sibling file which replaces the target only
/// after a complete write, so a failure leaves any preexisting file at `path`
/// untouched.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created, the path has
/// no file name, or writing or renaming the file fails
pub fn write(drawing: &Drawing, path: &Path) -> Result<()> {
    let markup = render(drawing);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| ArtGridError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    let temp_path = temp_sibling(path)?;
    std::fs::write(&temp_path, markup).map_err(|e| {
        let _ = std::fs::remove_file(&temp_path);
        ArtGridError::SvgExport {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    std::fs::rename(&temp_path, path).map_err(|e| {
        let _ = std::fs::remove_file(&temp_path);
        ArtGridError::SvgExport {
            path: path.to_path_buf(),
            source: e,
        }
    })
}

fn temp_sibling(path: &Path) -> Result<PathBuf> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ArtGridError::SvgExport {
            path: path.to_path_buf(),
            source: std::io::Error::other("output path has no file name"),
        })?;

    let temp_name = format!(".{name}.tmp");
    Ok(path.with_file_name(temp_name))
}

/// Format a coordinate: two decimals, trailing zeros trimmed
fn num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract().abs() < f64::EPSILON {
        format!("{}", rounded as i64)
    } else {
        let text = format!("{rounded:.2}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn opacity_attr(opacity: f64) -> String {
    if opacity < 1.0 {
        format!(r#" opacity="{}""#, num(opacity))
    } else {
        String::new()
    }
}

fn transform_attr(transform: Option<Rotation>) -> String {
    transform.map_or_else(String::new, |r| {
        format!(
            r#" transform="rotate({} {} {})""#,
            num(r.degrees),
            num(r.cx),
            num(r.cy)
        )
    })
}

fn escaped_glyph(glyph: char) -> String {
    match glyph {
        '&' => "&amp;".to_string(),
        '<' => "&lt;".to_string(),
        '>' => "&gt;".to_string(),
        other => other.to_string(),
    }
}

fn path_data(commands: &[PathCommand]) -> String {
    let mut data = String::new();
    for command in commands {
        if !data.is_empty() {
            data.push(' ');
        }
        match command {
            PathCommand::MoveTo(p) => {
                let _ = write!(data, "M {} {}", num(p.x), num(p.y));
            }
            PathCommand::LineTo(p) => {
                let _ = write!(data, "L {} {}", num(p.x), num(p.y));
            }
            PathCommand::Arc { radius, end } => {
                let r = num(*radius);
                let _ = write!(data, "A {r} {r} 0 0 0 {} {}", num(end.x), num(end.y));
            }
            PathCommand::CurveTo {
                control1,
                control2,
                end,
            } => {
                let _ = write!(
                    data,
                    "C {} {} {} {} {} {}",
                    num(control1.x),
                    num(control1.y),
                    num(control2.x),
                    num(control2.y),
                    num(end.x),
                    num(end.y)
                );
            }
            PathCommand::Close => data.push('Z'),
        }
    }
    data
}

fn shape_markup(shape: &Shape) -> String {
    match shape {
        Shape::Rect {
            x,
            y,
            width,
            height,
            fill,
            opacity,
            transform,
        } => format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{fill}"{}{}/>"#,
            num(*x),
            num(*y),
            num(*width),
            num(*height),
            opacity_attr(*opacity),
            transform_attr(*transform)
        ),
        Shape::Circle {
            cx,
            cy,
            r,
            fill,
            opacity,
        } => format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{fill}"{}/>"#,
            num(*cx),
            num(*cy),
            num(*r),
            opacity_attr(*opacity)
        ),
        Shape::Ellipse {
            cx,
            cy,
            rx,
            ry,
            fill,
            opacity,
            transform,
        } => format!(
            r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="{fill}"{}{}/>"#,
            num(*cx),
            num(*cy),
            num(*rx),
            num(*ry),
            opacity_attr(*opacity),
            transform_attr(*transform)
        ),
        Shape::Polygon {
            points,
            fill,
            opacity,
            transform,
        } => {
            let point_list = points
                .iter()
                .map(|p| format!("{},{}", num(p.x), num(p.y)))
                .collect::<Vec<String>>()
                .join(" ");
            format!(
                r#"<polygon points="{point_list}" fill="{fill}"{}{}/>"#,
                opacity_attr(*opacity),
                transform_attr(*transform)
            )
        }
        Shape::Path {
            commands,
            fill,
            stroke,
            opacity,
        } => {
            let fill_attr = fill.map_or_else(
                || r#" fill="none""#.to_string(),
                |color| format!(r#" fill="{color}""#),
            );
            let stroke_attr = stroke.map_or_else(String::new, |s| {
                format!(
                    r#" stroke="{}" stroke-width="{}""#,
                    s.color,
                    num(s.width)
                )
            });
            format!(
                r#"<path d="{}"{fill_attr}{stroke_attr}{}/>"#,
                path_data(commands),
                opacity_attr(*opacity)
            )
        }
        Shape::Text {
            x,
            y,
            glyph,
            font_size,
            fill,
            opacity,
            transform,
        } => format!(
            r#"<text x="{}" y="{}" font-family="monospace, Courier, 'Courier New'" font-size="{}px" font-weight="bold" fill="{fill}" text-anchor="middle" dominant-baseline="central"{}{}>{}</text>"#,
            num(*x),
            num(*y),
            num(*font_size),
            opacity_attr(*opacity),
            transform_attr(*transform),
            escaped_glyph(*glyph)
        ),
    }
}
