//! Structured SVG shape model
//!
//! Shapes carry their geometry and paint as data; serialization to markup
//! happens once in the writer. Field names match SVG attribute names.

use crate::palette::Color;

/// A 2-D point in document coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Construct a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rotation about a fixed pivot, in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    /// Angle in degrees
    pub degrees: f64,
    /// Pivot x
    pub cx: f64,
    /// Pivot y
    pub cy: f64,
}

/// Stroke paint for line work
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Stroke color
    pub color: Color,
    /// Stroke width in document units
    pub width: f64,
}

/// One command of an SVG path's data
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Move the pen without drawing
    MoveTo(Point),
    /// Straight line to the given point
    LineTo(Point),
    /// Circular arc to the given point (counter-clockwise, minor sweep)
    Arc {
        /// Arc radius (both axes)
        radius: f64,
        /// Arc end point
        end: Point,
    },
    /// Cubic Bézier curve
    CurveTo {
        /// First control point
        control1: Point,
        /// Second control point
        control2: Point,
        /// Curve end point
        end: Point,
    },
    /// Close the current subpath
    Close,
}

/// A drawable SVG shape
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Axis-aligned rectangle
    Rect {
        /// Left edge
        x: f64,
        /// Top edge
        y: f64,
        /// Width
        width: f64,
        /// Height
        height: f64,
        /// Fill color
        fill: Color,
        /// Opacity in [0, 1]
        opacity: f64,
        /// Optional rotation about a pivot
        transform: Option<Rotation>,
    },
    /// Circle
    Circle {
        /// Center x
        cx: f64,
        /// Center y
        cy: f64,
        /// Radius
        r: f64,
        /// Fill color
        fill: Color,
        /// Opacity in [0, 1]
        opacity: f64,
    },
    /// Ellipse
    Ellipse {
        /// Center x
        cx: f64,
        /// Center y
        cy: f64,
        /// Horizontal radius
        rx: f64,
        /// Vertical radius
        ry: f64,
        /// Fill color
        fill: Color,
        /// Opacity in [0, 1]
        opacity: f64,
        /// Optional rotation about a pivot
        transform: Option<Rotation>,
    },
    /// Closed polygon
    Polygon {
        /// Vertices in order
        points: Vec<Point>,
        /// Fill color
        fill: Color,
        /// Opacity in [0, 1]
        opacity: f64,
        /// Optional rotation about a pivot
        transform: Option<Rotation>,
    },
    /// Path built from explicit commands
    Path {
        /// Path data commands
        commands: Vec<PathCommand>,
        /// Optional fill color (`None` renders `fill="none"`)
        fill: Option<Color>,
        /// Optional stroke paint
        stroke: Option<Stroke>,
        /// Opacity in [0, 1]
        opacity: f64,
    },
    /// Single-glyph text block
    Text {
        /// Anchor x (text is center-anchored)
        x: f64,
        /// Anchor y (baseline is central)
        y: f64,
        /// The glyph to draw
        glyph: char,
        /// Font size in document units
        font_size: f64,
        /// Fill color
        fill: Color,
        /// Opacity in [0, 1]
        opacity: f64,
        /// Optional rotation about a pivot
        transform: Option<Rotation>,
    },
}

impl Shape {
    /// Opaque, untransformed rectangle
    pub const fn rect(x: f64, y: f64, width: f64, height: f64, fill: Color) -> Self {
        Self::Rect {
            x,
            y,
            width,
            height,
            fill,
            opacity: 1.0,
            transform: None,
        }
    }

    /// Opaque circle
    pub const fn circle(cx: f64, cy: f64, r: f64, fill: Color) -> Self {
        Self::Circle {
            cx,
            cy,
            r,
            fill,
            opacity: 1.0,
        }
    }

    /// Every fill and stroke color the shape emits
    pub fn paint_colors(&self) -> Vec<Color> {
        match self {
            Self::Rect { fill, .. }
            | Self::Circle { fill, .. }
            | Self::Ellipse { fill, .. }
            | Self::Polygon { fill, .. }
            | Self::Text { fill, .. } => vec![*fill],
            Self::Path { fill, stroke, .. } => fill
                .iter()
                .copied()
                .chain(stroke.iter().map(|s| s.color))
                .collect(),
        }
    }
}
