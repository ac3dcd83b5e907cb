//! The drawing seam between patterns and output documents.
//!
//! Patterns only ever talk to the [`Canvas`] trait: lines, cubic curves,
//! point markers and text, all in pattern space (centimeters). The SVG and
//! PDF canvases share one [`Frame`] transform so both documents are
//! guaranteed to show the same geometry at the same physical size.

use crate::bezier::CubicBezier;
use crate::bounding_box::BoundingBox;
use nalgebra::Vector2;

pub mod pdf;
pub mod svg;

/// Centimeters to millimeters.
pub const CM_TO_MM: f64 = 10.0;

/// A drawing context accepting the primitives patterns are made of.
pub trait Canvas {
    /// Draw a straight line between two pattern-space points.
    fn line(&mut self, from: Vector2<f64>, to: Vector2<f64>, pen: Pen);

    /// Draw a cubic bezier curve.
    fn bezier(&mut self, curve: &CubicBezier, pen: Pen);

    /// Draw a filled point marker of radius `r` (cm).
    fn circle(&mut self, center: Vector2<f64>, r: f64, color: Color);

    /// Draw text anchored at a pattern-space point. `\n` starts a new line.
    fn text(&mut self, at: Vector2<f64>, content: &str, style: TextStyle);
}

/// Stroke settings for lines and curves.
#[derive(Clone, Copy, Debug)]
pub struct Pen {
    /// Stroke color.
    pub color: Color,
    /// Dash pattern.
    pub style: LineStyle,
    /// Relative stroke width, `1.0` being the regular pattern line.
    pub width: f64,
}

impl Pen {
    /// A solid pen of regular width.
    pub fn solid(color: Color) -> Pen {
        Pen {
            color,
            style: LineStyle::Solid,
            width: 1.0,
        }
    }

    /// A dashed pen, used for construction grids.
    pub fn dashed(color: Color) -> Pen {
        Pen {
            color,
            style: LineStyle::Dashed,
            width: 1.0,
        }
    }

    /// A dotted pen, used for secondary guide lines.
    pub fn dotted(color: Color) -> Pen {
        Pen {
            color,
            style: LineStyle::Dotted,
            width: 1.0,
        }
    }

    /// Same pen with another relative width.
    pub fn width(mut self, width: f64) -> Pen {
        self.width = width;
        self
    }
}

/// Dash patterns supported by both output formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    /// Continuous stroke.
    Solid,
    /// Long dashes.
    Dashed,
    /// Short dots.
    Dotted,
}

/// The small fixed palette pattern sheets use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    /// Scale bars and neutral markings.
    Black,
    /// Front piece.
    Blue,
    /// Back piece.
    Green,
    /// Construction guides and helper points.
    Gray,
}

impl Color {
    /// SVG color keyword.
    pub fn svg_name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Gray => "gray",
        }
    }

    /// RGB triple for the PDF operators.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Black => (0, 0, 0),
            Color::Blue => (0, 0, 255),
            Color::Green => (0, 128, 0),
            Color::Gray => (128, 128, 128),
        }
    }
}

/// Horizontal anchoring of text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    /// Anchor at the left edge (default).
    Left,
    /// Anchor at the center.
    Center,
    /// Anchor at the right edge.
    Right,
}

/// Text settings.
#[derive(Clone, Copy, Debug)]
pub struct TextStyle {
    /// Nominal size in points.
    pub size: f64,
    /// Fill color.
    pub color: Color,
    /// Horizontal anchoring.
    pub align: Align,
    /// Bold face.
    pub bold: bool,
}

impl TextStyle {
    /// The regular label style.
    pub fn label(color: Color) -> TextStyle {
        TextStyle {
            size: 8.0,
            color,
            align: Align::Left,
            bold: false,
        }
    }

    /// Centered text.
    pub fn centered(color: Color) -> TextStyle {
        TextStyle {
            align: Align::Center,
            ..TextStyle::label(color)
        }
    }

    /// Bold piece headings.
    pub fn heading(color: Color) -> TextStyle {
        TextStyle {
            size: 12.0,
            color,
            align: Align::Center,
            bold: true,
        }
    }

    /// Same style with another size.
    pub fn size(mut self, size: f64) -> TextStyle {
        self.size = size;
        self
    }
}

/// Transform from pattern space (cm) into document space (mm, y down).
///
/// Patterns choose their own y direction: body blocks are drafted with y up
/// from the waist line (`y_flip`), the sleeve grows downward from the
/// shoulder. The frame normalizes both into the top-down millimeter space
/// the documents use.
#[derive(Clone, Copy, Debug)]
pub struct Frame {
    /// Pattern-space bounds in cm.
    pub bounds: BoundingBox,
    /// Flip the y axis (pattern y grows upward).
    pub y_flip: bool,
}

impl Frame {
    /// Create a frame over the given bounds.
    pub fn new(bounds: BoundingBox, y_flip: bool) -> Frame {
        Frame { bounds, y_flip }
    }

    /// Map a pattern x coordinate to document millimeters.
    pub fn tx(&self, x: f64) -> f64 {
        (x - self.bounds.min.x) * CM_TO_MM
    }

    /// Map a pattern y coordinate to document millimeters.
    pub fn ty(&self, y: f64) -> f64 {
        if self.y_flip {
            (self.bounds.max.y - y) * CM_TO_MM
        } else {
            (y - self.bounds.min.y) * CM_TO_MM
        }
    }

    /// Map a pattern point to document millimeters.
    pub fn map(&self, p: Vector2<f64>) -> Vector2<f64> {
        Vector2::new(self.tx(p.x), self.ty(p.y))
    }

    /// Document width in millimeters.
    pub fn width_mm(&self) -> f64 {
        self.bounds.width() * CM_TO_MM
    }

    /// Document height in millimeters.
    pub fn height_mm(&self) -> f64 {
        self.bounds.height() * CM_TO_MM
    }

    /// The pattern-space point at the top center of the frame, `dy` cm in.
    pub fn top_center(&self, dy: f64) -> Vector2<f64> {
        let x = (self.bounds.min.x + self.bounds.max.x) / 2.0;
        let y = if self.y_flip {
            self.bounds.max.y - dy
        } else {
            self.bounds.min.y + dy
        };
        Vector2::new(x, y)
    }
}
