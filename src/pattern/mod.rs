//! Shared machinery for garment pattern sheets.
//!
//! A pattern is built once from its measurement record: construction points
//! first, bezier helper points second, every point defined only in terms of
//! points already placed. The finished sheet may be shrunk a single time for
//! stretch fabrics and is read-only afterwards; rendering derives the
//! curves from the current points and never mutates the sheet.

use crate::bezier::CubicBezier;
use crate::draw::pdf::PdfCanvas;
use crate::draw::svg::SvgCanvas;
use crate::draw::{Canvas, Color, Frame, Pen, TextStyle};
use indexmap::IndexMap;
use nalgebra::Vector2;
use std::ops::{Deref, DerefMut};
use thiserror::Error;

pub mod baby_dress;
pub mod corset;
pub mod skirt;
pub mod sleeve;

/// Errors a pattern build or transform can produce.
///
/// Geometric implausibilities are *not* errors: they surface as warnings on
/// the rendered output so a drawable sheet always comes back.
#[derive(Debug, Error)]
pub enum DraftError {
    /// Stretch applied to an already stretched pattern; this is caller
    /// misuse, not a data problem, and would silently double-scale.
    #[error("cannot stretch a pattern that is already stretched")]
    AlreadyStretched,

    /// The measurement mapping is missing fields or holds wrong types.
    #[error("invalid measurements: {0}")]
    InvalidMeasurements(String),
}

/// Named 2-D points in insertion order.
///
/// Construction steps reference earlier points by name, so the mapping keeps
/// insertion order: iterating yields points in build order, which also keeps
/// labels and output deterministic.
#[derive(Clone, Debug, Default)]
pub struct PointMap(pub IndexMap<&'static str, Vector2<f64>>);

impl Deref for PointMap {
    type Target = IndexMap<&'static str, Vector2<f64>>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl DerefMut for PointMap {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl PointMap {
    /// Place a named point and hand its coordinate back for further steps.
    pub fn set(&mut self, name: &'static str, point: Vector2<f64>) -> Vector2<f64> {
        self.0.insert(name, point);
        point
    }

    /// Look up a point placed by an earlier construction step.
    ///
    /// Panics when the name has not been placed yet: construction formulas
    /// form a strict dependency order and referencing a point before its
    /// step is a bug in the builder, not bad input.
    pub fn get(&self, name: &str) -> Vector2<f64> {
        match self.0.get(name) {
            Some(&p) => p,
            None => panic!("point {name:?} referenced before its construction step"),
        }
    }
}

/// Point storage and stretch state shared by all pattern types.
#[derive(Clone, Debug)]
pub struct Sheet {
    /// Core construction points (drawn and labeled with coordinates).
    pub points: PointMap,
    /// Bezier helper points (only needed for computer-drawn curves).
    pub helpers: PointMap,
    /// Whether stretch was already applied.
    pub stretched: bool,
    /// Horizontal scale applied by stretch, `1.0` before.
    pub h_factor: f64,
    /// Vertical scale applied by stretch, `1.0` before.
    pub v_factor: f64,
}

impl Sheet {
    /// A fresh unstretched sheet.
    pub fn new() -> Sheet {
        Sheet {
            points: PointMap::default(),
            helpers: PointMap::default(),
            stretched: false,
            h_factor: 1.0,
            v_factor: 1.0,
        }
    }

    /// Shrink the sheet for stretch fabric, in place and at most once.
    ///
    /// * `horizontal` — fabric stretch capacity across the grain
    ///   (`0.0` = none, `1.0` = 100%).
    /// * `vertical` — capacity along the grain.
    /// * `usage` — fraction of the capacity to exploit (`0.5` leaves half
    ///   as wearing ease).
    ///
    /// Every stored point is scaled by `1 / (1 + capacity * usage)` per
    /// axis; zero capacity therefore leaves coordinates untouched.
    pub fn stretch(&mut self, horizontal: f64, vertical: f64, usage: f64) -> Result<(), DraftError> {
        if self.stretched {
            return Err(DraftError::AlreadyStretched);
        }
        let h = 1.0 / (1.0 + horizontal * usage);
        let v = 1.0 / (1.0 + vertical * usage);
        self.h_factor = h;
        self.v_factor = v;
        for point in self.points.values_mut() {
            point.x *= h;
            point.y *= v;
        }
        for point in self.helpers.values_mut() {
            point.x *= h;
            point.y *= v;
        }
        self.stretched = true;
        Ok(())
    }
}

/// The two output flavors of every pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Reference sheet: coordinates, helper points, dashed guide lines.
    Construction,
    /// Clean outline only, for tracing at 1:1 scale.
    Printable,
}

impl Variant {
    /// File name suffix for this variant.
    pub fn suffix(self) -> &'static str {
        match self {
            Variant::Construction => "construction",
            Variant::Printable => "printable",
        }
    }
}

/// A rendered document together with the non-fatal diagnostics collected
/// while drawing it.
#[derive(Clone, Debug)]
pub struct Rendered<T> {
    /// The document itself.
    pub output: T,
    /// Geometric warnings, e.g. a curve crossing its own tangent line.
    pub warnings: Vec<String>,
}

/// A drafted garment piece that knows how to draw itself.
pub trait Pattern {
    /// The render frame: pattern-space bounds and y orientation.
    fn frame(&self) -> Frame;

    /// Heading shown on the construction sheet.
    fn title(&self) -> Option<String> {
        None
    }

    /// Draw the pattern onto a canvas, collecting warnings along the way.
    fn plot(&self, canvas: &mut dyn Canvas, variant: Variant, warnings: &mut Vec<String>);

    /// Render the pattern as an SVG document.
    fn render_svg(&self, variant: Variant) -> Rendered<String> {
        let frame = self.frame();
        let mut canvas = SvgCanvas::new(frame);
        let mut warnings = Vec::new();
        self.draw_heading(&mut canvas, variant, frame);
        self.plot(&mut canvas, variant, &mut warnings);
        Rendered {
            output: canvas.into_svg(),
            warnings,
        }
    }

    /// Render the pattern as a PDF document at 1:1 physical scale.
    fn render_pdf(&self, variant: Variant) -> Rendered<Vec<u8>> {
        let frame = self.frame();
        let mut canvas = PdfCanvas::new(frame);
        let mut warnings = Vec::new();
        self.draw_heading(&mut canvas, variant, frame);
        self.plot(&mut canvas, variant, &mut warnings);
        Rendered {
            output: canvas.into_pdf(),
            warnings,
        }
    }

    /// Draw the construction-sheet heading, if any.
    fn draw_heading(&self, canvas: &mut dyn Canvas, variant: Variant, frame: Frame) {
        if variant == Variant::Construction {
            if let Some(title) = self.title() {
                canvas.text(
                    frame.top_center(1.5),
                    &title,
                    TextStyle::centered(Color::Black).size(10.0),
                );
            }
        }
    }
}

/// Draw a curve after checking it against its own control lines.
///
/// A crossing is logged and recorded but never fatal: the sheet stays
/// drawable and the anomaly is left to human review.
pub(crate) fn draw_checked(
    canvas: &mut dyn Canvas,
    name: &str,
    curve: &CubicBezier,
    pen: Pen,
    warnings: &mut Vec<String>,
) {
    for line in curve.control_line_crossings() {
        let message = format!("Bezier curve '{name}' crosses the {line} line");
        log::warn!("{message}");
        warnings.push(message);
    }
    canvas.bezier(curve, pen);
}

/// Rotate a vector 90° counter-clockwise.
pub(crate) fn rotated90(v: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(-v.y, v.x)
}

/// Normalize, falling back to the zero vector for degenerate input.
pub(crate) fn unit_or_zero(v: Vector2<f64>) -> Vector2<f64> {
    v.try_normalize(1e-12).unwrap_or_else(Vector2::zeros)
}

/// Mirror a point across the y axis and shift it right by `gap`, placing a
/// back piece next to its front piece.
pub(crate) fn mirror_x(p: Vector2<f64>, gap: f64) -> Vector2<f64> {
    Vector2::new(-p.x + gap, p.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sheet_with_point() -> Sheet {
        let mut sheet = Sheet::new();
        sheet.points.set("A", Vector2::new(10.0, 20.0));
        sheet.helpers.set("A1", Vector2::new(-4.0, 2.0));
        sheet
    }

    #[test]
    fn stretch_scales_points_and_helpers() {
        let mut sheet = sheet_with_point();
        sheet.stretch(0.25, 0.1, 1.0).unwrap();
        assert_relative_eq!(sheet.points.get("A").x, 10.0 / 1.25, epsilon = 1e-12);
        assert_relative_eq!(sheet.points.get("A").y, 20.0 / 1.1, epsilon = 1e-12);
        assert_relative_eq!(sheet.helpers.get("A1").x, -4.0 / 1.25, epsilon = 1e-12);
    }

    #[test]
    fn stretch_twice_is_an_error() {
        let mut sheet = sheet_with_point();
        sheet.stretch(0.3, 0.1, 0.5).unwrap();
        assert!(matches!(
            sheet.stretch(0.1, 0.1, 1.0),
            Err(DraftError::AlreadyStretched)
        ));
    }

    #[test]
    fn zero_stretch_is_a_noop_on_coordinates() {
        let mut sheet = sheet_with_point();
        sheet.stretch(0.0, 0.0, 1.0).unwrap();
        assert_relative_eq!(sheet.points.get("A").x, 10.0);
        assert_relative_eq!(sheet.points.get("A").y, 20.0);
        // ... but the sheet still counts as stretched.
        assert!(sheet.stretch(0.0, 0.0, 1.0).is_err());
    }

    #[test]
    #[should_panic(expected = "referenced before its construction step")]
    fn missing_point_names_the_offender() {
        sheet_with_point().points.get("Z9");
    }

    #[test]
    fn point_map_iterates_in_build_order() {
        let mut map = PointMap::default();
        map.set("B", Vector2::zeros());
        map.set("A", Vector2::zeros());
        map.set("C1", Vector2::zeros());
        let names: Vec<_> = map.keys().copied().collect();
        assert_eq!(names, ["B", "A", "C1"]);
    }
}
