//! Cubic bezier curves and the control-line crossing diagnostic.

use nalgebra::Vector2;
use smallvec::SmallVec;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// A cubic bezier curve as its four control points `[P0, P1, P2, P3]`.
///
/// `P0` and `P3` are the curve's endpoints, `P1` and `P2` its handles.
/// Coordinates are centimeters like everything else in this crate.
#[derive(Clone, Debug, PartialEq)]
pub struct CubicBezier(pub [Vector2<f64>; 4]);

impl Deref for CubicBezier {
    type Target = [Vector2<f64>; 4];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl DerefMut for CubicBezier {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl CubicBezier {
    /// Construct a geometrically flat curve along the segment `from` → `to`.
    ///
    /// The handles sit at the 1/3 and 2/3 interpolants, so the curve traces
    /// the straight line with uniform speed.
    pub fn through_line(from: Vector2<f64>, to: Vector2<f64>) -> CubicBezier {
        let d = to - from;
        CubicBezier([from, from + d / 3.0, from + d * (2.0 / 3.0), to])
    }

    /// The curve's start point `P0`.
    pub fn start(&self) -> Vector2<f64> {
        self[0]
    }

    /// The curve's end point `P3`.
    pub fn end(&self) -> Vector2<f64> {
        self[3]
    }

    /// Get the point on the curve at position `t`.
    ///
    /// Uses de castlejau's laddered interpolation which is numerically
    /// friendlier than expanding the cubic polynomial.
    pub fn castlejau_eval(&self, t: f64) -> Vector2<f64> {
        let inv_t = 1.0 - t;
        let [a, b, c, d] = self.0;
        let a1 = a * inv_t + b * t;
        let b1 = b * inv_t + c * t;
        let c1 = c * inv_t + d * t;
        let a2 = a1 * inv_t + b1 * t;
        let b2 = b1 * inv_t + c1 * t;
        a2 * inv_t + b2 * t
    }

    /// Which of the curve's own control lines does its shape cross?
    ///
    /// A well drafted garment curve stays on one side of the tangent line
    /// through `P0`-`P1` and of the one through `P3`-`P2`. Crossing either
    /// means the handles bend the curve back over itself, which on a pattern
    /// sheet is almost always a sign of implausible measurements. The test
    /// is the sign of the 2-D cross products of the two far points against
    /// the line direction.
    ///
    /// Zero-length directions (`P0 == P1` or `P3 == P2`) make the line
    /// undefined, so that side's check is skipped instead of dividing by
    /// zero.
    pub fn control_line_crossings(&self) -> SmallVec<[ControlLine; 2]> {
        let [p0, p1, p2, p3] = self.0;
        let mut crossed = SmallVec::new();

        let dir_start = p1 - p0;
        if dir_start.norm() >= 1e-10 {
            let c2 = (p2 - p0).perp(&dir_start);
            let c3 = (p3 - p0).perp(&dir_start);
            if c2 * c3 < 0.0 {
                crossed.push(ControlLine::Start);
            }
        }

        let dir_end = p2 - p3;
        if dir_end.norm() >= 1e-10 {
            let c0 = (p0 - p3).perp(&dir_end);
            let c1 = (p1 - p3).perp(&dir_end);
            if c0 * c1 < 0.0 {
                crossed.push(ControlLine::End);
            }
        }

        crossed
    }
}

/// One of the two tangent lines spanned by a cubic's outer control points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlLine {
    /// The line through `P0` and `P1`.
    Start,
    /// The line through `P3` and `P2`.
    End,
}

impl fmt::Display for ControlLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlLine::Start => f.write_str("P0-P1"),
            ControlLine::End => f.write_str("P3-P2"),
        }
    }
}
