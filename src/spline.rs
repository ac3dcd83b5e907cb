//! Natural cubic spline interpolation, emitted as bezier segments.

use crate::bezier::CubicBezier;
use nalgebra::Vector2;

/// Interpolate an ordered point sequence with a natural cubic spline and
/// return it as one cubic bezier per segment.
///
/// The spline is chord-length parameterized, passes through every input
/// point exactly and has zero second derivative at both path ends. For `N`
/// input points the result holds exactly `N - 1` segments whose endpoints
/// equal the corresponding inputs.
///
/// Two consecutive coincident points would produce a zero chord; their
/// length is substituted with `1.0` instead of rejecting the input, keeping
/// the conversion total over imperfect measurement data.
///
/// Panics if fewer than 2 points are given.
pub fn cubic_spline_to_beziers(points: &[Vector2<f64>]) -> Vec<CubicBezier> {
    let n = points.len();
    assert!(n >= 2, "a spline needs at least 2 points");

    if n == 2 {
        return vec![CubicBezier::through_line(points[0], points[1])];
    }

    let m = n - 1; // segment count

    // Chord lengths
    let mut h = vec![0.0f64; m];
    for i in 0..m {
        h[i] = (points[i + 1] - points[i]).norm();
        if h[i] < 1e-12 {
            h[i] = 1.0; // coincident points
        }
    }

    // Second derivatives at every input point. Natural end conditions pin
    // the first and last to zero, so only the interior ones are solved for.
    // The system is tridiagonal with diagonal 2(h[i-1] + h[i]) and
    // off-diagonals h[i-1], h[i]: diagonally dominant, so Thomas' algorithm
    // needs no pivoting and runs in O(N).
    let interior = n - 2;
    let mut s = vec![Vector2::zeros(); n];

    if interior > 0 {
        let mut sub = vec![0.0f64; interior];
        let mut diag = vec![0.0f64; interior];
        let mut sup = vec![0.0f64; interior];
        let mut rhs = vec![Vector2::zeros(); interior];

        for i in 0..interior {
            let idx = i + 1;
            if i > 0 {
                sub[i] = h[idx - 1];
            }
            diag[i] = 2.0 * (h[idx - 1] + h[idx]);
            if i < interior - 1 {
                sup[i] = h[idx];
            }
            let slope_right = (points[idx + 1] - points[idx]) / h[idx];
            let slope_left = (points[idx] - points[idx - 1]) / h[idx - 1];
            rhs[i] = (slope_right - slope_left) * 6.0;
        }

        // Forward elimination
        for i in 1..interior {
            let w = sub[i] / diag[i - 1];
            diag[i] -= w * sup[i - 1];
            let carried = rhs[i - 1] * w;
            rhs[i] -= carried;
        }

        // Back substitution
        let mut solved = vec![Vector2::zeros(); interior];
        solved[interior - 1] = rhs[interior - 1] / diag[interior - 1];
        for i in (0..interior - 1).rev() {
            solved[i] = (rhs[i] - solved[i + 1] * sup[i]) / diag[i];
        }

        for i in 0..interior {
            s[i + 1] = solved[i];
        }
    }

    // Per segment the spline is the power-basis cubic
    //   p(u) = a + b u + c u² + d u³,  u ∈ [0, h[i]]
    // whose coefficients follow from the endpoints and second derivatives.
    // Evaluating the basis change at the 1/3 and 2/3 abscissas gives the
    // bezier handles directly.
    let mut beziers = Vec::with_capacity(m);
    for i in 0..m {
        let hi = h[i];
        let a = points[i];
        let b = (points[i + 1] - points[i]) / hi - (s[i] * 2.0 + s[i + 1]) * (hi / 6.0);
        let c = s[i] / 2.0;
        let d = (s[i + 1] - s[i]) / (6.0 * hi);

        let p0 = a;
        let p1 = a + b * (hi / 3.0);
        let p2 = a + b * (2.0 * hi / 3.0) + c * (hi * hi / 3.0);
        let p3 = a + b * hi + c * (hi * hi) + d * (hi * hi * hi);

        beziers.push(CubicBezier([p0, p1, p2, p3]));
    }

    beziers
}
