#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod bezier;
pub mod bounding_box;
pub mod catalog;
pub mod dichotomy;
pub mod draw;
pub mod fit;
pub mod measurements;
pub mod pattern;
pub mod service;
pub mod spline;

pub use crate::bezier::CubicBezier;
pub use crate::dichotomy::dichotomic_search;
pub use crate::pattern::{DraftError, Pattern, Rendered, Variant};
pub use crate::spline::cubic_spline_to_beziers;

#[cfg(test)]
mod tests {
    use crate::bezier::{ControlLine, CubicBezier};
    use crate::dichotomy::dichotomic_search;
    use crate::fit::pin_handle_through_point;
    use crate::spline::cubic_spline_to_beziers;
    use approx::{assert_relative_eq, relative_eq};
    use nalgebra::Vector2;

    fn v(x: f64, y: f64) -> Vector2<f64> {
        Vector2::new(x, y)
    }

    #[test]
    fn bisection_finds_the_obvious_root() {
        let root = dichotomic_search(|x: f64| x, -1.0, 1.0, 1e-8);
        assert!(root.abs() < 1e-8);
    }

    #[test]
    fn bisection_finds_the_cube_root_of_two() {
        let root = dichotomic_search(|x: f64| x * x * x - 2.0, 0.0, 2.0, 1e-8);
        assert_relative_eq!(root, 2.0f64.powf(1.0 / 3.0), epsilon = 1e-6);
    }

    #[test]
    fn bisection_terminates_on_nan_functions() {
        // An invalid function must not loop forever; the result is
        // unspecified but the call returns.
        let _ = dichotomic_search(|_| f64::NAN, 0.0, 1.0, 0.0);
    }

    #[test]
    fn spline_returns_one_segment_less_than_points() {
        let cases = [
            vec![v(0.0, 0.0), v(1.0, 1.0)],
            vec![v(0.0, 0.0), v(1.0, 1.0), v(2.0, 0.0)],
            vec![v(0.0, 0.0), v(3.0, 5.0), v(7.0, 2.0), v(9.0, 9.0), v(12.0, 1.0)],
        ];
        for points in &cases {
            let segments = cubic_spline_to_beziers(points);
            assert_eq!(segments.len(), points.len() - 1);
            for (i, segment) in segments.iter().enumerate() {
                // Interpolation: segment endpoints equal the input points.
                assert_relative_eq!(segment.start(), points[i], epsilon = 1e-12);
                assert_relative_eq!(segment.end(), points[i + 1], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn spline_is_smooth_at_interior_joints() {
        let points = [v(0.0, 0.0), v(2.0, 4.0), v(5.0, 3.0), v(9.0, 8.0), v(11.0, 0.0)];
        let chords: Vec<f64> = points.windows(2).map(|w| (w[1] - w[0]).norm()).collect();
        let segments = cubic_spline_to_beziers(&points);

        for i in 0..segments.len() - 1 {
            // Velocity in the shared chord parameter: the outgoing tangent
            // of one segment equals the incoming tangent of the next.
            let outgoing = (segments[i][3] - segments[i][2]) * (3.0 / chords[i]);
            let incoming = (segments[i + 1][1] - segments[i + 1][0]) * (3.0 / chords[i + 1]);
            assert_relative_eq!(outgoing, incoming, epsilon = 1e-9);

            // Acceleration too: the natural spline is C² at the joints.
            let out_acc = (segments[i][3] - segments[i][2] * 2.0 + segments[i][1])
                * (6.0 / (chords[i] * chords[i]));
            let in_acc = (segments[i + 1][2] - segments[i + 1][1] * 2.0 + segments[i + 1][0])
                * (6.0 / (chords[i + 1] * chords[i + 1]));
            assert_relative_eq!(out_acc, in_acc, epsilon = 1e-9);
        }
    }

    #[test]
    fn spline_ends_are_relaxed() {
        // Natural boundary: zero second derivative at both path ends.
        let points = [v(0.0, 0.0), v(4.0, 1.0), v(6.0, 5.0), v(10.0, 4.0)];
        let segments = cubic_spline_to_beziers(&points);
        let first = &segments[0];
        let start_acc = first[2] - first[1] * 2.0 + first[0];
        assert_relative_eq!(start_acc, Vector2::zeros(), epsilon = 1e-9);
        let last = &segments[segments.len() - 1];
        let end_acc = last[3] - last[2] * 2.0 + last[1];
        assert_relative_eq!(end_acc, Vector2::zeros(), epsilon = 1e-9);
    }

    #[test]
    fn two_point_spline_degenerates_to_a_straight_bezier() {
        let segments = cubic_spline_to_beziers(&[v(0.0, 0.0), v(3.0, 6.0)]);
        assert_eq!(segments.len(), 1);
        let segment = &segments[0];
        assert_relative_eq!(segment[1], v(1.0, 2.0), epsilon = 1e-12);
        assert_relative_eq!(segment[2], v(2.0, 4.0), epsilon = 1e-12);
        assert_relative_eq!(segment[3], v(3.0, 6.0), epsilon = 1e-12);
    }

    #[test]
    fn coincident_points_do_not_poison_the_spline() {
        let points = [v(0.0, 0.0), v(0.0, 0.0), v(1.0, 0.0), v(2.0, 2.0)];
        let segments = cubic_spline_to_beziers(&points);
        assert_eq!(segments.len(), 3);
        for segment in &segments {
            for p in segment.iter() {
                assert!(p.x.is_finite() && p.y.is_finite());
            }
        }
    }

    #[test]
    fn pinned_handle_runs_the_curve_through_the_target() {
        let start = v(-10.0, 35.0);
        let end = v(-23.0, 14.0);
        let inner = v(-22.0, 22.6);
        let direction = v(-6.5, 4.7).normalize();

        // Build the target from a known solution, then recover it.
        let t0 = 0.35;
        let lambda0 = 6.0;
        let known_handle = start + direction * lambda0;
        let target = CubicBezier([start, known_handle, inner, end]).castlejau_eval(t0);

        let fitted = pin_handle_through_point(start, end, inner, direction, target);
        assert_relative_eq!(fitted.t, t0, epsilon = 1e-4);
        assert_relative_eq!(fitted.lambda, lambda0, epsilon = 1e-3);

        // The handle stays on its prescribed line...
        assert!((fitted.handle - start).perp(&direction).abs() < 1e-6);
        // ...and the resulting curve meets the target.
        let curve = CubicBezier([start, fitted.handle, inner, end]);
        assert_relative_eq!(curve.castlejau_eval(fitted.t), target, epsilon = 1e-4);
    }

    #[test]
    fn castlejau_matches_the_polynomial_form() {
        let curve = CubicBezier([v(0.0, 0.0), v(1.0, 3.0), v(4.0, 3.0), v(5.0, 0.0)]);
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            let u = 1.0 - t;
            let expected = curve[0] * (u * u * u)
                + curve[1] * (3.0 * u * u * t)
                + curve[2] * (3.0 * u * t * t)
                + curve[3] * (t * t * t);
            assert_relative_eq!(curve.castlejau_eval(t), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn well_formed_curves_cross_no_control_line() {
        let curve = CubicBezier([v(0.0, 0.0), v(1.0, 0.0), v(2.0, 1.0), v(3.0, 1.0)]);
        assert!(curve.control_line_crossings().is_empty());
    }

    #[test]
    fn collinear_control_points_cross_nothing() {
        let curve = CubicBezier([v(0.0, 0.0), v(1.0, 0.0), v(2.0, 0.0), v(3.0, 0.0)]);
        assert!(curve.control_line_crossings().is_empty());
    }

    #[test]
    fn s_shape_crosses_the_start_line() {
        let curve = CubicBezier([v(0.0, 0.0), v(1.0, 0.0), v(2.0, 1.0), v(3.0, -1.0)]);
        let crossings = curve.control_line_crossings();
        assert_eq!(&crossings[..], &[ControlLine::Start]);
    }

    #[test]
    fn hook_shape_crosses_the_end_line() {
        let curve = CubicBezier([v(0.0, 1.0), v(1.0, -1.0), v(2.0, 0.0), v(3.0, 0.0)]);
        let crossings = curve.control_line_crossings();
        assert_eq!(&crossings[..], &[ControlLine::End]);
    }

    #[test]
    fn degenerate_handles_skip_their_check() {
        // P0 == P1: the start line is undefined, only the end check runs.
        let curve = CubicBezier([v(1.0, 1.0), v(1.0, 1.0), v(2.0, 2.0), v(3.0, 2.0)]);
        assert!(!curve
            .control_line_crossings()
            .contains(&ControlLine::Start));

        // P2 == P3 symmetrically.
        let curve = CubicBezier([v(0.0, 0.0), v(1.0, 1.0), v(2.0, 2.0), v(2.0, 2.0)]);
        assert!(!curve.control_line_crossings().contains(&ControlLine::End));
    }

    #[test]
    fn straight_line_constructor_matches_the_spline_degeneration() {
        let from = v(-3.0, 2.0);
        let to = v(9.0, -4.0);
        let direct = CubicBezier::through_line(from, to);
        let via_spline = cubic_spline_to_beziers(&[from, to]);
        for i in 0..4 {
            assert!(relative_eq!(direct[i], via_spline[0][i], epsilon = 1e-12));
        }
    }
}
