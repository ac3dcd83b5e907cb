//! Fitting a cubic's free handle so the curve passes through a given point.

use crate::dichotomy::dichotomic_search;
use nalgebra::Vector2;

/// Result of [`pin_handle_through_point`]: the curve parameter at which the
/// target is met, the offset of the free handle along its direction, and the
/// handle itself.
#[derive(Clone, Copy, Debug)]
pub struct PinnedHandle {
    /// Curve parameter `t` at which the curve passes through the target.
    pub t: f64,
    /// Signed distance of the handle from the start point along `direction`.
    pub lambda: f64,
    /// The resolved control point `start + lambda * direction`.
    pub handle: Vector2<f64>,
}

/// Solve for the free handle of the cubic
///
/// `B(t) = (1-t)³·start + 3(1-t)²t·(start + λ·direction) + 3(1-t)t²·inner + t³·end`
///
/// such that the curve passes exactly through `target`.
///
/// This is the drafting situation where a curve must leave `start` along a
/// known tangent (`direction`, a unit vector), is anchored by a fixed inner
/// handle near `end`, and has to run through one required point in between.
/// Collecting the fixed terms into a residual
///
/// `R(t) = target − (1-t)²(1+2t)·start − 3(1-t)t²·inner − t³·end`
///
/// leaves `3(1-t)²t·λ·direction = R(t)`: a solution exists only where `R(t)`
/// is parallel to `direction`, so `t` is the root of the scalar cross
/// product of the two, found by bisection, and `λ` follows by projection.
///
/// The search bracket is hard-limited to `(0.01, 0.99)`. A configuration
/// whose true parameter lies outside (the target nearly coincides with an
/// endpoint) does not converge and yields an implausible handle; the curve
/// crossing diagnostic catches those downstream rather than failing here.
pub fn pin_handle_through_point(
    start: Vector2<f64>,
    end: Vector2<f64>,
    inner: Vector2<f64>,
    direction: Vector2<f64>,
    target: Vector2<f64>,
) -> PinnedHandle {
    let residual = |t: f64| -> Vector2<f64> {
        let u = 1.0 - t;
        target - start * (u * u * (1.0 + 2.0 * t)) - inner * (3.0 * u * t * t) - end * (t * t * t)
    };

    let t = dichotomic_search(|t| residual(t).perp(&direction), 0.01, 0.99, 1e-6);

    let u = 1.0 - t;
    let lambda = residual(t).dot(&direction) / (3.0 * u * u * t);
    let handle = start + direction * lambda;
    log::debug!("pinned handle at t={t:.4}, lambda={lambda:.4}");

    PinnedHandle { t, lambda, handle }
}
