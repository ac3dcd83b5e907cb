//! Scalar root finding by dichotomy (bisection).
//!
//! Drafting rules regularly turn into one-dimensional equations: the neck
//! width that makes two quarter-ellipse arcs add up to the neck
//! circumference, or the curve parameter at which an armhole passes through
//! its carrure point. All of them are solved with the same plain bisection.

use num::Float;

/// Find a root of `f` inside `[a, b]` by repeated interval halving.
///
/// The caller must supply a valid bracket: `f(a)` and `f(b)` of opposite
/// sign. This is *not* checked; with an invalid bracket the search still
/// terminates but converges onto an arbitrary point of the interval.
///
/// Returns the midpoint of the final bracket once its width is below `tol`.
pub fn dichotomic_search<K, F>(f: F, a: K, b: K, tol: K) -> K
where
    K: Float,
    F: Fn(K) -> K,
{
    // Cap the loop: a NaN-producing f would otherwise never shrink the
    // discriminating product below zero and spin on the width test.
    const MAX_ITERATIONS: usize = 200;

    let two = K::one() + K::one();
    let mut lo = a;
    let mut hi = b;
    let mut iterations = 0;
    while hi - lo > tol && iterations < MAX_ITERATIONS {
        let mid = (lo + hi) / two;
        if f(mid) * f(lo) < K::zero() {
            hi = mid;
        } else {
            lo = mid;
        }
        iterations += 1;
    }
    (lo + hi) / two
}
