//! Piecewise-linear interpolation over an ordered series of sample points.
//!
//! For a query `x` the first point `i >= 1` with `points[i].x >= x` closes the
//! bracket `(points[i-1], points[i])`.  Queries left of the first point fall
//! into the first bracket and are extrapolated along it; queries right of the
//! last point are undefined.  Points must already be in non-decreasing `x`
//! order: an unsorted series picks the wrong bracket rather than failing.

use crate::core::data::SamplePoint;

/// Evaluate the interpolant at `x`.
///
/// Returns `None` beyond the last point, for series with fewer than two
/// points, and when the bracket degenerates (coincident `x` values).
#[must_use]
pub fn interpolate(points: &[SamplePoint], x: f64) -> Option<f64> {
    let i = (1..points.len()).find(|&i| points[i].x >= x)?;
    let (lo, hi) = (points[i - 1], points[i]);
    let y = (lo.y * (hi.x - x) + hi.y * (x - lo.x)) / (hi.x - lo.x);
    y.is_finite().then_some(y)
}

/// Turn an owned series into a plottable function.
pub fn function_from_points(points: Vec<SamplePoint>) -> impl Fn(f64) -> Option<f64> {
    move |x| interpolate(&points, x)
}
