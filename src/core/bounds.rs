//! Geometry helpers: value ranges + terminal size plumbing.

use terminal_size::{Height, Width, terminal_size};
use tracing::trace;

use crate::core::{
    constants::{PROMPT_LINES, RANGE_FINDER_STEPS},
    data::SamplePoint,
    function::Function,
};

/// Smallest and largest value any of `functions` takes over `[x_min, x_max]`.
///
/// The interval is probed at `RANGE_FINDER_STEPS + 1` evenly spaced points,
/// both ends included.  Undefined and non-finite values are skipped.  If
/// nothing is ever defined the result is `(+inf, -inf)`; see [`y_range`] for
/// a checked form.
#[must_use]
pub fn functions_min_max(x_min: f64, x_max: f64, functions: &[&Function<'_>]) -> (f64, f64) {
    let step = (x_max - x_min) / RANGE_FINDER_STEPS as f64;
    let (mut low, mut high) = (f64::INFINITY, f64::NEG_INFINITY);

    for i in 0..=RANGE_FINDER_STEPS {
        let x = x_min + i as f64 * step;
        for value in functions.iter().filter_map(|f| f(x)).filter(|v| v.is_finite()) {
            low = low.min(value);
            high = high.max(value);
        }
    }
    trace!(x_min, x_max, low, high, "range finder");
    (low, high)
}

/// Like [`functions_min_max`], but `None` when no function produced a value.
#[must_use]
pub fn y_range(x_min: f64, x_max: f64, functions: &[&Function<'_>]) -> Option<(f64, f64)> {
    let (low, high) = functions_min_max(x_min, x_max, functions);
    (low <= high).then_some((low, high))
}

/// Relative span below which a range counts as a flat line.
const FLAT_SPAN: f64 = 1e-9;

/// Degenerate (flat-line) ranges get breathing room so the normaliser has a
/// non-zero span to divide by.
///
/// The pad is +-0.5, or a `FLAT_SPAN` fraction of the magnitude once 0.5 is
/// lost to rounding.  The padded bounds stay finite.
#[inline]
#[must_use]
pub fn breathing_room((low, high): (f64, f64)) -> (f64, f64) {
    let magnitude = low.abs().max(high.abs());
    if high - low > magnitude * FLAT_SPAN {
        return (low, high);
    }
    let pad = 0.5f64.max(magnitude * FLAT_SPAN);
    ((low - pad).max(f64::MIN), (high + pad).min(f64::MAX))
}

/// Inclusive `x` extent of one or more sample series; `None` if all are empty.
#[must_use]
pub fn x_domain<'a, I>(series: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = &'a [SamplePoint]>,
{
    let (mut low, mut high) = (f64::INFINITY, f64::NEG_INFINITY);
    for p in series.into_iter().flatten() {
        low = low.min(p.x);
        high = high.max(p.x);
    }
    (low <= high).then_some((low, high))
}

/// Current terminal geometry (80×30 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((Width(80), Height(30)))
}

/// Canvas size that fills the terminal, leaving room for the shell prompt.
#[inline]
#[must_use]
pub fn graph_dims((w, h): (Width, Height)) -> (usize, usize) {
    let width = usize::from(w.0).max(1);
    let height = usize::from(h.0).saturating_sub(PROMPT_LINES).max(1);
    (width, height)
}
