//! Normalised column values to integer pixel points.
//!
//! Each defined column yields one point at `trunc(value)`.  When the row
//! jumps between neighbouring columns, the rows strictly between the old and
//! new row are filled in at the new column so steep slopes read as a solid
//! vertical run rather than isolated dots.  An undefined column breaks the
//! run: the next defined column starts fresh with no trace back over the gap.

use tracing::trace;

use crate::{
    core::{config::Config, function::Function},
    render::sample::{normalize, sample},
};

/// Canvas coordinate; row 0 is the bottom line of the chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PixelPoint {
    pub col: usize,
    pub row: usize,
}

impl PixelPoint {
    #[inline]
    #[must_use]
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

/// Rasterise one value per column, tracing vertical jumps.
///
/// Non-finite or negative values are treated as undefined.
#[must_use]
pub fn rasterize(normalized: &[Option<f64>]) -> Vec<PixelPoint> {
    let mut points = Vec::with_capacity(normalized.len());
    let mut last_row: Option<usize> = None;

    for (col, value) in normalized.iter().enumerate() {
        let Some(value) = value.filter(|v| v.is_finite() && *v >= 0.0) else {
            last_row = None;
            continue;
        };
        // truncation, not rounding
        let row = value as usize;
        points.push(PixelPoint { col, row });

        if let Some(prev) = last_row {
            if row > prev {
                points.extend((prev + 1..row).map(|r| PixelPoint { col, row: r }));
            } else if row < prev {
                points.extend((row + 1..prev).rev().map(|r| PixelPoint { col, row: r }));
            }
        }
        last_row = Some(row);
    }
    points
}

/// Full per-series pipeline: sample, normalise against `y_min..y_max`, rasterise.
#[must_use]
pub fn points_from_function(
    function: &Function<'_>,
    width: usize,
    height: usize,
    (x_min, x_max): (f64, f64),
    (y_min, y_max): (f64, f64),
) -> Vec<PixelPoint> {
    let values = sample(function, width, x_min, x_max);
    let normalized = normalize(&values, height, y_min, y_max);
    let points = rasterize(&normalized);
    trace!(width, height, points = points.len(), "rasterized series");
    points
}

/// [`points_from_function`] using the canvas and x range from `cfg`.
#[inline]
#[must_use]
pub fn points_for_config(
    function: &Function<'_>,
    cfg: &Config,
    y_range: (f64, f64),
) -> Vec<PixelPoint> {
    points_from_function(function, cfg.width, cfg.height, (cfg.x_min, cfg.x_max), y_range)
}
