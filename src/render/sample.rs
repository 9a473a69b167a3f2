//! Column sampling + vertical normalisation.
//!
//! Both stages carry `Option<f64>`: `None` is an undefined value and
//! survives unchanged until the rasteriser drops it.

use tracing::trace;

use crate::core::function::Function;

/// Evaluate `function` once per column at `x = x_min + i·(x_max − x_min)/width`.
#[must_use]
pub fn sample(function: &Function<'_>, width: usize, x_min: f64, x_max: f64) -> Vec<Option<f64>> {
    let x_step = (x_max - x_min) / width as f64;
    (0..width)
        .map(|i| function(i as f64 * x_step + x_min))
        .collect()
}

/// Rescale values into pixel rows `[0, height)`.
///
/// Anything landing on or outside the frame edge (`<= 0` or `>= height − 1`)
/// becomes `None` instead of being clamped, so boundary values are never drawn.
#[must_use]
pub fn normalize(values: &[Option<f64>], height: usize, y_min: f64, y_max: f64) -> Vec<Option<f64>> {
    let y_scale = height as f64 / (y_max - y_min);
    let top = height.saturating_sub(1) as f64;

    let normalized: Vec<Option<f64>> = values
        .iter()
        .map(|v| {
            v.map(|v| (v - y_min) * y_scale)
                .filter(|&n| n > 0.0 && n < top)
        })
        .collect();

    trace!(
        height,
        y_min,
        y_max,
        kept = normalized.iter().flatten().count(),
        total = values.len(),
        "normalized"
    );
    normalized
}
