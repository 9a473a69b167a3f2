//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

use tracing::debug;

pub use crate::core::{
    bounds::{breathing_room, functions_min_max, y_range},
    color::{Color, ColorError, colorize},
    config::{Config, ConfigBuilder},
    data::SamplePoint,
    error::{ConfigError, GraphError},
    function::{Function, defined},
    interpolate::{function_from_points, interpolate},
};

pub use crate::render::{
    Canvas, PixelPoint, Series, draw_points, normalize, points_from_function, rasterize, sample,
};

/// Render every `(function, colour)` pair onto one chart and return it as a
/// printable string, top row first.
///
/// Missing y bounds in `cfg` come from the range finder; a flat result is
/// widened with [`breathing_room`].  Later pairs are painted over earlier ones.
pub fn plot(series: &[(&Function<'_>, Color)], cfg: &Config) -> Result<String, GraphError> {
    if series.is_empty() {
        return Err(GraphError::EmptyData);
    }

    let (y_min, y_max) = match cfg.fixed_y_range() {
        Some(r) => r,
        None => {
            let functions: Vec<&Function<'_>> = series.iter().map(|(f, _)| *f).collect();
            let (lo, hi) = y_range(cfg.x_min, cfg.x_max, &functions).ok_or(GraphError::NoData)?;
            breathing_room((cfg.y_min.unwrap_or(lo), cfg.y_max.unwrap_or(hi)))
        }
    };
    if y_min.partial_cmp(&y_max) != Some(std::cmp::Ordering::Less) {
        return Err(ConfigError::InvalidRange {
            axis: "y",
            low: y_min,
            high: y_max,
        }
        .into());
    }
    debug!(x_min = cfg.x_min, x_max = cfg.x_max, y_min, y_max, "plot bounds");

    let layers: Vec<Series> = series
        .iter()
        .map(|&(f, color)| Series::new(render::points_for_config(f, cfg, (y_min, y_max)), color))
        .collect();

    draw_points(&layers, cfg.width, cfg.height)
}
