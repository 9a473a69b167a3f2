use std::{
    io::{Write, stdout},
    time::Instant,
};

use tracing::{debug, warn};

use crate::{
    core::{
        bounds::{graph_dims, terminal_geometry, x_domain},
        color::{Color, colorize},
        config::Config,
        constants::DEFAULT_X_RANGE,
        data::{SamplePoint, is_sorted_by_x, read_csv_from_path, sort_by_x},
        error::GraphError,
        function::{BUILTIN_NAMES, Function, builtin, defined},
        interpolate::function_from_points,
    },
    plot,
};

use super::parse::{CsvArgs, FuncArgs, PlotArgs};

/// Resolve `count` series colours: explicit ones first, then the default cycle.
fn series_colors(names: &[String], count: usize) -> Result<Vec<Color>, GraphError> {
    let mut colors = names
        .iter()
        .map(|n| Color::from_name(n))
        .collect::<Result<Vec<_>, _>>()?;
    let explicit = colors.len();
    colors.extend((explicit..count).map(Color::cycle));
    colors.truncate(count);
    Ok(colors)
}

/// Build the plot configuration, falling back to the terminal size and the
/// supplied x range where the user gave nothing.
fn build_config(a: &PlotArgs, default_x: (f64, f64)) -> Result<Config, GraphError> {
    let (term_w, term_h) = graph_dims(terminal_geometry());
    let cfg = Config::builder(a.width.unwrap_or(term_w), a.height.unwrap_or(term_h))
        .x_range(a.x_min.unwrap_or(default_x.0), a.x_max.unwrap_or(default_x.1))
        .y_min_opt(a.y_min)
        .y_max_opt(a.y_max)
        .build()?;
    Ok(cfg)
}

/// Plot, then write the chart to stdout in one go.
fn render(
    functions: &[&Function<'_>],
    a: &PlotArgs,
    cfg: &Config,
) -> Result<(), GraphError> {
    let colors = series_colors(&a.colors, functions.len())?;
    let series: Vec<(&Function<'_>, Color)> =
        functions.iter().copied().zip(colors).collect();

    let t_render = Instant::now();
    let chart = plot(&series, cfg)?;
    debug!(
        micros = t_render.elapsed().as_micros() as u64,
        bytes = chart.len(),
        "rendered chart"
    );

    let mut term = stdout().lock();
    term.write_all(chart.as_bytes())?;
    term.flush()?;
    Ok(())
}

pub fn csv(a: CsvArgs) -> Result<(), GraphError> {
    let t_ingest = Instant::now();
    let mut all: Vec<Vec<SamplePoint>> = Vec::with_capacity(a.files.len());
    for path in &a.files {
        let mut points = read_csv_from_path(path)?;
        if points.len() < 2 {
            return Err(GraphError::TooFewPoints { got: points.len() });
        }
        if a.sort {
            sort_by_x(&mut points);
        } else if !is_sorted_by_x(&points) {
            warn!(%path, "samples are not sorted by x; pass --sort to fix");
        }
        all.push(points);
    }
    debug!(
        micros = t_ingest.elapsed().as_micros() as u64,
        rows = all.iter().map(Vec::len).sum::<usize>(),
        files = all.len(),
        "csv ingest"
    );

    let domain = x_domain(all.iter().map(Vec::as_slice)).ok_or(GraphError::EmptyData)?;
    let cfg = build_config(&a.plot, domain)?;

    let functions: Vec<_> = all.into_iter().map(function_from_points).collect();
    let refs: Vec<&Function<'_>> = functions.iter().map(|f| f as &Function<'_>).collect();
    render(&refs, &a.plot, &cfg)
}

pub fn func(a: &FuncArgs) -> Result<(), GraphError> {
    let functions = a
        .names
        .iter()
        .map(|name| {
            builtin(name)
                .map(defined)
                .ok_or_else(|| GraphError::UnknownFunction(name.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let refs: Vec<&Function<'_>> = functions.iter().map(|f| f as &Function<'_>).collect();

    let cfg = build_config(&a.plot, DEFAULT_X_RANGE)?;
    render(&refs, &a.plot, &cfg)
}

/// Pretty-print available color names.
pub fn colors() {
    println!("\nPossible colors:");
    for c in Color::ALL {
        println!("{}  {}", colorize(c, "  "), c.name());
    }
    println!();
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "cargo run --"; // adjust if you rename the binary
    let names = BUILTIN_NAMES.join(", ");
    println!(
        "
Example invocations
-------------------
• One function      : {bin} func sin
• Several functions : {bin} func sin cos --color yellow --color blue
• Fixed bounds      : {bin} func square --x-min -3 --x-max 3 --y-min 0 --y-max 9
• CSV samples       : {bin} csv samples.csv --width 60 --height 20
• Two CSV series    : {bin} csv a.csv b.csv --sort
• From stdin        : printf '0,0\\n1,1\\n2,0\\n' | {bin} csv -
• Debug timings     : {bin} func exp --debug

Built-in functions: {names}
"
    );
}
