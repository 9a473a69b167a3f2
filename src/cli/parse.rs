use clap::{Args, Parser, Subcommand};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "termplot",
    about = "Plot functions and sampled data as coloured blocks in the terminal"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Plot one or more CSV files of `x,y` samples
    Csv(CsvArgs),
    /// Plot built-in functions by name
    Func(FuncArgs),
    /// Show available color names
    Colors,
    /// Print example invocations
    Examples,
}

/// Options shared by every plotting subcommand.
#[derive(Args, Debug, Default)]
pub struct PlotArgs {
    /// Canvas width in cells (terminal width if omitted)
    #[arg(long)]
    pub width: Option<usize>,
    /// Canvas height in cells (terminal height minus one if omitted)
    #[arg(long)]
    pub height: Option<usize>,

    /// X-axis lower bound
    #[arg(long, allow_negative_numbers = true)]
    pub x_min: Option<f64>,
    /// X-axis upper bound
    #[arg(long, allow_negative_numbers = true)]
    pub x_max: Option<f64>,

    /// Y-axis lower bound (auto if omitted)
    #[arg(long, allow_negative_numbers = true)]
    pub y_min: Option<f64>,
    /// Y-axis upper bound (auto if omitted)
    #[arg(long, allow_negative_numbers = true)]
    pub y_max: Option<f64>,

    /// Series color, repeat once per series (cycles red, green, blue, … otherwise)
    #[arg(short, long = "color")]
    pub colors: Vec<String>,

    /// Emit debug logs and timing diagnostics on stderr
    #[arg(long)]
    pub debug: bool,
}

/// `termplot csv …`
#[derive(Parser, Debug)]
pub struct CsvArgs {
    /// CSV paths, one series each (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-", num_args = 1..)]
    pub files: Vec<String>,

    /// Sort samples by x before plotting
    #[arg(long)]
    pub sort: bool,

    #[command(flatten)]
    pub plot: PlotArgs,
}

/// `termplot func …`
#[derive(Parser, Debug)]
pub struct FuncArgs {
    /// Function names (x, square, cube, sqrt, abs, sin, cos, tan, exp, ln, recip)
    #[arg(value_name = "NAME", required = true, num_args = 1..)]
    pub names: Vec<String>,

    #[command(flatten)]
    pub plot: PlotArgs,
}
