//! A collection of constants.

/// The range finder splits the x interval into this many steps
/// (so it probes one more point than this, both ends included).
pub const RANGE_FINDER_STEPS: usize = 100;

/// Terminal lines left free below the chart for the shell prompt.
pub const PROMPT_LINES: usize = 1;

/// Default x interval for built-in functions.
pub const DEFAULT_X_RANGE: (f64, f64) = (-10.0, 10.0);

/// A single blank canvas cell.
pub const BLANK_CELL: &str = " ";
