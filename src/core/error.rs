//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::core::{color::ColorError, data::ParseCsvError};

/// Precise configuration faults.
#[derive(Debug)]
pub enum ConfigError {
    MissingField(&'static str),
    InvalidRange {
        axis: &'static str,
        low: f64,
        high: f64,
    },
    ZeroSize {
        width: usize,
        height: usize,
    },
    TooLarge {
        width: usize,
        height: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingField(x) => write!(f, "configuration missing field `{x}`"),
            ConfigError::InvalidRange { axis, low, high } => {
                write!(f, "{axis}_min {low} must be < {axis}_max {high}")
            }
            ConfigError::ZeroSize { width, height } => {
                write!(f, "canvas must be at least 1×1, got {width}×{height}")
            }
            ConfigError::TooLarge { width, height } => {
                write!(f, "canvas of {width}×{height} cells is too large")
            }
        }
    }
}
impl Error for ConfigError {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum GraphError {
    Io(io::Error),
    Csv(ParseCsvError),
    Color(ColorError),
    Config(ConfigError),
    /// Nothing to plot.
    EmptyData,
    /// No function produced a defined value over the x range.
    NoData,
    TooFewPoints {
        got: usize,
    },
    UnknownFunction(String),
    PointOutOfBounds {
        col: usize,
        row: usize,
        width: usize,
        height: usize,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::Io(e) => write!(f, "{e}"),
            GraphError::Csv(e) => write!(f, "{e}"),
            GraphError::Color(e) => write!(f, "{e}"),
            GraphError::Config(e) => write!(f, "{e}"),
            GraphError::EmptyData => write!(f, "nothing to plot"),
            GraphError::NoData => write!(f, "no function is defined anywhere in the x range"),
            GraphError::TooFewPoints { got } => {
                write!(f, "need at least 2 sample points to interpolate, got {got}")
            }
            GraphError::UnknownFunction(name) => write!(f, "unknown function '{name}'"),
            GraphError::PointOutOfBounds {
                col,
                row,
                width,
                height,
            } => write!(
                f,
                "point ({col}, {row}) lies outside the {width}×{height} canvas"
            ),
        }
    }
}
impl Error for GraphError {}

// automatic conversions
impl From<io::Error> for GraphError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ParseCsvError> for GraphError {
    fn from(e: ParseCsvError) -> Self {
        Self::Csv(e)
    }
}
impl From<ColorError> for GraphError {
    fn from(e: ColorError) -> Self {
        Self::Color(e)
    }
}
impl From<ConfigError> for GraphError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
