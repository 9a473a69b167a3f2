//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod function;
pub mod interpolate;

// re-export frequently-used items for convenience
pub use bounds::{functions_min_max, y_range};
pub use color::{Color, ColorError, colorize};
pub use config::{Config, ConfigBuilder};
pub use data::SamplePoint;
pub use error::{ConfigError, GraphError};
pub use function::{Function, defined};
pub use interpolate::{function_from_points, interpolate};
