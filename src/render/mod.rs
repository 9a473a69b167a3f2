pub mod canvas;
pub mod raster;
pub mod sample;

pub use canvas::{Canvas, Series, draw_points};
pub use raster::{PixelPoint, points_for_config, points_from_function, rasterize};
pub use sample::{normalize, sample};
