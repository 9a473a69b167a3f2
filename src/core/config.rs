//! Run-time configuration object + fluent builder.

use crate::core::error::ConfigError;

/// Immutable plot bounds + canvas size handed to the pipeline.
///
/// `y_min` / `y_max` left as `None` are derived from the plotted functions.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
}

impl Config {
    #[inline]
    pub fn builder(width: usize, height: usize) -> ConfigBuilder {
        ConfigBuilder::new(width, height)
    }

    /// Both y bounds, if the caller fixed them.
    #[inline]
    #[must_use]
    pub fn fixed_y_range(&self) -> Option<(f64, f64)> {
        self.y_min.zip(self.y_max)
    }
}

/// Fluent builder with zero allocation until `build`.
#[derive(Debug)]
pub struct ConfigBuilder {
    width: usize,
    height: usize,
    x_range: Option<(f64, f64)>,
    y_min: Option<f64>,
    y_max: Option<f64>,
}

impl ConfigBuilder {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            x_range: None,
            y_min: None,
            y_max: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn x_range(mut self, lo: f64, hi: f64) -> Self {
        self.x_range = Some((lo, hi));
        self
    }
    #[inline]
    #[must_use]
    pub fn y_min(mut self, v: f64) -> Self {
        self.y_min = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn y_max(mut self, v: f64) -> Self {
        self.y_max = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn y_min_opt(mut self, v: Option<f64>) -> Self {
        if v.is_some() {
            self.y_min = v;
        }
        self
    }
    #[inline]
    #[must_use]
    pub fn y_max_opt(mut self, v: Option<f64>) -> Self {
        if v.is_some() {
            self.y_max = v;
        }
        self
    }
    #[inline]
    #[must_use]
    pub fn y_range(mut self, r: std::ops::RangeInclusive<f64>) -> Self {
        self.y_min = Some(*r.start());
        self.y_max = Some(*r.end());
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroSize {
                width: self.width,
                height: self.height,
            });
        }
        if self.width.checked_mul(self.height).is_none() {
            return Err(ConfigError::TooLarge {
                width: self.width,
                height: self.height,
            });
        }
        let (x_min, x_max) = self.x_range.ok_or(ConfigError::MissingField("x_range"))?;
        if x_min.is_nan() || x_max.is_nan() || x_min >= x_max {
            return Err(ConfigError::InvalidRange {
                axis: "x",
                low: x_min,
                high: x_max,
            });
        }
        if let (Some(low), Some(high)) = (self.y_min, self.y_max) {
            if low.is_nan() || high.is_nan() || low >= high {
                return Err(ConfigError::InvalidRange {
                    axis: "y",
                    low,
                    high,
                });
            }
        }
        Ok(Config {
            width: self.width,
            height: self.height,
            x_min,
            x_max,
            y_min: self.y_min,
            y_max: self.y_max,
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ConfigBuilder> for Result<Config, ConfigError> {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}
