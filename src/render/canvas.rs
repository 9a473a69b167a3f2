//! Character-cell canvas: paint coloured points, then serialise top row first.
//!
//! Cells live in one flat row-major buffer (`row * width + col`), row 0 at the
//! bottom of the chart.  Series are painted in order and later series win on
//! shared cells; there is no blending.

use tracing::debug;

use crate::{
    core::{
        color::Color,
        constants::BLANK_CELL,
        error::{ConfigError, GraphError},
    },
    render::raster::PixelPoint,
};

/// One function's rasterised points and the colour they are drawn in.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub points: Vec<PixelPoint>,
    pub color: Color,
}

impl Series {
    #[inline]
    #[must_use]
    pub fn new(points: Vec<PixelPoint>, color: Color) -> Self {
        Self { points, color }
    }
}

pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Option<Color>>,
}

impl Canvas {
    /// Blank `width × height` grid.
    ///
    /// # Panics
    ///
    /// If the cell count overflows `usize`; [`draw_points`] checks this first.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width.saturating_mul(height)],
        }
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Colour at `(col, row)`, `None` for background or out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, col: usize, row: usize) -> Option<Color> {
        if col < self.width && row < self.height {
            self.cells[row * self.width + col]
        } else {
            None
        }
    }

    /// Paint every point of `series`.
    ///
    /// The whole series is checked first; a single out-of-range point leaves
    /// the canvas untouched and reports [`GraphError::PointOutOfBounds`].
    pub fn paint(&mut self, series: &Series) -> Result<(), GraphError> {
        if let Some(p) = series
            .points
            .iter()
            .find(|p| p.col >= self.width || p.row >= self.height)
        {
            return Err(GraphError::PointOutOfBounds {
                col: p.col,
                row: p.row,
                width: self.width,
                height: self.height,
            });
        }
        for p in &series.points {
            self.cells[p.row * self.width + p.col] = Some(series.color);
        }
        Ok(())
    }

    /// Serialise highest row first, each row terminated by `\n`.
    #[must_use]
    pub fn render(&self) -> String {
        let painted: usize = self.cells.iter().flatten().map(|c| c.glyph().len() - 1).sum();
        let mut out = String::with_capacity((self.width + 1) * self.height + painted);
        for row in (0..self.height).rev() {
            let base = row * self.width;
            for cell in &self.cells[base..base + self.width] {
                out.push_str(cell.map_or(BLANK_CELL, Color::glyph));
            }
            out.push('\n');
        }
        out
    }
}

/// Composite every series onto a fresh canvas and serialise it.
pub fn draw_points(series: &[Series], width: usize, height: usize) -> Result<String, GraphError> {
    if width.checked_mul(height).is_none() {
        return Err(ConfigError::TooLarge { width, height }.into());
    }
    let mut canvas = Canvas::new(width, height);
    for s in series {
        canvas.paint(s)?;
    }
    debug!(
        width,
        height,
        series = series.len(),
        points = series.iter().map(|s| s.points.len()).sum::<usize>(),
        "composited canvas"
    );
    Ok(canvas.render())
}
