use serde::{Deserialize, Serialize};

use crate::render::Color;

/// One plotted sample: the raw value plus per-frame derived state.
///
/// `screen_x`/`screen_y` are rewritten on every frame build and carry no
/// meaning between frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub value: i64,
    pub screen_x: f64,
    pub screen_y: f64,
    pub highlighted: bool,
}

impl Default for PlotPoint {
    fn default() -> Self {
        Self {
            value: 0,
            screen_x: 0.0,
            screen_y: 0.0,
            highlighted: false,
        }
    }
}

impl PlotPoint {
    #[must_use]
    pub fn with_value(value: i64) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }
}

/// A named, fixed-length sequence of plot points with its own stroke styling.
///
/// The title doubles as the series' identity inside a chart: the data
/// provider contract and the inspection payload both refer to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    title: String,
    stroke_color: Color,
    stroke_width: f64,
    points: Vec<PlotPoint>,
}

impl Series {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            stroke_color: Color::BLACK,
            stroke_width: 2.0,
            points: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_stroke(mut self, color: Color, width: f64) -> Self {
        self.stroke_color = color;
        self.stroke_width = width;
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    #[must_use]
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Reallocates the point storage and fills it with fresh default points.
    /// Prior per-index values are lost.
    pub fn set_point_count(&mut self, count: usize) {
        self.points = vec![PlotPoint::default(); count];
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn points(&self) -> &[PlotPoint] {
        &self.points
    }

    pub(crate) fn points_mut(&mut self) -> &mut [PlotPoint] {
        &mut self.points
    }

    /// Writes the raw value at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is at or beyond the configured point count;
    /// staying in range is a caller precondition.
    pub fn set_value(&mut self, index: usize, value: i64) {
        self.points[index].value = value;
    }

    /// Flips the marker flag at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is at or beyond the configured point count.
    pub fn set_highlighted(&mut self, index: usize, highlighted: bool) {
        self.points[index].highlighted = highlighted;
    }

    /// Flips the marker flag on every point.
    pub fn set_all_highlighted(&mut self, highlighted: bool) {
        for point in &mut self.points {
            point.highlighted = highlighted;
        }
    }
}
