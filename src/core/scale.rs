use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::series::Series;
use crate::core::types::Viewport;

/// Vertical value scale: the chart's bounds, the user-override flags, and the
/// value↔row mapping derived from them.
///
/// `scale` is the value span covered by one pixel row,
/// `(max - min) / height`, recomputed by [`ValueScale::autoscale`] on every
/// frame build.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    max_value: i64,
    min_value: i64,
    user_provided_max: bool,
    user_provided_min: bool,
    scale: f64,
}

impl Default for ValueScale {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl ValueScale {
    /// Bounds passed as `Some` are treated as user-provided and left alone by
    /// autoscale; `None` bounds display as 100/0 until data arrives.
    #[must_use]
    pub fn new(max_override: Option<i64>, min_override: Option<i64>) -> Self {
        Self {
            max_value: max_override.unwrap_or(100),
            min_value: min_override.unwrap_or(0),
            user_provided_max: max_override.is_some(),
            user_provided_min: min_override.is_some(),
            scale: 0.0,
        }
    }

    #[must_use]
    pub fn max_value(self) -> i64 {
        self.max_value
    }

    #[must_use]
    pub fn min_value(self) -> i64 {
        self.min_value
    }

    #[must_use]
    pub fn scale(self) -> f64 {
        self.scale
    }

    /// Recomputes bounds from the data and the pixel scale from the viewport.
    ///
    /// The natural max starts at zero and only grows; the natural min only
    /// ever drops below zero, so all-non-negative data keeps a zero floor
    /// instead of a truncated chart. With no series registered the displayed
    /// range falls back to 100/0 unless both bounds are user-provided.
    pub fn autoscale<'a, I>(&mut self, series: I, viewport: Viewport)
    where
        I: IntoIterator<Item = &'a Series>,
    {
        let mut natural_max: i64 = 0;
        let mut natural_min: i64 = 0;
        let mut any_series = false;
        for series in series {
            any_series = true;
            for point in series.points() {
                if point.value > natural_max {
                    natural_max = point.value;
                }
                if point.value < 0 && point.value < natural_min {
                    natural_min = point.value;
                }
            }
        }

        if !self.user_provided_max {
            self.max_value = natural_max;
        }
        if !self.user_provided_min {
            self.min_value = natural_min;
        }
        if !any_series && !(self.user_provided_max && self.user_provided_min) {
            self.max_value = 100;
            self.min_value = 0;
        }

        self.scale = (self.max_value - self.min_value) as f64 / f64::from(viewport.height);
        debug!(
            max = self.max_value,
            min = self.min_value,
            scale = self.scale,
            "autoscale"
        );
    }

    /// Pixel row of domain value zero.
    ///
    /// A degenerate scale (all-zero data, or both bounds overridden to the
    /// same value) pins the zero row to the bottom edge instead of
    /// propagating a 0/0 division.
    #[must_use]
    pub fn zero_row(self, viewport: Viewport) -> f64 {
        let height = f64::from(viewport.height);
        if self.min_value == 0 || self.scale == 0.0 {
            return height;
        }
        height - self.min_value.unsigned_abs() as f64 / self.scale
    }

    /// Pixel row of a domain value.
    #[must_use]
    pub fn value_to_row(self, value: i64, viewport: Viewport) -> f64 {
        if self.scale == 0.0 {
            return self.zero_row(viewport);
        }
        self.zero_row(viewport) - value as f64 / self.scale
    }

    /// Domain value of a pixel row.
    ///
    /// Rows below the zero row (larger y) map to negative values because
    /// surface rows grow downward while chart values grow upward.
    #[must_use]
    pub fn row_to_value(self, row: f64, viewport: Viewport) -> f64 {
        let zero = self.zero_row(viewport);
        if row > zero {
            -((row - zero).abs() * self.scale)
        } else {
            (zero - row).abs() * self.scale
        }
    }
}

/// Renders an axis tick label with at most three significant digits and no
/// thousands separators.
///
/// Tick labels are approximate; the inspection payload carries the raw
/// values.
#[must_use]
pub fn format_tick_label(value: f64) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let step = 10f64.powi(magnitude - 2);
    let rounded = (value / step).round() * step;
    let decimals = (2 - magnitude).max(0) as usize;
    let mut text = format!("{rounded:.decimals$}");
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    text
}
