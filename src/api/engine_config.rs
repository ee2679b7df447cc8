use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format. Value bounds passed as
/// `Some` are user-provided and exempt from autoscale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    #[serde(default = "default_background")]
    pub background: Color,
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_title_size")]
    pub title_size: f64,
    #[serde(default = "default_tick_count")]
    pub tick_count: u32,
    #[serde(default = "default_popup_enabled")]
    pub popup_enabled: bool,
    #[serde(default = "default_show_vertical_guidelines")]
    pub show_vertical_guidelines: bool,
    #[serde(default)]
    pub always_show_markers: bool,
    #[serde(default = "default_show_zero_line")]
    pub show_zero_line: bool,
    #[serde(default)]
    pub max_value: Option<i64>,
    #[serde(default)]
    pub min_value: Option<i64>,
    #[serde(default = "default_highlight_timeout")]
    pub highlight_timeout: f64,
}

impl ChartEngineConfig {
    /// Creates a config with documented defaults for everything but the
    /// viewport.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            background: default_background(),
            title: String::new(),
            title_size: default_title_size(),
            tick_count: default_tick_count(),
            popup_enabled: default_popup_enabled(),
            show_vertical_guidelines: default_show_vertical_guidelines(),
            always_show_markers: false,
            show_zero_line: default_show_zero_line(),
            max_value: None,
            min_value: None,
            highlight_timeout: default_highlight_timeout(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    #[must_use]
    pub fn with_title_size(mut self, title_size: f64) -> Self {
        self.title_size = title_size;
        self
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: u32) -> Self {
        self.tick_count = tick_count;
        self
    }

    #[must_use]
    pub fn with_popup_enabled(mut self, popup_enabled: bool) -> Self {
        self.popup_enabled = popup_enabled;
        self
    }

    #[must_use]
    pub fn with_vertical_guidelines(mut self, show: bool) -> Self {
        self.show_vertical_guidelines = show;
        self
    }

    #[must_use]
    pub fn with_always_show_markers(mut self, always: bool) -> Self {
        self.always_show_markers = always;
        self
    }

    #[must_use]
    pub fn with_zero_line(mut self, show: bool) -> Self {
        self.show_zero_line = show;
        self
    }

    /// Fixes the upper bound; autoscale will no longer touch it.
    #[must_use]
    pub fn with_max_value(mut self, max_value: i64) -> Self {
        self.max_value = Some(max_value);
        self
    }

    /// Fixes the lower bound; autoscale will no longer touch it.
    #[must_use]
    pub fn with_min_value(mut self, min_value: i64) -> Self {
        self.min_value = Some(min_value);
        self
    }

    /// Auto-dismiss delay for pointer highlights, in host time units.
    #[must_use]
    pub fn with_highlight_timeout(mut self, highlight_timeout: f64) -> Self {
        self.highlight_timeout = highlight_timeout;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.background.validate()?;
        if !self.title_size.is_finite() || self.title_size <= 0.0 {
            return Err(ChartError::InvalidData(
                "title size must be finite and > 0".to_owned(),
            ));
        }
        if !self.highlight_timeout.is_finite() || self.highlight_timeout <= 0.0 {
            return Err(ChartError::InvalidData(
                "highlight timeout must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_background() -> Color {
    Color::rgb(0.8, 0.8, 0.8)
}

fn default_title_size() -> f64 {
    12.0
}

fn default_tick_count() -> u32 {
    5
}

fn default_popup_enabled() -> bool {
    true
}

fn default_show_vertical_guidelines() -> bool {
    true
}

fn default_show_zero_line() -> bool {
    true
}

fn default_highlight_timeout() -> f64 {
    2000.0
}
