use indexmap::IndexMap;

use crate::core::{CategoryAxis, Series, ValueScale, Viewport};
use crate::interaction::HighlightState;
use crate::render::Color;

use super::ChartEngineConfig;

/// Visual parameters the frame builder reads every pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ChartStyle {
    pub(crate) background: Color,
    pub(crate) title_size: f64,
}

/// Behavior switches from the host configuration surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ChartBehavior {
    pub(crate) tick_count: u32,
    pub(crate) popup_enabled: bool,
    pub(crate) show_vertical_guidelines: bool,
    pub(crate) always_show_markers: bool,
    pub(crate) show_zero_line: bool,
}

/// All mutable state for one chart.
///
/// Frame building and hit testing borrow the model exclusively, so every
/// cross-call dependency is visible in the signature. Series iteration order
/// is registration order, which is also draw and legend order.
#[derive(Debug, Clone)]
pub(crate) struct ChartModel {
    pub(crate) viewport: Viewport,
    pub(crate) title: String,
    pub(crate) axis: CategoryAxis,
    pub(crate) series: IndexMap<String, Series>,
    pub(crate) value_scale: ValueScale,
    pub(crate) highlight: HighlightState,
    pub(crate) style: ChartStyle,
    pub(crate) behavior: ChartBehavior,
}

impl ChartModel {
    pub(crate) fn new(config: &ChartEngineConfig) -> Self {
        Self {
            viewport: config.viewport,
            title: config.title.clone(),
            axis: CategoryAxis::default(),
            series: IndexMap::new(),
            value_scale: ValueScale::new(config.max_value, config.min_value),
            highlight: HighlightState::new(config.highlight_timeout),
            style: ChartStyle {
                background: config.background,
                title_size: config.title_size,
            },
            behavior: ChartBehavior {
                tick_count: config.tick_count,
                popup_enabled: config.popup_enabled,
                show_vertical_guidelines: config.show_vertical_guidelines,
                always_show_markers: config.always_show_markers,
                show_zero_line: config.show_zero_line,
            },
        }
    }

    pub(crate) fn first_series(&self) -> Option<&Series> {
        self.series.first().map(|(_, series)| series)
    }
}
