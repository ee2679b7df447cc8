use serde::{Deserialize, Serialize};

use crate::interaction::InspectionPayload;

/// Event stream exposed to host observers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartEvent {
    SeriesRegistered { title: String, point_count: usize },
    DataUpdated { series_title: String },
    HighlightShown(InspectionPayload),
    HighlightDismissed,
    Rendered,
}

/// Host hook interface for chart lifecycle notifications.
///
/// Observers watch the event stream without mutating engine internals;
/// `HighlightShown`/`HighlightDismissed` carry everything an overlay host
/// needs to show and drop its popup.
pub trait ChartObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &ChartEvent);
}
