use smallvec::SmallVec;
use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::interaction::{InspectionEntry, InspectionPayload};
use crate::render::Renderer;

use super::{ChartEngine, ChartEvent};

impl<R: Renderer> ChartEngine<R> {
    /// Pointer-release entry point.
    ///
    /// Resolves the nearest category to the pointer, synchronizes highlight
    /// flags across every series at that index, arms the auto-dismiss
    /// countdown (replacing any pending one), and hands back the inspection
    /// payload for the host overlay. Returns `Ok(None)` when inspection is
    /// disabled or there is nothing to hit.
    pub fn pointer_release(
        &mut self,
        pointer_x: f64,
        pointer_y: f64,
    ) -> ChartResult<Option<InspectionPayload>> {
        if !pointer_x.is_finite() || !pointer_y.is_finite() {
            return Err(ChartError::InvalidData(
                "pointer coordinates must be finite".to_owned(),
            ));
        }
        if !self.model.behavior.popup_enabled
            || self.model.series.is_empty()
            || self.model.axis.is_empty()
        {
            return Ok(None);
        }

        if !self.model.behavior.always_show_markers {
            for series in self.model.series.values_mut() {
                series.set_all_highlighted(false);
            }
        }

        let Some(index) = self.nearest_category_index(pointer_x) else {
            return Ok(None);
        };
        let anchor_x = self
            .model
            .first_series()
            .map_or(pointer_x, |series| series.points()[index].screen_x);

        let mut entries: SmallVec<[InspectionEntry; 4]> = SmallVec::new();
        for series in self.model.series.values_mut() {
            series.set_highlighted(index, true);
            entries.push(InspectionEntry {
                series_title: series.title().to_owned(),
                value: series.points()[index].value,
                color: series.stroke_color(),
            });
        }

        // Arming replaces any pending countdown: debounce by replacement.
        self.model.highlight.arm(index);
        let payload = InspectionPayload {
            anchor_x,
            anchor_y: pointer_y,
            index,
            category: self
                .model
                .axis
                .label(index)
                .unwrap_or_default()
                .to_owned(),
            entries,
        };
        debug!(index, entries = payload.entries.len(), "highlight shown");
        self.emit_event(ChartEvent::HighlightShown(payload.clone()));
        Ok(Some(payload))
    }

    /// Advances the highlight auto-dismiss countdown by `delta` host time
    /// units.
    ///
    /// Returns `true` when the active highlight expired on this step; the
    /// host should drop its overlay. Marker flags survive expiry when the
    /// chart is configured to always show markers.
    pub fn advance_time(&mut self, delta: f64) -> ChartResult<bool> {
        if !delta.is_finite() || delta <= 0.0 {
            return Err(ChartError::InvalidData(
                "time delta must be finite and > 0".to_owned(),
            ));
        }
        if !self.model.highlight.step_timeout(delta) {
            return Ok(false);
        }

        if !self.model.behavior.always_show_markers {
            for series in self.model.series.values_mut() {
                series.set_all_highlighted(false);
            }
        }
        debug!("highlight dismissed");
        self.emit_event(ChartEvent::HighlightDismissed);
        Ok(true)
    }
}
