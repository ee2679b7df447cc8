use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::render::Color;

/// One series' contribution to the inspection overlay: the title, the raw
/// value at the highlighted category, and the stroke color for tinting the
/// overlay row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionEntry {
    pub series_title: String,
    pub value: i64,
    pub color: Color,
}

/// Payload handed to the host when a pointer release resolves to a category.
///
/// `anchor_x`/`anchor_y` position the host overlay: the selected point's
/// projected x and the raw pointer y. Values are raw, not tick-formatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionPayload {
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub index: usize,
    pub category: String,
    pub entries: SmallVec<[InspectionEntry; 4]>,
}

/// Auto-dismiss phase for the active highlight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HighlightPhase {
    Idle,
    Highlighted { index: usize, remaining: f64 },
}

/// Pointer-inspection state machine: idle, or one highlighted category with a
/// countdown to auto-dismiss.
///
/// The countdown is deterministic data stepped by the host; arming replaces
/// any pending countdown, so at most one timeout is outstanding per chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighlightState {
    phase: HighlightPhase,
    timeout: f64,
}

impl HighlightState {
    #[must_use]
    pub fn new(timeout: f64) -> Self {
        Self {
            phase: HighlightPhase::Idle,
            timeout,
        }
    }

    #[must_use]
    pub fn phase(self) -> HighlightPhase {
        self.phase
    }

    #[must_use]
    pub fn active_index(self) -> Option<usize> {
        match self.phase {
            HighlightPhase::Highlighted { index, .. } => Some(index),
            HighlightPhase::Idle => None,
        }
    }

    /// Arms (or re-arms) the highlight at `index` with a fresh countdown,
    /// cancelling any pending one.
    pub fn arm(&mut self, index: usize) {
        self.phase = HighlightPhase::Highlighted {
            index,
            remaining: self.timeout,
        };
    }

    pub fn clear(&mut self) {
        self.phase = HighlightPhase::Idle;
    }

    /// Advances the countdown and returns `true` when it expires on this
    /// step. Idle state ignores time.
    pub fn step_timeout(&mut self, delta: f64) -> bool {
        let HighlightPhase::Highlighted { index, remaining } = self.phase else {
            return false;
        };
        let remaining = remaining - delta;
        if remaining <= 0.0 {
            self.phase = HighlightPhase::Idle;
            return true;
        }
        self.phase = HighlightPhase::Highlighted { index, remaining };
        false
    }
}
