use serde::{Deserialize, Serialize};

/// Ordered category keys shared by every series on a chart.
///
/// The axis is the single source of truth for the horizontal grid: guideline
/// spacing, point placement, and hit testing all derive from its length, and
/// series registration sizes each series against it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAxis {
    categories: Vec<String>,
}

impl CategoryAxis {
    #[must_use]
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Synthesizes numeric keys `"0".."count-1"` for hosts that only care
    /// about slot positions.
    #[must_use]
    pub fn with_count(count: usize) -> Self {
        Self {
            categories: (0..count).map(|index| index.to_string()).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    #[must_use]
    pub fn label(&self, index: usize) -> Option<&str> {
        self.categories.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.categories
    }

    /// Horizontal distance between adjacent category slots for a surface of
    /// the given width. Zero when the axis is empty.
    #[must_use]
    pub fn spacing(&self, width: u32) -> f64 {
        if self.categories.is_empty() {
            0.0
        } else {
            f64::from(width) / self.categories.len() as f64
        }
    }
}
