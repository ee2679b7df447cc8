use tracing::{debug, trace, warn};

use crate::core::{CategoryAxis, Series};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::chart_model::ChartModel;
use super::{ChartEngine, ChartEvent};

/// Pull collaborator supplying point values on request.
///
/// The engine calls this once per point whenever a series is (re)registered
/// against the category axis, never per render pass. Respond through
/// [`DataRequest::supply`]; an unanswered request leaves the point at its
/// default value of 0.
pub trait DataProvider {
    fn on_data_requested(&mut self, request: &mut DataRequest<'_>);
}

/// Write-back handle for one requested point.
pub struct DataRequest<'a> {
    series_title: &'a str,
    category: &'a str,
    index: usize,
    slot: &'a mut i64,
}

impl DataRequest<'_> {
    #[must_use]
    pub fn series_title(&self) -> &str {
        self.series_title
    }

    #[must_use]
    pub fn category(&self) -> &str {
        self.category
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn supply(&mut self, value: i64) {
        *self.slot = value;
    }
}

impl<R: Renderer> ChartEngine<R> {
    /// Registers the pull collaborator. Register it before adding series so
    /// registration pulls can reach it.
    pub fn set_data_provider(&mut self, provider: Box<dyn DataProvider>) {
        self.provider = Some(provider);
    }

    /// Replaces the shared category axis and re-registers every series
    /// against it: point storage is reallocated and values are re-pulled
    /// from the provider.
    pub fn set_category_axis(&mut self, axis: CategoryAxis) {
        debug!(categories = axis.len(), "replace category axis");
        self.model.axis = axis;
        let titles: Vec<String> = self.model.series.keys().cloned().collect();
        let count = self.model.axis.len();
        for title in titles {
            if let Some(series) = self.model.series.get_mut(&title) {
                series.set_point_count(count);
                if self.model.behavior.always_show_markers {
                    series.set_all_highlighted(true);
                }
            }
            self.pull_series_data(&title);
            self.emit_event(ChartEvent::DataUpdated {
                series_title: title,
            });
        }
    }

    /// Registers a series against the shared axis and pulls its data.
    ///
    /// A series arriving with no points is sized to the axis; a series the
    /// caller sized explicitly must match the axis, otherwise registration
    /// is rejected rather than silently truncated.
    pub fn add_series(&mut self, mut series: Series) -> ChartResult<()> {
        if series.point_count() == 0 {
            series.set_point_count(self.model.axis.len());
        } else if series.point_count() != self.model.axis.len() {
            return Err(ChartError::AxisMismatch {
                series: series.title().to_owned(),
                series_points: series.point_count(),
                axis_categories: self.model.axis.len(),
            });
        }
        if self.model.behavior.always_show_markers {
            series.set_all_highlighted(true);
        }

        let title = series.title().to_owned();
        let point_count = series.point_count();
        if self.model.series.insert(title.clone(), series).is_some() {
            warn!(series = %title, "replacing series registered under the same title");
        }
        debug!(series = %title, point_count, "register series");
        self.pull_series_data(&title);
        self.emit_event(ChartEvent::SeriesRegistered { title, point_count });
        Ok(())
    }

    /// Re-pulls every registered series from the provider.
    pub fn refresh_data(&mut self) {
        let titles: Vec<String> = self.model.series.keys().cloned().collect();
        for title in titles {
            self.pull_series_data(&title);
            self.emit_event(ChartEvent::DataUpdated {
                series_title: title,
            });
        }
    }

    /// Writes one raw value directly, bypassing the provider.
    ///
    /// # Panics
    ///
    /// Panics when `index` is at or beyond the series' point count; staying
    /// inside the configured category range is a caller precondition.
    pub fn set_point_value(
        &mut self,
        series_title: &str,
        index: usize,
        value: i64,
    ) -> ChartResult<()> {
        let Some(series) = self.model.series.get_mut(series_title) else {
            return Err(ChartError::UnknownSeries(series_title.to_owned()));
        };
        series.set_value(index, value);
        trace!(series = %series_title, index, value, "set point value");
        Ok(())
    }

    fn pull_series_data(&mut self, title: &str) {
        let Some(provider) = self.provider.as_deref_mut() else {
            trace!(series = %title, "no data provider registered; points keep defaults");
            return;
        };
        let ChartModel { axis, series, .. } = &mut self.model;
        let Some(series) = series.get_mut(title) else {
            return;
        };
        let count = series.point_count();
        for index in 0..count {
            let category = axis.label(index).unwrap_or_default();
            let point = &mut series.points_mut()[index];
            let mut request = DataRequest {
                series_title: title,
                category,
                index,
                slot: &mut point.value,
            };
            provider.on_data_requested(&mut request);
        }
        trace!(series = %title, count, "pulled series data");
    }
}
