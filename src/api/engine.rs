use tracing::warn;

use crate::core::{CategoryAxis, Series, ValueScale, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::HighlightState;
use crate::render::Renderer;

use super::chart_model::ChartModel;
use super::data_controller::DataProvider;
use super::{ChartEngineConfig, ChartEvent, ChartObserver};

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` coordinates the category axis, series data, value scale,
/// highlight state, and renderer calls. All mutation happens on the host's
/// single event thread; a multi-threaded host serializes calls itself.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) model: ChartModel,
    pub(super) provider: Option<Box<dyn DataProvider>>,
    pub(super) observers: Vec<Box<dyn ChartObserver>>,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            model: ChartModel::new(&config),
            provider: None,
            observers: Vec::new(),
        })
    }

    /// Builds the current frame and hands it to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)?;
        self.emit_event(ChartEvent::Rendered);
        Ok(())
    }

    /// Replaces the render-surface dimensions. Spacing and scale are derived
    /// per frame, so the next build picks the new size up without any
    /// explicit invalidation.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.model.viewport = viewport;
        Ok(())
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.model.viewport
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.model.title = title.into();
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.model.title
    }

    #[must_use]
    pub fn category_axis(&self) -> &CategoryAxis {
        &self.model.axis
    }

    #[must_use]
    pub fn value_scale(&self) -> ValueScale {
        self.model.value_scale
    }

    #[must_use]
    pub fn highlight_state(&self) -> HighlightState {
        self.model.highlight
    }

    #[must_use]
    pub fn series(&self, title: &str) -> Option<&Series> {
        self.model.series.get(title)
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.model.series.len()
    }

    /// Registration order, which is also draw and legend order.
    pub fn series_titles(&self) -> impl Iterator<Item = &str> {
        self.model.series.keys().map(String::as_str)
    }

    /// Registers a host observer. A second observer under the same id
    /// replaces the first.
    pub fn register_observer(&mut self, observer: Box<dyn ChartObserver>) {
        if let Some(slot) = self
            .observers
            .iter_mut()
            .find(|existing| existing.id() == observer.id())
        {
            warn!(id = observer.id(), "replacing observer with duplicate id");
            *slot = observer;
            return;
        }
        self.observers.push(observer);
    }

    pub(super) fn emit_event(&mut self, event: ChartEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
