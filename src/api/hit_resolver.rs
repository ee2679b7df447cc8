use ordered_float::OrderedFloat;

use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Nearest category index to `pointer_x`, measured against the first
    /// series' projected positions.
    ///
    /// Positions are a byproduct of the frame build, so at least one build
    /// must have run for the result to be meaningful. Equidistant candidates
    /// resolve to the lowest index.
    pub(super) fn nearest_category_index(&self, pointer_x: f64) -> Option<usize> {
        let first = self.model.first_series()?;
        first
            .points()
            .iter()
            .enumerate()
            .min_by_key(|(_, point)| OrderedFloat((pointer_x - point.screen_x).abs()))
            .map(|(index, _)| index)
    }
}
