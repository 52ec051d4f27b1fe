use tracing::trace;

use crate::error::{GraphError, GraphResult};
use crate::render::Renderer;

use super::GraphEngine;

impl<R: Renderer> GraphEngine<R> {
    /// Publishes one sample of the host's animation driver to every series.
    ///
    /// NaN samples are ignored; other values are clamped to `[0, 1]`.
    pub fn set_progress(&mut self, progress: f64) {
        trace!(progress, "set progress for all series");
        for state in self.series.values_mut() {
            state.set_progress(progress);
        }
        self.refresh_indicators();
    }

    /// Publishes a progress sample for a single series.
    pub fn set_series_progress(&mut self, id: &str, progress: f64) -> GraphResult<()> {
        let state = self
            .series
            .get_mut(id)
            .ok_or_else(|| GraphError::UnknownSeries(id.to_owned()))?;
        state.set_progress(progress);
        self.refresh_indicators();
        Ok(())
    }

    /// Jumps every running transition to its target.
    pub fn settle_transitions(&mut self) {
        for state in self.series.values_mut() {
            state.settle();
        }
        self.refresh_indicators();
    }

    /// `true` when no series has a transition in flight.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.series
            .values()
            .all(|state| state.line_transition().is_settled())
    }
}
