use tracing::{debug, warn};

use crate::core::Sample;
use crate::error::{GraphError, GraphResult};
use crate::extensions::GraphEvent;
use crate::render::{Renderer, SeriesStyle};

use super::{GraphEngine, SeriesState};

impl<R: Renderer> GraphEngine<R> {
    /// Adds or replaces a series and rebuilds its paths.
    ///
    /// Returns the series index (insertion order). Samples must be finite;
    /// out-of-order input is stably sorted by date.
    pub fn set_series(&mut self, id: impl Into<String>, samples: Vec<Sample>) -> GraphResult<usize> {
        let id = id.into();
        let samples = canonicalize_samples(samples)?;
        debug!(series = %id, count = samples.len(), "set series samples");

        let baseline_y = self.config.canvas.height;
        let entry = self.series.entry(id);
        let series_index = entry.index();
        let state = entry.or_insert_with(|| {
            SeriesState::new(Vec::new(), SeriesStyle::default(), baseline_y)
        });
        state.samples = samples;
        state.rebuild(&self.config)?;
        let samples_len = state.samples.len();

        self.refresh_selection_after_rebuild();
        self.emit_plugin_event(GraphEvent::SeriesUpdated {
            series_index,
            samples_len,
        });
        Ok(series_index)
    }

    /// Removes a series. Later series shift down by one index.
    pub fn remove_series(&mut self, id: &str) -> bool {
        match self.series.shift_remove_full(id) {
            Some((series_index, _, _)) => {
                debug!(series = %id, "removed series");
                self.emit_plugin_event(GraphEvent::SeriesRemoved { series_index });
                true
            }
            None => false,
        }
    }

    pub fn set_series_style(&mut self, id: &str, style: SeriesStyle) -> GraphResult<()> {
        style.validate()?;
        let state = self
            .series
            .get_mut(id)
            .ok_or_else(|| GraphError::UnknownSeries(id.to_owned()))?;
        state.style = style;
        Ok(())
    }

    #[must_use]
    pub fn series(&self, id: &str) -> Option<&SeriesState> {
        self.series.get(id)
    }

    #[must_use]
    pub fn series_at(&self, index: usize) -> Option<(&str, &SeriesState)> {
        self.series
            .get_index(index)
            .map(|(id, state)| (id.as_str(), state))
    }

    #[must_use]
    pub fn series_index(&self, id: &str) -> Option<usize> {
        self.series.get_index_of(id)
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    pub fn series_ids(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }
}

fn canonicalize_samples(mut samples: Vec<Sample>) -> GraphResult<Vec<Sample>> {
    if let Some(invalid) = samples.iter().position(|sample| !sample.is_finite()) {
        return Err(GraphError::InvalidData(format!(
            "sample at index {invalid} must have a finite date and value"
        )));
    }

    let ordered = samples
        .windows(2)
        .all(|pair| pair[0].date <= pair[1].date);
    if !ordered {
        warn!(count = samples.len(), "samples out of date order; sorting");
        samples.sort_by(|a, b| a.date.total_cmp(&b.date));
    }
    Ok(samples)
}
