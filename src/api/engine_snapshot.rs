use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{CanvasSize, CurvePair, GraphRange, Padding, PixelPoint, RangeOverride, Sample};
use crate::error::{GraphError, GraphResult};
use crate::interaction::GestureMode;
use crate::render::Renderer;

use super::GraphEngine;

/// Serializable per-series state used by regression tests and debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSnapshot {
    pub samples_len: usize,
    pub visible: Vec<Sample>,
    pub range: Option<GraphRange>,
    pub line_pair: CurvePair,
    pub progress: f64,
    pub indicator: Option<PixelPoint>,
    pub selected: Option<Sample>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub canvas: CanvasSize,
    pub padding: Padding,
    pub range_override: Option<RangeOverride>,
    pub gesture_mode: GestureMode,
    /// Keyed by series id, in series index order.
    pub series: IndexMap<String, SeriesSnapshot>,
}

impl<R: Renderer> GraphEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let series = self
            .series
            .iter()
            .map(|(id, state)| {
                (
                    id.clone(),
                    SeriesSnapshot {
                        samples_len: state.samples().len(),
                        visible: state.visible_samples().to_vec(),
                        range: state.range(),
                        line_pair: state.line_transition().pair().clone(),
                        progress: state.progress(),
                        indicator: state.indicator(),
                        selected: state.selected_sample(),
                    },
                )
            })
            .collect();

        EngineSnapshot {
            canvas: self.config.canvas,
            padding: self.config.padding,
            range_override: self.config.range,
            gesture_mode: self.interaction.mode(),
            series,
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> GraphResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| GraphError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
