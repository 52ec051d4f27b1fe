use serde::{Deserialize, Serialize};

use crate::core::{CanvasSize, Padding};
use crate::interaction::{GestureMode, PointSelection};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub canvas: CanvasSize,
    pub padding: Padding,
    pub series_count: usize,
    pub gesture_mode: GestureMode,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GraphEvent {
    SeriesUpdated {
        series_index: usize,
        samples_len: usize,
    },
    SeriesRemoved {
        series_index: usize,
    },
    /// The sample nearest to the pointer changed for one series.
    PointSelected(PointSelection),
    GestureStarted {
        x: f64,
        y: f64,
    },
    GestureEnded,
    Rendered,
}

/// Extension hook interface, e.g. for haptics or read-out labels on selection.
pub trait GraphPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: GraphEvent, context: PluginContext);
}
