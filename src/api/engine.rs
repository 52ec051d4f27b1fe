use indexmap::IndexMap;
use tracing::debug;

use crate::core::{CanvasSize, Padding, RangeOverride};
use crate::error::GraphResult;
use crate::extensions::{GraphEvent, GraphPlugin};
use crate::interaction::{GestureMode, InteractionState};
use crate::render::{GraphFrame, Renderer, SeriesFrame};

use super::engine_config::{validate_canvas, validate_padding};
use super::{GraphEngineConfig, SeriesState};

/// Main orchestration facade consumed by host applications.
///
/// `GraphEngine` owns every series, the gesture state and the renderer. Hosts
/// publish inputs (data, layout, progress, pointer) and read back curves,
/// indicator positions and selections; nothing is recomputed implicitly
/// between calls.
pub struct GraphEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: GraphEngineConfig,
    pub(super) series: IndexMap<String, SeriesState>,
    pub(super) interaction: InteractionState,
    pub(super) plugins: Vec<Box<dyn GraphPlugin>>,
}

impl<R: Renderer> GraphEngine<R> {
    pub fn new(renderer: R, config: GraphEngineConfig) -> GraphResult<Self> {
        config.validate()?;
        debug!(
            width = config.canvas.width,
            height = config.canvas.height,
            animated = config.animated,
            "graph engine initialized"
        );

        Ok(Self {
            renderer,
            config,
            series: IndexMap::new(),
            interaction: InteractionState::default(),
            plugins: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> GraphEngineConfig {
        self.config
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.config.canvas
    }

    #[must_use]
    pub fn padding(&self) -> Padding {
        self.config.padding
    }

    #[must_use]
    pub fn range_override(&self) -> Option<RangeOverride> {
        self.config.range
    }

    #[must_use]
    pub fn gesture_mode(&self) -> GestureMode {
        self.interaction.mode()
    }

    /// Resizes the drawing surface and rebuilds every series.
    pub fn set_canvas(&mut self, canvas: CanvasSize) -> GraphResult<()> {
        validate_canvas(canvas)?;
        self.config.canvas = canvas;
        self.rebuild_all()
    }

    pub fn set_padding(&mut self, padding: Padding) -> GraphResult<()> {
        validate_padding(padding, self.config.canvas)?;
        self.config.padding = padding;
        self.rebuild_all()
    }

    /// Replaces the explicit display window; `None` follows the data.
    pub fn set_range_override(&mut self, range: Option<RangeOverride>) -> GraphResult<()> {
        let mut candidate = self.config;
        candidate.range = range;
        candidate.validate()?;
        self.config = candidate;
        self.rebuild_all()
    }

    pub fn set_smoothing(&mut self, smoothing: f64) -> GraphResult<()> {
        let mut candidate = self.config;
        candidate.smoothing = smoothing;
        candidate.validate()?;
        self.config = candidate;
        self.rebuild_all()
    }

    pub fn set_fill_gradient(&mut self, enabled: bool) -> GraphResult<()> {
        self.config.fill_gradient = enabled;
        self.rebuild_all()
    }

    /// Switches between crossfading and immediate replacement. Disabling
    /// animation settles every running transition.
    pub fn set_animated(&mut self, animated: bool) {
        self.config.animated = animated;
        if !animated {
            self.settle_transitions();
        }
    }

    /// Materializes the current frame without rendering it.
    #[must_use]
    pub fn frame(&self) -> GraphFrame {
        self.series
            .iter()
            .enumerate()
            .fold(
                GraphFrame::new(self.config.canvas),
                |frame, (series_index, (id, state))| {
                    frame.with_series(SeriesFrame {
                        series_index,
                        id: id.clone(),
                        line: state.current_line(),
                        fill: state.current_fill(),
                        indicator: state.indicator(),
                        style: state.style(),
                    })
                },
            )
    }

    pub fn render(&mut self) -> GraphResult<()> {
        let frame = self.frame();
        self.renderer.render(&frame)?;
        self.emit_plugin_event(GraphEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn rebuild_all(&mut self) -> GraphResult<()> {
        for state in self.series.values_mut() {
            state.rebuild(&self.config)?;
        }
        self.refresh_selection_after_rebuild();
        Ok(())
    }
}
