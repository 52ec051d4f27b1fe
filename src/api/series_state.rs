use tracing::debug;

use crate::core::{
    Curve, CurveTransition, GraphGeometry, GraphPaths, GraphRange, PixelPoint, Sample,
    build_graph_geometry, resolve_range,
};
use crate::error::GraphResult;
use crate::render::SeriesStyle;

use super::GraphEngineConfig;

/// All per-series state, owned by the engine and stored in insertion order.
///
/// Data, resolved range, built geometry, both crossfades and the read-out
/// selection live together so every series is iterated uniformly.
#[derive(Debug, Clone)]
pub struct SeriesState {
    pub(super) samples: Vec<Sample>,
    pub(super) style: SeriesStyle,
    pub(super) range: Option<GraphRange>,
    pub(super) geometry: Option<GraphGeometry>,
    pub(super) line: CurveTransition,
    pub(super) fill: CurveTransition,
    pub(super) indicator: Option<PixelPoint>,
    pub(super) selected: Option<usize>,
}

impl SeriesState {
    pub(super) fn new(samples: Vec<Sample>, style: SeriesStyle, baseline_y: f64) -> Self {
        Self {
            samples,
            style,
            range: None,
            geometry: None,
            line: CurveTransition::new(baseline_y),
            fill: CurveTransition::new(baseline_y),
            indicator: None,
            selected: None,
        }
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn style(&self) -> SeriesStyle {
        self.style
    }

    /// Resolved range, `None` while the series has no samples.
    #[must_use]
    pub fn range(&self) -> Option<GraphRange> {
        self.range
    }

    /// Samples inside the resolved range.
    #[must_use]
    pub fn visible_samples(&self) -> &[Sample] {
        self.geometry
            .as_ref()
            .map(|geometry| geometry.visible.as_slice())
            .unwrap_or_default()
    }

    /// Pixel positions of [`SeriesState::visible_samples`].
    #[must_use]
    pub fn visible_pixels(&self) -> &[PixelPoint] {
        self.geometry
            .as_ref()
            .map(|geometry| geometry.pixels.as_slice())
            .unwrap_or_default()
    }

    /// Most recently built target paths.
    #[must_use]
    pub fn paths(&self) -> GraphPaths {
        self.geometry
            .as_ref()
            .map(|geometry| geometry.paths.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn line_transition(&self) -> &CurveTransition {
        &self.line
    }

    #[must_use]
    pub fn fill_transition(&self) -> &CurveTransition {
        &self.fill
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.line.progress()
    }

    /// Line as drawn at the current progress.
    #[must_use]
    pub fn current_line(&self) -> Curve {
        self.line.current()
    }

    /// Fill as drawn at the current progress.
    #[must_use]
    pub fn current_fill(&self) -> Option<Curve> {
        let fill = self.fill.current();
        (!fill.is_empty()).then_some(fill)
    }

    #[must_use]
    pub fn indicator(&self) -> Option<PixelPoint> {
        self.indicator
    }

    #[must_use]
    pub fn selected_sample(&self) -> Option<Sample> {
        let index = self.selected?;
        self.visible_samples().get(index).copied()
    }

    /// Re-resolves the range and rebuilds paths from the current samples.
    pub(super) fn rebuild(&mut self, config: &GraphEngineConfig) -> GraphResult<()> {
        let baseline_y = config.canvas.height;
        self.line.set_baseline_y(baseline_y);
        self.fill.set_baseline_y(baseline_y);

        let geometry = if self.samples.is_empty() {
            self.range = None;
            None
        } else {
            let range = resolve_range(&self.samples, config.range)?;
            self.range = Some(range);
            Some(build_graph_geometry(
                &self.samples,
                range,
                config.canvas,
                config.path_options(),
            ))
        };

        let paths = geometry
            .as_ref()
            .map(|geometry| geometry.paths.clone())
            .unwrap_or_default();
        debug!(
            samples = self.samples.len(),
            visible = geometry.as_ref().map_or(0, |geometry| geometry.visible.len()),
            commands = paths.line.len(),
            animated = config.animated,
            "rebuilt series paths"
        );

        let fill = paths.fill.unwrap_or_default();
        if config.animated {
            self.line.push(paths.line);
            self.fill.push(fill);
        } else {
            self.line.reset(paths.line);
            self.fill.reset(fill);
        }

        self.geometry = geometry;
        self.selected = None;
        self.indicator = None;
        Ok(())
    }

    pub(super) fn set_progress(&mut self, progress: f64) -> bool {
        let applied = self.line.set_progress(progress);
        if applied {
            self.fill.set_progress(progress);
        }
        applied
    }

    pub(super) fn settle(&mut self) {
        self.line.settle();
        self.fill.settle();
    }

    pub(super) fn clear_selection(&mut self) {
        self.selected = None;
        self.indicator = None;
    }
}
