use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{CanvasSize, DEFAULT_SMOOTHING, Padding, PathOptions, RangeOverride};
use crate::error::{GraphError, GraphResult};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load graph setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphEngineConfig {
    pub canvas: CanvasSize,
    #[serde(default)]
    pub padding: Padding,
    /// Explicit display window; unset axes follow each series' data.
    #[serde(default)]
    pub range: Option<RangeOverride>,
    #[serde(default = "default_smoothing")]
    pub smoothing: f64,
    #[serde(default)]
    pub fill_gradient: bool,
    /// Crossfade between curve versions instead of replacing them.
    #[serde(default = "default_animated")]
    pub animated: bool,
}

impl GraphEngineConfig {
    /// Creates an animated config with no padding and data-driven range.
    #[must_use]
    pub fn new(canvas: CanvasSize) -> Self {
        Self {
            canvas,
            padding: Padding::default(),
            range: None,
            smoothing: default_smoothing(),
            fill_gradient: false,
            animated: default_animated(),
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_range(mut self, range: RangeOverride) -> Self {
        self.range = Some(range);
        self
    }

    #[must_use]
    pub fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = smoothing;
        self
    }

    #[must_use]
    pub fn with_fill_gradient(mut self, enabled: bool) -> Self {
        self.fill_gradient = enabled;
        self
    }

    #[must_use]
    pub fn with_animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    #[must_use]
    pub fn path_options(&self) -> PathOptions {
        PathOptions::default()
            .with_padding(self.padding)
            .with_smoothing(self.smoothing)
            .with_fill_gradient(self.fill_gradient)
    }

    pub fn validate(&self) -> GraphResult<()> {
        validate_canvas(self.canvas)?;
        validate_padding(self.padding, self.canvas)?;
        if let Some(range) = self.range {
            for bounds in [range.x, range.y].into_iter().flatten() {
                if !bounds.min.is_finite() || !bounds.max.is_finite() {
                    return Err(GraphError::InvalidData(
                        "range override bounds must be finite".to_owned(),
                    ));
                }
            }
        }
        if !self.smoothing.is_finite() {
            return Err(GraphError::InvalidData(
                "smoothing must be finite".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> GraphResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GraphError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> GraphResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| GraphError::InvalidData(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

pub(super) fn validate_canvas(canvas: CanvasSize) -> GraphResult<()> {
    if !canvas.is_valid() {
        return Err(GraphError::InvalidCanvas {
            width: canvas.width,
            height: canvas.height,
        });
    }
    Ok(())
}

/// Non-finite padding is rejected; oversized or negative padding only clips
/// geometry and is logged.
pub(super) fn validate_padding(padding: Padding, canvas: CanvasSize) -> GraphResult<()> {
    if !padding.horizontal.is_finite() || !padding.vertical.is_finite() {
        return Err(GraphError::InvalidData(
            "padding must be finite".to_owned(),
        ));
    }
    if !padding.fits(canvas) {
        warn!(
            horizontal = padding.horizontal,
            vertical = padding.vertical,
            "padding is negative or exceeds half the canvas"
        );
    }
    Ok(())
}

fn default_smoothing() -> f64 {
    DEFAULT_SMOOTHING
}

fn default_animated() -> bool {
    true
}
