use serde::{Deserialize, Serialize};

use crate::core::Sample;
use crate::error::{GraphError, GraphResult};

/// Closed `[min, max]` window on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    /// Creates bounds, swapping the ends when supplied in reverse order.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.span() == 0.0
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn is_finite(self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

/// Resolved display domain for both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphRange {
    pub x: AxisBounds,
    pub y: AxisBounds,
}

/// Caller-supplied window. Missing axes fall back to the data bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RangeOverride {
    #[serde(default)]
    pub x: Option<AxisBounds>,
    #[serde(default)]
    pub y: Option<AxisBounds>,
}

impl RangeOverride {
    #[must_use]
    pub fn with_x(mut self, min: f64, max: f64) -> Self {
        self.x = Some(AxisBounds::new(min, max));
        self
    }

    #[must_use]
    pub fn with_y(mut self, min: f64, max: f64) -> Self {
        self.y = Some(AxisBounds::new(min, max));
        self
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.x.is_none() && self.y.is_none()
    }
}

/// Resolves the effective time/value window for `samples`.
///
/// Without an override the x axis spans `[first.date, last.date]` and the y
/// axis spans the global value extremes. `samples` must not be empty and
/// every sample must be finite, whether or not an override is supplied.
pub fn resolve_range(
    samples: &[Sample],
    requested: Option<RangeOverride>,
) -> GraphResult<GraphRange> {
    let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
        return Err(GraphError::EmptySeries);
    };
    if let Some(index) = samples.iter().position(|sample| !sample.is_finite()) {
        return Err(GraphError::InvalidData(format!(
            "sample at index {index} must have a finite date and value"
        )));
    }
    let requested = requested.unwrap_or_default();

    let x = match requested.x {
        Some(bounds) => validate_override(bounds, "x")?,
        None => AxisBounds::new(first.date, last.date),
    };
    let y = match requested.y {
        Some(bounds) => validate_override(bounds, "y")?,
        None => value_bounds(samples),
    };

    Ok(GraphRange { x, y })
}

fn validate_override(bounds: AxisBounds, axis: &str) -> GraphResult<AxisBounds> {
    if !bounds.is_finite() {
        return Err(GraphError::InvalidData(format!(
            "{axis} range override must be finite"
        )));
    }
    Ok(AxisBounds::new(bounds.min, bounds.max))
}

fn value_bounds(samples: &[Sample]) -> AxisBounds {
    samples.iter().fold(
        AxisBounds {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        },
        |bounds, sample| AxisBounds {
            min: bounds.min.min(sample.value),
            max: bounds.max.max(sample.value),
        },
    )
}
