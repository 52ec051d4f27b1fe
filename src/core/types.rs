use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64, lerp};
use crate::error::GraphResult;

/// One timestamped value. `date` is expressed in unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub date: f64,
    pub value: f64,
}

impl Sample {
    #[must_use]
    pub fn new(date: f64, value: f64) -> Self {
        Self { date, value }
    }

    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> GraphResult<Self> {
        Ok(Self {
            date: datetime_to_unix_seconds(time),
            value: decimal_to_f64(value, "value")?,
        })
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.date.is_finite() && self.value.is_finite()
    }
}

/// Drawing surface size in pixels, as measured by the host layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Pixels reserved on each edge so strokes and indicators are not clipped.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub horizontal: f64,
    pub vertical: f64,
}

impl Padding {
    #[must_use]
    pub fn new(horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    #[must_use]
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value)
    }

    /// Returns `true` when the padding leaves a non-empty drawable area.
    #[must_use]
    pub fn fits(self, canvas: CanvasSize) -> bool {
        self.horizontal >= 0.0
            && self.vertical >= 0.0
            && self.horizontal * 2.0 < canvas.width
            && self.vertical * 2.0 < canvas.height
    }
}

/// Point in raster space: x grows rightwards, y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            x: lerp(self.x, other.x, t),
            y: lerp(self.y, other.y, t),
        }
    }
}
