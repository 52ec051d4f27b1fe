use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{CanvasSize, GraphRange, LinearScale, Padding, PixelPoint, Sample};

/// Sample-to-pixel mapping for one resolved range on one canvas.
///
/// The value axis is inverted: `range.y.max` lands on the top padding edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphProjection {
    x_scale: LinearScale,
    y_scale: LinearScale,
}

impl GraphProjection {
    #[must_use]
    pub fn new(range: GraphRange, canvas: CanvasSize, padding: Padding) -> Self {
        let x_scale = LinearScale::new(
            range.x,
            padding.horizontal,
            canvas.width - padding.horizontal,
        );
        let y_scale = LinearScale::new(range.y, canvas.height - padding.vertical, padding.vertical);
        Self { x_scale, y_scale }
    }

    #[must_use]
    pub fn x_scale(self) -> LinearScale {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(self) -> LinearScale {
        self.y_scale
    }

    #[must_use]
    pub fn project(self, sample: Sample) -> PixelPoint {
        PixelPoint::new(
            self.x_scale.domain_to_pixel(sample.date),
            self.y_scale.domain_to_pixel(sample.value),
        )
    }

    /// Projects every sample, preserving order.
    #[must_use]
    pub fn project_all(self, samples: &[Sample]) -> Vec<PixelPoint> {
        // Large series may be projected in parallel; output is identical.
        #[cfg(feature = "parallel-projection")]
        {
            samples.par_iter().map(|sample| self.project(*sample)).collect()
        }

        #[cfg(not(feature = "parallel-projection"))]
        {
            samples.iter().map(|sample| self.project(*sample)).collect()
        }
    }

    #[must_use]
    pub fn date_at(self, x: f64) -> f64 {
        self.x_scale.pixel_to_domain(x)
    }

    #[must_use]
    pub fn value_at(self, y: f64) -> f64 {
        self.y_scale.pixel_to_domain(y)
    }
}
