use serde::{Deserialize, Serialize};

use crate::core::{CanvasSize, Curve, PixelPoint};
use crate::error::{GraphError, GraphResult};
use crate::render::SeriesStyle;

/// Everything a backend needs to draw one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesFrame {
    pub series_index: usize,
    pub id: String,
    pub line: Curve,
    pub fill: Option<Curve>,
    pub indicator: Option<PixelPoint>,
    pub style: SeriesStyle,
}

impl SeriesFrame {
    pub fn validate(&self) -> GraphResult<()> {
        self.style.validate()?;
        validate_curve(&self.line, "line")?;
        if let Some(fill) = &self.fill {
            validate_curve(fill, "fill")?;
        }
        if let Some(indicator) = self.indicator {
            if !indicator.x.is_finite() || !indicator.y.is_finite() {
                return Err(GraphError::InvalidData(
                    "indicator position must be finite".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

/// Backend-agnostic scene for one draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphFrame {
    pub canvas: CanvasSize,
    pub series: Vec<SeriesFrame>,
}

impl GraphFrame {
    #[must_use]
    pub fn new(canvas: CanvasSize) -> Self {
        Self {
            canvas,
            series: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_series(mut self, series: SeriesFrame) -> Self {
        self.series.push(series);
        self
    }

    pub fn validate(&self) -> GraphResult<()> {
        if !self.canvas.is_valid() {
            return Err(GraphError::InvalidCanvas {
                width: self.canvas.width,
                height: self.canvas.height,
            });
        }
        for series in &self.series {
            series.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|series| series.line.is_empty())
    }

    #[must_use]
    pub fn command_count(&self) -> usize {
        self.series
            .iter()
            .map(|series| series.line.len() + series.fill.as_ref().map_or(0, Curve::len))
            .sum()
    }
}

fn validate_curve(curve: &Curve, name: &str) -> GraphResult<()> {
    let finite = curve
        .commands()
        .iter()
        .flat_map(|command| command.points())
        .all(|point| point.x.is_finite() && point.y.is_finite());
    if !finite {
        return Err(GraphError::InvalidData(format!(
            "{name} path coordinates must be finite"
        )));
    }
    Ok(())
}
