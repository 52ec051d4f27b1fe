use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    pub fn validate(self) -> GraphResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(GraphError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// CSS `rgba(...)` notation with 8-bit color channels.
    #[must_use]
    pub fn to_css(self) -> String {
        let channel = |value: f64| (value * 255.0).round() as u8;
        format!(
            "rgba({},{},{},{:.3})",
            channel(self.red),
            channel(self.green),
            channel(self.blue),
            self.alpha
        )
    }
}

/// Vertical gradient drawn under the line, from the curve down to the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientFill {
    pub top: Color,
    pub bottom: Color,
}

impl GradientFill {
    /// Fades `color` from translucent at the top to transparent at the bottom.
    #[must_use]
    pub fn fade(color: Color) -> Self {
        Self {
            top: color.with_alpha(0.4),
            bottom: color.with_alpha(0.0),
        }
    }

    pub fn validate(self) -> GraphResult<()> {
        self.top.validate()?;
        self.bottom.validate()
    }
}

/// Visual style of one series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub stroke: Color,
    pub stroke_width: f64,
    /// Fill gradient; `None` fades from the stroke color when a fill is drawn.
    #[serde(default)]
    pub gradient: Option<GradientFill>,
    pub indicator_radius: f64,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            stroke: Color::rgb(0.133, 0.545, 0.980),
            stroke_width: 3.0,
            gradient: None,
            indicator_radius: 5.0,
        }
    }
}

impl SeriesStyle {
    #[must_use]
    pub fn with_stroke(mut self, stroke: Color, stroke_width: f64) -> Self {
        self.stroke = stroke;
        self.stroke_width = stroke_width;
        self
    }

    #[must_use]
    pub fn with_gradient(mut self, gradient: GradientFill) -> Self {
        self.gradient = Some(gradient);
        self
    }

    pub fn validate(self) -> GraphResult<()> {
        self.stroke.validate()?;
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(GraphError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        if !self.indicator_radius.is_finite() || self.indicator_radius < 0.0 {
            return Err(GraphError::InvalidData(
                "indicator radius must be finite and >= 0".to_owned(),
            ));
        }
        if let Some(gradient) = self.gradient {
            gradient.validate()?;
        }
        Ok(())
    }
}
