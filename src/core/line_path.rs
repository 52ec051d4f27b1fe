use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::primitives::lerp;
use crate::core::{
    CanvasSize, Curve, GraphProjection, GraphRange, Padding, PathCommand, PixelPoint, Sample,
    points_in_range,
};

/// Default tangent blend: full monotone smoothing.
pub const DEFAULT_SMOOTHING: f64 = 1.0;

/// Knobs for one path build pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathOptions {
    #[serde(default)]
    pub padding: Padding,
    /// Blend between straight chords (`0.0`) and smoothed tangents (`1.0`).
    #[serde(default = "default_smoothing")]
    pub smoothing: f64,
    /// Also emit a closed variant of the line for gradient fills.
    #[serde(default)]
    pub fill_gradient: bool,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            padding: Padding::default(),
            smoothing: DEFAULT_SMOOTHING,
            fill_gradient: false,
        }
    }
}

impl PathOptions {
    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
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
}

fn default_smoothing() -> f64 {
    DEFAULT_SMOOTHING
}

/// Stroke path plus the optional closed fill path.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphPaths {
    pub line: Curve,
    pub fill: Option<Curve>,
}

impl GraphPaths {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }
}

/// Everything produced by one build: the in-range samples, their pixel
/// positions and the resulting paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphGeometry {
    pub projection: GraphProjection,
    pub visible: Vec<Sample>,
    pub pixels: Vec<PixelPoint>,
    pub paths: GraphPaths,
}

/// Filters, projects and smooths `samples` into renderable paths.
#[must_use]
pub fn build_graph_paths(
    samples: &[Sample],
    range: GraphRange,
    canvas: CanvasSize,
    options: PathOptions,
) -> GraphPaths {
    build_graph_geometry(samples, range, canvas, options).paths
}

/// Like [`build_graph_paths`] but keeps the intermediate geometry used for
/// hit-testing.
#[must_use]
pub fn build_graph_geometry(
    samples: &[Sample],
    range: GraphRange,
    canvas: CanvasSize,
    options: PathOptions,
) -> GraphGeometry {
    if !options.padding.fits(canvas) {
        warn!(
            horizontal = options.padding.horizontal,
            vertical = options.padding.vertical,
            width = canvas.width,
            height = canvas.height,
            "padding leaves no drawable area; geometry will be clipped"
        );
    }

    let projection = GraphProjection::new(range, canvas, options.padding);
    let visible = points_in_range(samples, range);
    let pixels = projection.project_all(&visible);

    // A lone sample, or samples sharing one date, have no horizontal extent:
    // draw a level line across the drawable width at the latest value.
    let collapsed = pixels.len() == 1 || range.x.is_degenerate();
    let line = match pixels.last() {
        Some(latest) if collapsed => {
            let (left, right) = projection.x_scale().pixel_range();
            build_line_curve(
                &[
                    PixelPoint::new(left, latest.y),
                    PixelPoint::new(right, latest.y),
                ],
                options.smoothing,
            )
        }
        _ => build_line_curve(&pixels, options.smoothing),
    };
    let fill = options
        .fill_gradient
        .then(|| build_fill_curve(&line, canvas.height));

    GraphGeometry {
        projection,
        visible,
        pixels,
        paths: GraphPaths { line, fill },
    }
}

/// Builds a cubic Bezier chain through every point.
///
/// Control points sit at one and two thirds of each segment's horizontal
/// span, so segments stay monotonic in x for ascending input. Tangents are a
/// distance-weighted average of the neighbouring secants, limited so that no
/// control point leaves the vertical span of its segment. The curve therefore
/// never overshoots the data extremes.
#[must_use]
pub fn build_line_curve(points: &[PixelPoint], smoothing: f64) -> Curve {
    let Some(first) = points.first() else {
        return Curve::empty();
    };

    let smoothing = normalize_smoothing(smoothing);
    let mut curve = Curve::from_commands(Vec::with_capacity(points.len()));
    curve.push(PathCommand::MoveTo { to: *first });
    if points.len() < 2 {
        return curve;
    }

    let tangents = monotone_tangents(points);
    for (index, pair) in points.windows(2).enumerate() {
        let (start, end) = (pair[0], pair[1]);
        let third = (end.x - start.x) / 3.0;
        let chord = secant(start, end);
        let start_tangent = lerp(chord, tangents[index], smoothing);
        let end_tangent = lerp(chord, tangents[index + 1], smoothing);

        curve.push(PathCommand::CubicTo {
            control1: PixelPoint::new(start.x + third, start.y + start_tangent * third),
            control2: PixelPoint::new(end.x - third, end.y - end_tangent * third),
            to: end,
        });
    }
    curve
}

/// Closes `line` against `baseline_y`: straight down at the last x, back along
/// the baseline to the first x.
#[must_use]
pub fn build_fill_curve(line: &Curve, baseline_y: f64) -> Curve {
    let (Some(start), Some(end)) = (line.start_point(), line.end_point()) else {
        return Curve::empty();
    };

    let mut fill = line.clone();
    fill.push(PathCommand::LineTo {
        to: PixelPoint::new(end.x, baseline_y),
    });
    fill.push(PathCommand::LineTo {
        to: PixelPoint::new(start.x, baseline_y),
    });
    fill.push(PathCommand::Close);
    fill
}

fn normalize_smoothing(smoothing: f64) -> f64 {
    if smoothing.is_finite() {
        smoothing.clamp(0.0, 1.0)
    } else {
        DEFAULT_SMOOTHING
    }
}

fn secant(start: PixelPoint, end: PixelPoint) -> f64 {
    let dx = end.x - start.x;
    if dx == 0.0 {
        return 0.0;
    }
    (end.y - start.y) / dx
}

fn monotone_tangents(points: &[PixelPoint]) -> Vec<f64> {
    let secants: Vec<f64> = points.windows(2).map(|pair| secant(pair[0], pair[1])).collect();
    let count = points.len();
    if count == 2 {
        return vec![secants[0]; 2];
    }

    let mut tangents = vec![0.0; count];
    for index in 1..count - 1 {
        let before = points[index].x - points[index - 1].x;
        let after = points[index + 1].x - points[index].x;
        tangents[index] = interior_tangent(secants[index - 1], secants[index], before, after);
    }
    tangents[0] = endpoint_tangent(secants[0], tangents[1]);
    tangents[count - 1] = endpoint_tangent(secants[count - 2], tangents[count - 2]);
    tangents
}

fn interior_tangent(incoming: f64, outgoing: f64, before: f64, after: f64) -> f64 {
    // Local extremum or flat neighbour: level tangent.
    if incoming * outgoing <= 0.0 {
        return 0.0;
    }

    let weight = before + after;
    let estimate = if weight == 0.0 {
        (incoming + outgoing) / 2.0
    } else {
        (incoming * after + outgoing * before) / weight
    };

    incoming.signum()
        * (2.0 * incoming.abs())
            .min(2.0 * outgoing.abs())
            .min(estimate.abs())
}

fn endpoint_tangent(chord: f64, neighbour: f64) -> f64 {
    (3.0 * chord - neighbour) / 2.0
}
