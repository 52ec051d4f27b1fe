use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::{PathCommand, PixelPoint};

const BISECTION_ITERATIONS: usize = 64;
const X_TOLERANCE: f64 = 1e-9;
/// Segments narrower than this are treated as vertical runs and skipped.
const MIN_SEGMENT_WIDTH: f64 = 1e-9;

/// Returns the curve's vertical pixel position at horizontal pixel `x`.
///
/// The first segment whose horizontal span brackets `x` answers the query.
/// `None` means the query lies outside the plotted extent (or the command
/// list is empty), which callers treat as "pointer outside plotted data".
#[must_use]
pub fn y_for_x(commands: &[PathCommand], x: f64) -> Option<f64> {
    if !x.is_finite() {
        return None;
    }

    let mut pen: Option<PixelPoint> = None;
    let mut subpath_start: Option<PixelPoint> = None;
    for command in commands {
        match *command {
            PathCommand::MoveTo { to } => {
                pen = Some(to);
                subpath_start = Some(to);
            }
            PathCommand::CubicTo {
                control1,
                control2,
                to,
            } => {
                if let Some(y) =
                    pen.and_then(|start| sample_cubic([start, control1, control2, to], x))
                {
                    return Some(y);
                }
                pen = Some(to);
            }
            PathCommand::LineTo { to } => {
                if let Some(y) = pen.and_then(|start| sample_line(start, to, x)) {
                    return Some(y);
                }
                pen = Some(to);
            }
            PathCommand::Close => {
                pen = subpath_start;
            }
        }
    }
    None
}

/// Index of the pixel point horizontally closest to `x`.
///
/// `pixels` must be sorted by ascending x. Ties resolve to the left neighbour.
#[must_use]
pub fn nearest_pixel_index(pixels: &[PixelPoint], x: f64) -> Option<usize> {
    if !x.is_finite() {
        return None;
    }

    let right = pixels.partition_point(|point| point.x < x);
    let candidates: SmallVec<[usize; 2]> = [right.checked_sub(1), Some(right)]
        .into_iter()
        .flatten()
        .filter(|&index| index < pixels.len())
        .collect();

    candidates
        .into_iter()
        .min_by_key(|&index| OrderedFloat((pixels[index].x - x).abs()))
}

fn sample_line(start: PixelPoint, end: PixelPoint, x: f64) -> Option<f64> {
    let (low, high) = (start.x.min(end.x), start.x.max(end.x));
    if high - low < MIN_SEGMENT_WIDTH || x < low || x > high {
        return None;
    }
    let t = (x - start.x) / (end.x - start.x);
    Some(start.y + (end.y - start.y) * t)
}

fn sample_cubic(points: [PixelPoint; 4], x: f64) -> Option<f64> {
    let [start, control1, control2, end] = points;
    let (low, high) = (start.x.min(end.x), start.x.max(end.x));
    if high - low < MIN_SEGMENT_WIDTH || x < low || x > high {
        return None;
    }
    if x == start.x {
        return Some(start.y);
    }
    if x == end.x {
        return Some(end.y);
    }

    let t = solve_t_for_x([start.x, control1.x, control2.x, end.x], x);
    Some(cubic_at([start.y, control1.y, control2.y, end.y], t))
}

/// Bisection on the x-component; assumes x is monotonic along the segment.
fn solve_t_for_x(xs: [f64; 4], x: f64) -> f64 {
    let increasing = xs[3] >= xs[0];
    let (mut low, mut high) = (0.0_f64, 1.0_f64);
    let mut t = 0.5;
    for _ in 0..BISECTION_ITERATIONS {
        t = (low + high) / 2.0;
        let value = cubic_at(xs, t);
        if (value - x).abs() <= X_TOLERANCE {
            break;
        }
        if (value < x) == increasing {
            low = t;
        } else {
            high = t;
        }
    }
    t
}

fn cubic_at(values: [f64; 4], t: f64) -> f64 {
    let mt = 1.0 - t;
    mt * mt * mt * values[0]
        + 3.0 * mt * mt * t * values[1]
        + 3.0 * mt * t * t * values[2]
        + t * t * t * values[3]
}
