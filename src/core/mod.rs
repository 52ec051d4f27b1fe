pub mod line_path;
pub mod path;
pub mod primitives;
pub mod projection;
pub mod range;
pub mod sampler;
pub mod scale;
pub mod transition;
pub mod types;
pub mod windowing;

pub use line_path::{
    DEFAULT_SMOOTHING, GraphGeometry, GraphPaths, PathOptions, build_fill_curve,
    build_graph_geometry, build_graph_paths, build_line_curve,
};
pub use path::{Curve, PathCommand};
pub use projection::GraphProjection;
pub use range::{AxisBounds, GraphRange, RangeOverride, resolve_range};
pub use sampler::{nearest_pixel_index, y_for_x};
pub use scale::LinearScale;
pub use transition::{CurvePair, CurveTransition, interpolate_curves};
pub use types::{CanvasSize, Padding, PixelPoint, Sample};
pub use windowing::points_in_range;
