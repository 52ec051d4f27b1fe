mod frame;
mod null_renderer;
mod primitives;
mod svg_renderer;

pub use frame::{GraphFrame, SeriesFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, GradientFill, SeriesStyle};
pub use svg_renderer::{SvgRenderStats, SvgRenderer};

use crate::error::GraphResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `GraphFrame`, so drawing code stays
/// isolated from path construction and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &GraphFrame) -> GraphResult<()>;
}
