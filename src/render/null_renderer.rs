use crate::error::GraphResult;
use crate::render::{GraphFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests catch invalid geometry.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_series_count: usize,
    pub last_command_count: usize,
    pub render_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &GraphFrame) -> GraphResult<()> {
        frame.validate()?;
        self.last_series_count = frame.series.len();
        self.last_command_count = frame.command_count();
        self.render_count += 1;
        Ok(())
    }
}
