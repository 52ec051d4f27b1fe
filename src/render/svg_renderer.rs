use std::fmt::Write as _;

use crate::error::GraphResult;
use crate::render::{GradientFill, GraphFrame, Renderer, SeriesFrame};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub lines_drawn: usize,
    pub fills_drawn: usize,
    pub indicators_drawn: usize,
}

/// Renders frames into a standalone SVG document.
///
/// Useful for headless snapshots and for hosts that draw SVG path data.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    /// Document produced by the most recent render pass.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &GraphFrame) -> GraphResult<()> {
        frame.validate()?;

        let mut stats = SvgRenderStats::default();
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = frame.canvas.width,
            h = frame.canvas.height,
        );

        for series in &frame.series {
            write_series(&mut out, series, &mut stats);
        }

        out.push_str("</svg>\n");
        self.document = out;
        self.last_stats = stats;
        Ok(())
    }
}

fn write_series(out: &mut String, series: &SeriesFrame, stats: &mut SvgRenderStats) {
    let style = series.style;

    if let Some(fill) = &series.fill {
        // Without an explicit gradient the fill fades out from the stroke color.
        let gradient = style
            .gradient
            .unwrap_or_else(|| GradientFill::fade(style.stroke));
        if !fill.is_empty() {
            let gradient_id = format!("fill-{}", series.series_index);
            let _ = writeln!(
                out,
                r#"<defs><linearGradient id="{gradient_id}" x1="0" y1="0" x2="0" y2="1"><stop offset="0" stop-color="{}"/><stop offset="1" stop-color="{}"/></linearGradient></defs>"#,
                gradient.top.to_css(),
                gradient.bottom.to_css(),
            );
            let _ = writeln!(
                out,
                r#"<path d="{}" fill="url(#{gradient_id})" stroke="none"/>"#,
                fill.to_svg_path_data(),
            );
            stats.fills_drawn += 1;
        }
    }

    if !series.line.is_empty() {
        let _ = writeln!(
            out,
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
            series.line.to_svg_path_data(),
            style.stroke.to_css(),
            style.stroke_width,
        );
        stats.lines_drawn += 1;
    }

    if let Some(indicator) = series.indicator {
        let _ = writeln!(
            out,
            r#"<circle cx="{:.3}" cy="{:.3}" r="{}" fill="{}"/>"#,
            indicator.x,
            indicator.y,
            style.indicator_radius,
            style.stroke.to_css(),
        );
        stats.indicators_drawn += 1;
    }
}
