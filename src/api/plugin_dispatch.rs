use tracing::trace;

use crate::extensions::{GraphEvent, PluginContext};
use crate::render::Renderer;

use super::GraphEngine;

impl<R: Renderer> GraphEngine<R> {
    /// Read-only view handed to plugins alongside each event.
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            canvas: self.config.canvas,
            padding: self.config.padding,
            series_count: self.series.len(),
            gesture_mode: self.interaction.mode(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: GraphEvent) {
        if self.plugins.is_empty() {
            return;
        }
        trace!(?event, plugins = self.plugins.len(), "dispatch plugin event");
        let context = self.plugin_context();
        self.plugins
            .iter_mut()
            .for_each(|plugin| plugin.on_event(event, context));
    }
}
