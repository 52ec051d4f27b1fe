use crate::error::{GraphError, GraphResult};
use crate::extensions::GraphPlugin;
use crate::render::Renderer;

use super::GraphEngine;

impl<R: Renderer> GraphEngine<R> {
    /// Registers an observer. Ids must be non-empty and unique; plugins are
    /// notified in registration order.
    pub fn register_plugin(&mut self, plugin: Box<dyn GraphPlugin>) -> GraphResult<()> {
        match plugin.id() {
            "" => Err(GraphError::InvalidData(
                "plugin id must not be empty".to_owned(),
            )),
            id if self.plugin_position(id).is_some() => Err(GraphError::InvalidData(format!(
                "plugin `{id}` is already registered"
            ))),
            _ => {
                self.plugins.push(plugin);
                Ok(())
            }
        }
    }

    /// Returns `true` when a plugin with `plugin_id` was removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        self.plugin_position(plugin_id)
            .map(|position| self.plugins.remove(position))
            .is_some()
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugin_position(plugin_id).is_some()
    }

    fn plugin_position(&self, plugin_id: &str) -> Option<usize> {
        self.plugins.iter().position(|plugin| plugin.id() == plugin_id)
    }
}
