use crate::error::{RangeError, RangeResult};
use crate::extensions::RangePlugin;
use crate::render::Renderer;

use super::RangeSelectorEngine;

impl<R: Renderer> RangeSelectorEngine<R> {
    /// Registers a plugin under its unique, non-empty id.
    pub fn register_plugin(&mut self, plugin: Box<dyn RangePlugin>) -> RangeResult<()> {
        let plugin_id = plugin.id();
        if plugin_id.is_empty() {
            return Err(RangeError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.has_plugin(plugin_id) {
            return Err(RangeError::InvalidData(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }
        self.plugins.push(plugin);
        Ok(())
    }

    /// Removes a plugin by id. Returns `true` when one was removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        let before = self.plugins.len();
        self.plugins.retain(|plugin| plugin.id() != plugin_id);
        self.plugins.len() != before
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin.id() == plugin_id)
    }
}
