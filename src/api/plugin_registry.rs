use crate::error::{DeckError, DeckResult};
use crate::extensions::DeckPlugin;
use crate::render::Renderer;

use super::DeckEngine;

impl<R: Renderer> DeckEngine<R> {
    /// Registers a plugin with a unique, non-empty id.
    pub fn register_plugin(&mut self, plugin: Box<dyn DeckPlugin>) -> DeckResult<()> {
        let plugin_id = plugin.id().to_owned();
        if plugin_id.is_empty() {
            return Err(DeckError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.has_plugin(&plugin_id) {
            return Err(DeckError::InvalidData(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }
        self.plugins.push(plugin);
        Ok(())
    }

    /// Unregisters a plugin by id. Returns `true` when removed.
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
