use crate::extensions::{DeckEvent, PluginContext};
use crate::render::Renderer;

use super::DeckEngine;

impl<R: Renderer> DeckEngine<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            current_slide: self.state.current_slide(),
            total_slides: self.state.total_slides(),
            mode: self.state.mode(),
            overview_active: self.state.overview_active(),
            mounted_charts: self.charts.instance_count(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: DeckEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }
}
