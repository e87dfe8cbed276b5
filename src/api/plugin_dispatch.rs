use crate::core::ItemKind;
use crate::extensions::PluginContext;
use crate::render::Renderer;

use super::{PluginEvent, TimelineEditor};

impl<R: Renderer> TimelineEditor<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            year_range: self.year_scale.year_range(),
            viewport_offset: self.viewport_offset,
            events_len: self.store.len(ItemKind::Event),
            periods_len: self.store.len(ItemKind::Period),
            artist_spans_len: self.store.len(ItemKind::ArtistSpan),
            selection: self.selection,
            interaction_mode: self.interaction.mode(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }
}
