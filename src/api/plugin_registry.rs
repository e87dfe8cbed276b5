//! Observer registry. Plugins receive every `PluginEvent` in registration
//! order; ids are the only handle hosts keep to remove them again.

use tracing::debug;

use crate::error::{TimelineError, TimelineResult};
use crate::extensions::TimelinePlugin;
use crate::render::Renderer;

use super::TimelineEditor;

impl<R: Renderer> TimelineEditor<R> {
    /// Adds an observer. Blank and duplicate ids are rejected.
    pub fn register_plugin(&mut self, plugin: Box<dyn TimelinePlugin>) -> TimelineResult<()> {
        let id = plugin.id();
        if id.trim().is_empty() {
            return Err(TimelineError::InvalidData("plugin id is blank".to_owned()));
        }
        if self.has_plugin(id) {
            return Err(TimelineError::InvalidData(format!(
                "plugin `{id}` already observes this editor"
            )));
        }
        debug!(plugin = id, "plugin registered");
        self.plugins.push(plugin);
        Ok(())
    }

    /// Removes the observer with `plugin_id`, keeping the others in order.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        let before = self.plugins.len();
        self.plugins.retain(|plugin| plugin.id() != plugin_id);
        let removed = self.plugins.len() != before;
        if removed {
            debug!(plugin = plugin_id, "plugin unregistered");
        }
        removed
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
