use serde::{Deserialize, Serialize};

use crate::core::{ItemRef, Point};
use crate::interaction::InteractionMode;

/// Read-only editor snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub year_range: (i64, i64),
    pub viewport_offset: Point,
    pub events_len: usize,
    pub periods_len: usize,
    pub artist_spans_len: usize,
    pub selection: Option<ItemRef>,
    pub interaction_mode: InteractionMode,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    ItemInserted { item: ItemRef },
    ItemUpdated { item: ItemRef },
    ItemDeleted { item: ItemRef },
    SelectionChanged { selection: Option<ItemRef> },
    InteractionStarted { mode: InteractionMode },
    InteractionEnded { mode: InteractionMode },
    ViewportPanned { offset: Point },
    ConfigChanged,
    Rendered,
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins observe events and read editor context without mutating the
/// store directly.
pub trait TimelinePlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, context: PluginContext);
}
