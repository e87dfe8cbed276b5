mod editor;
mod hit_test;
mod interaction_controller;
mod item_forms;
mod item_geometry;
mod plugin_dispatch;
mod plugin_registry;
mod render_frame_builder;
mod render_style;
mod selection_controller;
mod validation;

pub use editor::TimelineEditor;
pub use hit_test::HitRegion;
pub use item_forms::{
    ArtistSpanDraft, DEFAULT_EVENT_SIZE, DEFAULT_PERIOD_COLOR, DEFAULT_PERIOD_HEIGHT,
    DEFAULT_POSITION_Y, EventDraft, FormOutcome, FormRequest, ItemDraft, PeriodDraft,
};
pub use item_geometry::ScreenRect;
pub use render_style::RenderStyle;

pub use crate::extensions::{PluginContext, PluginEvent, TimelinePlugin};
pub use crate::interaction::{InteractionMode, PointerTarget, ResizeMode};
