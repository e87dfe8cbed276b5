mod frame;
mod null_renderer;
mod primitives;

pub use frame::{CanvasLayerKind, PrimitiveGroup, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, ImagePrimitive, LinePrimitive, LineStrokeStyle, RectPrimitive,
    TextHAlign, TextPrimitive,
};

use crate::error::TimelineResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from the item store and the interaction state.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> TimelineResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
