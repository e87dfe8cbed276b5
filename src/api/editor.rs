use tracing::{debug, trace};

use crate::core::{ItemRef, ItemStore, Point, TimelineConfig, YearScale};
use crate::error::TimelineResult;
use crate::extensions::TimelinePlugin;
use crate::interaction::{InteractionState, PointerCapture, PointerCaptureHost};
use crate::render::Renderer;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::validation::{validate_pointer, validate_render_style};
use super::{PluginEvent, RenderStyle};

/// Main orchestration facade consumed by host applications.
///
/// `TimelineEditor` owns the timeline config, the item store, the selection,
/// the pointer interaction state, the viewport offset and the renderer.
/// Hosts feed it pointer events and form submissions and draw the frames it
/// builds.
pub struct TimelineEditor<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: TimelineConfig,
    pub(super) year_scale: YearScale,
    pub(super) store: ItemStore,
    pub(super) selection: Option<ItemRef>,
    pub(super) interaction: InteractionState,
    pub(super) viewport_offset: Point,
    pub(super) capture: PointerCapture,
    pub(super) render_style: RenderStyle,
    pub(super) plugins: Vec<Box<dyn TimelinePlugin>>,
}

impl<R: Renderer> TimelineEditor<R> {
    pub fn new(renderer: R, config: TimelineConfig) -> TimelineResult<Self> {
        let config = config.validate()?;
        let year_scale = YearScale::from_config(config)?;
        debug!(
            start_year = config.start_year,
            end_year = config.end_year,
            scale = config.scale,
            "timeline editor created"
        );

        Ok(Self {
            renderer,
            config,
            year_scale,
            store: ItemStore::new(),
            selection: None,
            interaction: InteractionState::Idle,
            viewport_offset: Point::default(),
            capture: PointerCapture::default(),
            render_style: RenderStyle::default(),
            plugins: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> TimelineConfig {
        self.config
    }

    /// Replaces the whole config. Degenerate ranges are rejected and the
    /// previous config stays active.
    pub fn set_config(&mut self, config: TimelineConfig) -> TimelineResult<()> {
        let config = config.validate()?;
        self.year_scale = YearScale::from_config(config)?;
        self.config = config;
        debug!(
            start_year = config.start_year,
            end_year = config.end_year,
            scale = config.scale,
            "timeline config replaced"
        );
        self.emit_plugin_event(PluginEvent::ConfigChanged);
        Ok(())
    }

    #[must_use]
    pub fn year_scale(&self) -> YearScale {
        self.year_scale
    }

    pub fn map_year_to_x(&self, year: f64) -> TimelineResult<f64> {
        self.year_scale.year_to_x(year)
    }

    pub fn map_x_to_year(&self, x: f64) -> TimelineResult<f64> {
        self.year_scale.x_to_year(x)
    }

    #[must_use]
    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    #[must_use]
    pub fn viewport_offset(&self) -> Point {
        self.viewport_offset
    }

    /// Moves the viewport directly (for "reset view" style host commands).
    pub fn set_viewport_offset(&mut self, offset: Point) -> TimelineResult<()> {
        let offset = validate_pointer(offset)?;
        self.viewport_offset = offset;
        self.emit_plugin_event(PluginEvent::ViewportPanned { offset });
        Ok(())
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.render_style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> TimelineResult<()> {
        self.render_style = validate_render_style(style)?;
        Ok(())
    }

    /// Installs the host hook that owns the pointer move/up listeners.
    ///
    /// Listeners held by the previous host are released first.
    pub fn set_pointer_capture_host(&mut self, host: Box<dyn PointerCaptureHost>) {
        self.capture.replace_host(host);
        if !self.interaction.is_idle() {
            self.capture.acquire();
        }
    }

    #[must_use]
    pub fn pointer_capture_active(&self) -> bool {
        self.capture.is_attached()
    }

    pub fn render(&mut self) -> TimelineResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)?;
        trace!(groups = frame.groups.len(), "timeline frame rendered");
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    /// Renders the frame into an external cairo context.
    ///
    /// Used by GTK draw callbacks; the renderer stays unaware of GTK.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> TimelineResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        trace!(groups = frame.groups.len(), "timeline frame rendered on cairo context");
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(mut self) -> R {
        self.teardown();
        let Self { renderer, .. } = self;
        renderer
    }
}
