use tracing::{debug, warn};

use crate::core::{Dimensions, ItemRef, Point, TimelineItem};
use crate::error::{TimelineError, TimelineResult};
use crate::interaction::{
    InteractionMode, InteractionState, MIN_EVENT_HEIGHT, MIN_PERIOD_HEIGHT, PointerTarget,
    ResizeMode, dragged_position_y, dragged_year_range, panned_offset, resized_height,
    resized_proportionally,
};
use crate::render::Renderer;

use super::validation::validate_pointer;
use super::{PluginEvent, TimelineEditor};

impl<R: Renderer> TimelineEditor<R> {
    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn interaction_state(&self) -> InteractionState {
        self.interaction
    }

    /// Starts a gesture at a screen position, resolving the target by hit test.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> TimelineResult<InteractionMode> {
        if !self.interaction.is_idle() {
            warn!(mode = ?self.interaction.mode(), "pointer down ignored: interaction active");
            return Err(TimelineError::InteractionInProgress);
        }
        let target = self.hit_test(x, y)?;
        self.pointer_down_on(target, x, y)
    }

    /// Starts a gesture on a target resolved by the host.
    ///
    /// Pressing an item selects it; pressing the empty canvas clears the
    /// selection and starts panning. Fails while another gesture is active.
    pub fn pointer_down_on(
        &mut self,
        target: PointerTarget,
        x: f64,
        y: f64,
    ) -> TimelineResult<InteractionMode> {
        if !self.interaction.is_idle() {
            warn!(mode = ?self.interaction.mode(), "pointer down ignored: interaction active");
            return Err(TimelineError::InteractionInProgress);
        }
        let pointer = validate_pointer(Point::new(x, y))?;

        let next = match target {
            PointerTarget::Canvas => {
                self.clear_selection();
                InteractionState::PanningViewport {
                    anchor: pointer.minus(self.viewport_offset),
                }
            }
            PointerTarget::ItemBody(item) => {
                let state = self.drag_start_state(item, pointer)?;
                self.select(item)?;
                state
            }
            PointerTarget::ResizeHandle(item, mode) => {
                let start = self.resize_start_dimensions(item, mode)?;
                self.select(item)?;
                InteractionState::ResizingItem {
                    target: item,
                    mode,
                    pointer_anchor: pointer,
                    start,
                }
            }
        };

        self.interaction = next;
        self.capture.acquire();
        let mode = next.mode();
        debug!(?mode, ?target, "interaction started");
        self.emit_plugin_event(PluginEvent::InteractionStarted { mode });
        Ok(mode)
    }

    /// Applies pointer motion to the active gesture.
    ///
    /// Never fails: moves without an attached capture are ignored and a
    /// move that cannot be applied (for example on an item deleted
    /// mid-drag) is dropped.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if !self.capture.is_attached() {
            return;
        }
        let pointer = Point::new(x, y);
        if !pointer.is_finite() {
            debug!("pointer move ignored: non-finite position");
            return;
        }

        match self.interaction {
            InteractionState::Idle => {}
            InteractionState::PanningViewport { anchor } => {
                let offset = panned_offset(pointer, anchor);
                self.viewport_offset = offset;
                self.emit_plugin_event(PluginEvent::ViewportPanned { offset });
            }
            InteractionState::DraggingItem {
                target,
                anchor,
                span_years,
            } => {
                if let Err(err) = self.apply_drag(target, anchor, span_years, pointer) {
                    debug!(error = %err, "drag move dropped");
                }
            }
            InteractionState::ResizingItem {
                target,
                mode,
                pointer_anchor,
                start,
            } => {
                if let Err(err) = self.apply_resize(target, mode, pointer_anchor, start, pointer) {
                    debug!(error = %err, "resize move dropped");
                }
            }
        }
    }

    /// Ends the active gesture, keeping whatever the last move applied.
    pub fn pointer_up(&mut self) {
        self.finish_interaction("pointer up");
    }

    /// Releases pointer listeners and returns to idle, e.g. when the host
    /// view is destroyed mid-gesture. Nothing is rolled back.
    pub fn teardown(&mut self) {
        self.finish_interaction("teardown");
    }

    fn finish_interaction(&mut self, reason: &'static str) {
        let previous = std::mem::take(&mut self.interaction);
        self.capture.release();
        if previous.is_idle() {
            return;
        }
        let mode = previous.mode();
        debug!(?mode, reason, "interaction ended");
        self.emit_plugin_event(PluginEvent::InteractionEnded { mode });
    }

    fn drag_start_state(&self, item: ItemRef, pointer: Point) -> TimelineResult<InteractionState> {
        let record = self.store.get(item).ok_or_else(|| item.not_found())?;
        let canvas_pointer = pointer.minus(self.viewport_offset);
        let item_x = self.year_scale.year_to_x(record.anchor_year() as f64)?;
        let span_years = match &record {
            TimelineItem::Event(_) => 0,
            TimelineItem::Period(period) => period.duration_years(),
            TimelineItem::ArtistSpan(span) => span.lifespan_years(),
        };
        Ok(InteractionState::DraggingItem {
            target: item,
            anchor: Point::new(
                canvas_pointer.x - item_x,
                canvas_pointer.y - record.position_y(),
            ),
            span_years,
        })
    }

    fn resize_start_dimensions(
        &self,
        item: ItemRef,
        mode: ResizeMode,
    ) -> TimelineResult<Dimensions> {
        let record = self.store.get(item).ok_or_else(|| item.not_found())?;
        match (&record, mode) {
            (TimelineItem::Event(event), _) => Ok(Dimensions::new(event.width, event.height)),
            (TimelineItem::Period(period), ResizeMode::Vertical) => {
                let width = self
                    .year_scale
                    .years_to_width(period.duration_years() as f64)?;
                Ok(Dimensions::new(width.max(0.0), period.height))
            }
            (TimelineItem::Period(_), ResizeMode::Proportional) => Err(TimelineError::InvalidData(
                "periods only support vertical resize".to_owned(),
            )),
            (TimelineItem::ArtistSpan(_), _) => Err(TimelineError::InvalidData(
                "artist spans are not resizable".to_owned(),
            )),
        }
    }

    fn apply_drag(
        &mut self,
        target: ItemRef,
        anchor: Point,
        span_years: i64,
        pointer: Point,
    ) -> TimelineResult<()> {
        let mut record = self.store.get(target).ok_or_else(|| target.not_found())?;
        let canvas_pointer = pointer.minus(self.viewport_offset);
        let position_y = dragged_position_y(canvas_pointer.y, anchor.y);

        match &mut record {
            TimelineItem::Event(event) => {
                event.position_y = position_y;
            }
            TimelineItem::Period(period) => {
                let (start, end) =
                    dragged_year_range(self.year_scale, canvas_pointer.x, anchor.x, span_years)?;
                period.start_year = start;
                period.end_year = end;
                period.position_y = position_y;
            }
            TimelineItem::ArtistSpan(span) => {
                let (birth, death) =
                    dragged_year_range(self.year_scale, canvas_pointer.x, anchor.x, span_years)?;
                span.birth_year = birth;
                span.death_year = death;
                span.position_y = position_y;
            }
        }

        self.store.update(target, record)?;
        self.emit_plugin_event(PluginEvent::ItemUpdated { item: target });
        Ok(())
    }

    fn apply_resize(
        &mut self,
        target: ItemRef,
        mode: ResizeMode,
        pointer_anchor: Point,
        start: Dimensions,
        pointer: Point,
    ) -> TimelineResult<()> {
        let mut record = self.store.get(target).ok_or_else(|| target.not_found())?;

        match (&mut record, mode) {
            (TimelineItem::Event(event), ResizeMode::Vertical) => {
                event.height =
                    resized_height(start.height, pointer_anchor.y, pointer.y, MIN_EVENT_HEIGHT);
            }
            (TimelineItem::Event(event), ResizeMode::Proportional) => {
                let resized = resized_proportionally(start, pointer_anchor, pointer);
                event.width = resized.width;
                event.height = resized.height;
            }
            (TimelineItem::Period(period), ResizeMode::Vertical) => {
                period.height =
                    resized_height(start.height, pointer_anchor.y, pointer.y, MIN_PERIOD_HEIGHT);
            }
            (TimelineItem::Period(_), ResizeMode::Proportional)
            | (TimelineItem::ArtistSpan(_), _) => {
                return Err(TimelineError::InvalidData(format!(
                    "{} does not support {mode:?} resize",
                    target.kind
                )));
            }
        }

        self.store.update(target, record)?;
        self.emit_plugin_event(PluginEvent::ItemUpdated { item: target });
        Ok(())
    }
}
