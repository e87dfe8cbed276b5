use smallvec::SmallVec;

use crate::core::{ItemKind, ItemRef, Point};
use crate::error::TimelineResult;
use crate::interaction::{PointerTarget, ResizeMode};
use crate::render::Renderer;

use super::item_geometry::{artist_span_geometry, event_geometry, period_geometry};
use super::{ScreenRect, TimelineEditor};

/// Interactive screen regions of one item.
#[derive(Debug, Clone, PartialEq)]
pub struct HitRegion {
    pub item: ItemRef,
    pub body: ScreenRect,
    /// Resize handles, checked before the body.
    pub handles: SmallVec<[(ScreenRect, ResizeMode); 2]>,
}

impl HitRegion {
    #[must_use]
    pub fn resolve(&self, pointer: Point) -> Option<PointerTarget> {
        if let Some((_, mode)) = self.handles.iter().find(|(rect, _)| rect.contains(pointer)) {
            return Some(PointerTarget::ResizeHandle(self.item, *mode));
        }
        self.body
            .contains(pointer)
            .then_some(PointerTarget::ItemBody(self.item))
    }
}

impl<R: Renderer> TimelineEditor<R> {
    /// Hit regions of every item, in paint order (bottom-most first).
    pub fn item_regions(&self) -> TimelineResult<Vec<HitRegion>> {
        let scale = self.year_scale;
        let offset = self.viewport_offset;
        let style = &self.render_style;
        let mut regions = Vec::with_capacity(self.store.total_len());

        for (id, period) in self.store.periods() {
            let geometry = period_geometry(scale, offset, style, period)?;
            let mut handles = SmallVec::new();
            handles.push((geometry.resize_strip, ResizeMode::Vertical));
            regions.push(HitRegion {
                item: ItemRef::new(ItemKind::Period, id),
                body: geometry.bar,
                handles,
            });
        }

        for (id, span) in self.store.artist_spans() {
            let geometry = artist_span_geometry(scale, offset, style, span)?;
            regions.push(HitRegion {
                item: ItemRef::new(ItemKind::ArtistSpan, id),
                body: geometry.hit_box,
                handles: SmallVec::new(),
            });
        }

        let timeline_offset_y = self.config.timeline_offset_y;
        for (id, event) in self.store.events() {
            let geometry = event_geometry(scale, offset, timeline_offset_y, style, event)?;
            let mut handles = SmallVec::new();
            handles.push((geometry.corner_handle, ResizeMode::Proportional));
            handles.push((geometry.resize_strip, ResizeMode::Vertical));
            regions.push(HitRegion {
                item: ItemRef::new(ItemKind::Event, id),
                body: geometry.frame,
                handles,
            });
        }

        Ok(regions)
    }

    /// Resolves what lies under a screen position, topmost item first.
    pub fn hit_test(&self, x: f64, y: f64) -> TimelineResult<PointerTarget> {
        let pointer = Point::new(x, y);
        let regions = self.item_regions()?;
        Ok(regions
            .iter()
            .rev()
            .find_map(|region| region.resolve(pointer))
            .unwrap_or(PointerTarget::Canvas))
    }
}
