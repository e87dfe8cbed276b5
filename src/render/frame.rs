use crate::core::{ItemRef, Viewport};
use crate::error::{TimelineError, TimelineResult};
use crate::render::{CirclePrimitive, ImagePrimitive, LinePrimitive, RectPrimitive, TextPrimitive};

/// Canvas layer a primitive group belongs to, in paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CanvasLayerKind {
    PageGuides,
    Grid,
    Axis,
    Items,
}

/// Primitives painted together. Within a group the paint order is
/// rects, images, lines, circles, texts.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveGroup {
    pub layer: CanvasLayerKind,
    /// Item this group renders, `None` for grid/axis content.
    pub item: Option<ItemRef>,
    pub rects: Vec<RectPrimitive>,
    pub images: Vec<ImagePrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl PrimitiveGroup {
    #[must_use]
    pub fn new(layer: CanvasLayerKind, item: Option<ItemRef>) -> Self {
        Self {
            layer,
            item,
            rects: Vec::new(),
            images: Vec::new(),
            lines: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
            && self.images.is_empty()
            && self.lines.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
    }

    pub fn validate(&self) -> TimelineResult<()> {
        for rect in &self.rects {
            rect.validate()?;
        }
        for image in &self.images {
            image.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }
}

/// Backend-agnostic scene for one timeline draw pass.
///
/// Groups are painted in order, so later groups cover earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub groups: Vec<PrimitiveGroup>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            groups: Vec::new(),
        }
    }

    /// Appends `group` unless it is empty.
    pub fn push_group(&mut self, group: PrimitiveGroup) {
        if !group.is_empty() {
            self.groups.push(group);
        }
    }

    #[must_use]
    pub fn group_for(&self, item: ItemRef) -> Option<&PrimitiveGroup> {
        self.groups.iter().find(|group| group.item == Some(item))
    }

    pub fn layer_groups(&self, layer: CanvasLayerKind) -> impl Iterator<Item = &PrimitiveGroup> {
        self.groups.iter().filter(move |group| group.layer == layer)
    }

    /// Items in paint order.
    pub fn item_order(&self) -> impl Iterator<Item = ItemRef> + '_ {
        self.groups.iter().filter_map(|group| group.item)
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if !self.viewport.is_valid() {
            return Err(TimelineError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        for group in &self.groups {
            group.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(PrimitiveGroup::is_empty)
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.groups.iter().map(|group| group.lines.len()).sum()
    }

    #[must_use]
    pub fn rect_count(&self) -> usize {
        self.groups.iter().map(|group| group.rects.len()).sum()
    }

    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.groups.iter().map(|group| group.circles.len()).sum()
    }

    #[must_use]
    pub fn image_count(&self) -> usize {
        self.groups.iter().map(|group| group.images.len()).sum()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.groups.iter().map(|group| group.texts.len()).sum()
    }
}
