//! Pointer interaction state machine.
//!
//! ```text
//! Idle -> PanningViewport   (pointer down on empty canvas)
//! Idle -> DraggingItem      (pointer down on an item body)
//! Idle -> ResizingItem      (pointer down on a resize handle)
//! Any  -> Idle              (pointer up; keeps the last applied move)
//! ```
//!
//! Only one interaction can be active. The motion rules below are pure and are
//! applied by the editor, which owns the item store and the viewport offset.

mod capture;

pub use capture::{NoopCaptureHost, PointerCapture, PointerCaptureHost};

use serde::{Deserialize, Serialize};

use crate::core::{Dimensions, ItemRef, Point, YearScale};
use crate::error::TimelineResult;

/// Smallest width/height reachable through a proportional (corner) resize.
pub const MIN_PROPORTIONAL_SIZE: f64 = 80.0;
/// Smallest event height reachable through a vertical resize.
pub const MIN_EVENT_HEIGHT: f64 = 80.0;
/// Smallest period height reachable through a vertical resize.
pub const MIN_PERIOD_HEIGHT: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeMode {
    /// Bottom edge handle: height only.
    Vertical,
    /// Corner handle: width and height grow together.
    Proportional,
}

/// What the pointer landed on when a gesture started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerTarget {
    Canvas,
    ItemBody(ItemRef),
    ResizeHandle(ItemRef, ResizeMode),
}

/// Coarse interaction mode reported to hosts and plugins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Panning,
    Dragging,
    Resizing,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    PanningViewport {
        /// Pointer position minus the viewport offset at pan start.
        anchor: Point,
    },
    DraggingItem {
        target: ItemRef,
        /// Canvas pointer position minus the item's canvas position.
        anchor: Point,
        /// `end - start` years captured at drag start; 0 for events.
        span_years: i64,
    },
    ResizingItem {
        target: ItemRef,
        mode: ResizeMode,
        pointer_anchor: Point,
        start: Dimensions,
    },
}

impl InteractionState {
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        match self {
            Self::Idle => InteractionMode::Idle,
            Self::PanningViewport { .. } => InteractionMode::Panning,
            Self::DraggingItem { .. } => InteractionMode::Dragging,
            Self::ResizingItem { .. } => InteractionMode::Resizing,
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Item manipulated by the active interaction, if any.
    #[must_use]
    pub fn target(&self) -> Option<ItemRef> {
        match self {
            Self::DraggingItem { target, .. } | Self::ResizingItem { target, .. } => Some(*target),
            Self::Idle | Self::PanningViewport { .. } => None,
        }
    }
}

/// Viewport offset while panning.
#[must_use]
pub fn panned_offset(pointer: Point, anchor: Point) -> Point {
    pointer.minus(anchor)
}

/// Dragged vertical position, floored at the canvas top.
#[must_use]
pub fn dragged_position_y(canvas_pointer_y: f64, anchor_y: f64) -> f64 {
    (canvas_pointer_y - anchor_y).max(0.0)
}

/// New `(start, end)` years for a horizontally dragged range item.
///
/// The start snaps to the nearest whole year and the end keeps `span_years`.
pub fn dragged_year_range(
    scale: YearScale,
    canvas_pointer_x: f64,
    anchor_x: f64,
    span_years: i64,
) -> TimelineResult<(i64, i64)> {
    let start = scale.x_to_year(canvas_pointer_x - anchor_x)?.round() as i64;
    Ok((start, start.saturating_add(span_years)))
}

/// Height after a vertical resize, floored at `min_height`.
#[must_use]
pub fn resized_height(start_height: f64, anchor_y: f64, pointer_y: f64, min_height: f64) -> f64 {
    (start_height + (pointer_y - anchor_y)).max(min_height)
}

/// Dimensions after a corner resize.
///
/// Both sides move by the larger of the two pointer deltas so the box grows
/// from its top-left corner.
#[must_use]
pub fn resized_proportionally(start: Dimensions, anchor: Point, pointer: Point) -> Dimensions {
    let delta = (pointer.x - anchor.x).max(pointer.y - anchor.y);
    Dimensions::new(
        (start.width + delta).max(MIN_PROPORTIONAL_SIZE),
        (start.height + delta).max(MIN_PROPORTIONAL_SIZE),
    )
}
