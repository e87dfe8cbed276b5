use serde::{Deserialize, Serialize};

use crate::core::{ArtistSpanItem, EventItem, PeriodItem, Point, YearScale};
use crate::error::TimelineResult;

use super::RenderStyle;

/// Axis-aligned rectangle in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center_x(self) -> f64 {
        self.x + self.width / 2.0
    }

    #[must_use]
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }
}

pub(super) struct PeriodGeometry {
    pub(super) bar: ScreenRect,
    pub(super) resize_strip: ScreenRect,
}

pub(super) struct ArtistSpanGeometry {
    pub(super) start: Point,
    pub(super) end: Point,
    pub(super) hit_box: ScreenRect,
}

pub(super) struct EventGeometry {
    pub(super) frame: ScreenRect,
    pub(super) image_area: ScreenRect,
    pub(super) resize_strip: ScreenRect,
    pub(super) corner_handle: ScreenRect,
    pub(super) leader_start: Point,
    pub(super) leader_end: Point,
}

/// Bar from `x(start_year)` to `x(end_year)`. An inverted range collapses
/// to zero width at the start year.
pub(super) fn period_geometry(
    scale: YearScale,
    offset: Point,
    style: &RenderStyle,
    period: &PeriodItem,
) -> TimelineResult<PeriodGeometry> {
    let left = scale.year_to_x(period.start_year as f64)? + offset.x;
    let right = scale.year_to_x(period.end_year as f64)? + offset.x;
    let top = period.position_y + offset.y;
    let bar = ScreenRect::new(left, top, (right - left).max(0.0), period.height);
    let strip_height = style.period_resize_strip_height_px.min(period.height);
    let resize_strip = ScreenRect::new(left, bar.bottom() - strip_height, bar.width, strip_height);
    Ok(PeriodGeometry { bar, resize_strip })
}

pub(super) fn artist_span_geometry(
    scale: YearScale,
    offset: Point,
    style: &RenderStyle,
    span: &ArtistSpanItem,
) -> TimelineResult<ArtistSpanGeometry> {
    let y = span.position_y + offset.y;
    let start = Point::new(scale.year_to_x(span.birth_year as f64)? + offset.x, y);
    let end = Point::new(scale.year_to_x(span.death_year as f64)? + offset.x, y);
    let reach = style
        .artist_hit_tolerance_px
        .max(style.artist_marker_radius_px);
    let left = start.x.min(end.x) - reach;
    let right = start.x.max(end.x) + reach;
    let hit_box = ScreenRect::new(left, y - reach, right - left, reach * 2.0);
    Ok(ArtistSpanGeometry {
        start,
        end,
        hit_box,
    })
}

/// Event box centered on `x(year)`, with its leader running from the box
/// bottom to the timeline baseline.
pub(super) fn event_geometry(
    scale: YearScale,
    offset: Point,
    timeline_offset_y: f64,
    style: &RenderStyle,
    event: &EventItem,
) -> TimelineResult<EventGeometry> {
    let center_x = scale.year_to_x(event.year as f64)? + offset.x;
    let frame = ScreenRect::new(
        center_x - event.width / 2.0,
        event.position_y + offset.y,
        event.width,
        event.height,
    );

    let padding = style.event_padding_px;
    let image_area = ScreenRect::new(
        frame.x + padding,
        frame.y + padding,
        (frame.width - 2.0 * padding).max(0.0),
        (frame.height - 2.0 * padding - style.event_caption_height_px).max(0.0),
    );

    let corner = style
        .event_corner_handle_size_px
        .min(frame.width)
        .min(frame.height);
    let corner_handle =
        ScreenRect::new(frame.right() - corner, frame.bottom() - corner, corner, corner);

    let strip_height = style.event_resize_strip_height_px.min(frame.height);
    let resize_strip = ScreenRect::new(
        frame.x,
        frame.bottom() - strip_height,
        (frame.width - corner).max(0.0),
        strip_height,
    );

    Ok(EventGeometry {
        frame,
        image_area,
        resize_strip,
        corner_handle,
        leader_start: Point::new(center_x, frame.bottom()),
        leader_end: Point::new(center_x, timeline_offset_y + offset.y),
    })
}
