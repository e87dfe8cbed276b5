use crate::core::Point;
use crate::error::{TimelineError, TimelineResult};

use super::RenderStyle;

pub(super) fn validate_render_style(style: RenderStyle) -> TimelineResult<RenderStyle> {
    for color in [
        style.grid_line_color,
        style.baseline_color,
        style.graduation_label_color,
        style.page_guide_color,
        style.item_label_color,
        style.item_border_color,
        style.selection_border_color,
        style.resize_handle_color,
        style.event_box_fill_color,
        style.leader_line_color,
        style.artist_line_color,
    ] {
        color.validate()?;
    }

    for (value, name) in [
        (style.grid_line_width, "grid_line_width"),
        (style.baseline_width, "baseline_width"),
        (style.graduation_tick_length_px, "graduation_tick_length_px"),
        (
            style.graduation_label_font_size_px,
            "graduation_label_font_size_px",
        ),
        (style.item_label_font_size_px, "item_label_font_size_px"),
        (style.selection_border_width, "selection_border_width"),
        (
            style.period_resize_strip_height_px,
            "period_resize_strip_height_px",
        ),
        (
            style.event_resize_strip_height_px,
            "event_resize_strip_height_px",
        ),
        (
            style.event_corner_handle_size_px,
            "event_corner_handle_size_px",
        ),
        (style.leader_line_width, "leader_line_width"),
        (style.artist_line_width, "artist_line_width"),
        (style.artist_marker_radius_px, "artist_marker_radius_px"),
        (style.dash_length_px, "dash_length_px"),
        (style.dash_gap_px, "dash_gap_px"),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(TimelineError::InvalidData(format!(
                "render style `{name}` must be finite and > 0"
            )));
        }
    }

    for (value, name) in [
        (style.item_border_width, "item_border_width"),
        (style.event_padding_px, "event_padding_px"),
        (style.event_caption_height_px, "event_caption_height_px"),
        (style.artist_hit_tolerance_px, "artist_hit_tolerance_px"),
        (
            style.graduation_label_offset_y_px,
            "graduation_label_offset_y_px",
        ),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(TimelineError::InvalidData(format!(
                "render style `{name}` must be finite and >= 0"
            )));
        }
    }

    Ok(style)
}

pub(super) fn validate_pointer(pointer: Point) -> TimelineResult<Point> {
    if !pointer.is_finite() {
        return Err(TimelineError::InvalidData(
            "pointer position must be finite".to_owned(),
        ));
    }
    Ok(pointer)
}
