use crate::render::Color;

/// Style contract for timeline render frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub baseline_color: Color,
    pub baseline_width: f64,
    pub graduation_tick_length_px: f64,
    pub graduation_label_color: Color,
    pub graduation_label_font_size_px: f64,
    pub graduation_label_offset_y_px: f64,
    pub show_page_guides: bool,
    pub page_guide_color: Color,
    pub item_label_color: Color,
    pub item_label_font_size_px: f64,
    pub item_border_color: Color,
    pub item_border_width: f64,
    pub selection_border_color: Color,
    pub selection_border_width: f64,
    pub resize_handle_color: Color,
    pub period_resize_strip_height_px: f64,
    pub event_box_fill_color: Color,
    pub event_padding_px: f64,
    pub event_caption_height_px: f64,
    pub event_resize_strip_height_px: f64,
    pub event_corner_handle_size_px: f64,
    pub leader_line_color: Color,
    pub leader_line_width: f64,
    pub artist_line_color: Color,
    pub artist_line_width: f64,
    pub artist_marker_radius_px: f64,
    pub artist_hit_tolerance_px: f64,
    pub dash_length_px: f64,
    pub dash_gap_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            grid_line_color: Color::rgb(0.8, 0.8, 0.8),
            grid_line_width: 1.0,
            baseline_color: Color::rgb(0.0, 0.0, 0.0),
            baseline_width: 2.0,
            graduation_tick_length_px: 8.0,
            graduation_label_color: Color::rgb(0.1, 0.1, 0.1),
            graduation_label_font_size_px: 10.0,
            graduation_label_offset_y_px: 12.0,
            show_page_guides: true,
            page_guide_color: Color::rgba(0.4, 0.4, 0.9, 0.35),
            item_label_color: Color::rgb(0.0, 0.0, 0.0),
            item_label_font_size_px: 12.0,
            item_border_color: Color::rgb(0.4, 0.4, 0.4),
            item_border_width: 1.0,
            selection_border_color: Color::rgb(0.0, 0.48, 1.0),
            selection_border_width: 3.0,
            resize_handle_color: Color::rgba(0.0, 0.0, 0.0, 0.25),
            period_resize_strip_height_px: 6.0,
            event_box_fill_color: Color::rgb(1.0, 1.0, 1.0),
            event_padding_px: 6.0,
            event_caption_height_px: 34.0,
            event_resize_strip_height_px: 6.0,
            event_corner_handle_size_px: 12.0,
            leader_line_color: Color::rgb(0.45, 0.45, 0.45),
            leader_line_width: 1.0,
            artist_line_color: Color::rgb(0.2, 0.2, 0.2),
            artist_line_width: 2.0,
            artist_marker_radius_px: 5.0,
            artist_hit_tolerance_px: 8.0,
            dash_length_px: 6.0,
            dash_gap_px: 4.0,
        }
    }
}
