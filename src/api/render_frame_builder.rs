use smallvec::SmallVec;

use crate::core::{
    ArtistSpanItem, EventItem, ItemId, ItemKind, ItemRef, PeriodItem, graduation_years,
};
use crate::error::TimelineResult;
use crate::render::{
    CanvasLayerKind, CirclePrimitive, Color, ImagePrimitive, LinePrimitive, PrimitiveGroup,
    RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::TimelineEditor;
use super::item_geometry::{artist_span_geometry, event_geometry, period_geometry};

impl<R: Renderer> TimelineEditor<R> {
    /// Projects config, items, selection and viewport offset into one frame.
    ///
    /// Paint order: page guides, graduation grid, axis, then periods, artist
    /// spans and events, each in insertion order.
    pub fn build_render_frame(&self) -> TimelineResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.config.canvas());

        if self.render_style.show_page_guides {
            frame.push_group(self.page_guides_group());
        }
        let (grid, axis) = self.graduation_groups()?;
        frame.push_group(grid);
        frame.push_group(axis);

        for (id, period) in self.store.periods() {
            frame.push_group(self.period_group(id, period)?);
        }
        for (id, span) in self.store.artist_spans() {
            frame.push_group(self.artist_span_group(id, span)?);
        }
        for (id, event) in self.store.events() {
            frame.push_group(self.event_group(id, event)?);
        }

        Ok(frame)
    }

    fn page_guides_group(&self) -> PrimitiveGroup {
        let style = &self.render_style;
        let offset = self.viewport_offset;
        let width = self.config.canvas_width();
        let height = self.config.canvas_height();
        let mut group = PrimitiveGroup::new(CanvasLayerKind::PageGuides, None);

        for page in 1..self.config.pages_h {
            let x = self.config.page_width * f64::from(page) + offset.x;
            group.lines.push(
                LinePrimitive::new(x, offset.y, x, height + offset.y, 1.0, style.page_guide_color)
                    .dashed(style.dash_length_px, style.dash_gap_px),
            );
        }
        for page in 1..self.config.pages_v {
            let y = self.config.page_height * f64::from(page) + offset.y;
            group.lines.push(
                LinePrimitive::new(offset.x, y, width + offset.x, y, 1.0, style.page_guide_color)
                    .dashed(style.dash_length_px, style.dash_gap_px),
            );
        }
        group
    }

    fn graduation_groups(&self) -> TimelineResult<(PrimitiveGroup, PrimitiveGroup)> {
        let style = &self.render_style;
        let offset = self.viewport_offset;
        let canvas_height = self.config.canvas_height();
        let baseline_y = self.config.timeline_offset_y + offset.y;
        let half_tick = style.graduation_tick_length_px / 2.0;

        let mut grid = PrimitiveGroup::new(CanvasLayerKind::Grid, None);
        let mut axis = PrimitiveGroup::new(CanvasLayerKind::Axis, None);
        axis.lines.push(LinePrimitive::new(
            offset.x,
            baseline_y,
            self.config.canvas_width() + offset.x,
            baseline_y,
            style.baseline_width,
            style.baseline_color,
        ));

        let years =
            graduation_years(self.config.start_year, self.config.end_year, self.config.scale)?;
        for year in years {
            let x = self.year_scale.year_to_x(year as f64)? + offset.x;
            grid.lines.push(LinePrimitive::new(
                x,
                offset.y,
                x,
                canvas_height + offset.y,
                style.grid_line_width,
                style.grid_line_color,
            ));
            axis.lines.push(LinePrimitive::new(
                x,
                baseline_y - half_tick,
                x,
                baseline_y + half_tick,
                style.baseline_width,
                style.baseline_color,
            ));
            axis.texts.push(TextPrimitive::new(
                year.to_string(),
                x,
                baseline_y + style.graduation_label_offset_y_px,
                style.graduation_label_font_size_px,
                style.graduation_label_color,
                TextHAlign::Center,
            ));
        }

        Ok((grid, axis))
    }

    fn period_group(&self, id: ItemId, period: &PeriodItem) -> TimelineResult<PrimitiveGroup> {
        let style = &self.render_style;
        let item = ItemRef::new(ItemKind::Period, id);
        let geometry = period_geometry(self.year_scale, self.viewport_offset, style, period)?;
        let fill = Color::from(&period.color);
        let (border_width, border_color) = self.border_for(item);
        let mut group = PrimitiveGroup::new(CanvasLayerKind::Items, Some(item));

        let bar = geometry.bar;
        group.rects.push(
            RectPrimitive::new(bar.x, bar.y, bar.width, bar.height, fill)
                .with_border(border_width, border_color),
        );
        let strip = geometry.resize_strip;
        group.rects.push(RectPrimitive::new(
            strip.x,
            strip.y,
            strip.width,
            strip.height,
            style.resize_handle_color,
        ));

        let font = style.item_label_font_size_px;
        let lines = label_lines(&period.name, year_range_label(period.start_year, period.end_year));
        let block_height = font * 1.2 * lines.len() as f64;
        let mut y = bar.y + (bar.height - block_height) / 2.0;
        for line in lines {
            group.texts.push(TextPrimitive::new(
                line,
                bar.center_x(),
                y,
                font,
                fill.contrasting_text(),
                TextHAlign::Center,
            ));
            y += font * 1.2;
        }

        Ok(group)
    }

    fn artist_span_group(
        &self,
        id: ItemId,
        span: &ArtistSpanItem,
    ) -> TimelineResult<PrimitiveGroup> {
        let style = &self.render_style;
        let item = ItemRef::new(ItemKind::ArtistSpan, id);
        let geometry = artist_span_geometry(self.year_scale, self.viewport_offset, style, span)?;
        let (line_width, color) = if self.selection == Some(item) {
            (style.artist_line_width + 1.0, style.selection_border_color)
        } else {
            (style.artist_line_width, style.artist_line_color)
        };
        let mut group = PrimitiveGroup::new(CanvasLayerKind::Items, Some(item));

        let (start, end) = (geometry.start, geometry.end);
        group.lines.push(
            LinePrimitive::new(start.x, start.y, end.x, end.y, line_width, color)
                .dashed(style.dash_length_px, style.dash_gap_px),
        );
        for marker in [start, end] {
            group.circles.push(CirclePrimitive::new(
                marker.x,
                marker.y,
                style.artist_marker_radius_px,
                color,
            ));
        }

        let font = style.item_label_font_size_px;
        let center_x = (start.x + end.x) / 2.0;
        let gap = style.artist_marker_radius_px + 4.0;
        if !span.name.trim().is_empty() {
            group.texts.push(TextPrimitive::new(
                span.name.clone(),
                center_x,
                start.y - gap - font * 1.2,
                font,
                style.item_label_color,
                TextHAlign::Center,
            ));
        }
        group.texts.push(TextPrimitive::new(
            year_range_label(span.birth_year, span.death_year),
            center_x,
            start.y + gap,
            font,
            style.item_label_color,
            TextHAlign::Center,
        ));

        Ok(group)
    }

    fn event_group(&self, id: ItemId, event: &EventItem) -> TimelineResult<PrimitiveGroup> {
        let style = &self.render_style;
        let item = ItemRef::new(ItemKind::Event, id);
        let geometry = event_geometry(
            self.year_scale,
            self.viewport_offset,
            self.config.timeline_offset_y,
            style,
            event,
        )?;
        let (border_width, border_color) = self.border_for(item);
        let mut group = PrimitiveGroup::new(CanvasLayerKind::Items, Some(item));

        let frame = geometry.frame;
        group.rects.push(
            RectPrimitive::new(
                frame.x,
                frame.y,
                frame.width,
                frame.height,
                style.event_box_fill_color,
            )
            .with_border(border_width, border_color)
            .with_corner_radius(4.0),
        );
        for handle in [geometry.resize_strip, geometry.corner_handle] {
            group.rects.push(RectPrimitive::new(
                handle.x,
                handle.y,
                handle.width,
                handle.height,
                style.resize_handle_color,
            ));
        }

        let image_area = geometry.image_area;
        if !event.image.is_empty() && image_area.width > 0.0 && image_area.height > 0.0 {
            group.images.push(ImagePrimitive::new(
                event.image.clone(),
                image_area.x,
                image_area.y,
                image_area.width,
                image_area.height,
            ));
        }

        let leader_length = (geometry.leader_end.y - geometry.leader_start.y).abs();
        if leader_length > 0.0 {
            group.lines.push(
                LinePrimitive::new(
                    geometry.leader_start.x,
                    geometry.leader_start.y,
                    geometry.leader_end.x,
                    geometry.leader_end.y,
                    style.leader_line_width,
                    style.leader_line_color,
                )
                .dashed(style.dash_length_px, style.dash_gap_px),
            );
        }

        let font = style.item_label_font_size_px;
        let mut y = frame.bottom() - style.event_caption_height_px;
        for line in label_lines(&event.name, event.year.to_string()) {
            group.texts.push(TextPrimitive::new(
                line,
                frame.center_x(),
                y,
                font,
                style.item_label_color,
                TextHAlign::Center,
            ));
            y += font * 1.2;
        }

        Ok(group)
    }

    fn border_for(&self, item: ItemRef) -> (f64, Color) {
        let style = &self.render_style;
        if self.selection == Some(item) {
            (style.selection_border_width, style.selection_border_color)
        } else {
            (style.item_border_width, style.item_border_color)
        }
    }
}

fn year_range_label(start: i64, end: i64) -> String {
    format!("{start} – {end}")
}

/// Caption lines of an item, skipping a blank name.
fn label_lines(name: &str, detail: String) -> SmallVec<[String; 2]> {
    let mut lines = SmallVec::new();
    let name = name.trim();
    if !name.is_empty() {
        lines.push(name.to_owned());
    }
    lines.push(detail);
    lines
}
