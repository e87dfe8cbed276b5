use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI};
use tracing::warn;

use crate::error::{TimelineError, TimelineResult};
use crate::render::{
    CirclePrimitive, Color, ImagePrimitive, LinePrimitive, LineStrokeStyle, PrimitiveGroup,
    RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub circles_drawn: usize,
    pub images_drawn: usize,
    pub images_failed: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> TimelineResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
///
/// Event images are decoded as PNG; undecodable payloads are drawn as a
/// placeholder box.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    placeholder_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> TimelineResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(TimelineError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            placeholder_color: Color::rgb(0.85, 0.85, 0.85),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> TimelineResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> TimelineResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        for group in &frame.groups {
            self.draw_group(context, group, &mut stats)?;
        }

        self.last_stats = stats;
        Ok(())
    }

    fn draw_group(
        &self,
        context: &Context,
        group: &PrimitiveGroup,
        stats: &mut CairoRenderStats,
    ) -> TimelineResult<()> {
        for rect in &group.rects {
            draw_rect(context, *rect)?;
            stats.rects_drawn += 1;
        }

        for image in &group.images {
            if draw_image(context, image)? {
                stats.images_drawn += 1;
            } else {
                stats.images_failed += 1;
                let placeholder = RectPrimitive::new(
                    image.x,
                    image.y,
                    image.width,
                    image.height,
                    self.placeholder_color,
                );
                draw_rect(context, placeholder)?;
            }
        }

        for line in &group.lines {
            draw_line(context, *line)?;
            stats.lines_drawn += 1;
        }
        context.set_dash(&[], 0.0);

        for circle in &group.circles {
            draw_circle(context, *circle)?;
            stats.circles_drawn += 1;
        }

        for text in &group.texts {
            draw_text(context, text);
            stats.texts_drawn += 1;
        }

        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> TimelineResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> TimelineResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn draw_line(context: &Context, line: LinePrimitive) -> TimelineResult<()> {
    apply_color(context, line.color);
    context.set_line_width(line.stroke_width);
    match line.stroke_style {
        LineStrokeStyle::Solid => context.set_dash(&[], 0.0),
        LineStrokeStyle::Dashed { dash_px, gap_px } => context.set_dash(&[dash_px, gap_px], 0.0),
    }
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke line", err))
}

/// Artist span end marker.
fn draw_circle(context: &Context, circle: CirclePrimitive) -> TimelineResult<()> {
    apply_color(context, circle.fill_color);
    context.new_sub_path();
    context.arc(circle.cx, circle.cy, circle.radius, 0.0, 2.0 * PI);
    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill circle", err))
}

fn draw_text(context: &Context, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    let font = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
    layout.set_font_description(Some(&font));
    layout.set_text(&text.text);

    let (width, _) = layout.pixel_size();
    let width = f64::from(width);
    let left = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - width / 2.0,
        TextHAlign::Right => text.x - width,
    };

    apply_color(context, text.color);
    context.move_to(left, text.y);
    pangocairo::functions::show_layout(context, &layout);
}

fn draw_rect(context: &Context, rect: RectPrimitive) -> TimelineResult<()> {
    append_rect_path(context, rect);
    apply_color(context, rect.fill_color);
    if rect.border_width > 0.0 {
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        apply_color(context, rect.border_color);
        context.set_line_width(rect.border_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke rectangle border", err))?;
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
    }
    Ok(())
}

/// Paints the decoded image scaled into its target box.
///
/// Returns `Ok(false)` when the payload is not a decodable PNG.
fn draw_image(context: &Context, image: &ImagePrimitive) -> TimelineResult<bool> {
    let mut reader = image.image.bytes();
    let surface = match ImageSurface::create_from_png(&mut reader) {
        Ok(surface) => surface,
        Err(err) => {
            warn!(error = %err, "event image could not be decoded");
            return Ok(false);
        }
    };
    let (source_width, source_height) = (surface.width(), surface.height());
    if source_width <= 0 || source_height <= 0 || image.width <= 0.0 || image.height <= 0.0 {
        return Ok(false);
    }

    context
        .save()
        .map_err(|err| map_backend_error("failed to save cairo state", err))?;
    context.rectangle(image.x, image.y, image.width, image.height);
    context.clip();
    context.translate(image.x, image.y);
    context.scale(
        image.width / f64::from(source_width),
        image.height / f64::from(source_height),
    );
    let painted = context
        .set_source_surface(&surface, 0.0, 0.0)
        .and_then(|()| context.paint());
    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore cairo state", err))?;
    painted.map_err(|err| map_backend_error("failed to paint image", err))?;
    Ok(true)
}

fn append_rect_path(context: &Context, rect: RectPrimitive) {
    if rect.corner_radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> TimelineError {
    TimelineError::InvalidData(format!("{prefix}: {err}"))
}
