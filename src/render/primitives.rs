use crate::core::{ImageRef, ItemColor};
use crate::error::{TimelineError, TimelineResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    /// Black or white, whichever reads better on top of `self`.
    #[must_use]
    pub fn contrasting_text(self) -> Self {
        let luminance = 0.299 * self.red + 0.587 * self.green + 0.114 * self.blue;
        if luminance > 0.6 {
            Self::rgb(0.0, 0.0, 0.0)
        } else {
            Self::rgb(1.0, 1.0, 1.0)
        }
    }

    pub fn validate(self) -> TimelineResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(TimelineError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl From<&ItemColor> for Color {
    fn from(color: &ItemColor) -> Self {
        let (red, green, blue) = color.to_rgb();
        Self::from_rgb8(red, green, blue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineStrokeStyle {
    Solid,
    Dashed { dash_px: f64, gap_px: f64 },
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    pub stroke_style: LineStrokeStyle,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            stroke_style: LineStrokeStyle::Solid,
        }
    }

    #[must_use]
    pub const fn dashed(mut self, dash_px: f64, gap_px: f64) -> Self {
        self.stroke_style = LineStrokeStyle::Dashed { dash_px, gap_px };
        self
    }

    #[must_use]
    pub fn length(self) -> f64 {
        (self.x2 - self.x1).hypot(self.y2 - self.y1)
    }

    pub fn validate(self) -> TimelineResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(TimelineError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(TimelineError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        if let LineStrokeStyle::Dashed { dash_px, gap_px } = self.stroke_style {
            if !dash_px.is_finite() || !gap_px.is_finite() || dash_px <= 0.0 || gap_px <= 0.0 {
                return Err(TimelineError::InvalidData(
                    "line dash pattern must be finite and > 0".to_owned(),
                ));
            }
        }
        self.color.validate()
    }
}

/// Draw command for a filled rectangle with an optional border.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub border_width: f64,
    pub border_color: Color,
    pub corner_radius: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            border_width: 0.0,
            border_color: fill_color,
            corner_radius: 0.0,
        }
    }

    #[must_use]
    pub const fn with_border(mut self, border_width: f64, border_color: Color) -> Self {
        self.border_width = border_width;
        self.border_color = border_color;
        self
    }

    #[must_use]
    pub const fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    pub fn validate(self) -> TimelineResult<()> {
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(TimelineError::InvalidData(
                "rect geometry must be finite".to_owned(),
            ));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(TimelineError::InvalidData(
                "rect size must be >= 0".to_owned(),
            ));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(TimelineError::InvalidData(
                "rect border width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(TimelineError::InvalidData(
                "rect corner radius must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Draw command for a filled circle (artist span end markers).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill_color: Color,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(cx: f64, cy: f64, radius: f64, fill_color: Color) -> Self {
        Self {
            cx,
            cy,
            radius,
            fill_color,
        }
    }

    pub fn validate(self) -> TimelineResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(TimelineError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(TimelineError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space. `y` is the top of the text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if self.text.is_empty() {
            return Err(TimelineError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(TimelineError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(TimelineError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command placing an event image inside a target rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePrimitive {
    pub image: ImageRef,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ImagePrimitive {
    #[must_use]
    pub fn new(image: ImageRef, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            image,
            x,
            y,
            width,
            height,
        }
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if self.image.is_empty() {
            return Err(TimelineError::InvalidData(
                "image primitive must carry image bytes".to_owned(),
            ));
        }
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
            || self.width < 0.0
            || self.height < 0.0
        {
            return Err(TimelineError::InvalidData(
                "image placement must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}
