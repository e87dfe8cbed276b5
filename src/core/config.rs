use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{TimelineError, TimelineResult};

/// Year range and page layout of the timeline canvas.
///
/// Supplied wholesale by the host configuration surface. Every editor entry
/// point validates it first, so a degenerate range never reaches the mapper.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub start_year: i64,
    pub end_year: i64,
    /// Years per graduation.
    pub scale: i64,
    pub page_width: f64,
    pub page_height: f64,
    pub pages_h: u32,
    pub pages_v: u32,
    /// Vertical position of the year axis baseline.
    pub timeline_offset_y: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            start_year: 1400,
            end_year: 2000,
            scale: 50,
            page_width: 1123.0,
            page_height: 794.0,
            pages_h: 1,
            pages_v: 1,
            timeline_offset_y: 400.0,
        }
    }
}

impl TimelineConfig {
    #[must_use]
    pub fn new(start_year: i64, end_year: i64, scale: i64) -> Self {
        Self {
            start_year,
            end_year,
            scale,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_pages(
        mut self,
        page_width: f64,
        page_height: f64,
        pages_h: u32,
        pages_v: u32,
    ) -> Self {
        self.page_width = page_width;
        self.page_height = page_height;
        self.pages_h = pages_h;
        self.pages_v = pages_v;
        self
    }

    #[must_use]
    pub fn with_timeline_offset_y(mut self, timeline_offset_y: f64) -> Self {
        self.timeline_offset_y = timeline_offset_y;
        self
    }

    pub fn validate(self) -> TimelineResult<Self> {
        if self.end_year <= self.start_year || self.scale <= 0 {
            return Err(TimelineError::DegenerateRange {
                start: self.start_year,
                end: self.end_year,
                scale: self.scale,
            });
        }

        for (value, name) in [
            (self.page_width, "page_width"),
            (self.page_height, "page_height"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TimelineError::InvalidData(format!(
                    "timeline config `{name}` must be finite and > 0"
                )));
            }
        }

        if self.pages_h == 0 || self.pages_v == 0 {
            return Err(TimelineError::InvalidData(
                "timeline config page counts must be >= 1".to_owned(),
            ));
        }

        if !self.timeline_offset_y.is_finite() {
            return Err(TimelineError::InvalidData(
                "timeline config `timeline_offset_y` must be finite".to_owned(),
            ));
        }

        Ok(self)
    }

    #[must_use]
    pub fn canvas_width(self) -> f64 {
        self.page_width * f64::from(self.pages_h)
    }

    #[must_use]
    pub fn canvas_height(self) -> f64 {
        self.page_height * f64::from(self.pages_v)
    }

    #[must_use]
    pub fn canvas(self) -> Viewport {
        Viewport::new(self.canvas_width(), self.canvas_height())
    }

    /// Parses and validates a JSON config document.
    ///
    /// Missing keys fall back to `TimelineConfig::default()` values.
    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        let config: Self =
            serde_json::from_str(input).map_err(|err| TimelineError::Config(err.to_string()))?;
        config.validate()
    }

    pub fn to_json_pretty(self) -> TimelineResult<String> {
        serde_json::to_string_pretty(&self).map_err(|err| TimelineError::Config(err.to_string()))
    }
}
