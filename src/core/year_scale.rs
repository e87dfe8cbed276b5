use crate::core::{LinearScale, TimelineConfig};
use crate::error::{TimelineError, TimelineResult};

/// Year axis mapper: calendar year to canvas x and back.
///
/// The domain is `[start_year, end_year]` and the pixel range is the full
/// logical canvas width (`page_width * pages_h`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearScale {
    linear: LinearScale,
    start_year: i64,
    end_year: i64,
    canvas_width: f64,
}

impl YearScale {
    pub fn new(start_year: i64, end_year: i64, canvas_width: f64) -> TimelineResult<Self> {
        if end_year == start_year {
            return Err(TimelineError::DegenerateRange {
                start: start_year,
                end: end_year,
                scale: 0,
            });
        }
        if !canvas_width.is_finite() || canvas_width <= 0.0 {
            return Err(TimelineError::InvalidViewport {
                width: canvas_width,
                height: 0.0,
            });
        }

        Ok(Self {
            linear: LinearScale::new(start_year as f64, end_year as f64)?,
            start_year,
            end_year,
            canvas_width,
        })
    }

    pub fn from_config(config: TimelineConfig) -> TimelineResult<Self> {
        let config = config.validate()?;
        Self::new(config.start_year, config.end_year, config.canvas_width())
    }

    #[must_use]
    pub fn year_range(self) -> (i64, i64) {
        (self.start_year, self.end_year)
    }

    #[must_use]
    pub fn canvas_width(self) -> f64 {
        self.canvas_width
    }

    pub fn year_to_x(self, year: f64) -> TimelineResult<f64> {
        self.linear.domain_to_pixel(year, self.canvas_width)
    }

    pub fn x_to_year(self, x: f64) -> TimelineResult<f64> {
        self.linear.pixel_to_domain(x, self.canvas_width)
    }

    /// Pixel width of `years` on this scale.
    pub fn years_to_width(self, years: f64) -> TimelineResult<f64> {
        let origin = self.start_year as f64;
        Ok(self.year_to_x(origin + years)? - self.year_to_x(origin)?)
    }
}

/// Returns the graduation years `start, start + step, ...` up to `end` inclusive.
///
/// A non-positive step is rejected before any year is produced.
pub fn graduation_years(start: i64, end: i64, step: i64) -> TimelineResult<Graduations> {
    if step <= 0 {
        return Err(TimelineError::DegenerateRange {
            start,
            end,
            scale: step,
        });
    }
    Ok(Graduations {
        next: Some(start),
        end,
        step,
    })
}

/// Lazy graduation sequence produced by [`graduation_years`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graduations {
    next: Option<i64>,
    end: i64,
    step: i64,
}

impl Iterator for Graduations {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let year = self.next.filter(|year| *year <= self.end)?;
        self.next = year.checked_add(self.step);
        Some(year)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(year) if year <= self.end => {
                let steps = (i128::from(self.end) - i128::from(year)) / i128::from(self.step);
                let remaining = steps as usize + 1;
                (remaining, Some(remaining))
            }
            _ => (0, Some(0)),
        }
    }
}

impl ExactSizeIterator for Graduations {}

impl std::iter::FusedIterator for Graduations {}
