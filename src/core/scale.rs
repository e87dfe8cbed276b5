use crate::error::{TimelineError, TimelineResult};

/// Linear mapping between a numeric domain and a `[0, extent]` pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> TimelineResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(TimelineError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn domain_to_pixel(self, value: f64, extent: f64) -> TimelineResult<f64> {
        validate_extent(extent)?;
        if !value.is_finite() {
            return Err(TimelineError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(normalized * extent)
    }

    pub fn pixel_to_domain(self, pixel: f64, extent: f64) -> TimelineResult<f64> {
        validate_extent(extent)?;
        if !pixel.is_finite() {
            return Err(TimelineError::InvalidData("pixel must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = pixel / extent;
        Ok(self.domain_start + normalized * span)
    }
}

fn validate_extent(extent: f64) -> TimelineResult<()> {
    if !extent.is_finite() || extent <= 0.0 {
        return Err(TimelineError::InvalidViewport {
            width: extent,
            height: 0.0,
        });
    }
    Ok(())
}
