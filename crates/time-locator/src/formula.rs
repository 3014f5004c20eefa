//! Time locators computed from start/stop times.
//!
//! There is no backing array, so any (x, y) is answered by extrapolation.

use geoloc_common::GeolocError;
use tracing::debug;

use crate::{Result, TimeLocator};

/// Fixed scan cadence: every line takes the same time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTimeLocator {
    start_time: i64,
    width: f64,
    per_line_duration: f64,
}

impl LinearTimeLocator {
    /// `start_time`/`stop_time` are epoch millis of the first and last pixel;
    /// `pixel_count` is the number of pixels in the granule.
    pub fn new(
        start_time: i64,
        stop_time: i64,
        width: usize,
        pixel_count: usize,
    ) -> geoloc_common::Result<Self> {
        if width == 0 {
            return Err(GeolocError::invalid_parameter("width", "must be greater than zero"));
        }
        if pixel_count == 0 {
            return Err(GeolocError::invalid_parameter(
                "pixel_count",
                "must be greater than zero",
            ));
        }

        let width = width as f64;
        let per_line_duration = (stop_time - start_time) as f64 * width / pixel_count as f64;
        debug!(start_time, per_line_duration, "Created linear time locator");

        Ok(Self {
            start_time,
            width,
            per_line_duration,
        })
    }

    /// Milliseconds spent on one scan line.
    pub fn per_line_duration(&self) -> f64 {
        self.per_line_duration
    }
}

impl TimeLocator for LinearTimeLocator {
    fn time_for(&self, x: i64, y: i64) -> Result<i64> {
        let index = y as f64 * self.width + x as f64;
        let offset = (index / self.width * self.per_line_duration).round() as i64;
        Ok(self.start_time + offset)
    }
}

/// Linear interpolation across the pixel columns between start and stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StartStopTimeLocator {
    start_time: i64,
    stop_time: i64,
    total_pixels: f64,
}

impl StartStopTimeLocator {
    pub fn new(start_time: i64, stop_time: i64, total_pixels: usize) -> geoloc_common::Result<Self> {
        if total_pixels == 0 {
            return Err(GeolocError::invalid_parameter(
                "total_pixels",
                "must be greater than zero",
            ));
        }
        Ok(Self {
            start_time,
            stop_time,
            total_pixels: total_pixels as f64,
        })
    }
}

impl TimeLocator for StartStopTimeLocator {
    fn time_for(&self, x: i64, _y: i64) -> Result<i64> {
        let fraction = x as f64 / self.total_pixels;
        let offset = (fraction * (self.stop_time - self.start_time) as f64).round() as i64;
        Ok(self.start_time + offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear() {
        // 10 lines of 4 pixels over 10 seconds: one second per line
        let locator = LinearTimeLocator::new(1_000_000, 1_010_000, 4, 40).unwrap();
        assert_eq!(locator.per_line_duration(), 1000.0);

        assert_eq!(locator.time_for(0, 0), Ok(1_000_000));
        assert_eq!(locator.time_for(0, 3), Ok(1_003_000));
        assert_eq!(locator.time_for(2, 3), Ok(1_003_500));
    }

    #[test]
    fn test_linear_extrapolates() {
        let locator = LinearTimeLocator::new(1_000_000, 1_010_000, 4, 40).unwrap();
        assert_eq!(locator.time_for(0, 12), Ok(1_012_000));
        assert_eq!(locator.time_for(0, -1), Ok(999_000));
    }

    #[test]
    fn test_linear_rejects_empty_granule() {
        assert!(LinearTimeLocator::new(0, 1, 0, 10).is_err());
        assert!(LinearTimeLocator::new(0, 1, 10, 0).is_err());
    }

    #[test]
    fn test_start_stop() {
        let locator = StartStopTimeLocator::new(2000, 3000, 100).unwrap();
        assert_eq!(locator.time_for(0, 7), Ok(2000));
        assert_eq!(locator.time_for(50, 0), Ok(2500));
        assert_eq!(locator.time_for(100, 0), Ok(3000));
        assert_eq!(locator.time_for(150, 0), Ok(3500));
    }
}
