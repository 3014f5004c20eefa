//! Time locators backed by one raw value per line (or pixel).
//!
//! A request outside the stored array is a caller error and fails with
//! [`TimeLocatorError::IndexOutOfBounds`].

use std::fmt::Display;

use chrono::NaiveDate;
use geoloc_common::{micros_since_2000_to_millis, tai1993_to_utc_millis, GeolocError};
use num_traits::ToPrimitive;
use tracing::debug;

use crate::{Result, TimeLocator, TimeLocatorError};

/// Which pixel coordinate selects the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeAxis {
    /// One value per scan line, selected by y.
    #[default]
    Line,
    /// One value per pixel column, selected by x.
    Pixel,
}

fn finite_raw<T: ToPrimitive + Copy + Display>(values: &[T], index: usize) -> Result<f64> {
    let raw = values[index];
    raw.to_f64()
        .filter(|v| v.is_finite())
        .ok_or_else(|| TimeLocatorError::invalid_raw_value(index, raw))
}

/// TAI seconds since 1993-01-01, one value per line or per pixel.
#[derive(Debug, Clone, Copy)]
pub struct Tai1993VectorTimeLocator<'a, T> {
    tai_seconds: &'a [T],
    axis: TimeAxis,
}

impl<'a, T: ToPrimitive + Copy + Display> Tai1993VectorTimeLocator<'a, T> {
    pub fn new(tai_seconds: &'a [T], axis: TimeAxis) -> Self {
        Self { tai_seconds, axis }
    }

    /// Values indexed by scan line.
    pub fn per_line(tai_seconds: &'a [T]) -> Self {
        Self::new(tai_seconds, TimeAxis::Line)
    }

    pub fn axis(&self) -> TimeAxis {
        self.axis
    }
}

impl<T: ToPrimitive + Copy + Display> TimeLocator for Tai1993VectorTimeLocator<'_, T> {
    fn time_for(&self, x: i64, y: i64) -> Result<i64> {
        let requested = match self.axis {
            TimeAxis::Line => y,
            TimeAxis::Pixel => x,
        };
        let index = TimeLocatorError::check_index(requested, self.tai_seconds.len())?;
        let seconds = finite_raw(self.tai_seconds, index)?;
        Ok(tai1993_to_utc_millis(seconds))
    }
}

/// TAI seconds since 1993-01-01, one value per scan of several detector lines.
#[derive(Debug, Clone, Copy)]
pub struct Tai1993ScanTimeLocator<'a, T> {
    tai_seconds: &'a [T],
    lines_per_scan: i64,
}

impl<'a, T: ToPrimitive + Copy + Display> Tai1993ScanTimeLocator<'a, T> {
    pub fn new(tai_seconds: &'a [T], lines_per_scan: usize) -> geoloc_common::Result<Self> {
        if lines_per_scan == 0 {
            return Err(GeolocError::invalid_parameter(
                "lines_per_scan",
                "must be greater than zero",
            ));
        }
        let lines_per_scan = i64::try_from(lines_per_scan)
            .map_err(|_| GeolocError::invalid_parameter("lines_per_scan", "too large"))?;

        debug!(
            scans = tai_seconds.len(),
            lines_per_scan, "Created TAI-1993 scan time locator"
        );
        Ok(Self {
            tai_seconds,
            lines_per_scan,
        })
    }

    pub fn lines_per_scan(&self) -> usize {
        self.lines_per_scan as usize
    }
}

impl<T: ToPrimitive + Copy + Display> TimeLocator for Tai1993ScanTimeLocator<'_, T> {
    fn time_for(&self, _x: i64, y: i64) -> Result<i64> {
        if y < 0 {
            return Err(TimeLocatorError::out_of_bounds(y, self.tai_seconds.len()));
        }
        let scan = TimeLocatorError::check_index(y / self.lines_per_scan, self.tai_seconds.len())?;
        let seconds = finite_raw(self.tai_seconds, scan)?;
        Ok(tai1993_to_utc_millis(seconds))
    }
}

/// Epoch milliseconds stored directly, one value per line.
#[derive(Debug, Clone, Copy)]
pub struct MillisSince1970TimeLocator<'a, T> {
    millis: &'a [T],
}

impl<'a, T: ToPrimitive + Copy + Display> MillisSince1970TimeLocator<'a, T> {
    pub fn new(millis: &'a [T]) -> Self {
        Self { millis }
    }
}

impl<T: ToPrimitive + Copy + Display> TimeLocator for MillisSince1970TimeLocator<'_, T> {
    fn time_for(&self, _x: i64, y: i64) -> Result<i64> {
        let index = TimeLocatorError::check_index(y, self.millis.len())?;
        let millis = finite_raw(self.millis, index)?;
        Ok(millis.round() as i64)
    }
}

/// Microseconds since 2000-01-01, one value per line.
#[derive(Debug, Clone, Copy)]
pub struct MicrosSince2000TimeLocator<'a, T> {
    micros: &'a [T],
}

impl<'a, T: ToPrimitive + Copy + Display> MicrosSince2000TimeLocator<'a, T> {
    pub fn new(micros: &'a [T]) -> Self {
        Self { micros }
    }
}

impl<T: ToPrimitive + Copy + Display> TimeLocator for MicrosSince2000TimeLocator<'_, T> {
    fn time_for(&self, _x: i64, y: i64) -> Result<i64> {
        let index = TimeLocatorError::check_index(y, self.micros.len())?;
        let raw = self.micros[index];
        let micros = raw
            .to_i64()
            .ok_or_else(|| TimeLocatorError::invalid_raw_value(index, raw))?;
        Ok(micros_since_2000_to_millis(micros))
    }
}

/// Year, day of year (1-based) and millisecond of day, one triple per line.
#[derive(Debug, Clone, Copy)]
pub struct YearDoyMillisTimeLocator<'a, T> {
    years: &'a [T],
    days_of_year: &'a [T],
    millis_of_day: &'a [T],
}

impl<'a, T: ToPrimitive + Copy + Display> YearDoyMillisTimeLocator<'a, T> {
    /// All three arrays must have one entry per line.
    pub fn new(
        years: &'a [T],
        days_of_year: &'a [T],
        millis_of_day: &'a [T],
    ) -> geoloc_common::Result<Self> {
        GeolocError::check_len("day_of_year", years.len(), days_of_year.len())?;
        GeolocError::check_len("millis_of_day", years.len(), millis_of_day.len())?;
        Ok(Self {
            years,
            days_of_year,
            millis_of_day,
        })
    }
}

impl<T: ToPrimitive + Copy + Display> TimeLocator for YearDoyMillisTimeLocator<'_, T> {
    fn time_for(&self, _x: i64, y: i64) -> Result<i64> {
        let index = TimeLocatorError::check_index(y, self.years.len())?;

        let year = self.years[index];
        let doy = self.days_of_year[index];
        let date = year
            .to_i32()
            .zip(doy.to_u32())
            .and_then(|(year, doy)| NaiveDate::from_yo_opt(year, doy))
            .ok_or_else(|| TimeLocatorError::invalid_raw_value(index, format!("{year}/{doy}")))?;

        let millis_of_day = finite_raw(self.millis_of_day, index)?;
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis())
            .ok_or_else(|| TimeLocatorError::invalid_raw_value(index, date))?;

        Ok(midnight + millis_of_day.round() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoloc_common::TAI1993_EPOCH_MILLIS;

    #[test]
    fn test_tai_vector_per_line() {
        // TAI - UTC was 27 s at the epoch
        let tai = [27.0_f64, 28.5, 30.0];
        let locator = Tai1993VectorTimeLocator::per_line(&tai);
        assert_eq!(locator.time_for(99, 0), Ok(TAI1993_EPOCH_MILLIS));
        assert_eq!(locator.time_for(0, 1), Ok(TAI1993_EPOCH_MILLIS + 1500));
        assert_eq!(
            locator.time_for(0, 3),
            Err(TimeLocatorError::out_of_bounds(3, 3))
        );
    }

    #[test]
    fn test_tai_vector_per_pixel() {
        let tai = [37.0_f32, 47.0];
        let locator = Tai1993VectorTimeLocator::new(&tai, TimeAxis::Pixel);
        assert_eq!(locator.time_for(1, 500), Ok(TAI1993_EPOCH_MILLIS + 20_000));
        assert!(locator.time_for(2, 0).is_err());
    }

    #[test]
    fn test_tai_vector_nan_is_invalid() {
        let tai = [f64::NAN];
        let locator = Tai1993VectorTimeLocator::per_line(&tai);
        assert!(matches!(
            locator.time_for(0, 0),
            Err(TimeLocatorError::InvalidRawValue { index: 0, .. })
        ));
    }

    #[test]
    fn test_tai_scan() {
        let tai = [27.0_f64, 29.0];
        let locator = Tai1993ScanTimeLocator::new(&tai, 10).unwrap();
        assert_eq!(locator.time_for(0, 9), Ok(TAI1993_EPOCH_MILLIS));
        assert_eq!(locator.time_for(0, 10), Ok(TAI1993_EPOCH_MILLIS + 2000));
        assert_eq!(
            locator.time_for(0, 20),
            Err(TimeLocatorError::out_of_bounds(2, 2))
        );
        assert!(locator.time_for(0, -1).is_err());
    }

    #[test]
    fn test_tai_scan_rejects_zero_lines() {
        let tai = [0.0_f64];
        assert!(Tai1993ScanTimeLocator::new(&tai, 0).is_err());
    }

    #[test]
    fn test_millis_since_1970() {
        let millis = [1_511_221_318_154_i64, 1_511_221_319_154];
        let locator = MillisSince1970TimeLocator::new(&millis);
        assert_eq!(locator.time_for(3, 1), Ok(1_511_221_319_154));
        assert!(locator.time_for(0, 2).is_err());
    }

    #[test]
    fn test_micros_since_2000() {
        let micros = [564_536_518_154_074_i64, 564_536_518_454_999];
        let locator = MicrosSince2000TimeLocator::new(&micros);
        assert_eq!(locator.time_for(0, 0), Ok(1_511_221_318_154));
        assert_eq!(locator.time_for(1200, 1), Ok(1_511_221_318_454));
        assert_eq!(
            locator.time_for(0, 2),
            Err(TimeLocatorError::out_of_bounds(2, 2))
        );
        assert!(locator.time_for(0, -1).is_err());
    }

    #[test]
    fn test_micros_since_2000_nan_is_invalid() {
        let micros = [f64::NAN];
        let locator = MicrosSince2000TimeLocator::new(&micros);
        assert!(matches!(
            locator.time_for(0, 0),
            Err(TimeLocatorError::InvalidRawValue { index: 0, .. })
        ));
    }

    #[test]
    fn test_year_doy_millis() {
        let years = [2017_i32, 2017];
        let doys = [324, 366];
        let millis = [85_318_154, 0];
        let locator = YearDoyMillisTimeLocator::new(&years, &doys, &millis).unwrap();

        // 2017 day 324 is 2017-11-20
        assert_eq!(locator.time_for(0, 0), Ok(1_511_221_318_154));
        // 2017 has no day 366
        assert!(matches!(
            locator.time_for(0, 1),
            Err(TimeLocatorError::InvalidRawValue { index: 1, .. })
        ));
        assert!(matches!(
            locator.time_for(0, 2),
            Err(TimeLocatorError::IndexOutOfBounds { index: 2, len: 2 })
        ));
    }

    #[test]
    fn test_year_doy_millis_length_mismatch() {
        let years = [2017_i32, 2017];
        let doys = [1];
        let millis = [0, 0];
        let err = YearDoyMillisTimeLocator::new(&years, &doys, &millis).unwrap_err();
        assert_eq!(err, GeolocError::dimension_mismatch("day_of_year", 2, 1));
    }
}
