//! Time locators that answer [`FILL_TIME`] instead of failing.
//!
//! Both fill-valued raw data and requests outside the stored arrays map to
//! the sentinel; neither variant ever returns an error.

use geoloc_common::{days_since_2000_to_millis, GeolocError, EPOCH_2000_MILLIS};
use num_traits::ToPrimitive;

use crate::{Result, TimeLocator, FILL_TIME};

/// Days since 2000-01-01, seconds of day and microseconds, one triple per
/// scan line of `width` pixels.
#[derive(Debug, Clone, Copy)]
pub struct DaySecondMicroTimeLocator<'a, T> {
    days: &'a [T],
    seconds: &'a [T],
    micros: &'a [T],
    width: i64,
    day_fill: T,
    second_fill: T,
    micro_fill: T,
}

impl<'a, T: ToPrimitive + Copy + PartialEq> DaySecondMicroTimeLocator<'a, T> {
    /// The three arrays must have one entry per line.
    pub fn new(
        days: &'a [T],
        seconds: &'a [T],
        micros: &'a [T],
        width: usize,
        fill_values: (T, T, T),
    ) -> geoloc_common::Result<Self> {
        GeolocError::check_len("seconds", days.len(), seconds.len())?;
        GeolocError::check_len("microseconds", days.len(), micros.len())?;
        let width = i64::try_from(width)
            .map_err(|_| GeolocError::invalid_parameter("width", "too large"))?;

        let (day_fill, second_fill, micro_fill) = fill_values;
        Ok(Self {
            days,
            seconds,
            micros,
            width,
            day_fill,
            second_fill,
            micro_fill,
        })
    }

    fn line_index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || x >= self.width {
            return None;
        }
        usize::try_from(y).ok().filter(|&i| i < self.days.len())
    }
}

impl<T: ToPrimitive + Copy + PartialEq> TimeLocator for DaySecondMicroTimeLocator<'_, T> {
    fn time_for(&self, x: i64, y: i64) -> Result<i64> {
        let Some(line) = self.line_index(x, y) else {
            return Ok(FILL_TIME);
        };

        let day = self.days[line];
        let second = self.seconds[line];
        let micro = self.micros[line];
        if day == self.day_fill || second == self.second_fill || micro == self.micro_fill {
            return Ok(FILL_TIME);
        }

        let time = match (day.to_i64(), second.to_i64(), micro.to_i64()) {
            (Some(day), Some(second), Some(micro)) => days_since_2000_to_millis(day, second, micro),
            _ => FILL_TIME,
        };
        Ok(time)
    }
}

/// Seconds since 2000-01-01, one value per pixel in a row-major 2D array.
#[derive(Debug, Clone, Copy)]
pub struct SecondsSince2000TimeLocator<'a, T> {
    seconds: &'a [T],
    width: usize,
    height: usize,
    fill_value: T,
}

impl<'a, T: ToPrimitive + Copy + PartialEq> SecondsSince2000TimeLocator<'a, T> {
    pub fn new(
        seconds: &'a [T],
        width: usize,
        height: usize,
        fill_value: T,
    ) -> geoloc_common::Result<Self> {
        let expected = width
            .checked_mul(height)
            .ok_or_else(|| GeolocError::invalid_parameter("width/height", "too large"))?;
        GeolocError::check_len("seconds_since_2000", expected, seconds.len())?;
        Ok(Self {
            seconds,
            width,
            height,
            fill_value,
        })
    }
}

impl<T: ToPrimitive + Copy + PartialEq> TimeLocator for SecondsSince2000TimeLocator<'_, T> {
    fn time_for(&self, x: i64, y: i64) -> Result<i64> {
        let (Ok(col), Ok(row)) = (usize::try_from(x), usize::try_from(y)) else {
            return Ok(FILL_TIME);
        };
        if col >= self.width || row >= self.height {
            return Ok(FILL_TIME);
        }

        let raw = self.seconds[row * self.width + col];
        if raw == self.fill_value {
            return Ok(FILL_TIME);
        }
        let time = raw
            .to_f64()
            .filter(|s| s.is_finite())
            .map_or(FILL_TIME, |s| EPOCH_2000_MILLIS + (s * 1000.0).round() as i64);
        Ok(time)
    }
}
