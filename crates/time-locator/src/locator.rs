//! The time locator capability.

use std::sync::Arc;

use crate::Result;

/// Returned by sentinel-based locators for fill values and out-of-range pixels.
pub const FILL_TIME: i64 = -1;

/// Maps a pixel to its acquisition time in epoch milliseconds (UTC).
pub trait TimeLocator {
    fn time_for(&self, x: i64, y: i64) -> Result<i64>;
}

impl<T: TimeLocator + ?Sized> TimeLocator for &T {
    fn time_for(&self, x: i64, y: i64) -> Result<i64> {
        (**self).time_for(x, y)
    }
}

impl<T: TimeLocator + ?Sized> TimeLocator for Box<T> {
    fn time_for(&self, x: i64, y: i64) -> Result<i64> {
        (**self).time_for(x, y)
    }
}

impl<T: TimeLocator + ?Sized> TimeLocator for Arc<T> {
    fn time_for(&self, x: i64, y: i64) -> Result<i64> {
        (**self).time_for(x, y)
    }
}
