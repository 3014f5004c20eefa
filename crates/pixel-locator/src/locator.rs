//! The pixel locator capability.

use std::sync::Arc;

use geoloc_common::{GeoPos, PixelPos};

/// Forward and inverse geolocation of one granule.
///
/// Absence is not an error: an unresolvable pixel is `None`, an
/// unresolvable position is an empty candidate list.
pub trait PixelLocator {
    /// Geographic position of the continuous pixel coordinate (x, y).
    fn geo_location(&self, x: f64, y: f64) -> Option<GeoPos>;

    /// Pixel positions (pixel centers) covering (lon, lat).
    ///
    /// More than one candidate is possible where a granule sees the same
    /// place twice (overlapping orbit segments, dual views).
    fn pixel_location(&self, lon: f64, lat: f64) -> Vec<PixelPos>;
}

impl<T: PixelLocator + ?Sized> PixelLocator for &T {
    fn geo_location(&self, x: f64, y: f64) -> Option<GeoPos> {
        (**self).geo_location(x, y)
    }

    fn pixel_location(&self, lon: f64, lat: f64) -> Vec<PixelPos> {
        (**self).pixel_location(lon, lat)
    }
}

impl<T: PixelLocator + ?Sized> PixelLocator for Box<T> {
    fn geo_location(&self, x: f64, y: f64) -> Option<GeoPos> {
        (**self).geo_location(x, y)
    }

    fn pixel_location(&self, lon: f64, lat: f64) -> Vec<PixelPos> {
        (**self).pixel_location(lon, lat)
    }
}

impl<T: PixelLocator + ?Sized> PixelLocator for Arc<T> {
    fn geo_location(&self, x: f64, y: f64) -> Option<GeoPos> {
        (**self).geo_location(x, y)
    }

    fn pixel_location(&self, lon: f64, lat: f64) -> Vec<PixelPos> {
        (**self).pixel_location(lon, lat)
    }
}
