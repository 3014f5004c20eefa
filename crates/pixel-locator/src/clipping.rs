//! Restriction of a locator to a range of scan lines.

use geoloc_common::{GeoPos, PixelPos};

use crate::PixelLocator;

/// Wraps a delegate locator and drops inverse-lookup candidates outside the
/// inclusive line range `[min_y, max_y]`.
///
/// Forward lookups pass through unchanged. Candidates are only filtered,
/// never added or reordered.
#[derive(Debug, Clone)]
pub struct ClippingPixelLocator<L> {
    delegate: L,
    min_y: i64,
    max_y: i64,
}

impl<L: PixelLocator> ClippingPixelLocator<L> {
    pub fn new(delegate: L, min_y: i64, max_y: i64) -> Self {
        Self {
            delegate,
            min_y,
            max_y,
        }
    }

    pub fn delegate(&self) -> &L {
        &self.delegate
    }

    pub fn min_y(&self) -> i64 {
        self.min_y
    }

    pub fn max_y(&self) -> i64 {
        self.max_y
    }
}

impl<L: PixelLocator> PixelLocator for ClippingPixelLocator<L> {
    fn geo_location(&self, x: f64, y: f64) -> Option<GeoPos> {
        self.delegate.geo_location(x, y)
    }

    fn pixel_location(&self, lon: f64, lat: f64) -> Vec<PixelPos> {
        let (min_y, max_y) = (self.min_y as f64, self.max_y as f64);
        let mut candidates = self.delegate.pixel_location(lon, lat);
        candidates.retain(|p| p.y >= min_y && p.y <= max_y);
        candidates
    }
}
