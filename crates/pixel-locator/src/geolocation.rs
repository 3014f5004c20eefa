//! Materialized lon/lat windows around a pixel.

use serde::Serialize;

use crate::PixelLocator;

/// A window of geolocations, stored row-major with the smallest y first.
///
/// Cells without geolocation hold NaN.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoWindow {
    pub width: usize,
    pub height: usize,
    /// Pixel coordinate of the upper-left cell (integer, not the center).
    pub origin_x: i64,
    pub origin_y: i64,
    pub lons: Vec<f64>,
    pub lats: Vec<f64>,
}

impl GeoWindow {
    pub fn lon_at(&self, col: usize, row: usize) -> f64 {
        self.lons[row * self.width + col]
    }

    pub fn lat_at(&self, col: usize, row: usize) -> f64 {
        self.lats[row * self.width + col]
    }

    /// Number of cells with a geolocation.
    pub fn valid_count(&self) -> usize {
        self.lons
            .iter()
            .zip(&self.lats)
            .filter(|(lon, lat)| !lon.is_nan() && !lat.is_nan())
            .count()
    }
}

/// Extracts geolocation windows from a bound locator.
#[derive(Debug, Clone)]
pub struct GeolocationHandler<L> {
    locator: L,
}

impl<L: PixelLocator> GeolocationHandler<L> {
    pub fn new(locator: L) -> Self {
        Self { locator }
    }

    pub fn locator(&self) -> &L {
        &self.locator
    }

    /// Geolocations of the `width` x `height` window centered on pixel
    /// (center_x, center_y).
    ///
    /// The window starts at (center_x - width / 2, center_y - height / 2);
    /// each cell is sampled at its pixel center.
    pub fn window(&self, center_x: i64, center_y: i64, width: usize, height: usize) -> GeoWindow {
        let origin_x = center_x - (width / 2) as i64;
        let origin_y = center_y - (height / 2) as i64;

        let mut lons = Vec::with_capacity(width * height);
        let mut lats = Vec::with_capacity(width * height);
        for row in 0..height {
            let y = (origin_y + row as i64) as f64 + 0.5;
            for col in 0..width {
                let x = (origin_x + col as i64) as f64 + 0.5;
                match self.locator.geo_location(x, y) {
                    Some(geo) => {
                        lons.push(geo.lon);
                        lats.push(geo.lat);
                    }
                    None => {
                        lons.push(f64::NAN);
                        lats.push(f64::NAN);
                    }
                }
            }
        }

        GeoWindow {
            width,
            height,
            origin_x,
            origin_y,
            lons,
            lats,
        }
    }
}
