//! Geographic and pixel coordinate types.

use serde::{Deserialize, Serialize};

/// Mean Earth radius (kilometers) used for great-circle distances.
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0;

/// A geographic position in degrees (WGS84 lon/lat).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPos {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPos {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Both components finite and inside [-180, 180] x [-90, 90].
    pub fn is_valid(&self) -> bool {
        self.lon.is_finite()
            && self.lat.is_finite()
            && (-180.0..=180.0).contains(&self.lon)
            && (-90.0..=90.0).contains(&self.lat)
    }

    /// Central angle to another position in radians (haversine).
    pub fn angular_distance(&self, other: &GeoPos) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = lat2 - lat1;
        let dlon = (other.lon - self.lon).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * a.sqrt().min(1.0).asin()
    }

    /// Great-circle distance to another position in kilometers.
    pub fn distance_km(&self, other: &GeoPos) -> f64 {
        self.angular_distance(other) * EARTH_MEAN_RADIUS_KM
    }
}

impl From<(f64, f64)> for GeoPos {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self { lon, lat }
    }
}

/// A continuous pixel position. Pixel centers sit at integer + 0.5.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPos {
    pub x: f64,
    pub y: f64,
}

impl PixelPos {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Center of the pixel at integer indices (col, row).
    pub fn center_of(col: usize, row: usize) -> Self {
        Self {
            x: col as f64 + 0.5,
            y: row as f64 + 0.5,
        }
    }
}
