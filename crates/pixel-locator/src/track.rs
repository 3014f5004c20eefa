//! Geolocation of along-track granules with one pixel per scan line.
//!
//! Profiling instruments and in-situ tracks deliver a single column of
//! samples, so the granule is one pixel wide and x lies in [0, 1).

use geoloc_common::{GeoPos, GeolocError, PixelPos, Result};
use tracing::debug;

use crate::PixelLocator;

#[derive(Debug, Clone, Copy)]
pub struct TrackPixelLocator<'a> {
    lons: &'a [f32],
    lats: &'a [f32],
    max_distance_km: f64,
}

impl<'a> TrackPixelLocator<'a> {
    pub fn new(lons: &'a [f32], lats: &'a [f32], max_distance_km: f64) -> Result<Self> {
        GeolocError::check_len("lat", lons.len(), lats.len())?;
        if max_distance_km.is_nan() || max_distance_km <= 0.0 {
            return Err(GeolocError::invalid_parameter(
                "max_distance_km",
                "must be greater than zero",
            ));
        }
        debug!(samples = lons.len(), max_distance_km, "Created track pixel locator");
        Ok(Self {
            lons,
            lats,
            max_distance_km,
        })
    }

    pub fn len(&self) -> usize {
        self.lons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lons.is_empty()
    }

    fn sample(&self, i: usize) -> Option<GeoPos> {
        let (lon, lat) = (self.lons[i], self.lats[i]);
        (lon.is_finite() && lat.is_finite()).then(|| GeoPos::new(lon as f64, lat as f64))
    }
}

impl PixelLocator for TrackPixelLocator<'_> {
    /// The lower edge y = n still maps to the last sample.
    fn geo_location(&self, x: f64, y: f64) -> Option<GeoPos> {
        let n = self.lons.len();
        if n == 0 || !(0.0..1.0).contains(&x) || !(0.0..=n as f64).contains(&y) {
            return None;
        }
        let i = (y.floor() as usize).min(n - 1);
        self.sample(i)
    }

    fn pixel_location(&self, lon: f64, lat: f64) -> Vec<PixelPos> {
        if !lon.is_finite() || !lat.is_finite() {
            return Vec::new();
        }
        let query = GeoPos::new(lon, lat);

        let nearest = (0..self.lons.len())
            .filter_map(|i| self.sample(i).map(|p| (i, p.distance_km(&query))))
            .filter(|&(_, d)| d <= self.max_distance_km)
            .min_by(|a, b| a.1.total_cmp(&b.1));

        match nearest {
            Some((i, _)) => vec![PixelPos::center_of(0, i)],
            None => Vec::new(),
        }
    }
}
