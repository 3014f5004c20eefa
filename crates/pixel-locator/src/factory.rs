//! Factory for creating pixel locators from reader arrays.
//!
//! The `PixelLocatorFactory` carries the search configuration shared by all
//! locators of a process and composes the orbit subscene locator.
//!
//! # Example
//!
//! ```rust,ignore
//! use pixel_locator::{PixelLocatorFactory, BoundingBox};
//!
//! let factory = PixelLocatorFactory::from_env();
//! let swath = factory.swath_pixel_locator(&lons, &lats, width, height)?;
//!
//! // Orbit granule holding two half orbits: keep the one covering the scene
//! let scene = BoundingBox::new(-10.0, 30.0, 20.0, 50.0);
//! if let Some(locator) = factory.sub_scene_pixel_locator(&scene, width, height, 5000, &swath) {
//!     let pixels = locator.pixel_location(5.0, 40.0);
//! }
//! ```

use geoloc_common::{BoundingBox, Result};
use tracing::debug;

use crate::clipping::ClippingPixelLocator;
use crate::config::LocatorConfig;
use crate::geometry::Polygon;
use crate::raster::{OverlappingRasterPixelLocator, RasterPixelLocator};
use crate::swath::SwathPixelLocator;
use crate::track::TrackPixelLocator;
use crate::PixelLocator;

/// Factory for creating pixel locators that share one configuration.
#[derive(Debug, Clone, Default)]
pub struct PixelLocatorFactory {
    config: LocatorConfig,
}

impl PixelLocatorFactory {
    /// Create a new factory with an explicit configuration.
    pub fn new(config: LocatorConfig) -> Self {
        Self { config }
    }

    /// Create a new factory with configuration from environment variables.
    pub fn from_env() -> Self {
        Self::new(LocatorConfig::from_env())
    }

    /// Get the locator configuration.
    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    /// Locator over row-major swath geolocation arrays.
    pub fn swath_pixel_locator<'a>(
        &self,
        lons: &'a [f32],
        lats: &'a [f32],
        width: usize,
        height: usize,
    ) -> Result<SwathPixelLocator<'a>> {
        SwathPixelLocator::new(lons, lats, width, height, self.config.swath)
    }

    /// Locator over regular lon/lat axes.
    pub fn raster_pixel_locator<'a>(
        &self,
        lon_axis: &'a [f32],
        lat_axis: &'a [f32],
        boundary: Option<BoundingBox>,
    ) -> Result<RasterPixelLocator<'a>> {
        RasterPixelLocator::new(lon_axis, lat_axis, boundary)
    }

    /// Locator over a global raster whose longitude axis wraps with
    /// repeated columns.
    pub fn overlapping_raster_pixel_locator<'a>(
        &self,
        lon_axis: &'a [f32],
        lat_axis: &'a [f32],
    ) -> Result<OverlappingRasterPixelLocator<'a>> {
        OverlappingRasterPixelLocator::new(lon_axis, lat_axis)
    }

    /// Locator over a single-column ground track.
    pub fn track_pixel_locator<'a>(
        &self,
        lons: &'a [f32],
        lats: &'a [f32],
    ) -> Result<TrackPixelLocator<'a>> {
        TrackPixelLocator::new(lons, lats, self.config.track_max_distance_km)
    }

    /// Restrict `delegate` to the inclusive line range `[min_y, max_y]`.
    pub fn clipping_pixel_locator<L: PixelLocator>(
        &self,
        delegate: L,
        min_y: i64,
        max_y: i64,
    ) -> ClippingPixelLocator<L> {
        ClippingPixelLocator::new(delegate, min_y, max_y)
    }

    /// Pick the half-orbit segment of a granule that covers a scene.
    ///
    /// Granules holding more than half an orbit see some places twice. The
    /// granule is split into segment 0 (lines `[0, segment_height - 1]`) and
    /// segment 1 (lines `[segment_height - 1, min(2 * segment_height,
    /// full_height) - 1]`); the returned locator is clipped to the segment
    /// whose center is nearer to the scene centroid. Ties go to segment 0.
    ///
    /// The delegate is probed exactly twice, at the center column of each
    /// segment's middle line. Returns `None` if either probe has no
    /// geolocation.
    pub fn sub_scene_pixel_locator<P, L>(
        &self,
        scene_geometry: &P,
        full_width: usize,
        full_height: usize,
        segment_height: usize,
        delegate: L,
    ) -> Option<ClippingPixelLocator<L>>
    where
        P: Polygon + ?Sized,
        L: PixelLocator,
    {
        if segment_height == 0 || full_height == 0 {
            debug!(segment_height, full_height, "Cannot split granule into segments");
            return None;
        }

        let x = (full_width / 2) as f64 + 0.5;
        let y0 = (segment_height / 2) as f64 + 0.5;
        let y1 = (segment_height + segment_height / 2) as f64 + 0.5;

        let Some(center_0) = delegate.geo_location(x, y0) else {
            debug!(x, y = y0, "No geolocation for segment 0 probe, no subscene locator");
            return None;
        };
        let Some(center_1) = delegate.geo_location(x, y1) else {
            debug!(x, y = y1, "No geolocation for segment 1 probe, no subscene locator");
            return None;
        };

        let centroid = scene_geometry.centroid();
        let d0 = centroid.distance_km(&center_0);
        let d1 = centroid.distance_km(&center_1);

        let segment = segment_height as i64;
        let (min_y, max_y) = if d1 < d0 {
            let end = (2 * segment_height).min(full_height) as i64;
            (segment - 1, end - 1)
        } else {
            (0, segment - 1)
        };

        debug!(
            distance_0_km = d0,
            distance_1_km = d1,
            min_y,
            max_y,
            "Selected orbit segment"
        );
        Some(ClippingPixelLocator::new(delegate, min_y, max_y))
    }
}
