//! Geolocation of regular lon/lat rasters.
//!
//! The grid is described by two independent 1D axes. The axes need not be
//! evenly spaced; the inverse lookup picks the nearest sample per axis.

use geoloc_common::{BoundingBox, GeoPos, GeolocError, PixelPos, Result};
use tracing::debug;

use crate::PixelLocator;

/// Direction of the longitude axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LonOrientation {
    /// Ascending longitudes, index 0 is the westernmost column.
    #[default]
    WestToEast,
    /// Descending longitudes, index 0 is the easternmost column.
    EastToWest,
}

/// Pixel locator for an axis-aligned lon/lat raster.
#[derive(Debug, Clone, Copy)]
pub struct RasterPixelLocator<'a> {
    lon_axis: &'a [f32],
    lat_axis: &'a [f32],
    boundary: BoundingBox,
    orientation: LonOrientation,
}

impl<'a> RasterPixelLocator<'a> {
    /// Create a west-to-east raster locator.
    ///
    /// Without an explicit `boundary` the rectangle spanned by the axes is
    /// used.
    pub fn new(
        lon_axis: &'a [f32],
        lat_axis: &'a [f32],
        boundary: Option<BoundingBox>,
    ) -> Result<Self> {
        Self::with_orientation(lon_axis, lat_axis, boundary, LonOrientation::WestToEast)
    }

    pub fn with_orientation(
        lon_axis: &'a [f32],
        lat_axis: &'a [f32],
        boundary: Option<BoundingBox>,
        orientation: LonOrientation,
    ) -> Result<Self> {
        validate_axis("lon", lon_axis)?;
        validate_axis("lat", lat_axis)?;

        let boundary = match boundary {
            Some(b) => b,
            None => BoundingBox::from_axes(lon_axis, lat_axis)
                .ok_or_else(|| GeolocError::invalid_axis("lon/lat", "no finite samples"))?,
        };

        debug!(
            width = lon_axis.len(),
            height = lat_axis.len(),
            ?boundary,
            ?orientation,
            "Created raster pixel locator"
        );

        Ok(Self {
            lon_axis,
            lat_axis,
            boundary,
            orientation,
        })
    }

    pub fn boundary(&self) -> &BoundingBox {
        &self.boundary
    }

    pub fn orientation(&self) -> LonOrientation {
        self.orientation
    }

    pub fn width(&self) -> usize {
        self.lon_axis.len()
    }

    pub fn height(&self) -> usize {
        self.lat_axis.len()
    }
}

fn validate_axis(name: &str, axis: &[f32]) -> Result<()> {
    if axis.is_empty() {
        return Err(GeolocError::EmptyAxis(name.to_string()));
    }
    if let Some(i) = axis.iter().position(|v| !v.is_finite()) {
        return Err(GeolocError::invalid_axis(
            name,
            format!("non-finite value at index {i}"),
        ));
    }
    Ok(())
}

/// Index of the pixel containing a continuous coordinate.
fn pixel_index(coord: f64, len: usize) -> Option<usize> {
    if !coord.is_finite() {
        return None;
    }
    let index = coord.floor();
    if index < 0.0 || index >= len as f64 {
        return None;
    }
    Some(index as usize)
}

/// Index of the axis sample nearest to `target`.
///
/// Scans for the first sample at or past the target in axis direction.
/// Targets beyond the last sample clamp to it. Equidistant neighbors
/// resolve to the lower index.
fn nearest_axis_index(axis: &[f32], target: f64, ascending: bool) -> usize {
    let reached = |v: f32| {
        let v = v as f64;
        if ascending {
            v >= target
        } else {
            v <= target
        }
    };

    match axis.iter().position(|&v| reached(v)) {
        None => axis.len() - 1,
        Some(0) => 0,
        Some(i) => {
            let here = (axis[i] as f64 - target).abs();
            let before = (axis[i - 1] as f64 - target).abs();
            if before <= here {
                i - 1
            } else {
                i
            }
        }
    }
}

impl PixelLocator for RasterPixelLocator<'_> {
    fn geo_location(&self, x: f64, y: f64) -> Option<GeoPos> {
        let ix = pixel_index(x, self.lon_axis.len())?;
        let iy = pixel_index(y, self.lat_axis.len())?;
        Some(GeoPos::new(
            self.lon_axis[ix] as f64,
            self.lat_axis[iy] as f64,
        ))
    }

    fn pixel_location(&self, lon: f64, lat: f64) -> Vec<PixelPos> {
        if !self.boundary.contains_point(lon, lat) {
            return Vec::new();
        }

        let ascending = self.orientation == LonOrientation::WestToEast;
        let ix = nearest_axis_index(self.lon_axis, lon, ascending);
        let iy = nearest_axis_index(self.lat_axis, lat, true);
        vec![PixelPos::center_of(ix, iy)]
    }
}

/// Pixel locator for a global raster whose longitude axis wraps around the
/// globe and repeats some columns at both ends.
///
/// Longitudes may be given in [0, 360) or [-180, 180]; all comparisons are
/// made on the circle. The latitude axis must be ascending. Positions that
/// fall on a repeated longitude resolve to every column carrying it, in
/// column order.
#[derive(Debug, Clone, Copy)]
pub struct OverlappingRasterPixelLocator<'a> {
    lon_axis: &'a [f32],
    lat_axis: &'a [f32],
}

impl<'a> OverlappingRasterPixelLocator<'a> {
    pub fn new(lon_axis: &'a [f32], lat_axis: &'a [f32]) -> Result<Self> {
        validate_axis("lon", lon_axis)?;
        validate_axis("lat", lat_axis)?;

        debug!(
            width = lon_axis.len(),
            height = lat_axis.len(),
            "Created overlapping raster pixel locator"
        );

        Ok(Self { lon_axis, lat_axis })
    }

    pub fn width(&self) -> usize {
        self.lon_axis.len()
    }

    pub fn height(&self) -> usize {
        self.lat_axis.len()
    }

    /// Columns whose longitude is nearest to `lon` on the circle.
    ///
    /// Among distinct equidistant longitudes the lower column wins; every
    /// column repeating the winning longitude is returned.
    fn nearest_columns(&self, lon: f64) -> Vec<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &v) in self.lon_axis.iter().enumerate() {
            let d = lon_separation(v as f64, lon);
            if best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((i, d));
            }
        }

        let Some((first, _)) = best else {
            return Vec::new();
        };
        let winner = normalize_lon(self.lon_axis[first] as f64);
        (first..self.lon_axis.len())
            .filter(|&i| normalize_lon(self.lon_axis[i] as f64) == winner)
            .collect()
    }
}

/// Longitude mapped to [-180, 180).
fn normalize_lon(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

/// Angular separation in degrees of two longitudes, in [0, 180].
fn lon_separation(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

impl PixelLocator for OverlappingRasterPixelLocator<'_> {
    fn geo_location(&self, x: f64, y: f64) -> Option<GeoPos> {
        let ix = pixel_index(x, self.lon_axis.len())?;
        let iy = pixel_index(y, self.lat_axis.len())?;
        Some(GeoPos::new(
            normalize_lon(self.lon_axis[ix] as f64),
            self.lat_axis[iy] as f64,
        ))
    }

    fn pixel_location(&self, lon: f64, lat: f64) -> Vec<PixelPos> {
        if !GeoPos::new(lon, lat).is_valid() {
            return Vec::new();
        }

        let iy = nearest_axis_index(self.lat_axis, lat, true);
        self.nearest_columns(lon)
            .into_iter()
            .map(|ix| PixelPos::center_of(ix, iy))
            .collect()
    }
}
