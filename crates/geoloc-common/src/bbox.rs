//! Bounding box types and operations.

use serde::{Deserialize, Serialize};

use crate::GeoPos;

/// A geographic bounding rectangle in degrees.
///
/// Edges are inclusive: a point on the rectangle edge is inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Smallest box enclosing every finite value of the two axes.
    ///
    /// Returns None if either axis has no finite value.
    pub fn from_axes(lon_axis: &[f32], lat_axis: &[f32]) -> Option<Self> {
        let (min_lon, max_lon) = finite_extent(lon_axis)?;
        let (min_lat, max_lat) = finite_extent(lat_axis)?;
        Some(Self::new(min_lon, min_lat, max_lon, max_lat))
    }

    /// Width of the bounding box in degrees.
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Height of the bounding box in degrees.
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Check if a point is contained within this bbox (edges inclusive).
    pub fn contains_point(&self, lon: f64, lat: f64) -> bool {
        lon >= self.min_lon && lon <= self.max_lon && lat >= self.min_lat && lat <= self.max_lat
    }

    /// Center of the rectangle.
    pub fn center(&self) -> GeoPos {
        GeoPos::new(
            (self.min_lon + self.max_lon) / 2.0,
            (self.min_lat + self.max_lat) / 2.0,
        )
    }
}

fn finite_extent(values: &[f32]) -> Option<(f64, f64)> {
    values
        .iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, &v| {
            let v = v as f64;
            match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
            }
        })
}
