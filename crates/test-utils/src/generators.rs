//! Test data generators for synthetic granule geolocation.
//!
//! These generators create predictable, verifiable coordinate arrays that
//! can be used across the test suite. All 2D arrays are row-major.

/// Geolocation arrays of a synthetic swath granule.
#[derive(Debug, Clone)]
pub struct SyntheticSwath {
    pub width: usize,
    pub height: usize,
    pub lons: Vec<f32>,
    pub lats: Vec<f32>,
}

impl SyntheticSwath {
    /// Geolocation of pixel (col, row) as (lon, lat).
    pub fn geo_at(&self, col: usize, row: usize) -> (f32, f32) {
        let i = row * self.width + col;
        (self.lons[i], self.lats[i])
    }

    /// Marks the given (col, row) pixels as gaps (NaN lon and lat).
    pub fn with_gaps(mut self, positions: &[(usize, usize)]) -> Self {
        for &(col, row) in positions {
            if col < self.width && row < self.height {
                let i = row * self.width + col;
                self.lons[i] = f32::NAN;
                self.lats[i] = f32::NAN;
            }
        }
        self
    }
}

/// Wraps a longitude into [-180, 180).
pub fn wrap_lon(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

/// Creates a sheared swath where pixel (col, row) is located at
/// `origin + col * col_step + row * row_step` (degrees, longitude wrapped).
///
/// # Example
///
/// ```
/// use test_utils::create_swath;
///
/// let swath = create_swath(4, 3, (10.0, 20.0), (0.5, 0.0), (0.0, 1.0));
/// assert_eq!(swath.lons.len(), 12);
/// assert_eq!(swath.geo_at(2, 1), (11.0, 21.0));
/// ```
pub fn create_swath(
    width: usize,
    height: usize,
    origin: (f64, f64),
    col_step: (f64, f64),
    row_step: (f64, f64),
) -> SyntheticSwath {
    let mut lons = Vec::with_capacity(width * height);
    let mut lats = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let lon = origin.0 + col as f64 * col_step.0 + row as f64 * row_step.0;
            let lat = origin.1 + col as f64 * col_step.1 + row as f64 * row_step.1;
            lons.push(wrap_lon(lon) as f32);
            lats.push(lat as f32);
        }
    }
    SyntheticSwath {
        width,
        height,
        lons,
        lats,
    }
}

/// A tilted mid-latitude swath roughly like one granule of a polar orbiter:
/// scan lines run east-west, the track heads north-north-west.
pub fn create_orbit_swath(width: usize, height: usize) -> SyntheticSwath {
    create_swath(width, height, (-20.0, -30.0), (0.1, 0.01), (-0.02, 0.1))
}

/// A swath crossing the antimeridian in its scan direction.
pub fn create_antimeridian_swath(width: usize, height: usize) -> SyntheticSwath {
    let half_extent = width as f64 * 0.1 / 2.0;
    create_swath(width, height, (180.0 - half_extent, -10.0), (0.1, 0.0), (0.0, 0.1))
}

/// Creates an evenly spaced axis of `n` samples starting at `start`.
pub fn create_axis(start: f64, step: f64, n: usize) -> Vec<f32> {
    (0..n).map(|i| (start + i as f64 * step) as f32).collect()
}

/// Creates a straight ground track of `n` samples as (lons, lats).
pub fn create_track(n: usize, start: (f64, f64), step: (f64, f64)) -> (Vec<f32>, Vec<f32>) {
    (0..n)
        .map(|i| {
            let lon = wrap_lon(start.0 + i as f64 * step.0);
            let lat = start.1 + i as f64 * step.1;
            (lon as f32, lat as f32)
        })
        .unzip()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_lon() {
        assert_eq!(wrap_lon(0.0), 0.0);
        assert_eq!(wrap_lon(180.0), -180.0);
        assert_eq!(wrap_lon(190.0), -170.0);
        assert_eq!(wrap_lon(-190.0), 170.0);
    }

    #[test]
    fn test_antimeridian_swath_wraps() {
        let swath = create_antimeridian_swath(20, 2);
        let (first, _) = swath.geo_at(0, 0);
        let (last, _) = swath.geo_at(19, 0);
        assert!(first > 170.0, "first lon {first}");
        assert!(last < -170.0, "last lon {last}");
    }

    #[test]
    fn test_with_gaps() {
        let swath = create_orbit_swath(5, 5).with_gaps(&[(1, 2), (10, 10)]);
        let (lon, lat) = swath.geo_at(1, 2);
        assert!(lon.is_nan() && lat.is_nan());
        assert!(swath.geo_at(0, 0).0.is_finite());
    }

    #[test]
    fn test_create_track() {
        let (lons, lats) = create_track(3, (179.0, 0.0), (1.0, 0.5));
        assert_eq!(lons, vec![179.0, -180.0, -179.0]);
        assert_eq!(lats, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_create_axis() {
        assert_eq!(create_axis(-1.0, 0.5, 4), vec![-1.0, -0.5, 0.0, 0.5]);
    }
}
