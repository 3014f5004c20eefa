//! Unit-sphere helpers shared by the swath search and scene geometry.

use geoloc_common::GeoPos;
use nalgebra::Vector3;

/// Unit vector of a lon/lat position in degrees.
#[inline]
pub(crate) fn unit_vector(lon: f64, lat: f64) -> Vector3<f64> {
    let (sin_lat, cos_lat) = lat.to_radians().sin_cos();
    let (sin_lon, cos_lon) = lon.to_radians().sin_cos();
    Vector3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
}

/// Inverse of [`unit_vector`] for any non-zero vector.
pub(crate) fn to_geo(v: &Vector3<f64>) -> Option<GeoPos> {
    let norm = v.norm();
    if !norm.is_finite() || norm < 1e-12 {
        return None;
    }
    let lat = (v.z / norm).clamp(-1.0, 1.0).asin().to_degrees();
    let lon = v.y.atan2(v.x).to_degrees();
    Some(GeoPos::new(lon, lat))
}

/// 1 - cos(angle) between two unit vectors. Monotonic in the angle.
#[inline]
pub(crate) fn cosine_distance(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    1.0 - a.dot(b)
}
