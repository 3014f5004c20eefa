//! Scene geometry used to pick the relevant orbit segment.

use geoloc_common::{BoundingBox, GeoPos, GeolocError, Result};

use crate::sphere::{to_geo, unit_vector};

/// A scene footprint that can report its center.
pub trait Polygon {
    fn centroid(&self) -> GeoPos;
}

impl<T: Polygon + ?Sized> Polygon for &T {
    fn centroid(&self) -> GeoPos {
        (**self).centroid()
    }
}

impl Polygon for BoundingBox {
    fn centroid(&self) -> GeoPos {
        self.center()
    }
}

/// A closed polygon on the sphere, given by its vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct SphericalPolygon {
    vertices: Vec<GeoPos>,
}

impl SphericalPolygon {
    /// At least three valid vertices are required. A repeated closing vertex
    /// is accepted and dropped.
    pub fn new(mut vertices: Vec<GeoPos>) -> Result<Self> {
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        if vertices.len() < 3 {
            return Err(GeolocError::invalid_parameter(
                "vertices",
                format!("polygon needs at least 3 vertices, got {}", vertices.len()),
            ));
        }
        if let Some(bad) = vertices.iter().find(|v| !v.is_valid()) {
            return Err(GeolocError::invalid_parameter(
                "vertices",
                format!("invalid vertex {bad:?}"),
            ));
        }
        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[GeoPos] {
        &self.vertices
    }
}

impl Polygon for SphericalPolygon {
    /// Normalized mean of the vertex unit vectors. Falls back to the first
    /// vertex when the vertices cancel out.
    fn centroid(&self) -> GeoPos {
        let sum = self
            .vertices
            .iter()
            .map(|v| unit_vector(v.lon, v.lat))
            .fold(nalgebra::Vector3::zeros(), |acc, v| acc + v);
        to_geo(&sum).unwrap_or(self.vertices[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_centroid() {
        let bbox = BoundingBox::new(10.0, -20.0, 30.0, 0.0);
        assert_eq!(bbox.centroid(), GeoPos::new(20.0, -10.0));
    }

    #[test]
    fn test_spherical_centroid_symmetric() {
        let polygon = SphericalPolygon::new(vec![
            GeoPos::new(-10.0, -10.0),
            GeoPos::new(10.0, -10.0),
            GeoPos::new(10.0, 10.0),
            GeoPos::new(-10.0, 10.0),
        ])
        .unwrap();
        let c = polygon.centroid();
        assert!(c.lon.abs() < 1e-9 && c.lat.abs() < 1e-9, "{c:?}");
    }

    #[test]
    fn test_spherical_centroid_across_antimeridian() {
        let polygon = SphericalPolygon::new(vec![
            GeoPos::new(170.0, -5.0),
            GeoPos::new(-170.0, -5.0),
            GeoPos::new(-170.0, 5.0),
            GeoPos::new(170.0, 5.0),
            GeoPos::new(170.0, -5.0),
        ])
        .unwrap();
        assert_eq!(polygon.vertices().len(), 4);

        let c = polygon.centroid();
        assert!((c.lon.abs() - 180.0).abs() < 1e-9, "{c:?}");
        assert!(c.lat.abs() < 1e-9, "{c:?}");
    }

    #[test]
    fn test_spherical_polygon_validation() {
        assert!(SphericalPolygon::new(vec![GeoPos::new(0.0, 0.0), GeoPos::new(1.0, 0.0)]).is_err());
        assert!(SphericalPolygon::new(vec![
            GeoPos::new(0.0, 0.0),
            GeoPos::new(1.0, 0.0),
            GeoPos::new(1.0, f64::NAN),
        ])
        .is_err());
    }
}
