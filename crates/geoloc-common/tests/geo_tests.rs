//! Tests for the shared coordinate and bounding box types.

use geoloc_common::{BoundingBox, GeoPos, PixelPos, EARTH_MEAN_RADIUS_KM};

// ============================================================================
// BoundingBox tests
// ============================================================================

#[test]
fn test_bbox_new() {
    let bbox = BoundingBox::new(-180.0, -88.0, 180.0, 88.0);
    assert_eq!(bbox.min_lon, -180.0);
    assert_eq!(bbox.min_lat, -88.0);
    assert_eq!(bbox.max_lon, 180.0);
    assert_eq!(bbox.max_lat, 88.0);
    assert_eq!(bbox.width(), 360.0);
    assert_eq!(bbox.height(), 176.0);
}

#[test]
fn test_bbox_center() {
    let bbox = BoundingBox::new(-20.0, 10.0, 40.0, 30.0);
    assert_eq!(bbox.center(), GeoPos::new(10.0, 20.0));
}

#[test]
fn test_bbox_from_axes() {
    let lons = [-170.0, -130.0, 10.0, 170.0];
    let lats = [-80.0, 0.0, 80.0];
    let bbox = BoundingBox::from_axes(&lons, &lats).unwrap();
    assert_eq!(bbox, BoundingBox::new(-170.0, -80.0, 170.0, 80.0));
}

#[test]
fn test_bbox_serde_roundtrip() {
    let bbox = BoundingBox::new(-180.0, -88.0, 180.0, 88.0);
    let json = serde_json::to_string(&bbox).unwrap();
    assert!(json.contains("\"min_lon\":-180.0"));

    let back: BoundingBox = serde_json::from_str(&json).unwrap();
    assert_eq!(back, bbox);
}

// ============================================================================
// GeoPos / PixelPos tests
// ============================================================================

#[test]
fn test_geopos_from_tuple() {
    let p: GeoPos = (12.0, -4.5).into();
    assert_eq!(p.lon, 12.0);
    assert_eq!(p.lat, -4.5);
}

#[test]
fn test_distance_is_symmetric() {
    let a = GeoPos::new(26.0, 40.0);
    let b = GeoPos::new(15.0, -45.0);
    let d1 = a.distance_km(&b);
    let d2 = b.distance_km(&a);
    assert!((d1 - d2).abs() < 1e-9);
    assert!(d1 > 9000.0 && d1 < 10000.0, "got {d1}");
}

#[test]
fn test_distance_along_equator() {
    let a = GeoPos::new(0.0, 0.0);
    let b = GeoPos::new(90.0, 0.0);
    let expected = EARTH_MEAN_RADIUS_KM * std::f64::consts::FRAC_PI_2;
    assert!((a.distance_km(&b) - expected).abs() < 1e-6);
}

#[test]
fn test_pixel_pos_center() {
    let p = PixelPos::center_of(0, 0);
    assert_eq!(p, PixelPos::new(0.5, 0.5));
}
