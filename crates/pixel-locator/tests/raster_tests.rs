//! Tests for RasterPixelLocator on a coarse global raster.

use pixel_locator::{BoundingBox, LonOrientation, PixelLocator, PixelPos, RasterPixelLocator};
use test_utils::{assert_geo_approx_eq, raster};

fn boundary() -> BoundingBox {
    let (min_lon, min_lat, max_lon, max_lat) = raster::BOUNDARY;
    BoundingBox::new(min_lon, min_lat, max_lon, max_lat)
}

fn locator() -> RasterPixelLocator<'static> {
    RasterPixelLocator::new(&raster::LONS, &raster::LATS, Some(boundary())).unwrap()
}

// ============================================================================
// Forward lookup
// ============================================================================

#[test]
fn test_geo_location_pixel_centers() {
    let locator = locator();
    assert_geo_approx_eq!(locator.geo_location(0.5, 0.5).unwrap(), (-170.0, -80.0), 1e-8);
    assert_geo_approx_eq!(locator.geo_location(4.5, 2.5).unwrap(), (-10.0, -20.0), 1e-8);
    assert_geo_approx_eq!(locator.geo_location(9.5, 6.5).unwrap(), (170.0, 80.0), 1e-8);
}

#[test]
fn test_geo_location_whole_pixel() {
    let locator = locator();
    // any coordinate inside the pixel maps to its sample
    assert_eq!(locator.geo_location(1.0, 0.0), locator.geo_location(1.5, 0.5));
    assert_eq!(locator.geo_location(1.99, 0.99), locator.geo_location(1.5, 0.5));
}

#[test]
fn test_geo_location_out_of_raster() {
    let locator = locator();
    assert_eq!(locator.geo_location(-1.0, 0.5), None);
    assert_eq!(locator.geo_location(11.0, 0.5), None);
    assert_eq!(locator.geo_location(10.0, 0.5), None);
    assert_eq!(locator.geo_location(0.5, 7.0), None);
    assert_eq!(locator.geo_location(0.5, f64::NAN), None);
}

// ============================================================================
// Inverse lookup
// ============================================================================

#[test]
fn test_pixel_location_nearest_sample() {
    let locator = locator();
    assert_eq!(locator.pixel_location(100.0, 20.0), vec![PixelPos::new(7.5, 4.5)]);
    assert_eq!(locator.pixel_location(-144.0, 0.0), vec![PixelPos::new(1.5, 3.5)]);
    assert_eq!(locator.pixel_location(-46.0, -20.0), vec![PixelPos::new(3.5, 2.5)]);
}

#[test]
fn test_pixel_location_exact_tie_takes_lower_index() {
    let locator = locator();
    // -150 is halfway between -170 and -130; 35 halfway between 20 and 50
    assert_eq!(locator.pixel_location(-150.0, 35.0), vec![PixelPos::new(0.5, 4.5)]);
    // 0 is halfway between -10 and 10
    assert_eq!(locator.pixel_location(0.0, 0.0), vec![PixelPos::new(4.5, 3.5)]);
}

#[test]
fn test_pixel_location_clamps_between_axis_and_boundary() {
    let locator = locator();
    assert_eq!(locator.pixel_location(-180.0, -88.0), vec![PixelPos::new(0.5, 0.5)]);
    assert_eq!(locator.pixel_location(180.0, 88.0), vec![PixelPos::new(9.5, 6.5)]);
    assert_eq!(locator.pixel_location(175.0, 85.0), vec![PixelPos::new(9.5, 6.5)]);
}

#[test]
fn test_pixel_location_outside_boundary() {
    let locator = locator();
    assert!(locator.pixel_location(0.0, 89.0).is_empty());
    assert!(locator.pixel_location(-180.5, 0.0).is_empty());
    assert!(locator.pixel_location(f64::NAN, 0.0).is_empty());
}

#[test]
fn test_inverse_of_every_sample() {
    let locator = locator();
    for (ix, &lon) in raster::LONS.iter().enumerate() {
        for (iy, &lat) in raster::LATS.iter().enumerate() {
            assert_eq!(
                locator.pixel_location(lon as f64, lat as f64),
                vec![PixelPos::center_of(ix, iy)]
            );
        }
    }
}

// ============================================================================
// East-to-west longitude axis
// ============================================================================

#[test]
fn test_east_to_west_axis() {
    let lons = raster::lons_east_to_west();
    let locator = RasterPixelLocator::with_orientation(
        &lons,
        &raster::LATS,
        Some(boundary()),
        LonOrientation::EastToWest,
    )
    .unwrap();

    assert_geo_approx_eq!(locator.geo_location(0.5, 0.5).unwrap(), (170.0, -80.0), 1e-8);
    // 100 is nearest to 90, which sits at index 2 when counted from the east
    assert_eq!(locator.pixel_location(100.0, 20.0), vec![PixelPos::new(2.5, 4.5)]);
    assert_eq!(locator.pixel_location(175.0, 20.0), vec![PixelPos::new(0.5, 4.5)]);
    assert_eq!(locator.pixel_location(-178.0, 20.0), vec![PixelPos::new(9.5, 4.5)]);
}
