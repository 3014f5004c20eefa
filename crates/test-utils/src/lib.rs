//! Shared test utilities for the granule geolocation workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Reference raster axes and subscene fixtures
//! - Synthetic swath, track and axis generators
//! - Approximate-equality assertion macros for coordinates
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{assert_geo_approx_eq, fixtures, create_swath};
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;

use std::io::Write;

/// Writes `contents` to a fresh temporary file with the given suffix.
///
/// The file is removed when the returned handle is dropped.
pub fn write_temp_file(contents: &str, suffix: &str) -> std::io::Result<tempfile::NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// assert_approx_eq!(1.1_f32, 1.0_f32, 0.001_f32);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if !(diff <= epsilon) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Macro for approximate equality of coordinate pairs.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_coords_approx_eq;
///
/// assert_coords_approx_eq!((1.0001, 2.0001), (1.0, 2.0), 0.001);
/// ```
#[macro_export]
macro_rules! assert_coords_approx_eq {
    (($x1:expr, $y1:expr), ($x2:expr, $y2:expr), $epsilon:expr) => {{
        $crate::assert_approx_eq!($x1, $x2, $epsilon);
        $crate::assert_approx_eq!($y1, $y2, $epsilon);
    }};
}

/// Asserts that a value with `lon`/`lat` fields matches an expected pair.
///
/// ```ignore
/// let geo = locator.geo_location(0.5, 0.5).unwrap();
/// assert_geo_approx_eq!(geo, (-170.0, -80.0), 1e-8);
/// ```
#[macro_export]
macro_rules! assert_geo_approx_eq {
    ($geo:expr, ($lon:expr, $lat:expr), $epsilon:expr) => {{
        let geo = $geo;
        $crate::assert_coords_approx_eq!((geo.lon, geo.lat), ($lon, $lat), $epsilon);
    }};
    ($geo:expr, $expected:expr, $epsilon:expr) => {{
        let geo = $geo;
        let expected = $expected;
        $crate::assert_coords_approx_eq!((geo.lon, geo.lat), (expected.0, expected.1), $epsilon);
    }};
}

/// Asserts that a value with `x`/`y` fields matches an expected pair.
#[macro_export]
macro_rules! assert_pixel_approx_eq {
    ($pixel:expr, ($x:expr, $y:expr), $epsilon:expr) => {{
        let pixel = $pixel;
        $crate::assert_coords_approx_eq!((pixel.x, pixel.y), ($x, $y), $epsilon);
    }};
}
