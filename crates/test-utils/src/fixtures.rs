//! Common test fixtures for geolocation tests.
//!
//! This module provides pre-defined inputs whose expected answers are known
//! by hand.

/// A coarse global raster with uneven axis spacing.
pub mod raster {
    /// Longitude axis, west to east.
    pub const LONS: [f32; 10] = [
        -170.0, -130.0, -90.0, -50.0, -10.0, 10.0, 50.0, 90.0, 130.0, 170.0,
    ];

    /// Latitude axis, south to north.
    pub const LATS: [f32; 7] = [-80.0, -50.0, -20.0, 0.0, 20.0, 50.0, 80.0];

    /// Boundary rectangle as (min_lon, min_lat, max_lon, max_lat).
    pub const BOUNDARY: (f64, f64, f64, f64) = (-180.0, -88.0, 180.0, 88.0);

    /// Longitude axis, east to west.
    pub fn lons_east_to_west() -> Vec<f32> {
        LONS.iter().rev().copied().collect()
    }
}

/// An orbit granule split into two overlapping half-orbit segments.
pub mod subscene {
    pub const FULL_WIDTH: usize = 200;
    pub const FULL_HEIGHT: usize = 9000;
    pub const SEGMENT_HEIGHT: usize = 5000;

    /// Pixel probed for segment 0 and its geolocation.
    pub const PROBE_0: (f64, f64) = (100.5, 2500.5);
    pub const PROBE_0_GEO: (f64, f64) = (30.0, 45.0);

    /// Pixel probed for segment 1 and its geolocation.
    pub const PROBE_1: (f64, f64) = (100.5, 7500.5);
    pub const PROBE_1_GEO: (f64, f64) = (15.0, -45.0);

    /// Scene centroids closer to the segment 0 / segment 1 probe.
    pub const CENTROID_NEAR_0: (f64, f64) = (26.0, 40.0);
    pub const CENTROID_NEAR_1: (f64, f64) = (17.0, -40.0);

    /// Expected clip windows as (min_y, max_y).
    pub const SEGMENT_0_LINES: (usize, usize) = (0, 4999);
    pub const SEGMENT_1_LINES: (usize, usize) = (4999, 8999);
}

/// Raw time values with hand-checked conversions.
pub mod time {
    /// Days since 2000, seconds of day, microseconds.
    pub const DAY_SECOND_MICRO: (i32, i32, i32) = (6533, 85318, 154074);

    /// `DAY_SECOND_MICRO` in epoch milliseconds (2017-11-20T23:41:58.154Z).
    pub const DAY_SECOND_MICRO_MILLIS: i64 = 1_511_221_318_154;

    /// The same instant as microseconds since 2000.
    pub const MICROS_SINCE_2000: i64 = 564_536_518_154_074;

    /// AMSR-E scan time in TAI seconds since 1993 (2005-02-17, TAI - UTC = 32 s).
    pub const AMSRE_TAI1993: f64 = 3.827726675720466E8;

    /// `AMSRE_TAI1993` in epoch milliseconds.
    pub const AMSRE_MILLIS: i64 = 1_108_619_035_572;

    /// AMSR2 scan time in TAI seconds since 1993 (2013-07-01, TAI - UTC = 35 s).
    pub const AMSR2_TAI1993: f64 = 6.468269035062965E8;

    /// `AMSR2_TAI1993` in epoch milliseconds.
    pub const AMSR2_MILLIS: i64 = 1_372_673_268_506;
}
