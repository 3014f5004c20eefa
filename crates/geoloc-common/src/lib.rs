//! Common types and utilities shared across the granule geolocation crates.

pub mod bbox;
pub mod error;
pub mod geo;
pub mod time;

pub use bbox::BoundingBox;
pub use error::{GeolocError, Result};
pub use geo::{GeoPos, PixelPos, EARTH_MEAN_RADIUS_KM};
pub use time::{
    days_since_2000_to_millis, micros_since_2000_to_millis, millis_to_datetime, tai1993_to_utc_millis, EPOCH_2000_MILLIS,
    TAI1993_EPOCH_MILLIS,
};
