//! Pixel geolocation for Earth-observation granules.
//!
//! A [`PixelLocator`] answers two questions for one opened granule:
//! where on Earth a pixel is ([`PixelLocator::geo_location`]) and which
//! pixels cover a geographic position ([`PixelLocator::pixel_location`]).
//!
//! Locators borrow the coordinate arrays produced by a reader and cannot
//! outlive them.
//!
//! # Example
//!
//! ```
//! use pixel_locator::{PixelLocator, RasterPixelLocator};
//!
//! let lons = [-170.0_f32, -130.0, -90.0];
//! let lats = [-80.0_f32, -50.0];
//! let locator = RasterPixelLocator::new(&lons, &lats, None).unwrap();
//!
//! let geo = locator.geo_location(1.5, 0.5).unwrap();
//! assert_eq!((geo.lon, geo.lat), (-130.0, -80.0));
//! ```

pub mod clipping;
pub mod config;
pub mod factory;
pub mod geolocation;
pub mod geometry;
pub mod locator;
pub mod raster;
mod sphere;
pub mod swath;
pub mod track;

pub use clipping::ClippingPixelLocator;
pub use config::{LocatorConfig, SwathSearchConfig};
pub use factory::PixelLocatorFactory;
pub use geolocation::{GeoWindow, GeolocationHandler};
pub use geometry::{Polygon, SphericalPolygon};
pub use locator::PixelLocator;
pub use raster::{LonOrientation, OverlappingRasterPixelLocator, RasterPixelLocator};
pub use swath::SwathPixelLocator;
pub use track::TrackPixelLocator;

pub use geoloc_common::{BoundingBox, GeoPos, GeolocError, PixelPos, Result};
