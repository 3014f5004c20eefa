//! Acquisition-time resolution for granule pixels.
//!
//! Every reader stores acquisition time differently. This crate hides the
//! raw encoding behind the [`TimeLocator`] trait, which maps a pixel (x, y)
//! to epoch milliseconds (UTC).
//!
//! Out-of-range requests are handled per variant and the policies are not
//! interchangeable:
//!
//! - index-array variants ([`Tai1993VectorTimeLocator`],
//!   [`Tai1993ScanTimeLocator`], [`MillisSince1970TimeLocator`],
//!   [`MicrosSince2000TimeLocator`], [`YearDoyMillisTimeLocator`]) fail with
//!   [`TimeLocatorError::IndexOutOfBounds`];
//! - sentinel variants ([`DaySecondMicroTimeLocator`],
//!   [`SecondsSince2000TimeLocator`]) return `Ok(FILL_TIME)`;
//! - formula variants ([`LinearTimeLocator`], [`StartStopTimeLocator`]) have
//!   no backing array and extrapolate.

pub mod error;
pub mod formula;
pub mod indexed;
pub mod locator;
pub mod sentinel;

pub use error::{Result, TimeLocatorError};
pub use formula::{LinearTimeLocator, StartStopTimeLocator};
pub use indexed::{
    MicrosSince2000TimeLocator, MillisSince1970TimeLocator, Tai1993ScanTimeLocator,
    Tai1993VectorTimeLocator, TimeAxis, YearDoyMillisTimeLocator,
};
pub use locator::{TimeLocator, FILL_TIME};
pub use sentinel::{DaySecondMicroTimeLocator, SecondsSince2000TimeLocator};
