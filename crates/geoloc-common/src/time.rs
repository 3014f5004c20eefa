//! Time-scale helpers for raw acquisition-time encodings.
//!
//! All functions produce epoch milliseconds (UTC, since 1970-01-01).

use chrono::{DateTime, TimeZone, Utc};

/// 1993-01-01T00:00:00Z in epoch milliseconds.
pub const TAI1993_EPOCH_MILLIS: i64 = 725_846_400_000;

/// 2000-01-01T00:00:00Z in epoch milliseconds.
pub const EPOCH_2000_MILLIS: i64 = 946_684_800_000;

pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// TAI - UTC in effect at the TAI-1993 epoch.
pub const TAI_UTC_AT_1993_MILLIS: i64 = 27_000;

/// UTC instants (epoch millis) at which a leap second was inserted after
/// the TAI-1993 epoch, in chronological order.
pub const LEAP_SECONDS_SINCE_1993: [i64; 10] = [
    741_484_800_000,   // 1993-07-01
    773_020_800_000,   // 1994-07-01
    820_454_400_000,   // 1996-01-01
    867_715_200_000,   // 1997-07-01
    915_148_800_000,   // 1999-01-01
    1_136_073_600_000, // 2006-01-01
    1_230_768_000_000, // 2009-01-01
    1_341_100_800_000, // 2012-07-01
    1_435_708_800_000, // 2015-07-01
    1_483_228_800_000, // 2017-01-01
];

/// Convert TAI seconds since 1993-01-01 to UTC epoch milliseconds.
///
/// The full TAI - UTC offset of the instant is subtracted: the 27 s in
/// effect at the epoch plus each leap second inserted since, once the
/// shifted instant has reached it.
pub fn tai1993_to_utc_millis(tai_seconds: f64) -> i64 {
    let naive =
        TAI1993_EPOCH_MILLIS + (tai_seconds * 1000.0).round() as i64 - TAI_UTC_AT_1993_MILLIS;

    let mut utc = naive;
    for (i, &leap) in LEAP_SECONDS_SINCE_1993.iter().enumerate() {
        let shifted = naive - (i as i64 + 1) * 1000;
        if shifted < leap {
            break;
        }
        utc = shifted;
    }
    utc
}

/// Convert a (days since 2000-01-01, seconds of day, microseconds) triple
/// to epoch milliseconds. Sub-millisecond parts are truncated.
pub fn days_since_2000_to_millis(days: i64, seconds: i64, micros: i64) -> i64 {
    EPOCH_2000_MILLIS + days * MILLIS_PER_DAY + seconds * 1000 + micros / 1000
}

/// Convert microseconds since 2000-01-01 to epoch milliseconds. The
/// sub-millisecond part is truncated.
pub fn micros_since_2000_to_millis(micros: i64) -> i64 {
    EPOCH_2000_MILLIS + micros / 1000
}

/// Epoch milliseconds as a chrono UTC timestamp.
pub fn millis_to_datetime(millis: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis).single()
}
