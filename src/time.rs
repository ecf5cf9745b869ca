//! Time Utils
//!
//! Wall-clock helpers built on `chrono`, always UTC. Available with the
//! `std` feature.

use chrono::{DateTime, Duration, TimeZone, Utc};

/// The current epoch timestamp in whole seconds, rounding down
pub fn now_seconds() -> i64 {
    Utc::now().timestamp()
}

/// Guess the meaning of a bare integer timestamp and produce a date.
///
/// Zero or negative values are relative seconds ago from now. Positive
/// values up to twelve digits are epoch seconds; anything longer is
/// epoch milliseconds. Values outside chrono's representable range give
/// `None`.
pub fn assume_date_from_ts(ts: i64) -> Option<DateTime<Utc>> {
    if ts <= 0 {
        Utc::now().checked_add_signed(Duration::seconds(ts))
    } else if ts > 999_999_999_999 {
        Utc.timestamp_millis_opt(ts).single()
    } else {
        Utc.timestamp_opt(ts, 0).single()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_tick_forward() {
        let a = now_seconds();
        let b = now_seconds();
        assert!(b >= a);
        assert!(a > 1_700_000_000);
    }

    #[test]
    fn positive_short_timestamps_are_seconds() {
        let d = assume_date_from_ts(1_000_000_000).unwrap();
        assert_eq!(d.timestamp(), 1_000_000_000);
    }

    #[test]
    fn long_timestamps_are_milliseconds() {
        let d = assume_date_from_ts(1_000_000_000_000).unwrap();
        assert_eq!(d.timestamp(), 1_000_000_000);
        assert_eq!(d.timestamp_millis(), 1_000_000_000_000);
    }

    #[test]
    fn non_positive_timestamps_are_relative() {
        let now = Utc::now().timestamp();
        let d = assume_date_from_ts(-3600).unwrap();
        let delta = now - d.timestamp();
        assert!((3599..=3601).contains(&delta));
        let z = assume_date_from_ts(0).unwrap();
        assert!((now - z.timestamp()).abs() <= 1);
    }
}
