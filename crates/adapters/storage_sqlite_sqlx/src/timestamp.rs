//! Column encoding for timestamps.
//!
//! Dates are stored as fixed-width RFC 3339 text in UTC with microsecond
//! precision, so that `ORDER BY date` on the text column is chronological.

use chrono::{SecondsFormat, SubsecRound};
use tubctl_domain::time::Timestamp;

/// Drop the precision the column cannot hold.
pub(crate) fn truncate(ts: Timestamp) -> Timestamp {
    ts.trunc_subsecs(6)
}

pub(crate) fn encode(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn decode(value: &str) -> Result<Timestamp, sqlx::Error> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.to_utc())
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn should_encode_with_fixed_width() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 15, 20, 0, 0).unwrap();
        assert_eq!(encode(ts), "2024-01-15T20:00:00.000000Z");
    }

    #[test]
    fn should_sort_lexically_in_chronological_order() {
        let early = Utc.with_ymd_and_hms(2024, 1, 15, 20, 0, 0).unwrap();
        let late = early + chrono::Duration::microseconds(1);
        assert!(encode(early) < encode(late));
    }

    #[test]
    fn should_decode_what_it_encodes() {
        let ts = truncate(Utc::now());
        assert_eq!(decode(&encode(ts)).unwrap(), ts);
    }

    #[test]
    fn should_fail_to_decode_garbage() {
        assert!(decode("yesterday").is_err());
    }
}
