//! Time and timestamp helpers.
//!
//! Records are always stamped and stored in UTC. Conversion into a local
//! zone only happens when a page or an export is rendered.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// UTC timestamp used for greeting and measure dates.
pub type Timestamp = DateTime<Utc>;

/// Zone used when no other is configured.
pub const DEFAULT_DISPLAY_ZONE: &str = "America/Los_Angeles";

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// The IANA zone was not found in the compiled timezone database.
#[derive(Debug, thiserror::Error)]
#[error("unknown time zone {0}")]
pub struct UnknownZoneError(String);

/// Zone used for rendering timestamps, never for storing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayZone(Tz);

impl Default for DisplayZone {
    fn default() -> Self {
        Self(Tz::America__Los_Angeles)
    }
}

impl DisplayZone {
    /// Convert a stored timestamp into this zone.
    #[must_use]
    pub fn localize(&self, ts: Timestamp) -> DateTime<Tz> {
        ts.with_timezone(&self.0)
    }
}

impl fmt::Display for DisplayZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for DisplayZone {
    type Err = UnknownZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Tz>()
            .map(Self)
            .map_err(|_| UnknownZoneError(s.to_owned()))
    }
}
