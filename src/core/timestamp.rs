//! RFC 3339 timestamps with nanosecond precision
//!
//! Every header carries a timestamp such as
//! `2021-01-02T15:04:05.999999999-07:00`: always nine fractional digits and
//! an explicit offset (or `Z` for UTC).

use chrono::{DateTime, Local, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which clock offset header timestamps are rendered in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampZone {
    /// Local time with a numeric offset (`+02:00`, `+00:00`)
    #[default]
    Local,
    /// UTC, rendered with the `Z` suffix
    Utc,
}

impl TimestampZone {
    /// Current time formatted for the `x-timestamp` attribute
    pub fn now(&self) -> String {
        match self {
            TimestampZone::Local => format_rfc3339_nanos(&Local::now(), false),
            TimestampZone::Utc => format_rfc3339_nanos(&Utc::now(), true),
        }
    }
}

/// Format `datetime` as RFC 3339 with nanoseconds.
///
/// With `use_z`, a zero offset is written as `Z`; otherwise the offset is
/// always numeric.
pub fn format_rfc3339_nanos<Tz>(datetime: &DateTime<Tz>, use_z: bool) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    datetime.to_rfc3339_opts(SecondsFormat::Nanos, use_z)
}
