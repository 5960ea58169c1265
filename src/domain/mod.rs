use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::common::error::StatsRangesError;

/// Reporting bucket size for statistics queries.
///
/// The lowercase token is what the remote stats endpoints take as their
/// `unit` query parameter, and what the persistence layer keys cached
/// responses by, so `Display`/`FromStr`/serde all speak the same strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Week,
    Month,
    Year,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
            Granularity::Year => "year",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = StatsRangesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "day" => Ok(Granularity::Day),
            "week" => Ok(Granularity::Week),
            "month" => Ok(Granularity::Month),
            "year" => Ok(Granularity::Year),
            other => Err(StatsRangesError::UnknownGranularity(other.to_string())),
        }
    }
}

/// A site's configured UTC offset, kept in the raw form the remote API
/// delivers it: a signed whole or fractional hour count such as `"12"`,
/// `"-12"`, `"5.5"`, or `""` (meaning UTC).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteTimezone {
    pub offset: String,
}

impl SiteTimezone {
    pub fn new(offset: impl Into<String>) -> Self {
        SiteTimezone {
            offset: offset.into(),
        }
    }

    /// Signed offset in seconds. An empty value means UTC; a value that does
    /// not parse as a decimal hour count also falls back to UTC, since a
    /// malformed site setting should not fail every stats render for that
    /// site.
    pub fn offset_seconds(&self) -> i32 {
        let raw = self.offset.trim();
        if raw.is_empty() {
            return 0;
        }
        match raw.parse::<f64>() {
            Ok(hours) => (hours * 3600.0).round() as i32,
            Err(_) => {
                warn!("unparsable site timezone offset '{}', assuming UTC", raw);
                0
            }
        }
    }
}
