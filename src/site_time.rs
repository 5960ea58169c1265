//! Rendering timestamps in a site's configured timezone.
//!
//! Sites carry a plain signed-hour UTC offset rather than a named zone, so
//! rendering is a fixed-offset shift of the instant followed by formatting.

use chrono::{DateTime, FixedOffset, Timelike, Utc};
use tracing::{debug, warn};

use crate::common::error::Result;
use crate::domain::SiteTimezone;
use crate::ranges;

/// Format a UTC instant in a site's local time.
///
/// An offset outside the representable fixed-offset range falls back to UTC.
pub fn format_for_site(site: &SiteTimezone, pattern: &str, instant: DateTime<Utc>) -> String {
    let offset_seconds = site.offset_seconds();
    match FixedOffset::east_opt(offset_seconds) {
        Some(offset) => instant.with_timezone(&offset).format(pattern).to_string(),
        None => {
            warn!(
                "site timezone offset {}s out of range, formatting as UTC",
                offset_seconds
            );
            instant.format(pattern).to_string()
        }
    }
}

/// Deterministic core of [`local_datetime_for_site`]: the caller supplies
/// the `now` anchor, keeping results independent of the wall clock.
///
/// A bare `yyyy-MM-dd` input pins to midnight, and a midnight instant can
/// slide to the wrong calendar day once the site offset is applied. Adding
/// the anchor's time-of-day onto the parsed date narrows that window, but
/// does not close it for every offset/time combination; treat it as a known
/// approximation.
pub fn local_datetime_for_site_at(
    site: &SiteTimezone,
    pattern: &str,
    date_string: Option<&str>,
    now: DateTime<Utc>,
) -> Result<String> {
    let instant = match date_string {
        None | Some("") => now,
        Some(text) => {
            let date = ranges::parse_date(text)?;
            debug!("rendering '{}' with site offset '{}'", text, site.offset);
            // Carry the anchor's h:m:s onto the parsed date, seconds resolution.
            let time = now.time().with_nanosecond(0).unwrap_or_else(|| now.time());
            date.and_time(time).and_utc()
        }
    };
    Ok(format_for_site(site, pattern, instant))
}

/// Render `date_string` (or the current moment when it is absent) in the
/// site's local time. The only clock read in this crate.
pub fn local_datetime_for_site(
    site: &SiteTimezone,
    pattern: &str,
    date_string: Option<&str>,
) -> Result<String> {
    local_datetime_for_site_at(site, pattern, date_string, Utc::now())
}
