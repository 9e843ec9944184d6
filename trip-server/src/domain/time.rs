//! Timestamp handling for trip planner responses.
//!
//! The trip planner is not consistent about how it writes times: most
//! fields are RFC 3339, but compact `YYYYMMDDTHHMMSS` forms (with and
//! without a zone marker) and space-separated forms also turn up. This
//! module tries each known format in turn and renders the result as a
//! 12-hour wall-clock time in the service's configured zone.
//!
//! Unrecognised values are never an error. They are passed through to the
//! client verbatim.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, Utc};
use chrono_tz::Tz;

/// Display pattern for rendered times, e.g. `"03:04 PM"`.
const DISPLAY_FORMAT: &str = "%I:%M %p";

/// A timestamp layout the trip planner is known to emit.
///
/// Formats are tried in the order of [`TimestampFormat::ALL`]; the first
/// that parses wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampFormat {
    /// `2026-01-17T08:00:00Z` or `2026-01-17T19:00:00+11:00`
    Rfc3339,
    /// `20260117T190000+1100`
    CompactOffset,
    /// `20260117T080000Z`
    CompactUtc,
    /// `20260117T080000`, read as UTC
    CompactNaive,
    /// `2026-01-17 08:00:00`, read as UTC
    SpaceSeparated,
}

impl TimestampFormat {
    /// All formats, in the order they are attempted.
    pub const ALL: [TimestampFormat; 5] = [
        TimestampFormat::Rfc3339,
        TimestampFormat::CompactOffset,
        TimestampFormat::CompactUtc,
        TimestampFormat::CompactNaive,
        TimestampFormat::SpaceSeparated,
    ];

    /// Try to parse `s` as this format.
    pub fn parse(self, s: &str) -> Option<DateTime<Utc>> {
        match self {
            TimestampFormat::Rfc3339 => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            TimestampFormat::CompactOffset => DateTime::parse_from_str(s, "%Y%m%dT%H%M%S%z")
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            TimestampFormat::CompactUtc => s
                .strip_suffix('Z')
                .and_then(|rest| NaiveDateTime::parse_from_str(rest, "%Y%m%dT%H%M%S").ok())
                .map(|naive| naive.and_utc()),
            TimestampFormat::CompactNaive => NaiveDateTime::parse_from_str(s, "%Y%m%dT%H%M%S")
                .ok()
                .map(|naive| naive.and_utc()),
            TimestampFormat::SpaceSeparated => {
                NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
                    .ok()
                    .map(|naive| naive.and_utc())
            }
        }
    }
}

/// Outcome of reading a raw timestamp string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp<'a> {
    /// One of the known formats matched.
    Parsed {
        instant: DateTime<Utc>,
        format: TimestampFormat,
    },
    /// Nothing matched; the original text is kept as-is.
    Unparsed(&'a str),
}

impl<'a> Timestamp<'a> {
    /// Parse `raw` by trying each known format in order.
    ///
    /// Surrounding whitespace is ignored while parsing, but an unparsed
    /// result always carries the untouched input.
    pub fn parse(raw: &'a str) -> Self {
        let trimmed = raw.trim();
        TimestampFormat::ALL
            .iter()
            .find_map(|&format| {
                format
                    .parse(trimmed)
                    .map(|instant| Timestamp::Parsed { instant, format })
            })
            .unwrap_or(Timestamp::Unparsed(raw))
    }

    /// Render for display in `zone`.
    pub fn render(&self, zone: &LocalZone) -> String {
        match self {
            Timestamp::Parsed { instant, .. } => {
                zone.localize(*instant).format(DISPLAY_FORMAT).to_string()
            }
            Timestamp::Unparsed(raw) => (*raw).to_string(),
        }
    }
}

/// Format a raw upstream timestamp as a local 12-hour time.
///
/// Empty input gives empty output; unrecognised input is returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use trip_server::domain::{LocalZone, format_local_time};
///
/// let sydney = LocalZone::load("Australia/Sydney");
/// assert_eq!(format_local_time("2026-01-17T08:00:00Z", &sydney), "07:00 PM");
/// assert_eq!(format_local_time("soon", &sydney), "soon");
/// assert_eq!(format_local_time("", &sydney), "");
/// ```
pub fn format_local_time(raw: &str, zone: &LocalZone) -> String {
    if raw.is_empty() {
        return String::new();
    }
    Timestamp::parse(raw).render(zone)
}

/// Pick the authoritative value from candidates ordered by trust.
///
/// Returns the first candidate that is non-empty after trimming.
pub fn first_non_empty<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
}

/// The zone used to render wall-clock times.
///
/// Normally a named IANA zone so daylight saving is handled; if the
/// configured name is unknown the service runs on a fixed offset instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalZone {
    Named(Tz),
    Fixed(FixedOffset),
}

impl LocalZone {
    /// Look up a named zone, falling back to UTC if it is unknown.
    pub fn load(name: &str) -> Self {
        match name.parse::<Tz>() {
            Ok(tz) => LocalZone::Named(tz),
            Err(e) => {
                tracing::warn!(zone = name, error = %e, "unknown timezone, falling back to UTC");
                LocalZone::utc()
            }
        }
    }

    /// Fixed UTC (+00:00).
    pub fn utc() -> Self {
        LocalZone::Fixed(Utc.fix())
    }

    /// Wall-clock time in this zone for the given instant.
    pub fn localize(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        match self {
            LocalZone::Named(tz) => instant.with_timezone(tz).naive_local(),
            LocalZone::Fixed(offset) => instant.with_timezone(offset).naive_local(),
        }
    }

    /// Current wall-clock time in this zone.
    pub fn now(&self) -> NaiveDateTime {
        self.localize(Utc::now())
    }
}

impl fmt::Display for LocalZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalZone::Named(tz) => f.write_str(tz.name()),
            LocalZone::Fixed(offset) => write!(f, "UTC{offset}"),
        }
    }
}
