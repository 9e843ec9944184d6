//! Station display names.

/// Suffix stripped from the end of station names.
const STATION_SUFFIX: &str = "Station";

/// Clean an upstream stop name for display.
///
/// The trip planner reports names like `"Town Hall Station, Platform 3"`.
/// Only the text before the first comma is kept, surrounding whitespace is
/// trimmed, and a trailing `Station` (any case) is removed along with the
/// whitespace in front of it.
///
/// # Examples
///
/// ```
/// use trip_server::domain::clean_station_name;
///
/// assert_eq!(clean_station_name("Town Hall Station, Platform 3"), "Town Hall");
/// assert_eq!(clean_station_name("Redfern station"), "Redfern");
/// assert_eq!(clean_station_name("Museum"), "Museum");
/// assert_eq!(clean_station_name(""), "");
/// ```
pub fn clean_station_name(name: &str) -> String {
    let base = name.split(',').next().unwrap_or_default().trim();
    strip_station_suffix(base).to_string()
}

fn strip_station_suffix(base: &str) -> &str {
    let Some(cut) = base.len().checked_sub(STATION_SUFFIX.len()) else {
        return base;
    };
    if !base.is_char_boundary(cut) || !base[cut..].eq_ignore_ascii_case(STATION_SUFFIX) {
        return base;
    }
    base[..cut].trim_end()
}
