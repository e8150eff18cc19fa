//! Timestamp formatting in the local zone.
//!
//! API timestamps are ISO-8601 in UTC. They are shown as
//! `YYYY-MM-DD HH:MM:SS <abbrev>` in the zone picked by [`local_zone`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use render_config::{constants::MISSING_VALUE, env_var_or_none};
use tracing::debug;

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Resolve the zone used for display.
///
/// `TZ` wins when it names an IANA zone (a leading `:` is ignored), then the
/// system zone, then UTC.
pub fn local_zone() -> Tz {
    if let Some(tz) = env_var_or_none("TZ").and_then(|name| parse_zone(&name)) {
        return tz;
    }
    match iana_time_zone::get_timezone() {
        Ok(name) => parse_zone(&name).unwrap_or(Tz::UTC),
        Err(e) => {
            debug!("Could not determine system timezone: {}", e);
            Tz::UTC
        }
    }
}

fn parse_zone(name: &str) -> Option<Tz> {
    name.trim().trim_start_matches(':').parse::<Tz>().ok()
}

/// Format an API timestamp in `tz`.
///
/// Absent or empty input renders as `N/A`; input that does not parse renders
/// verbatim.
pub fn format_timestamp(ts: Option<&str>, tz: &Tz) -> String {
    let Some(raw) = ts.filter(|s| !s.trim().is_empty()) else {
        return MISSING_VALUE.to_string();
    };

    match parse_utc(raw) {
        Some(utc) => utc.with_timezone(tz).format(DISPLAY_FORMAT).to_string(),
        None => {
            debug!(timestamp = raw, "Unparseable timestamp, showing as-is");
            raw.to_string()
        }
    }
}

/// Current time in `tz`, in the same format as [`format_timestamp`].
pub fn format_now(tz: &Tz) -> String {
    Utc::now().with_timezone(tz).format(DISPLAY_FORMAT).to_string()
}

fn parse_utc(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    // Minute precision with an offset or `Z`.
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M%#z") {
        return Some(dt.with_timezone(&Utc));
    }
    // Offset-less timestamps are taken as UTC.
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_missing() {
        assert_eq!(format_timestamp(None, &Tz::UTC), "N/A");
        assert_eq!(format_timestamp(Some(""), &Tz::UTC), "N/A");
    }

    #[test]
    fn test_converts_to_zone_with_abbreviation() {
        let tz: Tz = "America/New_York".parse().unwrap();
        assert_eq!(
            format_timestamp(Some("2024-01-01T00:00:00Z"), &tz),
            "2023-12-31 19:00:00 EST"
        );
        assert_eq!(
            format_timestamp(Some("2024-07-01T12:30:00Z"), &tz),
            "2024-07-01 08:30:00 EDT"
        );
    }

    #[test]
    fn test_utc_zone() {
        assert_eq!(
            format_timestamp(Some("2024-01-01T00:00:00Z"), &Tz::UTC),
            "2024-01-01 00:00:00 UTC"
        );
    }

    #[test]
    fn test_fractional_seconds_and_offsets() {
        assert_eq!(
            format_timestamp(Some("2024-03-02T10:14:30.123456Z"), &Tz::UTC),
            "2024-03-02 10:14:30 UTC"
        );
        assert_eq!(
            format_timestamp(Some("2024-01-01T02:00:00+02:00"), &Tz::UTC),
            "2024-01-01 00:00:00 UTC"
        );
    }

    #[test]
    fn test_offsetless_is_utc() {
        assert_eq!(
            format_timestamp(Some("2024-01-01T00:00:00"), &Tz::UTC),
            "2024-01-01 00:00:00 UTC"
        );
    }

    #[test]
    fn test_minute_precision_and_date_only() {
        for raw in ["2024-01-01T00:00Z", "2024-01-01T00:00", "2024-01-01"] {
            assert_eq!(
                format_timestamp(Some(raw), &Tz::UTC),
                "2024-01-01 00:00:00 UTC",
                "input {raw}"
            );
        }
        assert_eq!(
            format_timestamp(Some("2024-01-01T02:00+02:00"), &Tz::UTC),
            "2024-01-01 00:00:00 UTC"
        );
    }

    #[test]
    fn test_invalid_renders_verbatim() {
        assert_eq!(format_timestamp(Some("yesterday"), &Tz::UTC), "yesterday");
        assert_eq!(
            format_timestamp(Some("2024-13-45T99:00:00Z"), &Tz::UTC),
            "2024-13-45T99:00:00Z"
        );
    }

    #[test]
    fn test_parse_zone() {
        assert_eq!(parse_zone("Europe/Berlin"), Some(Tz::Europe__Berlin));
        assert_eq!(parse_zone(":Europe/Berlin"), Some(Tz::Europe__Berlin));
        assert_eq!(parse_zone("Not/AZone"), None);
    }

    #[test]
    fn test_format_now_ends_with_abbreviation() {
        let now = format_now(&Tz::UTC);
        assert!(now.ends_with(" UTC"), "{now}");
        assert_eq!(now.len(), "2024-01-01 00:00:00 UTC".len());
    }
}
