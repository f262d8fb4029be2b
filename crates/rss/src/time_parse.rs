// ABOUTME: RFC 822 date parsing and formatting for RSS pubDate/lastBuildDate.
// ABOUTME: Accepts common in-the-wild deviations and renders the canonical form.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};

/// Named timezone offsets RFC 822 allows plus a few extras feeds use
/// (in seconds east of UTC). chrono's %Z doesn't parse these, so they are
/// stripped and applied manually.
const NAMED_ZONES: &[(&str, i32)] = &[
    ("GMT", 0),
    ("UTC", 0),
    ("UT", 0),
    ("EST", -5 * 3600),
    ("EDT", -4 * 3600),
    ("CST", -6 * 3600),
    ("CDT", -5 * 3600),
    ("MST", -7 * 3600),
    ("MDT", -6 * 3600),
    ("PST", -8 * 3600),
    ("PDT", -7 * 3600),
    ("CET", 3600),
    ("CEST", 2 * 3600),
    ("JST", 9 * 3600),
    ("AEST", 10 * 3600),
];

/// Parses an RFC 822/2822 date string, keeping its fixed offset.
/// Returns None if no recognized format matches - the unset sentinel for the
/// tolerant loader, never an error.
///
/// Beyond strict RFC 2822 this accepts the deviations real feeds contain:
/// 2-digit years, missing seconds, missing weekday, and named timezones.
pub fn parse_rfc822(s: &str) -> Option<DateTime<FixedOffset>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    // Strict-ish RFC 2822 first; chrono already tolerates 2-digit years and
    // the RFC-mandated named zones (GMT, UT, EST..PDT).
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt);
    }

    // Numeric-offset variants RFC 2822 parsing rejects
    let formats_with_tz = [
        // Missing seconds: "Mon, 02 Jan 2006 15:04 -0700"
        "%a, %d %b %Y %H:%M %z",
        // Missing weekday: "02 Jan 2006 15:04:05 -0700"
        "%d %b %Y %H:%M:%S %z",
        // Missing weekday and seconds: "02 Jan 2006 15:04 -0700"
        "%d %b %Y %H:%M %z",
        // 2-digit year: "Mon, 02 Jan 06 15:04:05 -0700"
        "%a, %d %b %y %H:%M:%S %z",
    ];
    for fmt in &formats_with_tz {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    parse_with_named_zone(s)
}

/// Handles the named-timezone tail chrono's RFC 2822 parser doesn't cover
/// (extended zone names, or names combined with lax date formats).
fn parse_with_named_zone(s: &str) -> Option<DateTime<FixedOffset>> {
    for (zone, offset_secs) in NAMED_ZONES {
        let Some(base) = s.strip_suffix(zone) else {
            continue;
        };
        let base = base.trim_end();

        let formats = [
            "%a, %d %b %Y %H:%M:%S",
            "%a, %d %b %Y %H:%M",
            "%d %b %Y %H:%M:%S",
            "%a, %d %b %y %H:%M:%S",
        ];
        for fmt in &formats {
            if let Ok(naive) = NaiveDateTime::parse_from_str(base, fmt) {
                let offset = FixedOffset::east_opt(*offset_secs)?;
                return offset.from_local_datetime(&naive).single();
            }
        }
    }

    None
}

/// Formats a date in the canonical RFC 822 form, e.g.
/// "Thu, 01 Jan 1970 00:00:00 GMT". Zero-offset zones render as GMT,
/// anything else as a numeric offset.
pub fn format_rfc822(dt: &DateTime<FixedOffset>) -> String {
    if dt.offset().local_minus_utc() == 0 {
        dt.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
    } else {
        dt.format("%a, %d %b %Y %H:%M:%S %z").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_rfc2822() {
        let dt = parse_rfc822("Mon, 02 Jan 2006 15:04:05 -0700").unwrap();
        let expected = FixedOffset::west_opt(7 * 3600)
            .unwrap()
            .with_ymd_and_hms(2006, 1, 2, 15, 4, 5)
            .unwrap();
        assert_eq!(dt, expected);
    }

    #[test]
    fn test_parse_gmt() {
        let dt = parse_rfc822("Thu, 01 Jan 1970 00:00:00 GMT").unwrap();
        assert_eq!(dt.timestamp(), 0);
        assert_eq!(dt.offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_parse_missing_seconds() {
        let dt = parse_rfc822("Mon, 02 Jan 2006 15:04 +0000").unwrap();
        assert_eq!(dt.timestamp() % 60, 0);
    }

    #[test]
    fn test_parse_missing_weekday() {
        assert!(parse_rfc822("02 Jan 2006 15:04:05 +0100").is_some());
    }

    #[test]
    fn test_parse_named_zone_extended() {
        // CET is not in chrono's RFC 2822 zone set
        let dt = parse_rfc822("Mon, 02 Jan 2006 15:04:05 CET").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 3600);
    }

    #[test]
    fn test_parse_empty_and_garbage() {
        assert!(parse_rfc822("").is_none());
        assert!(parse_rfc822("   ").is_none());
        assert!(parse_rfc822("not a date").is_none());
    }

    #[test]
    fn test_format_gmt() {
        let dt = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(1970, 1, 1, 0, 0, 0)
            .unwrap();
        assert_eq!(format_rfc822(&dt), "Thu, 01 Jan 1970 00:00:00 GMT");
    }

    #[test]
    fn test_format_numeric_offset() {
        let dt = FixedOffset::east_opt(5 * 3600 + 30 * 60)
            .unwrap()
            .with_ymd_and_hms(2024, 2, 29, 12, 30, 0)
            .unwrap();
        assert_eq!(format_rfc822(&dt), "Thu, 29 Feb 2024 12:30:00 +0530");
    }

    #[test]
    fn test_round_trip_epoch() {
        let dt = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(1970, 1, 1, 0, 0, 0)
            .unwrap();
        assert_eq!(parse_rfc822(&format_rfc822(&dt)), Some(dt));
    }

    #[test]
    fn test_round_trip_leap_day() {
        let dt = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 2, 29, 23, 59, 59)
            .unwrap();
        assert_eq!(parse_rfc822(&format_rfc822(&dt)), Some(dt));
    }

    #[test]
    fn test_round_trip_fixed_offset() {
        let dt = FixedOffset::west_opt(8 * 3600)
            .unwrap()
            .with_ymd_and_hms(2023, 6, 15, 14, 30, 0)
            .unwrap();
        assert_eq!(parse_rfc822(&format_rfc822(&dt)), Some(dt));
    }
}
