//! Conditional request handling module
//!
//! `Last-Modified` / `If-Modified-Since` support for static responses.

use chrono::{DateTime, Utc};
use std::time::SystemTime;

/// Format a filesystem timestamp as an RFC 7231 IMF-fixdate header value,
/// e.g. `Sun, 06 Nov 1994 08:49:37 GMT`.
pub fn format_http_date(mtime: SystemTime) -> String {
    let datetime: DateTime<Utc> = mtime.into();
    datetime.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Parse an HTTP date header value.
///
/// IMF-fixdate is a subset of the RFC 2822 grammar chrono already parses;
/// unparseable values are treated as absent.
pub fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Check whether the client's `If-Modified-Since` makes a 304 appropriate.
///
/// HTTP dates carry one-second resolution, so the file's mtime is truncated
/// to whole seconds before comparing.
pub fn not_modified(if_modified_since: Option<&str>, mtime: SystemTime) -> bool {
    let Some(value) = if_modified_since else {
        return false;
    };
    let Some(since) = parse_http_date(value) else {
        return false;
    };
    let modified: DateTime<Utc> = mtime.into();
    modified.timestamp() <= since.timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_format_round_trips() {
        let mtime = SystemTime::UNIX_EPOCH + Duration::from_secs(784_111_777);
        let formatted = format_http_date(mtime);
        assert_eq!(formatted, "Sun, 06 Nov 1994 08:49:37 GMT");
        let parsed = parse_http_date(&formatted).expect("own output should parse");
        assert_eq!(parsed.timestamp(), 784_111_777);
    }

    #[test]
    fn test_not_modified_when_client_date_is_newer() {
        let mtime = SystemTime::UNIX_EPOCH + Duration::from_secs(784_111_777);
        assert!(not_modified(Some("Sun, 06 Nov 1994 08:49:37 GMT"), mtime));
        assert!(not_modified(Some("Mon, 07 Nov 1994 00:00:00 GMT"), mtime));
    }

    #[test]
    fn test_modified_when_client_date_is_older() {
        let mtime = SystemTime::UNIX_EPOCH + Duration::from_secs(784_111_777);
        assert!(!not_modified(Some("Sat, 05 Nov 1994 08:49:37 GMT"), mtime));
    }

    #[test]
    fn test_subsecond_mtime_still_matches() {
        let mtime = SystemTime::UNIX_EPOCH + Duration::from_millis(784_111_777_500);
        assert!(not_modified(Some("Sun, 06 Nov 1994 08:49:37 GMT"), mtime));
    }

    #[test]
    fn test_missing_or_malformed_header() {
        let mtime = SystemTime::UNIX_EPOCH + Duration::from_secs(784_111_777);
        assert!(!not_modified(None, mtime));
        assert!(!not_modified(Some("not a date"), mtime));
    }
}
