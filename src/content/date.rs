//! Content dates

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// A parsed content date
///
/// Keeps the offset the date was authored in so that display shows the
/// calendar day the author wrote, while ordering compares instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ContentDate(DateTime<FixedOffset>);

impl ContentDate {
    /// Parse an ISO 8601 style date string
    ///
    /// Naive forms (no offset) are taken as UTC. Returns `None` when the
    /// string is not a calendar date.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(Self(dt));
        }

        let offset_formats = [
            "%Y-%m-%d %H:%M:%S %:z",
            "%Y-%m-%d %H:%M:%S%:z",
            "%Y-%m-%d %H:%M:%S %z",
        ];
        for fmt in offset_formats {
            if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
                return Some(Self(dt));
            }
        }

        let utc = FixedOffset::east_opt(0)?;

        let datetime_formats = [
            "%Y-%m-%dT%H:%M:%S%.f",
            "%Y-%m-%dT%H:%M:%S",
            "%Y-%m-%dT%H:%M",
            "%Y-%m-%d %H:%M:%S",
            "%Y/%m/%d %H:%M:%S",
            "%Y-%m-%d %H:%M",
            "%Y/%m/%d %H:%M",
        ];
        for fmt in datetime_formats {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Some(Self(dt.and_local_timezone(utc).single()?));
            }
        }

        for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
            if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
                let dt = d.and_hms_opt(0, 0, 0)?;
                return Some(Self(dt.and_local_timezone(utc).single()?));
            }
        }

        None
    }

    /// Format as `YYYY-MM-DD`
    pub fn ymd(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_date() {
        let date = ContentDate::parse("2023-06-01").unwrap();
        assert_eq!(date.ymd(), "2023-06-01");
    }

    #[test]
    fn test_parse_iso_with_zone() {
        let date = ContentDate::parse("2023-06-01T23:30:00.000Z").unwrap();
        assert_eq!(date.ymd(), "2023-06-01");

        let date = ContentDate::parse("2023-06-01T07:00:00+08:00").unwrap();
        assert_eq!(date.ymd(), "2023-06-01");
    }

    #[test]
    fn test_parse_slash_datetime() {
        let date = ContentDate::parse("2024/01/15 10:30:00").unwrap();
        assert_eq!(date.ymd(), "2024-01-15");
    }

    #[test]
    fn test_parse_space_before_offset() {
        let date = ContentDate::parse("2024-01-15 10:30:00 +08:00").unwrap();
        assert_eq!(date.ymd(), "2024-01-15");

        let utc = ContentDate::parse("2024-01-15T02:30:00Z").unwrap();
        assert_eq!(date, utc);
        assert!(ContentDate::parse("2024-01-15T02:29:00Z").unwrap() < date);
    }

    #[test]
    fn test_ordering_uses_instant() {
        // 07:00 at +08:00 is 23:00 UTC on the previous day
        let east = ContentDate::parse("2023-06-02T07:00:00+08:00").unwrap();
        let utc = ContentDate::parse("2023-06-01T23:30:00Z").unwrap();
        assert!(utc > east);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(ContentDate::parse("last tuesday").is_none());
        assert!(ContentDate::parse("2023-13-01").is_none());
        assert!(ContentDate::parse("").is_none());
    }
}
