//! Submission counts bucketed by calendar date.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::domain::ApplicationRecord;

/// Accepted non-RFC 3339 timestamp layouts, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Counts records per UTC calendar date (`YYYY-MM-DD`) of `created_at`.
///
/// Records without a submission time are left out rather than counted
/// under a placeholder key.
pub fn submission_dates(records: &[ApplicationRecord]) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for created_at in records.iter().filter_map(|r| r.created_at) {
        let day = created_at.date_naive().format("%Y-%m-%d").to_string();
        *counts.entry(day).or_insert(0) += 1;
    }
    counts
}

/// Parses a submission timestamp as written in exports.
///
/// Accepts RFC 3339, a few naive date-time layouts (taken as UTC), and a
/// bare `YYYY-MM-DD` date (midnight UTC). Returns `None` for anything else.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Some(naive) = DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{ApplicationId, NewApplication};

    fn submitted(raw: &str) -> ApplicationRecord {
        let new = NewApplication {
            created_at: parse_timestamp(raw),
            ..NewApplication::default()
        };
        ApplicationRecord::from_new(ApplicationId::new(1), new, Utc::now())
    }

    #[test]
    fn same_day_timestamps_share_a_bucket() {
        let records = vec![
            submitted("2025-05-06T09:11:04Z"),
            submitted("2025-05-06T19:54:11Z"),
            submitted("2025-05-07T00:00:01Z"),
        ];
        let dates = submission_dates(&records);
        assert_eq!(dates.get("2025-05-06"), Some(&2));
        assert_eq!(dates.get("2025-05-07"), Some(&1));
    }

    #[test]
    fn buckets_use_utc_date() {
        let records = vec![submitted("2025-05-06T23:30:00-07:00")];
        let dates = submission_dates(&records);
        assert_eq!(dates.get("2025-05-07"), Some(&1));
    }

    #[test]
    fn missing_timestamps_are_excluded() {
        let records = vec![submitted("not a date"), submitted(""), submitted("2025-05-06")];
        let dates = submission_dates(&records);
        assert_eq!(dates.len(), 1);
        assert_eq!(dates.values().sum::<u64>(), 1);
    }

    #[test]
    fn parses_common_export_layouts() {
        let Some(sheet) = parse_timestamp("5/6/2025 9:11:04") else {
            panic!("sheet-style timestamp should parse");
        };
        assert_eq!(sheet.to_rfc3339(), "2025-05-06T09:11:04+00:00");
        assert!(parse_timestamp("2025-05-06 09:11:04").is_some());
        assert!(parse_timestamp("2025-05-06T09:11:04.123").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }
}
