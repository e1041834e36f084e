//! Categorical distributions over a single record field.

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::ApplicationRecord;

/// Category used for missing or blank answers.
pub const NOT_AVAILABLE: &str = "N/A";

/// Sentinel some applicants type instead of leaving a field blank.
pub const DASH_SENTINEL: &str = "-";

/// Counts how many records hold each distinct value of `field`.
///
/// Each distinct value is its own key, surrounding whitespace included.
/// Missing or whitespace-only values are counted under [`NOT_AVAILABLE`].
/// The counts always sum to `records.len()`.
pub fn distribution<F>(records: &[ApplicationRecord], field: F) -> BTreeMap<String, u64>
where
    F: Fn(&ApplicationRecord) -> Option<&str>,
{
    let mut counts = BTreeMap::new();
    for record in records {
        let label = field(record)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(NOT_AVAILABLE);
        *counts.entry(label.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Teammate summary across all applicants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeammateStats {
    /// Applicants that listed at least one teammate.
    pub applicants_with_teammates: u64,
    /// Total teammate entries across all applicants.
    pub total_teammates_listed: u64,
}

/// Summarizes the `teammates` answers.
///
/// Entries are separated by commas, semicolons, or newlines so that
/// "First Last" names stay whole. Plain whitespace is not a separator even
/// though applicants sometimes use it between names. A blank field or
/// `"-"` lists nobody.
pub fn teammate_stats(records: &[ApplicationRecord]) -> TeammateStats {
    let mut stats = TeammateStats::default();
    for record in records {
        let Some(raw) = record.teammates.as_deref().map(str::trim) else {
            continue;
        };
        if raw.is_empty() || raw == DASH_SENTINEL {
            continue;
        }
        let listed = raw
            .split([',', ';', '\n', '\r'])
            .map(str::trim)
            .filter(|entry| !entry.is_empty() && *entry != DASH_SENTINEL)
            .count() as u64;
        if listed > 0 {
            stats.applicants_with_teammates += 1;
            stats.total_teammates_listed += listed;
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::{ApplicationId, NewApplication};

    fn with_skill(skill: Option<&str>) -> ApplicationRecord {
        let new = NewApplication {
            skill_level: skill.map(str::to_string),
            ..NewApplication::default()
        };
        ApplicationRecord::from_new(ApplicationId::new(1), new, Utc::now())
    }

    fn with_teammates(teammates: &str) -> ApplicationRecord {
        let new = NewApplication {
            teammates: Some(teammates.to_string()),
            ..NewApplication::default()
        };
        ApplicationRecord::from_new(ApplicationId::new(1), new, Utc::now())
    }

    #[test]
    fn counts_each_distinct_value() {
        let records = vec![
            with_skill(Some("beginner")),
            with_skill(Some("beginner")),
            with_skill(Some("advanced")),
        ];
        let dist = distribution(&records, |r| r.skill_level.as_deref());
        assert_eq!(dist.len(), 2);
        assert_eq!(dist.get("beginner"), Some(&2));
        assert_eq!(dist.get("advanced"), Some(&1));
    }

    #[test]
    fn missing_and_blank_values_become_not_available() {
        let records = vec![with_skill(None), with_skill(Some("  ")), with_skill(Some("Expert"))];
        let dist = distribution(&records, |r| r.skill_level.as_deref());
        assert_eq!(dist.get(NOT_AVAILABLE), Some(&2));
        assert_eq!(dist.get("Expert"), Some(&1));
    }

    #[test]
    fn padded_values_keep_their_own_key() {
        let records = vec![
            with_skill(Some("beginner")),
            with_skill(Some(" beginner ")),
            with_skill(Some("   ")),
        ];
        let dist = distribution(&records, |r| r.skill_level.as_deref());
        assert_eq!(dist.get("beginner"), Some(&1));
        assert_eq!(dist.get(" beginner "), Some(&1));
        assert_eq!(dist.get(NOT_AVAILABLE), Some(&1));
    }

    #[test]
    fn counts_sum_to_batch_size() {
        let records = vec![
            with_skill(Some("a")),
            with_skill(None),
            with_skill(Some("b")),
            with_skill(Some("a")),
            with_skill(Some("")),
        ];
        let dist = distribution(&records, |r| r.skill_level.as_deref());
        assert_eq!(dist.values().sum::<u64>(), records.len() as u64);
    }

    #[test]
    fn empty_batch_yields_empty_distribution() {
        let dist = distribution(&[], |r| r.skill_level.as_deref());
        assert!(dist.is_empty());
    }

    #[test]
    fn teammates_split_on_commas_and_newlines() {
        let records = vec![
            with_teammates("John Smith, Emily Johnson"),
            with_teammates("Jane Doe\nAlex Kim; Sam Lee"),
            with_teammates("-"),
            with_teammates("  "),
        ];
        let stats = teammate_stats(&records);
        assert_eq!(stats.applicants_with_teammates, 2);
        assert_eq!(stats.total_teammates_listed, 5);
    }
}
