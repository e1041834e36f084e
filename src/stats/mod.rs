//! Statistics engine: a pure batch aggregation over application records.
//!
//! [`build_report`] takes the complete record set fetched by the caller
//! and recomputes every sub-report from scratch. It performs no I/O and
//! holds no state between calls, so concurrent dashboard loads need no
//! coordination.
//!
//! ```text
//! &[ApplicationRecord]
//!     ├── distribution  categorical counts, teammate summary
//!     ├── words         stop-word filtered word ranking
//!     ├── timeline      submissions per UTC date
//!     ├── links         GitHub / LinkedIn / Other / None
//!     └── themes        futurePlans keyword themes
//! ```

pub mod distribution;
pub mod links;
pub mod themes;
pub mod timeline;
pub mod words;

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

pub use distribution::{NOT_AVAILABLE, TeammateStats, distribution, teammate_stats};
pub use links::{LinkClass, LinkCounts, classify_links, link_counts};
pub use themes::{OPEN_UNSPECIFIED, theme_counts};
pub use timeline::{parse_timestamp, submission_dates};
pub use words::{RankedCounts, word_frequency};

use crate::domain::ApplicationRecord;

/// Default number of entries in each word ranking.
pub const DEFAULT_WORD_LIMIT: usize = 20;

/// Tunables for [`build_report`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsOptions {
    /// Entries kept per word-frequency ranking.
    pub word_limit: usize,
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self {
            word_limit: DEFAULT_WORD_LIMIT,
        }
    }
}

/// Every dashboard statistic for one snapshot of the record set.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsReport {
    /// Number of records in the snapshot.
    pub total_applications: u64,
    /// Skill level → count.
    pub skill_level_distribution: BTreeMap<String, u64>,
    /// Hackathon experience bucket → count.
    pub hackathon_experience_distribution: BTreeMap<String, u64>,
    /// T-shirt size → count.
    pub tshirt_size_distribution: BTreeMap<String, u64>,
    /// Referral source → count.
    pub hear_about_us_distribution: BTreeMap<String, u64>,
    /// Review status → count.
    pub status_distribution: BTreeMap<String, u64>,
    /// Literal dietary restriction text → count, `"N/A"` for none.
    pub dietary_restriction_distribution: BTreeMap<String, u64>,
    /// Top words in self descriptions, in rank order.
    #[schema(value_type = std::collections::HashMap<String, u64>)]
    pub self_description_word_frequency: RankedCounts,
    /// Top words in fun facts, in rank order.
    #[schema(value_type = std::collections::HashMap<String, u64>)]
    pub fun_fact_word_frequency: RankedCounts,
    /// UTC date (`YYYY-MM-DD`) → submissions.
    pub submission_dates: BTreeMap<String, u64>,
    /// Link bucket counts.
    pub links_provided: LinkCounts,
    /// Future-plans theme → count.
    pub project_interest_themes: BTreeMap<String, u64>,
    /// Teammate summary.
    pub teammate_stats: TeammateStats,
}

/// Builds the full report for `records`.
#[must_use]
pub fn build_report(records: &[ApplicationRecord], options: &StatsOptions) -> StatisticsReport {
    let limit = options.word_limit;
    StatisticsReport {
        total_applications: records.len() as u64,
        skill_level_distribution: distribution(records, |r| r.skill_level.as_deref()),
        hackathon_experience_distribution: distribution(records, |r| {
            r.hackathon_experience.as_deref()
        }),
        tshirt_size_distribution: distribution(records, |r| r.tshirt_size.as_deref()),
        hear_about_us_distribution: distribution(records, |r| r.hear_about_us.as_deref()),
        status_distribution: distribution(records, |r| Some(r.status.as_str())),
        dietary_restriction_distribution: distribution(records, |r| {
            r.dietary_restrictions_extra.as_deref()
        }),
        self_description_word_frequency: word_frequency(
            records.iter().map(|r| r.self_description.as_deref()),
            limit,
        ),
        fun_fact_word_frequency: word_frequency(
            records.iter().map(|r| r.fun_fact.as_deref()),
            limit,
        ),
        submission_dates: submission_dates(records),
        links_provided: link_counts(records.iter().map(|r| r.links.as_deref())),
        project_interest_themes: theme_counts(records.iter().map(|r| r.future_plans.as_deref())),
        teammate_stats: teammate_stats(records),
    }
}
