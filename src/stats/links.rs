//! Coarse classification of the free-text `links` answer.
//!
//! This is a substring-presence heuristic, not a URL parser. An answer
//! counts as GitHub and/or LinkedIn when it mentions those domains, as
//! "Other/Unknown" when it is non-empty but mentions neither, and as
//! "None" when it is blank or the `"-"` sentinel. An answer holding a
//! GitHub URL plus an unrelated portfolio link is therefore not counted
//! under "Other/Unknown".

use serde::Serialize;
use utoipa::ToSchema;

use super::distribution::DASH_SENTINEL;

const GITHUB_DOMAIN: &str = "github.com";
const LINKEDIN_DOMAIN: &str = "linkedin.com";

/// Which buckets a single `links` answer falls into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkClass {
    /// Mentions `github.com`.
    pub github: bool,
    /// Mentions `linkedin.com`.
    pub linkedin: bool,
    /// Non-empty but mentions neither known domain.
    pub other: bool,
    /// Blank or `"-"`.
    pub none: bool,
}

/// Bucket counts across all applicants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct LinkCounts {
    /// Applicants mentioning GitHub.
    #[serde(rename = "GitHub")]
    pub github: u64,
    /// Applicants mentioning LinkedIn.
    #[serde(rename = "LinkedIn")]
    pub linkedin: u64,
    /// Applicants with some other link or handle.
    #[serde(rename = "Other/Unknown")]
    pub other: u64,
    /// Applicants with no links.
    #[serde(rename = "None")]
    pub none: u64,
}

/// Classifies one `links` answer.
#[must_use]
pub fn classify_links(value: Option<&str>) -> LinkClass {
    let value = value.map(str::trim).unwrap_or_default();
    if value.is_empty() || value == DASH_SENTINEL {
        return LinkClass {
            none: true,
            ..LinkClass::default()
        };
    }
    let lower = value.to_lowercase();
    let github = lower.contains(GITHUB_DOMAIN);
    let linkedin = lower.contains(LINKEDIN_DOMAIN);
    LinkClass {
        github,
        linkedin,
        other: !github && !linkedin,
        none: false,
    }
}

/// Sums [`classify_links`] over every answer.
pub fn link_counts<'a, I>(values: I) -> LinkCounts
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    values
        .into_iter()
        .map(classify_links)
        .fold(LinkCounts::default(), |mut counts, class| {
            counts.github += u64::from(class.github);
            counts.linkedin += u64::from(class.linkedin);
            counts.other += u64::from(class.other);
            counts.none += u64::from(class.none);
            counts
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn github_url_only_counts_github() {
        let counts = link_counts([Some("https://github.com/x")]);
        assert_eq!(
            counts,
            LinkCounts {
                github: 1,
                ..LinkCounts::default()
            }
        );
    }

    #[test]
    fn bare_username_counts_other() {
        let counts = link_counts([Some("mrshine09")]);
        assert_eq!(
            counts,
            LinkCounts {
                other: 1,
                ..LinkCounts::default()
            }
        );
    }

    #[test]
    fn empty_and_dash_count_none() {
        for value in [Some(""), Some("-"), Some("  -  "), None] {
            let counts = link_counts([value]);
            assert_eq!(
                counts,
                LinkCounts {
                    none: 1,
                    ..LinkCounts::default()
                }
            );
        }
    }

    #[test]
    fn both_domains_count_both_but_not_other() {
        let counts = link_counts([Some(
            "https://www.LinkedIn.com/in/jane, GitHub.com/janedoe",
        )]);
        assert_eq!(counts.github, 1);
        assert_eq!(counts.linkedin, 1);
        assert_eq!(counts.other, 0);
        assert_eq!(counts.none, 0);
    }

    #[test]
    fn known_domain_with_extra_text_is_not_other() {
        let class = classify_links(Some("github.com/jane janedoe.dev"));
        assert!(class.github);
        assert!(!class.other);
    }

    #[test]
    fn serializes_display_labels() {
        let json = serde_json::to_value(LinkCounts::default()).unwrap_or_default();
        for key in ["GitHub", "LinkedIn", "Other/Unknown", "None"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
