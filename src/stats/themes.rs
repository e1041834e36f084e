//! Keyword-based themes for the `futurePlans` answer.

use std::collections::BTreeMap;

/// Bucket for answers that match no theme.
pub const OPEN_UNSPECIFIED: &str = "Open/unspecified";

/// Theme name and the lower-case keyword substrings that select it.
///
/// Matching is plain substring search, so short keywords also hit longer
/// words (`"ai"` matches "maintain"). Counts for those themes run high.
pub const THEMES: &[(&str, &[&str])] = &[
    (
        "ai",
        &["ai", "artificial intelligence", "machine learning", "deep learning", "neural"],
    ),
    ("healthcare", &["healthcare", "health", "medical", "biochem"]),
    (
        "web development",
        &["web", "full-stack", "full stack", "frontend", "front-end", "backend", "back-end"],
    ),
    ("mobile", &["mobile", "android", "iphone"]),
    ("games", &["game", "gaming"]),
    ("data science", &["data science", "data scien", "analytics", "big data"]),
    ("cybersecurity", &["security", "cyber", "hacking"]),
    (
        "entrepreneurship",
        &["startup", "start-up", "company", "business", "entrepreneur"],
    ),
    ("research", &["research", "phd", "graduate school", "grad school"]),
    ("sustainability", &["climate", "sustainab", "environment", "energy"]),
    ("education", &["education", "teach", "tutor"]),
];

/// Returns every theme whose keywords appear in `text` (case-insensitive).
#[must_use]
pub fn matching_themes(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    THEMES
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(theme, _)| *theme)
        .collect()
}

/// Counts, per theme, how many answers mention it.
///
/// An answer may count toward several themes. Answers that are missing or
/// match nothing count once toward [`OPEN_UNSPECIFIED`]. Every theme is
/// present in the result, with zero when unmatched.
pub fn theme_counts<'a, I>(texts: I) -> BTreeMap<String, u64>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut counts: BTreeMap<String, u64> = THEMES
        .iter()
        .map(|(theme, _)| ((*theme).to_string(), 0))
        .chain(std::iter::once((OPEN_UNSPECIFIED.to_string(), 0)))
        .collect();

    for text in texts {
        let matched = text.map(matching_themes).unwrap_or_default();
        if matched.is_empty() {
            *counts.entry(OPEN_UNSPECIFIED.to_string()).or_insert(0) += 1;
            continue;
        }
        for theme in matched {
            *counts.entry(theme.to_string()).or_insert(0) += 1;
        }
    }
    counts
}
