//! Typed predicate for the application list view.
//!
//! [`ApplicationFilter`] replaces free-form query objects: a search term
//! matched against name, CWID, and user ID, plus an optional set of
//! statuses to include. The in-memory store evaluates it with
//! [`ApplicationFilter::matches`]; the PostgreSQL store translates it to
//! `ILIKE` / `ANY` clauses.

use super::{ApplicationRecord, ApplicationStatus};
use crate::error::AdminError;

/// Search and status filter for listing applications.
///
/// An empty filter matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationFilter {
    search: Option<String>,
    statuses: Vec<ApplicationStatus>,
}

impl ApplicationFilter {
    /// Creates a filter that matches everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to records whose full name, CWID, or user ID
    /// contains `term` (case-insensitive). Blank terms are ignored.
    #[must_use]
    pub fn with_search(mut self, term: &str) -> Self {
        let term = term.trim();
        self.search = (!term.is_empty()).then(|| term.to_lowercase());
        self
    }

    /// Restricts results to the given statuses. An empty list means all.
    #[must_use]
    pub fn with_statuses(mut self, statuses: Vec<ApplicationStatus>) -> Self {
        self.statuses = statuses;
        self
    }

    /// Parses a comma-separated status list such as `"accepted,waitlisted"`.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidStatus`] on the first unrecognized entry.
    pub fn parse_statuses(raw: &str) -> Result<Vec<ApplicationStatus>, AdminError> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect()
    }

    /// Lower-cased search term, if any.
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Included statuses; empty means all.
    #[must_use]
    pub fn statuses(&self) -> &[ApplicationStatus] {
        &self.statuses
    }

    /// `ILIKE` pattern for the search term with `%`, `_` and `\` escaped.
    #[must_use]
    pub fn like_pattern(&self) -> Option<String> {
        self.search.as_deref().map(|term| {
            let mut pattern = String::with_capacity(term.len() + 2);
            pattern.push('%');
            for c in term.chars() {
                if matches!(c, '%' | '_' | '\\') {
                    pattern.push('\\');
                }
                pattern.push(c);
            }
            pattern.push('%');
            pattern
        })
    }

    /// Returns `true` if `record` satisfies both the search term and the
    /// status inclusion list.
    #[must_use]
    pub fn matches(&self, record: &ApplicationRecord) -> bool {
        if !self.statuses.is_empty() && !self.statuses.contains(&record.status) {
            return false;
        }
        let Some(term) = self.search.as_deref() else {
            return true;
        };
        [&record.full_name, &record.cwid, &record.user_id]
            .into_iter()
            .flatten()
            .any(|value| value.to_lowercase().contains(term))
    }
}
