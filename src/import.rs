//! CSV fixture import.
//!
//! Reads application exports with a header row whose column names are the
//! camelCase record fields (`fullName`, `skillLevel`, ...). Quoted fields
//! may contain commas, newlines, and doubled quotes. `Timestamp` is
//! accepted as an alias for `createdAt`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::domain::{ApplicationStatus, NewApplication};
use crate::error::AdminError;
use crate::stats::parse_timestamp;

/// Parses every row of a CSV export.
///
/// Rows without a `createdAt` value are stamped with `now`; rows whose
/// timestamp cannot be parsed keep no submission time at all.
///
/// # Errors
///
/// Returns [`AdminError::Import`] on malformed CSV or on the first row
/// with an unrecognized status. No partial result is returned.
pub fn parse_applications<R: Read>(
    reader: R,
    now: DateTime<Utc>,
) -> Result<Vec<NewApplication>, AdminError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    let mut applications = Vec::new();

    for (index, record) in csv_reader.deserialize::<ImportRow>().enumerate() {
        let row = record?;
        // header is line 1
        let line = index + 2;
        applications.push(row.into_new_application(line, now)?);
    }

    Ok(applications)
}

/// Opens and parses a CSV export from disk.
///
/// # Errors
///
/// Returns [`AdminError::Import`] if the file cannot be opened or parsed.
pub fn read_applications_file(
    path: &Path,
    now: DateTime<Utc>,
) -> Result<Vec<NewApplication>, AdminError> {
    let file = File::open(path)
        .map_err(|e| AdminError::Import(format!("cannot open {}: {e}", path.display())))?;
    parse_applications(file, now)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    user_id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    cwid: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    full_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    discord: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    skill_level: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    hackathon_experience: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    hear_about_us: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    why_attend: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    project_experience: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    future_plans: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    fun_fact: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    self_description: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    links: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    teammates: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    referral_email: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    dietary_restrictions_extra: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    tshirt_size: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    agree_to_terms: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    status: Option<String>,
    #[serde(
        default,
        alias = "Timestamp",
        deserialize_with = "empty_string_as_none"
    )]
    created_at: Option<String>,
}

impl ImportRow {
    fn into_new_application(
        self,
        line: usize,
        now: DateTime<Utc>,
    ) -> Result<NewApplication, AdminError> {
        let status = match self.status.as_deref() {
            Some(raw) => ApplicationStatus::parse_lenient(raw).map_err(|_| {
                AdminError::Import(format!("line {line}: unrecognized status {raw:?}"))
            })?,
            None => ApplicationStatus::default(),
        };

        let created_at = match self.created_at.as_deref() {
            None => Some(now),
            Some(raw) => {
                let parsed = parse_timestamp(raw);
                if parsed.is_none() {
                    tracing::warn!(line, timestamp = raw, "unparsable submission timestamp");
                }
                parsed
            }
        };

        Ok(NewApplication {
            user_id: self.user_id,
            cwid: self.cwid,
            full_name: self.full_name,
            discord: self.discord,
            skill_level: self.skill_level,
            hackathon_experience: self.hackathon_experience,
            hear_about_us: self.hear_about_us,
            why_attend: self.why_attend,
            project_experience: self.project_experience,
            future_plans: self.future_plans,
            fun_fact: self.fun_fact,
            self_description: self.self_description,
            links: self.links,
            teammates: self.teammates,
            referral_email: self.referral_email,
            dietary_restrictions_extra: self.dietary_restrictions_extra,
            tshirt_size: self.tshirt_size,
            agree_to_terms: self.agree_to_terms.as_deref().is_some_and(is_truthy),
            status,
            created_at,
        })
    }
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "y" | "1" | "on" | "agree" | "i agree"
    )
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|s| {
        let trimmed = s.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    const EXPORT: &str = "\
userId,fullName,cwid,skillLevel,selfDescription,links,teammates,status,Timestamp,agreeToTerms
u1,Jane Doe,12345678,Intermediate,\"I love coding, hiking, and \"\"hard\"\" problems\",github.com/janedoe,\"John Smith, Emily Johnson\",accepted,2025-05-06T09:11:04Z,TRUE
u2,John Smith,87654321,Beginner,\"Line one
line two\",,,,5/6/2025 19:54:11,no
u3,Emily Johnson,23456789,,,-,,waitlisted,sometime last week,
";

    fn now() -> DateTime<Utc> {
        parse_timestamp("2025-06-01T12:00:00Z").unwrap_or_default()
    }

    #[test]
    fn parses_quoted_fields_with_commas_quotes_and_newlines() {
        let Ok(apps) = parse_applications(EXPORT.as_bytes(), now()) else {
            panic!("export should parse");
        };
        assert_eq!(apps.len(), 3);

        let Some(jane) = apps.first() else {
            panic!("missing first row");
        };
        assert_eq!(
            jane.self_description.as_deref(),
            Some("I love coding, hiking, and \"hard\" problems")
        );
        assert_eq!(jane.teammates.as_deref(), Some("John Smith, Emily Johnson"));
        assert_eq!(jane.status, ApplicationStatus::Accepted);
        assert!(jane.agree_to_terms);

        let Some(john) = apps.get(1) else {
            panic!("missing second row");
        };
        assert_eq!(john.self_description.as_deref(), Some("Line one\nline two"));
        assert_eq!(john.links, None);
        assert_eq!(john.status, ApplicationStatus::Submitted);
        assert!(!john.agree_to_terms);
        assert!(john.created_at.is_some());
    }

    #[test]
    fn unparsable_timestamp_leaves_created_at_empty() {
        let Ok(apps) = parse_applications(EXPORT.as_bytes(), now()) else {
            panic!("export should parse");
        };
        let Some(emily) = apps.get(2) else {
            panic!("missing third row");
        };
        assert_eq!(emily.created_at, None);
        assert_eq!(emily.skill_level, None);
    }

    #[test]
    fn missing_timestamp_column_uses_now() {
        let csv = "fullName,skillLevel\nAda,Advanced\n";
        let Ok(apps) = parse_applications(csv.as_bytes(), now()) else {
            panic!("csv should parse");
        };
        assert_eq!(apps.first().and_then(|a| a.created_at), Some(now()));
    }

    #[test]
    fn unknown_status_rejects_whole_import() {
        let csv = "fullName,status\nAda,accepted\nBob,approved\n";
        let result = parse_applications(csv.as_bytes(), now());
        let Err(AdminError::Import(message)) = result else {
            panic!("expected import error");
        };
        assert!(message.contains("line 3"));
        assert!(message.contains("approved"));
    }

    #[test]
    fn status_column_ignores_case() {
        let csv = "fullName,status\nAda,Waitlisted\nBob,CONFIRMED\n";
        let Ok(apps) = parse_applications(csv.as_bytes(), now()) else {
            panic!("csv should parse");
        };
        let statuses: Vec<_> = apps.iter().map(|a| a.status).collect();
        assert_eq!(
            statuses,
            [ApplicationStatus::Waitlisted, ApplicationStatus::Confirmed]
        );
    }

    #[test]
    fn missing_file_is_import_error() {
        let result = read_applications_file(Path::new("/nonexistent/applications.csv"), now());
        assert!(matches!(result, Err(AdminError::Import(_))));
    }
}
