//! Hackathon application records as submitted through the registration form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{ApplicationId, ApplicationStatus};

/// One stored hackathon application.
///
/// Every free-text answer is optional because the registration form
/// accepts empty answers. `links` and `teammates` may hold several entries
/// separated by commas, whitespace, or newlines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    /// Store-assigned identifier (immutable).
    #[schema(value_type = i64)]
    pub id: ApplicationId,
    /// Opaque identifier of the submitting user account.
    pub user_id: Option<String>,
    /// Campus-wide student ID.
    pub cwid: Option<String>,
    /// Applicant's full name.
    pub full_name: Option<String>,
    /// Discord handle.
    pub discord: Option<String>,
    /// Self-reported skill level.
    pub skill_level: Option<String>,
    /// Prior hackathon experience bucket.
    pub hackathon_experience: Option<String>,
    /// Referral source ("how did you hear about us").
    pub hear_about_us: Option<String>,
    /// Why the applicant wants to attend.
    pub why_attend: Option<String>,
    /// Past project experience.
    pub project_experience: Option<String>,
    /// Future plans and project interests.
    pub future_plans: Option<String>,
    /// Fun fact about the applicant.
    pub fun_fact: Option<String>,
    /// Free-form self description.
    pub self_description: Option<String>,
    /// Portfolio, GitHub, or LinkedIn links.
    pub links: Option<String>,
    /// Names of intended teammates.
    pub teammates: Option<String>,
    /// Email of the person who referred the applicant.
    pub referral_email: Option<String>,
    /// Dietary restrictions, as free text.
    pub dietary_restrictions_extra: Option<String>,
    /// T-shirt size.
    pub tshirt_size: Option<String>,
    /// Whether the applicant accepted the terms.
    pub agree_to_terms: bool,
    /// Current review status.
    pub status: ApplicationStatus,
    /// Submission time. Absent when an imported timestamp was unparsable.
    pub created_at: Option<DateTime<Utc>>,
    /// Time of the last status change.
    pub updated_at: DateTime<Utc>,
}

impl ApplicationRecord {
    /// Materializes a new record from a submission with a store-assigned ID.
    #[must_use]
    pub fn from_new(id: ApplicationId, new: NewApplication, now: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: new.user_id,
            cwid: new.cwid,
            full_name: new.full_name,
            discord: new.discord,
            skill_level: new.skill_level,
            hackathon_experience: new.hackathon_experience,
            hear_about_us: new.hear_about_us,
            why_attend: new.why_attend,
            project_experience: new.project_experience,
            future_plans: new.future_plans,
            fun_fact: new.fun_fact,
            self_description: new.self_description,
            links: new.links,
            teammates: new.teammates,
            referral_email: new.referral_email,
            dietary_restrictions_extra: new.dietary_restrictions_extra,
            tshirt_size: new.tshirt_size,
            agree_to_terms: new.agree_to_terms,
            status: new.status,
            created_at: new.created_at,
            updated_at: now,
        }
    }
}

/// Application data before the store assigns an ID.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    /// Opaque identifier of the submitting user account.
    pub user_id: Option<String>,
    /// Campus-wide student ID.
    pub cwid: Option<String>,
    /// Applicant's full name.
    pub full_name: Option<String>,
    /// Discord handle.
    pub discord: Option<String>,
    /// Self-reported skill level.
    pub skill_level: Option<String>,
    /// Prior hackathon experience bucket.
    pub hackathon_experience: Option<String>,
    /// Referral source.
    pub hear_about_us: Option<String>,
    /// Why the applicant wants to attend.
    pub why_attend: Option<String>,
    /// Past project experience.
    pub project_experience: Option<String>,
    /// Future plans and project interests.
    pub future_plans: Option<String>,
    /// Fun fact about the applicant.
    pub fun_fact: Option<String>,
    /// Free-form self description.
    pub self_description: Option<String>,
    /// Portfolio, GitHub, or LinkedIn links.
    pub links: Option<String>,
    /// Names of intended teammates.
    pub teammates: Option<String>,
    /// Email of the person who referred the applicant.
    pub referral_email: Option<String>,
    /// Dietary restrictions, as free text.
    pub dietary_restrictions_extra: Option<String>,
    /// T-shirt size.
    pub tshirt_size: Option<String>,
    /// Whether the applicant accepted the terms.
    #[serde(default)]
    pub agree_to_terms: bool,
    /// Initial status, `submitted` unless imported otherwise.
    #[serde(default)]
    pub status: ApplicationStatus,
    /// Submission time.
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_new_keeps_answers_and_stamps_update_time() {
        let now = Utc::now();
        let new = NewApplication {
            full_name: Some("Jane Doe".to_string()),
            skill_level: Some("Intermediate".to_string()),
            created_at: Some(now),
            ..NewApplication::default()
        };

        let record = ApplicationRecord::from_new(ApplicationId::new(1), new, now);
        assert_eq!(record.id.get(), 1);
        assert_eq!(record.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(record.status, ApplicationStatus::Submitted);
        assert_eq!(record.updated_at, now);
        assert_eq!(record.created_at, Some(now));
    }

    #[test]
    fn serializes_camel_case_fields() {
        let record =
            ApplicationRecord::from_new(ApplicationId::new(3), NewApplication::default(), Utc::now());
        let json = serde_json::to_value(&record).unwrap_or_default();
        assert!(json.get("fullName").is_some());
        assert!(json.get("dietaryRestrictionsExtra").is_some());
        assert_eq!(json.get("status").and_then(|v| v.as_str()), Some("submitted"));
    }
}
