//! Database row model for the `applications` table.

use chrono::{DateTime, Utc};

use crate::domain::{ApplicationId, ApplicationRecord};
use crate::error::AdminError;

/// Column list shared by every `SELECT` / `RETURNING` clause.
pub(crate) const APPLICATION_COLUMNS: &str = "id, user_id, cwid, full_name, discord, skill_level, \
     hackathon_experience, hear_about_us, why_attend, project_experience, future_plans, fun_fact, \
     self_description, links, teammates, referral_email, dietary_restrictions_extra, tshirt_size, \
     agree_to_terms, status, created_at, updated_at";

/// A raw row from the `applications` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ApplicationRow {
    /// Auto-increment row ID.
    pub id: i64,
    /// Submitting user account.
    pub user_id: Option<String>,
    /// Campus-wide student ID.
    pub cwid: Option<String>,
    /// Full name.
    pub full_name: Option<String>,
    /// Discord handle.
    pub discord: Option<String>,
    /// Skill level.
    pub skill_level: Option<String>,
    /// Hackathon experience.
    pub hackathon_experience: Option<String>,
    /// Referral source.
    pub hear_about_us: Option<String>,
    /// Why attend.
    pub why_attend: Option<String>,
    /// Project experience.
    pub project_experience: Option<String>,
    /// Future plans.
    pub future_plans: Option<String>,
    /// Fun fact.
    pub fun_fact: Option<String>,
    /// Self description.
    pub self_description: Option<String>,
    /// Links.
    pub links: Option<String>,
    /// Teammates.
    pub teammates: Option<String>,
    /// Referral email.
    pub referral_email: Option<String>,
    /// Dietary restrictions.
    pub dietary_restrictions_extra: Option<String>,
    /// T-shirt size.
    pub tshirt_size: Option<String>,
    /// Terms accepted.
    pub agree_to_terms: bool,
    /// Status text, constrained by a `CHECK`.
    pub status: String,
    /// Submission time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last status change.
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<ApplicationRow> for ApplicationRecord {
    type Error = AdminError;

    fn try_from(row: ApplicationRow) -> Result<Self, Self::Error> {
        let status = row.status.parse().map_err(|_| {
            AdminError::PersistenceError(format!(
                "application {} has unrecognized status {:?}",
                row.id, row.status
            ))
        })?;
        Ok(Self {
            id: ApplicationId::new(row.id),
            user_id: row.user_id,
            cwid: row.cwid,
            full_name: row.full_name,
            discord: row.discord,
            skill_level: row.skill_level,
            hackathon_experience: row.hackathon_experience,
            hear_about_us: row.hear_about_us,
            why_attend: row.why_attend,
            project_experience: row.project_experience,
            future_plans: row.future_plans,
            fun_fact: row.fun_fact,
            self_description: row.self_description,
            links: row.links,
            teammates: row.teammates,
            referral_email: row.referral_email,
            dietary_restrictions_extra: row.dietary_restrictions_extra,
            tshirt_size: row.tshirt_size,
            agree_to_terms: row.agree_to_terms,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Converts a batch of rows, failing on the first unrecognized status.
pub(crate) fn into_records(rows: Vec<ApplicationRow>) -> Result<Vec<ApplicationRecord>, AdminError> {
    rows.into_iter().map(ApplicationRecord::try_from).collect()
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::ApplicationStatus;

    fn row(status: &str) -> ApplicationRow {
        ApplicationRow {
            id: 9,
            user_id: None,
            cwid: Some("20001234".to_string()),
            full_name: Some("Emily Johnson".to_string()),
            discord: None,
            skill_level: None,
            hackathon_experience: None,
            hear_about_us: None,
            why_attend: None,
            project_experience: None,
            future_plans: None,
            fun_fact: None,
            self_description: None,
            links: None,
            teammates: None,
            referral_email: None,
            dietary_restrictions_extra: None,
            tshirt_size: None,
            agree_to_terms: true,
            status: status.to_string(),
            created_at: None,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn converts_valid_row() {
        let Ok(record) = ApplicationRecord::try_from(row("waitlisted")) else {
            panic!("valid row should convert");
        };
        assert_eq!(record.id.get(), 9);
        assert_eq!(record.status, ApplicationStatus::Waitlisted);
        assert!(record.agree_to_terms);
    }

    #[test]
    fn rejects_unrecognized_status() {
        let result = ApplicationRecord::try_from(row("approved"));
        assert!(matches!(result, Err(AdminError::PersistenceError(_))));
    }
}
