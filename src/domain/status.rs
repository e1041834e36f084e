//! Application review status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AdminError;

/// Review status of an application.
///
/// New applications start as [`ApplicationStatus::Submitted`]. Only the
/// five listed values are ever stored. [`FromStr`] accepts only the exact
/// lowercase names; [`ApplicationStatus::parse_lenient`] is the looser
/// variant used for spreadsheet exports.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// Received and awaiting review.
    #[default]
    Submitted,
    /// Offered a spot.
    Accepted,
    /// Held on the waitlist.
    Waitlisted,
    /// Not offered a spot.
    Rejected,
    /// Accepted applicant confirmed attendance.
    Confirmed,
}

impl ApplicationStatus {
    /// All statuses in display order.
    pub const ALL: [Self; 5] = [
        Self::Submitted,
        Self::Accepted,
        Self::Waitlisted,
        Self::Rejected,
        Self::Confirmed,
    ];

    /// Returns the wire/storage representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::Accepted => "accepted",
            Self::Waitlisted => "waitlisted",
            Self::Rejected => "rejected",
            Self::Confirmed => "confirmed",
        }
    }

    /// Parses a status ignoring surrounding whitespace and letter case.
    ///
    /// Used for CSV imports, where values come from hand-edited sheets.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidStatus`] if no status matches.
    pub fn parse_lenient(raw: &str) -> Result<Self, AdminError> {
        raw.trim()
            .to_ascii_lowercase()
            .parse::<Self>()
            .map_err(|_| AdminError::InvalidStatus(raw.to_string()))
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "submitted" => Ok(Self::Submitted),
            "accepted" => Ok(Self::Accepted),
            "waitlisted" => Ok(Self::Waitlisted),
            "rejected" => Ok(Self::Rejected),
            "confirmed" => Ok(Self::Confirmed),
            _ => Err(AdminError::InvalidStatus(s.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_status_through_str() {
        for status in ApplicationStatus::ALL {
            let Ok(parsed) = status.as_str().parse::<ApplicationStatus>() else {
                panic!("{status} should parse");
            };
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn exact_parse_rejects_case_and_whitespace_variants() {
        for raw in ["Accepted", " ACCEPTED ", "accepted\n", " accepted"] {
            let Err(AdminError::InvalidStatus(echoed)) = raw.parse::<ApplicationStatus>() else {
                panic!("{raw:?} should be rejected");
            };
            assert_eq!(echoed, raw);
        }
    }

    #[test]
    fn lenient_parse_ignores_case_and_whitespace() {
        let parsed = ApplicationStatus::parse_lenient(" Accepted\n").ok();
        assert_eq!(parsed, Some(ApplicationStatus::Accepted));
        let Err(AdminError::InvalidStatus(raw)) = ApplicationStatus::parse_lenient(" Approved ")
        else {
            panic!("expected InvalidStatus");
        };
        assert_eq!(raw, " Approved ");
    }

    #[test]
    fn rejects_unknown_status() {
        let result = "approved".parse::<ApplicationStatus>();
        let Err(AdminError::InvalidStatus(raw)) = result else {
            panic!("expected InvalidStatus");
        };
        assert_eq!(raw, "approved");
    }

    #[test]
    fn default_is_submitted() {
        assert_eq!(ApplicationStatus::default(), ApplicationStatus::Submitted);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&ApplicationStatus::Waitlisted).ok();
        assert_eq!(json.as_deref(), Some("\"waitlisted\""));
    }
}
