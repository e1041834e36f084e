//! Type-safe application identifier.
//!
//! [`ApplicationId`] is a newtype wrapper around the store-assigned `i64`
//! row ID so that application identifiers cannot be confused with other
//! integers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AdminError;

/// Unique identifier for a hackathon application.
///
/// Assigned by the record store on insert and immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(i64);

impl ApplicationId {
    /// Wraps a raw store ID.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw store ID.
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ApplicationId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<ApplicationId> for i64 {
    fn from(id: ApplicationId) -> Self {
        id.0
    }
}

impl FromStr for ApplicationId {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| AdminError::InvalidApplicationId(s.to_string()))
    }
}
