//! Hiring pipeline status of a job application.

use super::ApplicationDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an application stands in the hiring pipeline.
///
/// Ordering follows pipeline position, which keeps status-bucketed maps in a
/// stable order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    /// Submitted, no response yet.
    #[default]
    Applied,
    /// Interviewing.
    Interview,
    /// Turned down.
    Rejected,
    /// Offer received.
    Offer,
}

impl ApplicationStatus {
    /// Every status in pipeline order.
    pub const ALL: [Self; 4] = [Self::Applied, Self::Interview, Self::Rejected, Self::Offer];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Interview => "interview",
            Self::Rejected => "rejected",
            Self::Offer => "offer",
        }
    }
}

impl TryFrom<&str> for ApplicationStatus {
    type Error = ApplicationDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "applied" => Ok(Self::Applied),
            "interview" => Ok(Self::Interview),
            "rejected" => Ok(Self::Rejected),
            "offer" => Ok(Self::Offer),
            _ => Err(ApplicationDomainError::UnknownStatus(value.to_owned())),
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
