//! Enumerations describing what a goal counts, over which period, and how
//! far along it is.

use super::GoalDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a goal measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    /// Counts recorded job applications. Only this type receives fan-out
    /// increments.
    JobApplication,
    /// Learning objectives tracked by hand.
    Learning,
    /// Skill-building objectives tracked by hand.
    Skill,
    /// Anything else.
    Other,
}

impl GoalType {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::JobApplication => "job_application",
            Self::Learning => "learning",
            Self::Skill => "skill",
            Self::Other => "other",
        }
    }
}

impl TryFrom<&str> for GoalType {
    type Error = GoalDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "job_application" => Ok(Self::JobApplication),
            "learning" => Ok(Self::Learning),
            "skill" => Ok(Self::Skill),
            "other" => Ok(Self::Other),
            _ => Err(GoalDomainError::UnknownType(value.to_owned())),
        }
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The period over which a goal accrues progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalPeriod {
    /// One local calendar day.
    Daily,
    /// One Sunday-started week.
    Weekly,
    /// One calendar month.
    Monthly,
    /// Open-ended until the deadline passes.
    Custom,
}

impl GoalPeriod {
    /// Every period, in fan-out order.
    pub const ALL: [Self; 4] = [Self::Daily, Self::Weekly, Self::Monthly, Self::Custom];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Custom => "custom",
        }
    }
}

impl TryFrom<&str> for GoalPeriod {
    type Error = GoalDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "custom" => Ok(Self::Custom),
            _ => Err(GoalDomainError::UnknownPeriod(value.to_owned())),
        }
    }
}

impl fmt::Display for GoalPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Goal progress status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// Created, no progress yet.
    Pending,
    /// Some progress, target not reached.
    InProgress,
    /// Target reached.
    Completed,
}

impl GoalStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl TryFrom<&str> for GoalStatus {
    type Error = GoalDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(GoalDomainError::UnknownStatus(value.to_owned())),
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
