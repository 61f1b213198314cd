//! Skill classification enumerations.

use super::SkillDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Area of the stack a skill belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    /// Browser and UI work.
    Frontend,
    /// Server-side work.
    Backend,
    /// Data storage.
    Database,
    /// Build, deploy and operations.
    Devops,
    /// Mobile platforms.
    Mobile,
    /// Anything else.
    #[default]
    Other,
}

impl SkillCategory {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Database => "database",
            Self::Devops => "devops",
            Self::Mobile => "mobile",
            Self::Other => "other",
        }
    }
}

impl TryFrom<&str> for SkillCategory {
    type Error = SkillDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "frontend" => Ok(Self::Frontend),
            "backend" => Ok(Self::Backend),
            "database" => Ok(Self::Database),
            "devops" => Ok(Self::Devops),
            "mobile" => Ok(Self::Mobile),
            "other" => Ok(Self::Other),
            _ => Err(SkillDomainError::UnknownCategory(value.to_owned())),
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-assessed proficiency. Stored with capitalised names.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Proficiency {
    /// Just started.
    #[default]
    Beginner,
    /// Comfortable with the basics.
    Intermediate,
    /// Productive without help.
    Advanced,
    /// Can teach it.
    Expert,
}

impl Proficiency {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }
}

impl TryFrom<&str> for Proficiency {
    type Error = SkillDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            "expert" => Ok(Self::Expert),
            _ => Err(SkillDomainError::UnknownProficiency(value.to_owned())),
        }
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
