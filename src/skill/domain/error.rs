//! Error types for skill validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or editing skills.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SkillDomainError {
    /// The skill name is empty after trimming.
    #[error("skill name must not be empty")]
    EmptyName,

    /// The category value is not recognised.
    #[error("unknown skill category: {0}")]
    UnknownCategory(String),

    /// The proficiency value is not recognised.
    #[error("unknown proficiency level: {0}")]
    UnknownProficiency(String),
}
