//! Error types for goal domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or editing goal values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GoalDomainError {
    /// The goal title is empty after trimming.
    #[error("goal title must not be empty")]
    EmptyTitle,

    /// The goal target is below the minimum of one.
    #[error("invalid goal target {0}, expected a positive integer")]
    InvalidTarget(u32),

    /// The goal type value is not recognised.
    #[error("unknown goal type: {0}")]
    UnknownType(String),

    /// The goal period value is not recognised.
    #[error("unknown goal period: {0}")]
    UnknownPeriod(String),

    /// The goal status value is not recognised.
    #[error("unknown goal status: {0}")]
    UnknownStatus(String),
}
