//! Error types for task validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or editing tasks.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task type value is not recognised.
    #[error("unknown task type: {0}")]
    UnknownType(String),

    /// The priority value is not recognised.
    #[error("unknown task priority: {0}")]
    UnknownPriority(String),
}
