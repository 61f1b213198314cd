//! Error types for job application validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or editing job applications.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApplicationDomainError {
    /// The company name is empty after trimming.
    #[error("company name must not be empty")]
    EmptyCompanyName,

    /// The role is empty after trimming.
    #[error("role must not be empty")]
    EmptyRole,

    /// The application status value is not recognised.
    #[error("unknown application status: {0}")]
    UnknownStatus(String),
}
