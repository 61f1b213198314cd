//! Failure taxonomy shared by every service boundary.
//!
//! Each context reports its own typed errors; [`ClassifiedError`] collapses
//! them onto the three kinds a transport layer needs to choose a response.

use std::fmt;

/// Coarse classification of a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// A required field was missing or malformed. Nothing was written.
    Validation,
    /// The record does not exist or belongs to another user.
    NotFound,
    /// The entity store failed.
    Store,
}

impl FailureKind {
    /// Returns a stable lowercase label for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::Store => "store",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can report their [`FailureKind`].
pub trait ClassifiedError: std::error::Error {
    /// Returns the failure classification for this error.
    fn kind(&self) -> FailureKind;
}
