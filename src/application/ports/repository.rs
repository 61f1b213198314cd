//! Repository port for job applications and the read-side aggregates the
//! dashboard needs.

use crate::application::domain::{
    ApplicationId, ApplicationStatus, DailyApplicationCount, JobApplication,
};
use crate::calendar::{Calendar, TimeRange};
use crate::owner::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

/// Result type for application repository operations.
pub type ApplicationRepositoryResult<T> = Result<T, ApplicationRepositoryError>;

/// Job application persistence contract.
///
/// Every operation is scoped to an owner.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Stores a new application.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationRepositoryError::DuplicateApplication`] when the
    /// identifier already exists.
    async fn store(&self, application: &JobApplication) -> ApplicationRepositoryResult<()>;

    /// Persists every field of an existing application.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationRepositoryError::NotFound`] when the application
    /// does not exist for its owner.
    async fn update(&self, application: &JobApplication) -> ApplicationRepositoryResult<()>;

    /// Finds one of the owner's applications by identifier.
    async fn find_by_id(
        &self,
        owner: UserId,
        id: ApplicationId,
    ) -> ApplicationRepositoryResult<Option<JobApplication>>;

    /// Lists the owner's applications, most recently applied first.
    async fn list(&self, owner: UserId) -> ApplicationRepositoryResult<Vec<JobApplication>>;

    /// Deletes one of the owner's applications, returning `false` when
    /// nothing was deleted.
    async fn delete(&self, owner: UserId, id: ApplicationId) -> ApplicationRepositoryResult<bool>;

    /// Counts every application the owner has recorded.
    async fn count_all(&self, owner: UserId) -> ApplicationRepositoryResult<u64>;

    /// Counts the owner's applications dated within `range`.
    async fn count_applied_between(
        &self,
        owner: UserId,
        range: TimeRange,
    ) -> ApplicationRepositoryResult<u64>;

    /// Counts the owner's applications per status. Absent statuses have no
    /// entry.
    async fn count_by_status(
        &self,
        owner: UserId,
    ) -> ApplicationRepositoryResult<BTreeMap<ApplicationStatus, u64>>;

    /// Groups the owner's applications dated at or after `since` by local
    /// calendar day, ascending. Days without applications are omitted.
    async fn daily_counts(
        &self,
        owner: UserId,
        since: DateTime<Utc>,
        calendar: &Calendar,
    ) -> ApplicationRepositoryResult<Vec<DailyApplicationCount>>;
}

/// Errors returned by application repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ApplicationRepositoryError {
    /// An application with the same identifier already exists.
    #[error("duplicate application identifier: {0}")]
    DuplicateApplication(ApplicationId),

    /// The application was not found.
    #[error("application not found: {0}")]
    NotFound(ApplicationId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ApplicationRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
