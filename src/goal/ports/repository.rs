//! Repository port for goal persistence, filtered lookup and atomic
//! progress increments.

use crate::goal::domain::{Goal, GoalId, GoalQuery};
use crate::owner::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for goal repository operations.
pub type GoalRepositoryResult<T> = Result<T, GoalRepositoryError>;

/// Goal persistence contract.
///
/// Every operation is scoped to an owner. A goal that exists but belongs to
/// another user is indistinguishable from one that does not exist.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// Stores a new goal.
    ///
    /// # Errors
    ///
    /// Returns [`GoalRepositoryError::DuplicateGoal`] when the goal ID already
    /// exists.
    async fn store(&self, goal: &Goal) -> GoalRepositoryResult<()>;

    /// Persists every field of an existing goal (last write wins).
    ///
    /// # Errors
    ///
    /// Returns [`GoalRepositoryError::NotFound`] when the goal does not exist
    /// for its owner.
    async fn update(&self, goal: &Goal) -> GoalRepositoryResult<()>;

    /// Re-derives the status of one of the owner's open goals from its
    /// stored progress counter, as one atomic step. A first completion is
    /// stamped at `now`.
    ///
    /// Completed goals are left alone and the counter is never written.
    /// Returns the goal after evaluation when its status or `completed_at`
    /// changed, and `None` when nothing changed or the goal is gone.
    async fn refresh_status(
        &self,
        owner: UserId,
        id: GoalId,
        now: DateTime<Utc>,
    ) -> GoalRepositoryResult<Option<Goal>>;

    /// Finds one of the owner's goals by identifier.
    ///
    /// Returns `None` when the goal does not exist or is owned by someone
    /// else.
    async fn find_by_id(&self, owner: UserId, id: GoalId) -> GoalRepositoryResult<Option<Goal>>;

    /// Returns the owner's goals matching `query`, newest first.
    async fn find(&self, owner: UserId, query: &GoalQuery) -> GoalRepositoryResult<Vec<Goal>>;

    /// Counts the owner's goals matching `query`.
    async fn count(&self, owner: UserId, query: &GoalQuery) -> GoalRepositoryResult<u64>;

    /// Atomically adds `delta` to the progress counter of every owned goal
    /// matching `query`, returning how many goals were advanced.
    ///
    /// Implementations must apply the addition in one step against the stored
    /// counter; concurrent callers never lose an increment.
    async fn increment_progress(
        &self,
        owner: UserId,
        query: &GoalQuery,
        delta: u32,
    ) -> GoalRepositoryResult<u64>;

    /// Deletes one of the owner's goals, returning `false` when nothing was
    /// deleted.
    async fn delete(&self, owner: UserId, id: GoalId) -> GoalRepositoryResult<bool>;
}

/// Errors returned by goal repository implementations.
#[derive(Debug, Clone, Error)]
pub enum GoalRepositoryError {
    /// A goal with the same identifier already exists.
    #[error("duplicate goal identifier: {0}")]
    DuplicateGoal(GoalId),

    /// The goal was not found.
    #[error("goal not found: {0}")]
    NotFound(GoalId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl GoalRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
