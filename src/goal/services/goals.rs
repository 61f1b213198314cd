//! Service layer for goal creation, retrieval, editing and deletion.

use crate::error::{ClassifiedError, FailureKind};
use crate::goal::{
    domain::{
        Goal, GoalDefinition, GoalDomainError, GoalId, GoalPeriod, GoalQuery, GoalStatus,
        GoalTarget, GoalType,
    },
    ports::{GoalRepository, GoalRepositoryError},
};
use crate::owner::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Request payload for creating a goal.
///
/// Enumerated fields arrive as their canonical strings and are validated
/// before anything is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateGoalRequest {
    title: String,
    description: Option<String>,
    goal_type: String,
    target: u32,
    period: String,
    deadline: DateTime<Utc>,
}

impl CreateGoalRequest {
    /// Creates a request with every required goal field.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        goal_type: impl Into<String>,
        target: u32,
        period: impl Into<String>,
        deadline: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            description: None,
            goal_type: goal_type.into(),
            target,
            period: period.into(),
            deadline,
        }
    }

    /// Sets the goal description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Partial update for an existing goal. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateGoalRequest {
    title: Option<String>,
    description: Option<Option<String>>,
    goal_type: Option<String>,
    target: Option<u32>,
    current: Option<u32>,
    period: Option<String>,
    deadline: Option<DateTime<Utc>>,
    status: Option<String>,
}

impl UpdateGoalRequest {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description; `None` clears it.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    /// Replaces the goal type.
    #[must_use]
    pub fn with_goal_type(mut self, goal_type: impl Into<String>) -> Self {
        self.goal_type = Some(goal_type.into());
        self
    }

    /// Replaces the target.
    #[must_use]
    pub const fn with_target(mut self, target: u32) -> Self {
        self.target = Some(target);
        self
    }

    /// Overwrites the progress counter.
    #[must_use]
    pub const fn with_current(mut self, current: u32) -> Self {
        self.current = Some(current);
        self
    }

    /// Replaces the period.
    #[must_use]
    pub fn with_period(mut self, period: impl Into<String>) -> Self {
        self.period = Some(period.into());
        self
    }

    /// Replaces the deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Overrides the status before it is re-evaluated.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Validates every present field and applies them to `goal`, leaving it
    /// untouched when any field is rejected.
    fn apply_to(self, goal: &mut Goal) -> Result<(), GoalDomainError> {
        let Self {
            title,
            description,
            goal_type,
            target,
            current,
            period,
            deadline,
            status,
        } = self;

        let mut edited = goal.clone();
        if let Some(new_title) = title {
            edited.rename(new_title)?;
        }
        if let Some(new_description) = description {
            edited.set_description(new_description);
        }
        if let Some(raw_type) = goal_type {
            edited.set_goal_type(GoalType::try_from(raw_type.as_str())?);
        }
        if let Some(raw_target) = target {
            edited.set_target(GoalTarget::new(raw_target)?);
        }
        if let Some(new_current) = current {
            edited.set_current(new_current);
        }
        if let Some(raw_period) = period {
            edited.set_period(GoalPeriod::try_from(raw_period.as_str())?);
        }
        if let Some(new_deadline) = deadline {
            edited.set_deadline(new_deadline);
        }
        if let Some(raw_status) = status {
            edited.set_status(GoalStatus::try_from(raw_status.as_str())?);
        }

        *goal = edited;
        Ok(())
    }
}

/// Service-level errors for goal operations.
#[derive(Debug, Error)]
pub enum GoalServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] GoalDomainError),
    /// The goal does not exist for the acting user.
    #[error("goal not found: {0}")]
    NotFound(GoalId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] GoalRepositoryError),
}

impl ClassifiedError for GoalServiceError {
    fn kind(&self) -> FailureKind {
        match self {
            Self::Domain(_) => FailureKind::Validation,
            Self::NotFound(_) | Self::Repository(GoalRepositoryError::NotFound(_)) => {
                FailureKind::NotFound
            }
            Self::Repository(_) => FailureKind::Store,
        }
    }
}

/// Result type for goal service operations.
pub type GoalServiceResult<T> = Result<T, GoalServiceError>;

/// Goal management service.
#[derive(Clone)]
pub struct GoalService<R, C>
where
    R: GoalRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> GoalService<R, C>
where
    R: GoalRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new goal service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a pending goal with no progress.
    ///
    /// # Errors
    ///
    /// Returns [`GoalServiceError::Domain`] when a required field is missing
    /// or malformed, or [`GoalServiceError::Repository`] when persistence
    /// fails.
    pub async fn create(
        &self,
        owner: UserId,
        request: CreateGoalRequest,
    ) -> GoalServiceResult<Goal> {
        let CreateGoalRequest {
            title,
            description,
            goal_type,
            target,
            period,
            deadline,
        } = request;

        let mut definition = GoalDefinition::new(
            title,
            GoalType::try_from(goal_type.as_str())?,
            GoalTarget::new(target)?,
            GoalPeriod::try_from(period.as_str())?,
            deadline,
        )?;
        if let Some(text) = description {
            definition = definition.with_description(text);
        }

        let goal = Goal::new(owner, definition, &*self.clock);
        self.repository.store(&goal).await?;
        debug!(goal_id = %goal.id(), %owner, period = %goal.period(), "goal created");
        Ok(goal)
    }

    /// Lists the owner's goals, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`GoalServiceError::Repository`] when the lookup fails.
    pub async fn list(&self, owner: UserId) -> GoalServiceResult<Vec<Goal>> {
        Ok(self.repository.find(owner, &GoalQuery::new()).await?)
    }

    /// Retrieves one of the owner's goals.
    ///
    /// # Errors
    ///
    /// Returns [`GoalServiceError::NotFound`] when the goal does not exist or
    /// belongs to another user.
    pub async fn get(&self, owner: UserId, id: GoalId) -> GoalServiceResult<Goal> {
        self.repository
            .find_by_id(owner, id)
            .await?
            .ok_or(GoalServiceError::NotFound(id))
    }

    /// Applies a partial update, re-evaluates status and saves the goal.
    ///
    /// # Errors
    ///
    /// Returns [`GoalServiceError::NotFound`] for a missing or foreign goal,
    /// [`GoalServiceError::Domain`] for an invalid field, or
    /// [`GoalServiceError::Repository`] when persistence fails.
    pub async fn update(
        &self,
        owner: UserId,
        id: GoalId,
        request: UpdateGoalRequest,
    ) -> GoalServiceResult<Goal> {
        let mut goal = self.get(owner, id).await?;
        request.apply_to(&mut goal)?;
        goal.evaluate_status(&*self.clock);
        self.repository.update(&goal).await?;
        Ok(goal)
    }

    /// Deletes one of the owner's goals.
    ///
    /// # Errors
    ///
    /// Returns [`GoalServiceError::NotFound`] when nothing was deleted.
    pub async fn delete(&self, owner: UserId, id: GoalId) -> GoalServiceResult<()> {
        if self.repository.delete(owner, id).await? {
            Ok(())
        } else {
            Err(GoalServiceError::NotFound(id))
        }
    }
}
