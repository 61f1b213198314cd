//! Task CRUD orchestration, including completion toggling.

use crate::error::{ClassifiedError, FailureKind};
use crate::owner::UserId;
use crate::task::{
    domain::{Task, TaskDetails, TaskDomainError, TaskId, TaskPriority, TaskQuery, TaskType},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    task_type: Option<String>,
    priority: Option<String>,
    due_date: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            task_type: None,
            priority: None,
            due_date: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task type. Defaults to `other`.
    #[must_use]
    pub fn with_type(mut self, task_type: impl Into<String>) -> Self {
        self.task_type = Some(task_type.into());
        self
    }

    /// Sets the priority. Defaults to `medium`.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    fn into_details(self) -> Result<TaskDetails, TaskDomainError> {
        let Self {
            title,
            description,
            task_type,
            priority,
            due_date,
        } = self;

        let mut details = TaskDetails::new(title)?;
        if let Some(raw_type) = task_type {
            details = details.with_type(TaskType::try_from(raw_type.as_str())?);
        }
        if let Some(raw_priority) = priority {
            details = details.with_priority(TaskPriority::try_from(raw_priority.as_str())?);
        }
        if let Some(text) = description {
            details = details.with_description(text);
        }
        if let Some(due) = due_date {
            details = details.due_at(due);
        }
        Ok(details)
    }
}

/// Partial update for an existing task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    description: Option<Option<String>>,
    task_type: Option<String>,
    priority: Option<String>,
    due_date: Option<Option<DateTime<Utc>>>,
    completed: Option<bool>,
}

impl UpdateTaskRequest {
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

    /// Replaces or clears (`None`) the description.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    /// Changes the task type.
    #[must_use]
    pub fn with_type(mut self, task_type: impl Into<String>) -> Self {
        self.task_type = Some(task_type.into());
        self
    }

    /// Changes the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Replaces or clears (`None`) the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<DateTime<Utc>>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Completes (`true`) or reopens (`false`) the task.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    fn apply_to(self, task: &mut Task, clock: &impl Clock) -> Result<(), TaskDomainError> {
        let Self {
            title,
            description,
            task_type,
            priority,
            due_date,
            completed,
        } = self;

        let mut edited = task.clone();
        if let Some(new_title) = title {
            edited.rename(new_title)?;
        }
        if let Some(raw_type) = task_type {
            edited.set_task_type(TaskType::try_from(raw_type.as_str())?);
        }
        if let Some(raw_priority) = priority {
            edited.set_priority(TaskPriority::try_from(raw_priority.as_str())?);
        }
        if let Some(new_description) = description {
            edited.set_description(new_description);
        }
        if let Some(new_due) = due_date {
            edited.set_due_date(new_due);
        }
        if let Some(done) = completed {
            edited.set_completed(done, clock);
        }

        *task = edited;
        Ok(())
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The task does not exist for the acting user.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl ClassifiedError for TaskServiceError {
    fn kind(&self) -> FailureKind {
        match self {
            Self::Domain(_) => FailureKind::Validation,
            Self::NotFound(_) | Self::Repository(TaskRepositoryError::NotFound(_)) => {
                FailureKind::NotFound
            }
            Self::Repository(_) => FailureKind::Store,
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task management service.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates an open task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] for a blank title or an unknown
    /// type or priority, or [`TaskServiceError::Repository`] when persistence
    /// fails.
    pub async fn create(
        &self,
        owner: UserId,
        request: CreateTaskRequest,
    ) -> TaskServiceResult<Task> {
        let task = Task::new(owner, request.into_details()?, &*self.clock);
        self.repository.store(&task).await?;
        debug!(task_id = %task.id(), %owner, priority = %task.priority(), "task created");
        Ok(task)
    }

    /// Lists the owner's tasks matching `query`, most urgent first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn list(&self, owner: UserId, query: TaskQuery) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.find(owner, &query).await?)
    }

    /// Retrieves one of the owner's tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist or
    /// belongs to another user.
    pub async fn get(&self, owner: UserId, id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(owner, id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }

    /// Applies a partial update. A completion change stamps or clears
    /// `completed_at`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] for a missing or foreign task,
    /// [`TaskServiceError::Domain`] for an invalid field, or
    /// [`TaskServiceError::Repository`] when persistence fails.
    pub async fn update(
        &self,
        owner: UserId,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<Task> {
        let mut task = self.get(owner, id).await?;
        request.apply_to(&mut task, &*self.clock)?;
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Deletes one of the owner's tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when nothing was deleted.
    pub async fn delete(&self, owner: UserId, id: TaskId) -> TaskServiceResult<()> {
        if self.repository.delete(owner, id).await? {
            Ok(())
        } else {
            Err(TaskServiceError::NotFound(id))
        }
    }
}
