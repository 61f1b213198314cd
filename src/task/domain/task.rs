//! Task aggregate root.

use super::{TaskDomainError, TaskId, TaskPriority, TaskType};
use crate::{owner::UserId, text::trimmed};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validated user input describing a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetails {
    title: String,
    description: Option<String>,
    task_type: TaskType,
    priority: TaskPriority,
    due_date: Option<DateTime<Utc>>,
}

impl TaskDetails {
    /// Creates details for an open medium-priority task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] if the title is blank.
    pub fn new(title: impl AsRef<str>) -> Result<Self, TaskDomainError> {
        Ok(Self {
            title: trimmed(title.as_ref()).ok_or(TaskDomainError::EmptyTitle)?,
            description: None,
            task_type: TaskType::default(),
            priority: TaskPriority::default(),
            due_date: None,
        })
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.description = trimmed(description.as_ref());
        self
    }

    /// Sets the task type.
    #[must_use]
    pub const fn with_type(mut self, task_type: TaskType) -> Self {
        self.task_type = task_type;
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn due_at(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    owner: UserId,
    title: String,
    description: Option<String>,
    #[serde(rename = "type")]
    task_type: TaskType,
    priority: TaskPriority,
    due_date: Option<DateTime<Utc>>,
    completed: bool,
    completed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Owning user.
    pub owner: UserId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted task type.
    pub task_type: TaskType,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new open task.
    #[must_use]
    pub fn new(owner: UserId, details: TaskDetails, clock: &impl Clock) -> Self {
        let TaskDetails {
            title,
            description,
            task_type,
            priority,
            due_date,
        } = details;

        Self {
            id: TaskId::new(),
            owner,
            title,
            description,
            task_type,
            priority,
            due_date,
            completed: false,
            completed_at: None,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            owner: data.owner,
            title: data.title,
            description: data.description,
            task_type: data.task_type,
            priority: data.priority,
            due_date: data.due_date,
            completed: data.completed,
            completed_at: data.completed_at,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner(&self) -> UserId {
        self.owner
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the task type.
    #[must_use]
    pub const fn task_type(&self) -> TaskType {
        self.task_type
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns `true` once the task is done.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns when the task was completed. `None` while open.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces the title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] if the title is blank.
    pub fn rename(&mut self, title: impl AsRef<str>) -> Result<(), TaskDomainError> {
        self.title = trimmed(title.as_ref()).ok_or(TaskDomainError::EmptyTitle)?;
        Ok(())
    }

    /// Replaces or clears the description.
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description.as_deref().and_then(trimmed);
    }

    /// Changes the task type.
    pub const fn set_task_type(&mut self, task_type: TaskType) {
        self.task_type = task_type;
    }

    /// Changes the priority.
    pub const fn set_priority(&mut self, priority: TaskPriority) {
        self.priority = priority;
    }

    /// Replaces or clears the due date.
    pub const fn set_due_date(&mut self, due_date: Option<DateTime<Utc>>) {
        self.due_date = due_date;
    }

    /// Marks the task done or reopens it.
    ///
    /// Completing an open task stamps `completed_at`; reopening clears it.
    /// Repeating the current state changes nothing. Returns `true` when the
    /// state flipped.
    pub fn set_completed(&mut self, completed: bool, clock: &impl Clock) -> bool {
        if self.completed == completed {
            return false;
        }
        self.completed = completed;
        self.completed_at = completed.then(|| clock.utc());
        true
    }
}
