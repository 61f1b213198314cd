//! Task listing filters.

use super::{Task, TaskPriority};

/// Optional filters for listing tasks. The default matches every task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskQuery {
    completed: Option<bool>,
    priority: Option<TaskPriority>,
}

impl TaskQuery {
    /// Creates a query matching every task.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            completed: None,
            priority: None,
        }
    }

    /// Matches open tasks only.
    #[must_use]
    pub const fn open() -> Self {
        Self::new().with_completed(false)
    }

    /// Restricts to tasks whose completion flag equals `completed`.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Restricts to one priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Returns the completion filter, if any.
    #[must_use]
    pub const fn completed(&self) -> Option<bool> {
        self.completed
    }

    /// Returns the priority filter, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<TaskPriority> {
        self.priority
    }

    /// Returns `true` when `task` passes every filter.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.completed.is_none_or(|wanted| task.is_completed() == wanted)
            && self.priority.is_none_or(|wanted| task.priority() == wanted)
    }
}
