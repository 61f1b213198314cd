//! In-memory repository for tasks.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::owner::UserId;
use crate::task::{
    domain::{Task, TaskId, TaskQuery, by_urgency},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, HashMap<TaskId, Task>>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, HashMap<TaskId, Task>>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.write()?;
        if tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.write()?;
        let stored = tasks
            .get_mut(&task.id())
            .filter(|stored| stored.owner() == task.owner())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        *stored = task.clone();
        Ok(())
    }

    async fn find_by_id(&self, owner: UserId, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.read()?;
        Ok(tasks.get(&id).filter(|task| task.owner() == owner).cloned())
    }

    async fn find(&self, owner: UserId, query: &TaskQuery) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.read()?;
        let mut found: Vec<Task> = tasks
            .values()
            .filter(|task| task.owner() == owner && query.matches(task))
            .cloned()
            .collect();
        found.sort_by(by_urgency);
        Ok(found)
    }

    async fn delete(&self, owner: UserId, id: TaskId) -> TaskRepositoryResult<bool> {
        let mut tasks = self.write()?;
        let is_owned = tasks.get(&id).is_some_and(|task| task.owner() == owner);
        if is_owned {
            tasks.remove(&id);
        }
        Ok(is_owned)
    }
}
