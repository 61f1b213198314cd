//! In-memory repository for goals.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::goal::{
    domain::{Goal, GoalId, GoalQuery},
    ports::{GoalRepository, GoalRepositoryError, GoalRepositoryResult},
};
use crate::owner::UserId;

/// Thread-safe in-memory goal repository.
///
/// Increments and status refreshes each hold the write lock for the whole
/// operation, so every call is a single atomic step with respect to every
/// other call.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGoalRepository {
    state: Arc<RwLock<HashMap<GoalId, Goal>>>,
}

impl InMemoryGoalRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> GoalRepositoryResult<RwLockReadGuard<'_, HashMap<GoalId, Goal>>> {
        self.state.read().map_err(|err| {
            GoalRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> GoalRepositoryResult<RwLockWriteGuard<'_, HashMap<GoalId, Goal>>> {
        self.state.write().map_err(|err| {
            GoalRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

/// Looks up a goal for mutation, hiding goals owned by someone else.
fn owned_goal_mut<'a>(
    goals: &'a mut HashMap<GoalId, Goal>,
    goal: &Goal,
) -> GoalRepositoryResult<&'a mut Goal> {
    goals
        .get_mut(&goal.id())
        .filter(|stored| stored.owner() == goal.owner())
        .ok_or(GoalRepositoryError::NotFound(goal.id()))
}

#[async_trait]
impl GoalRepository for InMemoryGoalRepository {
    async fn store(&self, goal: &Goal) -> GoalRepositoryResult<()> {
        let mut goals = self.write()?;
        if goals.contains_key(&goal.id()) {
            return Err(GoalRepositoryError::DuplicateGoal(goal.id()));
        }
        goals.insert(goal.id(), goal.clone());
        Ok(())
    }

    async fn update(&self, goal: &Goal) -> GoalRepositoryResult<()> {
        let mut goals = self.write()?;
        let stored = owned_goal_mut(&mut goals, goal)?;
        *stored = goal.clone();
        Ok(())
    }

    async fn refresh_status(
        &self,
        owner: UserId,
        id: GoalId,
        now: DateTime<Utc>,
    ) -> GoalRepositoryResult<Option<Goal>> {
        let mut goals = self.write()?;
        let Some(stored) = goals
            .get_mut(&id)
            .filter(|goal| goal.owner() == owner && !goal.is_completed())
        else {
            return Ok(None);
        };
        Ok(stored.evaluate_status_at(now).then(|| stored.clone()))
    }

    async fn find_by_id(&self, owner: UserId, id: GoalId) -> GoalRepositoryResult<Option<Goal>> {
        let goals = self.read()?;
        Ok(goals
            .get(&id)
            .filter(|goal| goal.owner() == owner)
            .cloned())
    }

    async fn find(&self, owner: UserId, query: &GoalQuery) -> GoalRepositoryResult<Vec<Goal>> {
        let goals = self.read()?;
        let mut found: Vec<Goal> = goals
            .values()
            .filter(|goal| goal.owner() == owner && query.matches(goal))
            .cloned()
            .collect();
        found.sort_by(|left, right| right.created_at().cmp(&left.created_at()));
        Ok(found)
    }

    async fn count(&self, owner: UserId, query: &GoalQuery) -> GoalRepositoryResult<u64> {
        let goals = self.read()?;
        let matching = goals
            .values()
            .filter(|goal| goal.owner() == owner && query.matches(goal))
            .count();
        u64::try_from(matching).map_err(GoalRepositoryError::persistence)
    }

    async fn increment_progress(
        &self,
        owner: UserId,
        query: &GoalQuery,
        delta: u32,
    ) -> GoalRepositoryResult<u64> {
        let mut goals = self.write()?;
        let mut advanced = 0_u64;
        for goal in goals
            .values_mut()
            .filter(|goal| goal.owner() == owner && query.matches(goal))
        {
            goal.add_progress(delta);
            advanced = advanced.saturating_add(1);
        }
        Ok(advanced)
    }

    async fn delete(&self, owner: UserId, id: GoalId) -> GoalRepositoryResult<bool> {
        let mut goals = self.write()?;
        let is_owned = goals.get(&id).is_some_and(|goal| goal.owner() == owner);
        if is_owned {
            goals.remove(&id);
        }
        Ok(is_owned)
    }
}
