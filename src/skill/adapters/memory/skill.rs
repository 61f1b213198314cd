//! In-memory repository for skills.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::owner::UserId;
use crate::skill::{
    domain::{Skill, SkillId},
    ports::{SkillRepository, SkillRepositoryError, SkillRepositoryResult},
};

/// Thread-safe in-memory skill repository.
#[derive(Debug, Clone, Default)]
pub struct InMemorySkillRepository {
    state: Arc<RwLock<HashMap<SkillId, Skill>>>,
}

impl InMemorySkillRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> SkillRepositoryResult<RwLockReadGuard<'_, HashMap<SkillId, Skill>>> {
        self.state.read().map_err(|err| {
            SkillRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> SkillRepositoryResult<RwLockWriteGuard<'_, HashMap<SkillId, Skill>>> {
        self.state.write().map_err(|err| {
            SkillRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl SkillRepository for InMemorySkillRepository {
    async fn store(&self, skill: &Skill) -> SkillRepositoryResult<()> {
        let mut skills = self.write()?;
        if skills.contains_key(&skill.id()) {
            return Err(SkillRepositoryError::DuplicateSkill(skill.id()));
        }
        skills.insert(skill.id(), skill.clone());
        Ok(())
    }

    async fn update(&self, skill: &Skill) -> SkillRepositoryResult<()> {
        let mut skills = self.write()?;
        let stored = skills
            .get_mut(&skill.id())
            .filter(|stored| stored.owner() == skill.owner())
            .ok_or(SkillRepositoryError::NotFound(skill.id()))?;
        *stored = skill.clone();
        Ok(())
    }

    async fn find_by_id(&self, owner: UserId, id: SkillId) -> SkillRepositoryResult<Option<Skill>> {
        let skills = self.read()?;
        Ok(skills.get(&id).filter(|skill| skill.owner() == owner).cloned())
    }

    async fn list(&self, owner: UserId) -> SkillRepositoryResult<Vec<Skill>> {
        let skills = self.read()?;
        let mut owned: Vec<Skill> = skills
            .values()
            .filter(|skill| skill.owner() == owner)
            .cloned()
            .collect();
        owned.sort_by(|left, right| right.created_at().cmp(&left.created_at()));
        Ok(owned)
    }

    async fn delete(&self, owner: UserId, id: SkillId) -> SkillRepositoryResult<bool> {
        let mut skills = self.write()?;
        let is_owned = skills.get(&id).is_some_and(|skill| skill.owner() == owner);
        if is_owned {
            skills.remove(&id);
        }
        Ok(is_owned)
    }
}
