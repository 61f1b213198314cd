//! Repository port for skills.

use crate::owner::UserId;
use crate::skill::domain::{Skill, SkillId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for skill repository operations.
pub type SkillRepositoryResult<T> = Result<T, SkillRepositoryError>;

/// Skill persistence contract, scoped to an owner.
#[async_trait]
pub trait SkillRepository: Send + Sync {
    /// Stores a new skill.
    ///
    /// # Errors
    ///
    /// Returns [`SkillRepositoryError::DuplicateSkill`] when the identifier
    /// already exists.
    async fn store(&self, skill: &Skill) -> SkillRepositoryResult<()>;

    /// Persists every field of an existing skill.
    ///
    /// # Errors
    ///
    /// Returns [`SkillRepositoryError::NotFound`] when the skill does not
    /// exist for its owner.
    async fn update(&self, skill: &Skill) -> SkillRepositoryResult<()>;

    /// Finds one of the owner's skills by identifier.
    async fn find_by_id(&self, owner: UserId, id: SkillId) -> SkillRepositoryResult<Option<Skill>>;

    /// Lists the owner's skills, newest first.
    async fn list(&self, owner: UserId) -> SkillRepositoryResult<Vec<Skill>>;

    /// Deletes one of the owner's skills, returning `false` when nothing was
    /// deleted.
    async fn delete(&self, owner: UserId, id: SkillId) -> SkillRepositoryResult<bool>;
}

/// Errors returned by skill repository implementations.
#[derive(Debug, Clone, Error)]
pub enum SkillRepositoryError {
    /// A skill with the same identifier already exists.
    #[error("duplicate skill identifier: {0}")]
    DuplicateSkill(SkillId),

    /// The skill was not found.
    #[error("skill not found: {0}")]
    NotFound(SkillId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SkillRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
