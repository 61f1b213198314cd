//! Skill CRUD orchestration.

use crate::error::{ClassifiedError, FailureKind};
use crate::owner::UserId;
use crate::skill::{
    domain::{Proficiency, Skill, SkillCategory, SkillDetails, SkillDomainError, SkillId},
    ports::{SkillRepository, SkillRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Request to add a skill. Enumerations arrive as canonical strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSkillRequest {
    name: String,
    category: Option<String>,
    proficiency: Option<String>,
    is_learning: bool,
    notes: Option<String>,
}

impl CreateSkillRequest {
    /// Creates a request for a skill with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: None,
            proficiency: None,
            is_learning: false,
            notes: None,
        }
    }

    /// Sets the category. Defaults to `other`.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the proficiency. Defaults to `Beginner`.
    #[must_use]
    pub fn with_proficiency(mut self, proficiency: impl Into<String>) -> Self {
        self.proficiency = Some(proficiency.into());
        self
    }

    /// Marks the skill as being actively learned.
    #[must_use]
    pub const fn learning(mut self, is_learning: bool) -> Self {
        self.is_learning = is_learning;
        self
    }

    /// Sets free-form notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    fn into_details(self) -> Result<SkillDetails, SkillDomainError> {
        let Self {
            name,
            category,
            proficiency,
            is_learning,
            notes,
        } = self;

        let mut details = SkillDetails::new(name)?.learning(is_learning);
        if let Some(raw_category) = category {
            details = details.with_category(SkillCategory::try_from(raw_category.as_str())?);
        }
        if let Some(raw_level) = proficiency {
            details = details.with_proficiency(Proficiency::try_from(raw_level.as_str())?);
        }
        if let Some(text) = notes {
            details = details.with_notes(text);
        }
        Ok(details)
    }
}

/// Partial update for an existing skill.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateSkillRequest {
    name: Option<String>,
    category: Option<String>,
    proficiency: Option<String>,
    is_learning: Option<bool>,
    notes: Option<Option<String>>,
}

impl UpdateSkillRequest {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renames the skill.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Moves the skill to another category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Records a new proficiency level.
    #[must_use]
    pub fn with_proficiency(mut self, proficiency: impl Into<String>) -> Self {
        self.proficiency = Some(proficiency.into());
        self
    }

    /// Starts or stops actively learning the skill.
    #[must_use]
    pub const fn learning(mut self, is_learning: bool) -> Self {
        self.is_learning = Some(is_learning);
        self
    }

    /// Replaces or clears (`None`) the notes.
    #[must_use]
    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = Some(notes);
        self
    }

    fn apply_to(self, skill: &mut Skill) -> Result<(), SkillDomainError> {
        let Self {
            name,
            category,
            proficiency,
            is_learning,
            notes,
        } = self;

        let mut edited = skill.clone();
        if let Some(new_name) = name {
            edited.rename(new_name)?;
        }
        if let Some(raw_category) = category {
            edited.set_category(SkillCategory::try_from(raw_category.as_str())?);
        }
        if let Some(raw_level) = proficiency {
            edited.set_proficiency(Proficiency::try_from(raw_level.as_str())?);
        }
        if let Some(flag) = is_learning {
            edited.set_learning(flag);
        }
        if let Some(new_notes) = notes {
            edited.set_notes(new_notes);
        }

        *skill = edited;
        Ok(())
    }
}

/// Service-level errors for skill operations.
#[derive(Debug, Error)]
pub enum SkillServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] SkillDomainError),
    /// The skill does not exist for the acting user.
    #[error("skill not found: {0}")]
    NotFound(SkillId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] SkillRepositoryError),
}

impl ClassifiedError for SkillServiceError {
    fn kind(&self) -> FailureKind {
        match self {
            Self::Domain(_) => FailureKind::Validation,
            Self::NotFound(_) | Self::Repository(SkillRepositoryError::NotFound(_)) => {
                FailureKind::NotFound
            }
            Self::Repository(_) => FailureKind::Store,
        }
    }
}

/// Result type for skill service operations.
pub type SkillServiceResult<T> = Result<T, SkillServiceError>;

/// Skill management service.
#[derive(Clone)]
pub struct SkillService<R, C>
where
    R: SkillRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> SkillService<R, C>
where
    R: SkillRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new skill service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Adds a skill.
    ///
    /// # Errors
    ///
    /// Returns [`SkillServiceError::Domain`] for a blank name or unknown
    /// category or proficiency, or [`SkillServiceError::Repository`] when
    /// persistence fails.
    pub async fn create(
        &self,
        owner: UserId,
        request: CreateSkillRequest,
    ) -> SkillServiceResult<Skill> {
        let skill = Skill::new(owner, request.into_details()?, &*self.clock);
        self.repository.store(&skill).await?;
        debug!(skill_id = %skill.id(), %owner, category = %skill.category(), "skill added");
        Ok(skill)
    }

    /// Lists the owner's skills, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`SkillServiceError::Repository`] when the lookup fails.
    pub async fn list(&self, owner: UserId) -> SkillServiceResult<Vec<Skill>> {
        Ok(self.repository.list(owner).await?)
    }

    /// Retrieves one of the owner's skills.
    ///
    /// # Errors
    ///
    /// Returns [`SkillServiceError::NotFound`] when the skill does not exist
    /// or belongs to another user.
    pub async fn get(&self, owner: UserId, id: SkillId) -> SkillServiceResult<Skill> {
        self.repository
            .find_by_id(owner, id)
            .await?
            .ok_or(SkillServiceError::NotFound(id))
    }

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`SkillServiceError::NotFound`] for a missing or foreign
    /// skill, [`SkillServiceError::Domain`] for an invalid field, or
    /// [`SkillServiceError::Repository`] when persistence fails.
    pub async fn update(
        &self,
        owner: UserId,
        id: SkillId,
        request: UpdateSkillRequest,
    ) -> SkillServiceResult<Skill> {
        let mut skill = self.get(owner, id).await?;
        request.apply_to(&mut skill)?;
        self.repository.update(&skill).await?;
        Ok(skill)
    }

    /// Deletes one of the owner's skills.
    ///
    /// # Errors
    ///
    /// Returns [`SkillServiceError::NotFound`] when nothing was deleted.
    pub async fn delete(&self, owner: UserId, id: SkillId) -> SkillServiceResult<()> {
        if self.repository.delete(owner, id).await? {
            Ok(())
        } else {
            Err(SkillServiceError::NotFound(id))
        }
    }
}
