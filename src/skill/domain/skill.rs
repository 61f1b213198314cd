//! Skill aggregate.

use super::{Proficiency, SkillCategory, SkillDomainError, SkillId};
use crate::{owner::UserId, text::trimmed};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validated user input describing a new skill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDetails {
    name: String,
    category: SkillCategory,
    proficiency: Proficiency,
    is_learning: bool,
    notes: Option<String>,
}

impl SkillDetails {
    /// Creates details for a skill with the default category and
    /// proficiency.
    ///
    /// # Errors
    ///
    /// Returns [`SkillDomainError::EmptyName`] if the name is blank.
    pub fn new(name: impl AsRef<str>) -> Result<Self, SkillDomainError> {
        Ok(Self {
            name: trimmed(name.as_ref()).ok_or(SkillDomainError::EmptyName)?,
            category: SkillCategory::default(),
            proficiency: Proficiency::default(),
            is_learning: false,
            notes: None,
        })
    }

    /// Sets the category.
    #[must_use]
    pub const fn with_category(mut self, category: SkillCategory) -> Self {
        self.category = category;
        self
    }

    /// Sets the proficiency.
    #[must_use]
    pub const fn with_proficiency(mut self, proficiency: Proficiency) -> Self {
        self.proficiency = proficiency;
        self
    }

    /// Marks whether the skill is being actively learned.
    #[must_use]
    pub const fn learning(mut self, is_learning: bool) -> Self {
        self.is_learning = is_learning;
        self
    }

    /// Sets free-form notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl AsRef<str>) -> Self {
        self.notes = trimmed(notes.as_ref());
        self
    }
}

/// Skill aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    id: SkillId,
    owner: UserId,
    name: String,
    category: SkillCategory,
    proficiency: Proficiency,
    is_learning: bool,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted skill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedSkillData {
    /// Persisted skill identifier.
    pub id: SkillId,
    /// Owning user.
    pub owner: UserId,
    /// Persisted name.
    pub name: String,
    /// Persisted category.
    pub category: SkillCategory,
    /// Persisted proficiency.
    pub proficiency: Proficiency,
    /// Persisted learning flag.
    pub is_learning: bool,
    /// Persisted notes, if any.
    pub notes: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Skill {
    /// Creates a new skill.
    #[must_use]
    pub fn new(owner: UserId, details: SkillDetails, clock: &impl Clock) -> Self {
        let SkillDetails {
            name,
            category,
            proficiency,
            is_learning,
            notes,
        } = details;

        Self {
            id: SkillId::new(),
            owner,
            name,
            category,
            proficiency,
            is_learning,
            notes,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a skill from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedSkillData) -> Self {
        Self {
            id: data.id,
            owner: data.owner,
            name: data.name,
            category: data.category,
            proficiency: data.proficiency,
            is_learning: data.is_learning,
            notes: data.notes,
            created_at: data.created_at,
        }
    }

    /// Returns the skill identifier.
    #[must_use]
    pub const fn id(&self) -> SkillId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner(&self) -> UserId {
        self.owner
    }

    /// Returns the skill name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> SkillCategory {
        self.category
    }

    /// Returns the proficiency.
    #[must_use]
    pub const fn proficiency(&self) -> Proficiency {
        self.proficiency
    }

    /// Returns whether the skill is being actively learned.
    #[must_use]
    pub const fn is_learning(&self) -> bool {
        self.is_learning
    }

    /// Returns the notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns when the skill was recorded.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Renames the skill.
    ///
    /// # Errors
    ///
    /// Returns [`SkillDomainError::EmptyName`] if the name is blank.
    pub fn rename(&mut self, name: impl AsRef<str>) -> Result<(), SkillDomainError> {
        self.name = trimmed(name.as_ref()).ok_or(SkillDomainError::EmptyName)?;
        Ok(())
    }

    /// Moves the skill to another category.
    pub const fn set_category(&mut self, category: SkillCategory) {
        self.category = category;
    }

    /// Records a new proficiency level.
    pub const fn set_proficiency(&mut self, proficiency: Proficiency) {
        self.proficiency = proficiency;
    }

    /// Starts or stops actively learning the skill.
    pub const fn set_learning(&mut self, is_learning: bool) {
        self.is_learning = is_learning;
    }

    /// Replaces or clears the notes.
    pub fn set_notes(&mut self, notes: Option<String>) {
        self.notes = notes.as_deref().and_then(trimmed);
    }
}
