//! Goal aggregate root and the status rules that drive it.

use super::{GoalDomainError, GoalId, GoalPeriod, GoalStatus, GoalTarget, GoalType, GoalWindow};
use crate::{calendar::Calendar, owner::UserId, text::trimmed};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validated user input describing a new goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalDefinition {
    title: String,
    description: Option<String>,
    goal_type: GoalType,
    target: GoalTarget,
    period: GoalPeriod,
    deadline: DateTime<Utc>,
}

impl GoalDefinition {
    /// Creates a definition with all required fields.
    ///
    /// For periodic goals the deadline is the end of the goal's active window.
    ///
    /// # Errors
    ///
    /// Returns [`GoalDomainError::EmptyTitle`] if the title is blank.
    pub fn new(
        title: impl AsRef<str>,
        goal_type: GoalType,
        target: GoalTarget,
        period: GoalPeriod,
        deadline: DateTime<Utc>,
    ) -> Result<Self, GoalDomainError> {
        Ok(Self {
            title: trimmed(title.as_ref()).ok_or(GoalDomainError::EmptyTitle)?,
            description: None,
            goal_type,
            target,
            period,
            deadline,
        })
    }

    /// Sets the optional description.
    #[must_use]
    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.description = trimmed(description.as_ref());
        self
    }
}

/// Goal aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    id: GoalId,
    owner: UserId,
    title: String,
    description: Option<String>,
    #[serde(rename = "type")]
    goal_type: GoalType,
    target: GoalTarget,
    current: u32,
    period: GoalPeriod,
    deadline: DateTime<Utc>,
    status: GoalStatus,
    completed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted goal aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedGoalData {
    /// Persisted goal identifier.
    pub id: GoalId,
    /// Owning user.
    pub owner: UserId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted goal type.
    pub goal_type: GoalType,
    /// Persisted target.
    pub target: GoalTarget,
    /// Persisted progress counter.
    pub current: u32,
    /// Persisted period.
    pub period: GoalPeriod,
    /// Persisted deadline.
    pub deadline: DateTime<Utc>,
    /// Persisted status.
    pub status: GoalStatus,
    /// Persisted completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Creates a new pending goal with no progress.
    #[must_use]
    pub fn new(owner: UserId, definition: GoalDefinition, clock: &impl Clock) -> Self {
        let GoalDefinition {
            title,
            description,
            goal_type,
            target,
            period,
            deadline,
        } = definition;

        Self {
            id: GoalId::new(),
            owner,
            title,
            description,
            goal_type,
            target,
            current: 0,
            period,
            deadline,
            status: GoalStatus::Pending,
            completed_at: None,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a goal from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedGoalData) -> Self {
        Self {
            id: data.id,
            owner: data.owner,
            title: data.title,
            description: data.description,
            goal_type: data.goal_type,
            target: data.target,
            current: data.current,
            period: data.period,
            deadline: data.deadline,
            status: data.status,
            completed_at: data.completed_at,
            created_at: data.created_at,
        }
    }

    /// Returns the goal identifier.
    #[must_use]
    pub const fn id(&self) -> GoalId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner(&self) -> UserId {
        self.owner
    }

    /// Returns the goal title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns what the goal measures.
    #[must_use]
    pub const fn goal_type(&self) -> GoalType {
        self.goal_type
    }

    /// Returns the target.
    #[must_use]
    pub const fn target(&self) -> GoalTarget {
        self.target
    }

    /// Returns the progress counter.
    #[must_use]
    pub const fn current(&self) -> u32 {
        self.current
    }

    /// Returns the period.
    #[must_use]
    pub const fn period(&self) -> GoalPeriod {
        self.period
    }

    /// Returns the deadline, which for periodic goals is the window end.
    #[must_use]
    pub const fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    /// Returns the status as last evaluated.
    #[must_use]
    pub const fn status(&self) -> GoalStatus {
        self.status
    }

    /// Returns when the goal was first observed complete.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns `true` when the stored status is [`GoalStatus::Completed`].
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == GoalStatus::Completed
    }

    /// Returns progress as a whole percentage, rounded half up and capped at
    /// 100.
    #[must_use]
    pub fn progress_percentage(&self) -> u8 {
        let current = u64::from(self.current);
        let target = u64::from(self.target.value());
        let rounded = current
            .saturating_mul(200)
            .saturating_add(target)
            .checked_div(target.saturating_mul(2))
            .unwrap_or(0);
        u8::try_from(rounded.min(100)).unwrap_or(100)
    }

    /// Re-derives status from the progress counter.
    ///
    /// Reaching the target completes the goal and stamps `completed_at` the
    /// first time only. Partial progress marks it in progress. With no
    /// progress the status is left alone. Returns `true` when anything
    /// changed.
    pub fn evaluate_status(&mut self, clock: &impl Clock) -> bool {
        self.evaluate_status_at(clock.utc())
    }

    /// Re-derives status as [`Self::evaluate_status`] does, stamping a first
    /// completion at `now`.
    pub fn evaluate_status_at(&mut self, now: DateTime<Utc>) -> bool {
        let before = (self.status, self.completed_at);
        if self.current >= self.target.value() {
            self.status = GoalStatus::Completed;
            if self.completed_at.is_none() {
                self.completed_at = Some(now);
            }
        } else if self.current > 0 {
            self.status = GoalStatus::InProgress;
        }
        before != (self.status, self.completed_at)
    }

    /// Returns `true` when an application recorded at `reference` should
    /// advance this goal.
    #[must_use]
    pub fn is_eligible_for_increment(&self, reference: DateTime<Utc>, calendar: &Calendar) -> bool {
        self.goal_type == GoalType::JobApplication
            && !self.is_completed()
            && GoalWindow::for_period(self.period, reference, calendar).contains(self.deadline)
    }

    /// Replaces the title.
    ///
    /// # Errors
    ///
    /// Returns [`GoalDomainError::EmptyTitle`] if the title is blank.
    pub fn rename(&mut self, title: impl AsRef<str>) -> Result<(), GoalDomainError> {
        self.title = trimmed(title.as_ref()).ok_or(GoalDomainError::EmptyTitle)?;
        Ok(())
    }

    /// Replaces or clears the description.
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description.as_deref().and_then(trimmed);
    }

    /// Changes what the goal measures.
    pub const fn set_goal_type(&mut self, goal_type: GoalType) {
        self.goal_type = goal_type;
    }

    /// Changes the target. Call [`Self::evaluate_status`] afterwards.
    pub const fn set_target(&mut self, target: GoalTarget) {
        self.target = target;
    }

    /// Overwrites the progress counter. Call [`Self::evaluate_status`]
    /// afterwards.
    pub const fn set_current(&mut self, current: u32) {
        self.current = current;
    }

    /// Changes the period.
    pub const fn set_period(&mut self, period: GoalPeriod) {
        self.period = period;
    }

    /// Changes the deadline.
    pub const fn set_deadline(&mut self, deadline: DateTime<Utc>) {
        self.deadline = deadline;
    }

    /// Overrides the status directly.
    pub const fn set_status(&mut self, status: GoalStatus) {
        self.status = status;
    }

    /// Adds `delta` units of progress, saturating at `u32::MAX`.
    pub const fn add_progress(&mut self, delta: u32) {
        self.current = self.current.saturating_add(delta);
    }
}
