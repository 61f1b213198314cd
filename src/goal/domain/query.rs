//! Filter value object for goal lookups, counts and increments.

use super::{Goal, GoalPeriod, GoalStatus, GoalType, GoalWindow};
use crate::calendar::TimeRange;
use chrono::{DateTime, Utc};

/// Status predicate applied by a [`GoalQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    /// Status must equal the value.
    Is(GoalStatus),
    /// Status must differ from the value.
    IsNot(GoalStatus),
}

impl StatusFilter {
    fn matches(self, status: GoalStatus) -> bool {
        match self {
            Self::Is(expected) => status == expected,
            Self::IsNot(excluded) => status != excluded,
        }
    }
}

/// Conjunction of optional predicates over a user's goals.
///
/// The owner is not part of the query; every repository call takes it
/// separately so no lookup can escape the caller's partition.
/// [`GoalQuery::matches`] is the reference semantics adapters must honour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoalQuery {
    goal_type: Option<GoalType>,
    period: Option<GoalPeriod>,
    status: Option<StatusFilter>,
    deadline_from: Option<DateTime<Utc>>,
    deadline_until: Option<DateTime<Utc>>,
}

impl GoalQuery {
    /// Creates a query matching every goal.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            goal_type: None,
            period: None,
            status: None,
            deadline_from: None,
            deadline_until: None,
        }
    }

    /// Goals an application recorded now should advance for `window`:
    /// job-application goals of `period`, not completed, with a deadline in
    /// the window.
    #[must_use]
    pub const fn eligible_for_increment(period: GoalPeriod, window: &GoalWindow) -> Self {
        Self::new()
            .of_type(GoalType::JobApplication)
            .in_period(period)
            .excluding_status(GoalStatus::Completed)
            .deadline_within(window)
    }

    /// Restricts to one goal type.
    #[must_use]
    pub const fn of_type(mut self, goal_type: GoalType) -> Self {
        self.goal_type = Some(goal_type);
        self
    }

    /// Restricts to one period.
    #[must_use]
    pub const fn in_period(mut self, period: GoalPeriod) -> Self {
        self.period = Some(period);
        self
    }

    /// Restricts to goals with exactly this status.
    #[must_use]
    pub const fn with_status(mut self, status: GoalStatus) -> Self {
        self.status = Some(StatusFilter::Is(status));
        self
    }

    /// Restricts to goals whose status differs from this one.
    #[must_use]
    pub const fn excluding_status(mut self, status: GoalStatus) -> Self {
        self.status = Some(StatusFilter::IsNot(status));
        self
    }

    /// Restricts deadlines to `[start, end)`.
    #[must_use]
    pub const fn deadline_in(mut self, range: TimeRange) -> Self {
        self.deadline_from = Some(range.start());
        self.deadline_until = Some(range.end());
        self
    }

    /// Restricts deadlines to the given goal window.
    #[must_use]
    pub const fn deadline_within(mut self, window: &GoalWindow) -> Self {
        self.deadline_from = Some(window.start());
        self.deadline_until = window.end();
        self
    }

    /// Returns the goal type predicate.
    #[must_use]
    pub const fn goal_type(&self) -> Option<GoalType> {
        self.goal_type
    }

    /// Returns the period predicate.
    #[must_use]
    pub const fn period(&self) -> Option<GoalPeriod> {
        self.period
    }

    /// Returns the status predicate.
    #[must_use]
    pub const fn status(&self) -> Option<StatusFilter> {
        self.status
    }

    /// Returns the inclusive deadline lower bound.
    #[must_use]
    pub const fn deadline_from(&self) -> Option<DateTime<Utc>> {
        self.deadline_from
    }

    /// Returns the exclusive deadline upper bound.
    #[must_use]
    pub const fn deadline_until(&self) -> Option<DateTime<Utc>> {
        self.deadline_until
    }

    /// Returns `true` when `goal` satisfies every predicate.
    #[must_use]
    pub fn matches(&self, goal: &Goal) -> bool {
        self.goal_type.is_none_or(|expected| goal.goal_type() == expected)
            && self.period.is_none_or(|expected| goal.period() == expected)
            && self.status.is_none_or(|filter| filter.matches(goal.status()))
            && self.deadline_from.is_none_or(|from| goal.deadline() >= from)
            && self.deadline_until.is_none_or(|until| goal.deadline() < until)
    }
}
