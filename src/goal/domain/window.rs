//! Mapping from a goal period to the span of time it is active in.

use super::GoalPeriod;
use crate::calendar::{Calendar, TimeRange};
use chrono::{DateTime, Utc};

/// The span of time in which a goal's deadline must fall for the goal to be
/// active at a reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalWindow {
    /// A fixed half-open calendar span (daily, weekly, monthly).
    Bounded(TimeRange),
    /// Any deadline from the start of the reference day onwards (custom).
    OpenEnded {
        /// Inclusive lower bound.
        from: DateTime<Utc>,
    },
}

impl GoalWindow {
    /// Computes the window for `period` that contains `reference`.
    #[must_use]
    pub fn for_period(period: GoalPeriod, reference: DateTime<Utc>, calendar: &Calendar) -> Self {
        match period {
            GoalPeriod::Daily => Self::Bounded(calendar.day_range(reference)),
            GoalPeriod::Weekly => Self::Bounded(calendar.week_range(reference)),
            GoalPeriod::Monthly => Self::Bounded(calendar.month_range(reference)),
            GoalPeriod::Custom => Self::OpenEnded {
                from: calendar.start_of_day(reference),
            },
        }
    }

    /// Returns `true` when `deadline` falls within the window.
    #[must_use]
    pub fn contains(&self, deadline: DateTime<Utc>) -> bool {
        match self {
            Self::Bounded(range) => range.contains(deadline),
            Self::OpenEnded { from } => deadline >= *from,
        }
    }

    /// Returns the inclusive lower bound.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        match self {
            Self::Bounded(range) => range.start(),
            Self::OpenEnded { from } => *from,
        }
    }

    /// Returns the exclusive upper bound, if the window has one.
    #[must_use]
    pub const fn end(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Bounded(range) => Some(range.end()),
            Self::OpenEnded { .. } => None,
        }
    }
}
