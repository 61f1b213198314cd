//! Fan-out of a recorded job application into goal progress.

use crate::calendar::Calendar;
use crate::goal::{
    domain::{GoalPeriod, GoalQuery, GoalStatus, GoalType, GoalWindow},
    ports::{GoalRepository, GoalRepositoryResult},
};
use crate::owner::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use tracing::debug;

/// Outcome of one fan-out pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FanOutReport {
    /// Goals whose progress counter was advanced.
    pub incremented: u64,
    /// Goals that completed as a result of re-evaluation.
    pub completed: u64,
}

/// Goal progress engine driven by job application events.
#[derive(Clone)]
pub struct GoalProgressService<R, C>
where
    R: GoalRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    calendar: Calendar,
}

impl<R, C> GoalProgressService<R, C>
where
    R: GoalRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new goal progress service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>, calendar: Calendar) -> Self {
        Self {
            repository,
            clock,
            calendar,
        }
    }

    /// Returns the calendar used to compute goal windows.
    #[must_use]
    pub const fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Advances every open job-application goal whose window contains
    /// `reference`, then re-evaluates the status of the owner's open
    /// job-application goals.
    ///
    /// Each period is incremented with one atomic store operation, so a goal
    /// gains exactly one unit per call. The store re-derives status from its
    /// own counter, so an overlapping fan-out never reopens a completed goal.
    ///
    /// # Errors
    ///
    /// Returns the first repository error encountered. Increments applied
    /// before the failure are not rolled back.
    pub async fn on_application_recorded(
        &self,
        owner: UserId,
        reference: DateTime<Utc>,
    ) -> GoalRepositoryResult<FanOutReport> {
        let mut report = FanOutReport::default();

        for period in GoalPeriod::ALL {
            let window = GoalWindow::for_period(period, reference, &self.calendar);
            let query = GoalQuery::eligible_for_increment(period, &window);
            let advanced = self.repository.increment_progress(owner, &query, 1).await?;
            if advanced > 0 {
                debug!(%owner, %period, advanced, "advanced goal progress");
            }
            report.incremented = report.incremented.saturating_add(advanced);
        }

        let open_goals = GoalQuery::new()
            .of_type(GoalType::JobApplication)
            .excluding_status(GoalStatus::Completed);
        let now = self.clock.utc();
        for mut goal in self.repository.find(owner, &open_goals).await? {
            if !goal.evaluate_status_at(now) {
                continue;
            }
            // The copy may be stale; the store re-evaluates its own counter.
            let Some(refreshed) = self.repository.refresh_status(owner, goal.id(), now).await?
            else {
                continue;
            };
            if refreshed.is_completed() {
                debug!(goal_id = %refreshed.id(), %owner, "goal completed");
                report.completed = report.completed.saturating_add(1);
            }
        }

        Ok(report)
    }
}
