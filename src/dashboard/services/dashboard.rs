//! Store-backed dashboard aggregation.

use crate::application::ports::{ApplicationRepository, ApplicationRepositoryError};
use crate::calendar::Calendar;
use crate::config::DEFAULT_PROGRESS_WINDOW_DAYS;
use crate::dashboard::domain::{
    DailyApplicationCount, DashboardStats, overall_progress, remaining_today, select_next_task,
    streak_length, today_target,
};
use crate::error::{ClassifiedError, FailureKind};
use crate::goal::{
    domain::{GoalPeriod, GoalQuery, GoalStatus, GoalType},
    ports::{GoalRepository, GoalRepositoryError},
};
use crate::owner::UserId;
use crate::task::{
    domain::TaskQuery,
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading dashboard inputs.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Goal lookup failed.
    #[error(transparent)]
    Goals(#[from] GoalRepositoryError),
    /// Application lookup failed.
    #[error(transparent)]
    Applications(#[from] ApplicationRepositoryError),
    /// Task lookup failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
}

impl ClassifiedError for DashboardError {
    fn kind(&self) -> FailureKind {
        FailureKind::Store
    }
}

/// Result type for dashboard operations.
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Read-only aggregator over goals, applications and tasks.
#[derive(Clone)]
pub struct DashboardService<G, A, T, C>
where
    G: GoalRepository,
    A: ApplicationRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    goals: Arc<G>,
    applications: Arc<A>,
    tasks: Arc<T>,
    clock: Arc<C>,
    calendar: Calendar,
    default_window_days: u32,
}

impl<G, A, T, C> DashboardService<G, A, T, C>
where
    G: GoalRepository,
    A: ApplicationRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a dashboard service that reads days in `calendar`.
    #[must_use]
    pub const fn new(
        goals: Arc<G>,
        applications: Arc<A>,
        tasks: Arc<T>,
        clock: Arc<C>,
        calendar: Calendar,
    ) -> Self {
        Self {
            goals,
            applications,
            tasks,
            clock,
            calendar,
            default_window_days: DEFAULT_PROGRESS_WINDOW_DAYS,
        }
    }

    /// Overrides how many days [`Self::progress_over_time`] looks back when
    /// the caller does not say.
    #[must_use]
    pub const fn with_default_window_days(mut self, days: u32) -> Self {
        self.default_window_days = days;
        self
    }

    /// Builds the snapshot for `owner` at the clock's current instant.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError`] when any underlying read fails.
    pub async fn stats(&self, owner: UserId) -> DashboardResult<DashboardStats> {
        let now = self.clock.utc();
        let today = self.calendar.day_range(now);

        let total_jobs_applied = self.applications.count_all(owner).await?;
        let today_achieved = self
            .applications
            .count_applied_between(owner, today)
            .await?;
        let applications_by_status = self.applications.count_by_status(owner).await?;

        let daily_goals = self
            .goals
            .find(
                owner,
                &GoalQuery::new()
                    .of_type(GoalType::JobApplication)
                    .in_period(GoalPeriod::Daily),
            )
            .await?;
        let open_goals = self
            .goals
            .find(owner, &GoalQuery::new().excluding_status(GoalStatus::Completed))
            .await?;
        let completed_goals_count = self
            .goals
            .count(owner, &GoalQuery::new().with_status(GoalStatus::Completed))
            .await?;

        let open_tasks = self.tasks.find(owner, &TaskQuery::open()).await?;

        let target = today_target(&daily_goals, &today);
        let stats = DashboardStats {
            total_jobs_applied,
            today_target: target,
            today_achieved,
            remaining_today: remaining_today(target, today_achieved),
            streak: streak_length(&daily_goals, self.calendar.local_date(now), &self.calendar),
            overall_progress: overall_progress(&open_goals),
            active_goals_count: u64::try_from(open_goals.len()).unwrap_or(u64::MAX),
            completed_goals_count,
            next_task: select_next_task(&open_tasks).cloned(),
            applications_by_status,
        };
        debug!(
            %owner,
            streak = stats.streak,
            remaining_today = stats.remaining_today,
            "dashboard snapshot built"
        );
        Ok(stats)
    }

    /// Returns per-day application counts from `days` ago until now,
    /// ascending by local date. Days without applications are omitted.
    ///
    /// `None` uses the configured default window.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Applications`] when the read fails.
    pub async fn progress_over_time(
        &self,
        owner: UserId,
        days: Option<u32>,
    ) -> DashboardResult<Vec<DailyApplicationCount>> {
        let window_days = days.unwrap_or(self.default_window_days);
        let now = self.clock.utc();
        let since = TimeDelta::try_days(i64::from(window_days))
            .and_then(|window| now.checked_sub_signed(window))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        Ok(self
            .applications
            .daily_counts(owner, since, &self.calendar)
            .await?)
    }
}
