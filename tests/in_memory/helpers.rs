//! Shared wiring for in-memory integration tests.

use std::sync::Arc;

pub use crate::test_helpers::{FixedClock, at, reference_instant};
use careerlog::application::{
    adapters::memory::InMemoryApplicationRepository, services::ApplicationService,
};
use careerlog::calendar::Calendar;
use careerlog::dashboard::services::DashboardService;
use careerlog::goal::{
    adapters::memory::InMemoryGoalRepository,
    services::{GoalProgressService, GoalService},
};
use careerlog::skill::{adapters::memory::InMemorySkillRepository, services::SkillService};
use careerlog::task::{adapters::memory::InMemoryTaskRepository, services::TaskService};
use chrono::{DateTime, Utc};
use rstest::fixture;

/// Every service wired over one shared set of in-memory stores.
pub struct Tracker {
    pub goals: GoalService<InMemoryGoalRepository, FixedClock>,
    pub applications:
        ApplicationService<InMemoryApplicationRepository, InMemoryGoalRepository, FixedClock>,
    pub tasks: TaskService<InMemoryTaskRepository, FixedClock>,
    pub skills: SkillService<InMemorySkillRepository, FixedClock>,
    pub dashboard: DashboardService<
        InMemoryGoalRepository,
        InMemoryApplicationRepository,
        InMemoryTaskRepository,
        FixedClock,
    >,
}

impl Tracker {
    /// Wires a tracker whose clock reads `now`, with days counted in UTC.
    #[must_use]
    pub fn at(now: DateTime<Utc>) -> Self {
        let clock = Arc::new(FixedClock::at(now));
        let goal_store = Arc::new(InMemoryGoalRepository::new());
        let application_store = Arc::new(InMemoryApplicationRepository::new());
        let task_store = Arc::new(InMemoryTaskRepository::new());

        let progress =
            GoalProgressService::new(Arc::clone(&goal_store), Arc::clone(&clock), Calendar::utc());
        Self {
            goals: GoalService::new(Arc::clone(&goal_store), Arc::clone(&clock)),
            applications: ApplicationService::new(
                Arc::clone(&application_store),
                progress,
                Arc::clone(&clock),
            ),
            tasks: TaskService::new(Arc::clone(&task_store), Arc::clone(&clock)),
            skills: SkillService::new(
                Arc::new(InMemorySkillRepository::new()),
                Arc::clone(&clock),
            ),
            dashboard: DashboardService::new(
                goal_store,
                application_store,
                task_store,
                clock,
                Calendar::utc(),
            ),
        }
    }
}

/// Provides a tracker frozen at [`reference_instant`].
#[fixture]
pub fn tracker() -> Tracker {
    Tracker::at(reference_instant())
}
