//! Shared world state for dashboard BDD scenarios.

use std::sync::Arc;

use crate::test_helpers::{FixedClock, reference_instant};
use careerlog::application::{
    adapters::memory::InMemoryApplicationRepository, services::ApplicationService,
};
use careerlog::calendar::Calendar;
use careerlog::dashboard::{domain::DashboardStats, services::DashboardService};
use careerlog::goal::{
    adapters::memory::InMemoryGoalRepository,
    services::{GoalProgressService, GoalService},
};
use careerlog::owner::UserId;
use careerlog::task::{adapters::memory::InMemoryTaskRepository, services::TaskService};
use rstest::fixture;

/// Dashboard service type used by the BDD world.
pub type TestDashboardService = DashboardService<
    InMemoryGoalRepository,
    InMemoryApplicationRepository,
    InMemoryTaskRepository,
    FixedClock,
>;

/// Scenario world for dashboard behaviour tests.
pub struct DashboardWorld {
    pub owner: UserId,
    pub goals: GoalService<InMemoryGoalRepository, FixedClock>,
    pub applications:
        ApplicationService<InMemoryApplicationRepository, InMemoryGoalRepository, FixedClock>,
    pub tasks: TaskService<InMemoryTaskRepository, FixedClock>,
    pub dashboard: TestDashboardService,
    pub last_stats: Option<DashboardStats>,
}

impl DashboardWorld {
    /// Creates a world with empty stores and a clock frozen mid-week.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(FixedClock::at(reference_instant()));
        let goal_store = Arc::new(InMemoryGoalRepository::new());
        let application_store = Arc::new(InMemoryApplicationRepository::new());
        let task_store = Arc::new(InMemoryTaskRepository::new());
        let progress =
            GoalProgressService::new(Arc::clone(&goal_store), Arc::clone(&clock), Calendar::utc());

        Self {
            owner: UserId::new(),
            goals: GoalService::new(Arc::clone(&goal_store), Arc::clone(&clock)),
            applications: ApplicationService::new(
                Arc::clone(&application_store),
                progress,
                Arc::clone(&clock),
            ),
            tasks: TaskService::new(Arc::clone(&task_store), Arc::clone(&clock)),
            dashboard: DashboardService::new(
                goal_store,
                application_store,
                task_store,
                clock,
                Calendar::utc(),
            ),
            last_stats: None,
        }
    }

    /// Returns the snapshot taken by the last "dashboard is requested" step.
    ///
    /// # Errors
    ///
    /// Returns an error when no snapshot has been taken yet.
    pub fn stats(&self) -> Result<&DashboardStats, eyre::Report> {
        self.last_stats
            .as_ref()
            .ok_or_else(|| eyre::eyre!("dashboard was not requested in this scenario"))
    }
}

impl Default for DashboardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DashboardWorld {
    DashboardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
