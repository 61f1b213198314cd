//! Shared world state for goal progress BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use crate::test_helpers::{FixedClock, reference_instant};
use careerlog::application::{
    adapters::memory::InMemoryApplicationRepository, services::ApplicationService,
};
use careerlog::calendar::Calendar;
use careerlog::goal::{
    adapters::memory::InMemoryGoalRepository,
    domain::GoalId,
    services::{GoalProgressService, GoalService},
};
use careerlog::owner::UserId;
use rstest::fixture;

/// Application service type used by the BDD world.
pub type TestApplicationService =
    ApplicationService<InMemoryApplicationRepository, InMemoryGoalRepository, FixedClock>;

/// Scenario world for goal progress behaviour tests.
pub struct GoalProgressWorld {
    pub owner: UserId,
    pub goals: GoalService<InMemoryGoalRepository, FixedClock>,
    pub applications: TestApplicationService,
    pub tracked_goals: HashMap<String, GoalId>,
}

impl GoalProgressWorld {
    /// Creates a world with empty stores and a clock frozen mid-week.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(FixedClock::at(reference_instant()));
        let goal_store = Arc::new(InMemoryGoalRepository::new());
        let progress =
            GoalProgressService::new(Arc::clone(&goal_store), Arc::clone(&clock), Calendar::utc());

        Self {
            owner: UserId::new(),
            goals: GoalService::new(goal_store, Arc::clone(&clock)),
            applications: ApplicationService::new(
                Arc::new(InMemoryApplicationRepository::new()),
                progress,
                clock,
            ),
            tracked_goals: HashMap::new(),
        }
    }

    /// Key under which a scenario refers to a goal.
    #[must_use]
    pub fn goal_key(period: &str, goal_type: &str) -> String {
        format!("{period} {goal_type}")
    }
}

impl Default for GoalProgressWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> GoalProgressWorld {
    GoalProgressWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
