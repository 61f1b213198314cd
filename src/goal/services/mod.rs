//! Application services for goal management and progress fan-out.

mod goals;
mod progress;

pub use goals::{
    CreateGoalRequest, GoalService, GoalServiceError, GoalServiceResult, UpdateGoalRequest,
};
pub use progress::{FanOutReport, GoalProgressService};
