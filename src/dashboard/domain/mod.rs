//! Pure dashboard computations.

mod compute;
mod stats;

pub use crate::application::domain::DailyApplicationCount;
pub use compute::{overall_progress, remaining_today, select_next_task, streak_length, today_target};
pub use stats::DashboardStats;
