//! Dashboard snapshot returned to the transport layer.

use crate::application::domain::ApplicationStatus;
use crate::task::domain::Task;
use serde::Serialize;
use std::collections::BTreeMap;

/// Point-in-time summary of one user's progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Every application the user has recorded.
    pub total_jobs_applied: u64,
    /// Target of today's daily application goal, or zero without one.
    pub today_target: u32,
    /// Applications dated today.
    pub today_achieved: u64,
    /// Applications still needed today. Never negative.
    pub remaining_today: u64,
    /// Consecutive days, ending today, with a completed daily goal.
    pub streak: u32,
    /// Mean capped progress of every open goal, 0 to 100.
    pub overall_progress: u8,
    /// Goals not yet completed.
    pub active_goals_count: u64,
    /// Goals completed.
    pub completed_goals_count: u64,
    /// Most urgent open task.
    pub next_task: Option<Task>,
    /// Application counts per status. Absent statuses have no entry.
    pub applications_by_status: BTreeMap<ApplicationStatus, u64>,
}
