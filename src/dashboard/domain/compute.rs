//! Pure computations over already-loaded records.
//!
//! Each function takes whatever the store returned and applies its own
//! filters, so callers may pass a broader set than strictly needed.

use crate::calendar::{Calendar, TimeRange};
use crate::goal::domain::{Goal, GoalPeriod, GoalType};
use crate::task::domain::{Task, by_urgency};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Fixed-point units per percentage point.
const PERCENT_SCALE: u64 = 10_000;
const HALF_PERCENT: u64 = 5_000;
const FULL_PROGRESS: u64 = 100 * PERCENT_SCALE;

fn is_daily_application_goal(goal: &Goal) -> bool {
    goal.goal_type() == GoalType::JobApplication && goal.period() == GoalPeriod::Daily
}

/// Counts consecutive local days, ending `today`, that each have a completed
/// daily job-application goal.
///
/// Completed goals are visited by deadline, latest first. The run stops at the
/// first day that is not the next expected one, so a gap, or a completed goal
/// dated after `today`, ends it. Several goals on the same day count once.
#[must_use]
pub fn streak_length(goals: &[Goal], today: NaiveDate, calendar: &Calendar) -> u32 {
    let completed_days: BTreeSet<NaiveDate> = goals
        .iter()
        .filter(|goal| is_daily_application_goal(goal) && goal.is_completed())
        .map(|goal| calendar.local_date(goal.deadline()))
        .collect();

    let mut streak = 0_u32;
    let mut expected = Some(today);
    for day in completed_days.into_iter().rev() {
        if Some(day) != expected {
            break;
        }
        streak = streak.saturating_add(1);
        expected = day.pred_opt();
    }
    streak
}

/// Returns the target of the daily job-application goal due `today`.
///
/// When several qualify, the earliest created one wins. Zero when none does.
#[must_use]
pub fn today_target(goals: &[Goal], today: &TimeRange) -> u32 {
    goals
        .iter()
        .filter(|goal| is_daily_application_goal(goal) && today.contains(goal.deadline()))
        .min_by_key(|goal| goal.created_at())
        .map_or(0, |goal| goal.target().value())
}

/// Returns how many applications are still needed today, floored at zero.
#[must_use]
pub fn remaining_today(target: u32, achieved: u64) -> u64 {
    u64::from(target).saturating_sub(achieved)
}

/// Mean of each open goal's progress capped at 100, rounded half up.
///
/// Per-goal progress is carried in fixed point so the mean is rounded once.
/// Completed goals are ignored; zero when no goal is open.
#[must_use]
pub fn overall_progress(goals: &[Goal]) -> u8 {
    let (total, open) = goals
        .iter()
        .filter(|goal| !goal.is_completed())
        .fold((0_u64, 0_u64), |(total, open), goal| {
            (
                total.saturating_add(scaled_progress(goal)),
                open.saturating_add(1),
            )
        });

    let mean = total
        .saturating_add(open.saturating_mul(HALF_PERCENT))
        .checked_div(open.saturating_mul(PERCENT_SCALE))
        .unwrap_or(0);
    u8::try_from(mean.min(100)).unwrap_or(100)
}

fn scaled_progress(goal: &Goal) -> u64 {
    u64::from(goal.current())
        .saturating_mul(FULL_PROGRESS)
        .checked_div(u64::from(goal.target().value()))
        .unwrap_or(0)
        .min(FULL_PROGRESS)
}

/// Picks the most urgent open task: highest priority, then earliest due
/// date with undated tasks last.
#[must_use]
pub fn select_next_task(tasks: &[Task]) -> Option<&Task> {
    tasks
        .iter()
        .filter(|task| !task.is_completed())
        .min_by(|left, right| by_urgency(left, right))
}
