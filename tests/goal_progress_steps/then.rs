//! Then steps for goal progress BDD scenarios.

use super::world::{GoalProgressWorld, run_async};
use careerlog::goal::domain::GoalStatus;
use eyre::WrapErr;
use rstest_bdd_macros::then;

#[then(
    r#"the "{period}" "{goal_type}" goal has progress {current:u32} and status "{status}""#
)]
fn goal_has_progress(
    world: &GoalProgressWorld,
    period: String,
    goal_type: String,
    current: u32,
    status: String,
) -> Result<(), eyre::Report> {
    let expected_status = GoalStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let id = world
        .tracked_goals
        .get(&GoalProgressWorld::goal_key(&period, &goal_type))
        .copied()
        .ok_or_else(|| eyre::eyre!("no {period} {goal_type} goal in scenario world"))?;

    let goal = run_async(world.goals.get(world.owner, id)).wrap_err("reload goal")?;

    eyre::ensure!(
        goal.current() == current,
        "expected progress {current}, found {}",
        goal.current()
    );
    eyre::ensure!(
        goal.status() == expected_status,
        "expected status {expected_status}, found {}",
        goal.status()
    );
    Ok(())
}
