//! Given steps for goal progress BDD scenarios.

use super::world::{GoalProgressWorld, run_async};
use crate::test_helpers::evening_of;
use careerlog::goal::services::CreateGoalRequest;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a "{period}" "{goal_type}" goal with target {target:u32} due "{date}""#)]
fn goal_exists(
    world: &mut GoalProgressWorld,
    period: String,
    goal_type: String,
    target: u32,
    date: String,
) -> Result<(), eyre::Report> {
    let deadline = evening_of(&date)?;
    let request = CreateGoalRequest::new(
        format!("{period} {goal_type} goal"),
        goal_type.as_str(),
        target,
        period.as_str(),
        deadline,
    );
    let goal = run_async(world.goals.create(world.owner, request))
        .wrap_err("create goal in scenario setup")?;
    world
        .tracked_goals
        .insert(GoalProgressWorld::goal_key(&period, &goal_type), goal.id());
    Ok(())
}
