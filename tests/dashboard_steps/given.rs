//! Given steps for dashboard BDD scenarios.

use super::world::{DashboardWorld, run_async};
use crate::test_helpers::evening_of;
use careerlog::goal::services::{CreateGoalRequest, UpdateGoalRequest};
use careerlog::task::services::CreateTaskRequest;
use eyre::WrapErr;
use rstest_bdd_macros::given;

fn create_daily_goal(
    world: &DashboardWorld,
    target: u32,
    date: &str,
) -> Result<careerlog::goal::domain::Goal, eyre::Report> {
    let request = CreateGoalRequest::new(
        "Daily applications",
        "job_application",
        target,
        "daily",
        evening_of(date)?,
    );
    run_async(world.goals.create(world.owner, request)).wrap_err("create daily goal")
}

#[given(r#"a completed daily application goal due "{date}""#)]
fn completed_daily_goal(world: &mut DashboardWorld, date: String) -> Result<(), eyre::Report> {
    let goal = create_daily_goal(world, 1, &date)?;
    run_async(world.goals.update(
        world.owner,
        goal.id(),
        UpdateGoalRequest::new().with_current(1),
    ))
    .wrap_err("complete daily goal")?;
    Ok(())
}

#[given(r#"a daily application goal with target {target:u32} due "{date}""#)]
fn open_daily_goal(
    world: &mut DashboardWorld,
    target: u32,
    date: String,
) -> Result<(), eyre::Report> {
    create_daily_goal(world, target, &date)?;
    Ok(())
}

#[given(r#"a "{priority}" task titled "{title}""#)]
fn task_exists(
    world: &mut DashboardWorld,
    priority: String,
    title: String,
) -> Result<(), eyre::Report> {
    run_async(
        world
            .tasks
            .create(world.owner, CreateTaskRequest::new(title).with_priority(priority)),
    )
    .wrap_err("create task in scenario setup")?;
    Ok(())
}
