//! Then steps for dashboard BDD scenarios.

use super::world::DashboardWorld;
use rstest_bdd_macros::then;

#[then("the streak is {streak:u32}")]
fn streak_is(world: &DashboardWorld, streak: u32) -> Result<(), eyre::Report> {
    let stats = world.stats()?;
    eyre::ensure!(
        stats.streak == streak,
        "expected streak {streak}, found {}",
        stats.streak
    );
    Ok(())
}

#[then("the daily target is {target:u32} with {remaining:u64} remaining")]
fn daily_target_is(
    world: &DashboardWorld,
    target: u32,
    remaining: u64,
) -> Result<(), eyre::Report> {
    let stats = world.stats()?;
    eyre::ensure!(
        stats.today_target == target,
        "expected target {target}, found {}",
        stats.today_target
    );
    eyre::ensure!(
        stats.remaining_today == remaining,
        "expected {remaining} remaining, found {}",
        stats.remaining_today
    );
    Ok(())
}

#[then(r#"the next task is "{title}""#)]
fn next_task_is(world: &DashboardWorld, title: String) -> Result<(), eyre::Report> {
    let stats = world.stats()?;
    let next = stats
        .next_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected a next task, found none"))?;
    eyre::ensure!(
        next.title() == title,
        "expected next task {title}, found {}",
        next.title()
    );
    Ok(())
}
