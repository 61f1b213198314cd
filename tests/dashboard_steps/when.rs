//! When steps for dashboard BDD scenarios.

use super::world::{DashboardWorld, run_async};
use careerlog::application::services::RecordApplicationRequest;
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#"the user records an application to "{company}""#)]
fn record_application(world: &mut DashboardWorld, company: String) -> Result<(), eyre::Report> {
    run_async(world.applications.record(
        world.owner,
        RecordApplicationRequest::new(company, "Software Engineer"),
    ))
    .wrap_err("record application")?;
    Ok(())
}

#[when("the dashboard is requested")]
fn request_dashboard(world: &mut DashboardWorld) -> Result<(), eyre::Report> {
    let stats = run_async(world.dashboard.stats(world.owner)).wrap_err("build dashboard")?;
    world.last_stats = Some(stats);
    Ok(())
}
