//! When steps for goal progress BDD scenarios.

use super::world::{GoalProgressWorld, run_async};
use careerlog::application::services::RecordApplicationRequest;
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#"the user records an application to "{company}""#)]
fn record_application(world: &mut GoalProgressWorld, company: String) -> Result<(), eyre::Report> {
    run_async(world.applications.record(
        world.owner,
        RecordApplicationRequest::new(company, "Software Engineer"),
    ))
    .wrap_err("record application")?;
    Ok(())
}
