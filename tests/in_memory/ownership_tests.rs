//! Records belonging to one user stay invisible to every other user.

use super::helpers::{Tracker, at, tracker};
use careerlog::application::services::{
    ApplicationServiceError, RecordApplicationRequest, UpdateApplicationRequest,
};
use careerlog::error::{ClassifiedError, FailureKind};
use careerlog::goal::services::{CreateGoalRequest, GoalServiceError, UpdateGoalRequest};
use careerlog::owner::UserId;
use careerlog::skill::services::{CreateSkillRequest, SkillServiceError};
use careerlog::task::{
    domain::TaskQuery,
    services::{CreateTaskRequest, TaskServiceError},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn goals_of_other_users_are_not_found(tracker: Tracker) {
    let alice = UserId::new();
    let bob = UserId::new();
    let goal = tracker
        .goals
        .create(
            alice,
            CreateGoalRequest::new("Apply", "job_application", 3, "daily", at(2026, 10, 14, 23, 0)),
        )
        .await
        .expect("goal should be created");

    let lookup = tracker.goals.get(bob, goal.id()).await;
    let update = tracker
        .goals
        .update(bob, goal.id(), UpdateGoalRequest::new().with_current(3))
        .await;
    let removal = tracker.goals.delete(bob, goal.id()).await;

    assert!(matches!(lookup, Err(GoalServiceError::NotFound(id)) if id == goal.id()));
    assert!(update.is_err_and(|error| error.kind() == FailureKind::NotFound));
    assert!(removal.is_err_and(|error| error.kind() == FailureKind::NotFound));
    assert!(tracker.goals.list(bob).await.expect("list goals").is_empty());
    assert_eq!(tracker.goals.list(alice).await.expect("list goals").len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn applications_only_advance_their_owners_goals(tracker: Tracker) {
    let alice = UserId::new();
    let bob = UserId::new();
    let bobs_goal = tracker
        .goals
        .create(
            bob,
            CreateGoalRequest::new(
                "Apply",
                "job_application",
                3,
                "weekly",
                at(2026, 10, 17, 23, 0),
            ),
        )
        .await
        .expect("goal should be created");

    let application = tracker
        .applications
        .record(alice, RecordApplicationRequest::new("Acme", "Engineer"))
        .await
        .expect("application should be recorded");

    let untouched = tracker
        .goals
        .get(bob, bobs_goal.id())
        .await
        .expect("goal should load");
    assert_eq!(untouched.current(), 0);

    let hijack = tracker
        .applications
        .update(
            bob,
            application.id(),
            UpdateApplicationRequest::new().with_status("offer"),
        )
        .await;
    assert!(matches!(hijack, Err(ApplicationServiceError::NotFound(_))));
    assert!(tracker.applications.list(bob).await.expect("list").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_and_skills_are_scoped_to_their_owner(tracker: Tracker) {
    let alice = UserId::new();
    let bob = UserId::new();
    let task = tracker
        .tasks
        .create(alice, CreateTaskRequest::new("Update CV"))
        .await
        .expect("task should be created");
    let skill = tracker
        .skills
        .create(alice, CreateSkillRequest::new("SQL"))
        .await
        .expect("skill should be created");

    let task_lookup = tracker.tasks.get(bob, task.id()).await;
    let skill_removal = tracker.skills.delete(bob, skill.id()).await;

    assert!(matches!(task_lookup, Err(TaskServiceError::NotFound(_))));
    assert!(matches!(skill_removal, Err(SkillServiceError::NotFound(_))));
    assert!(
        tracker
            .tasks
            .list(bob, TaskQuery::new())
            .await
            .expect("list tasks")
            .is_empty()
    );
    let stats = tracker
        .dashboard
        .stats(bob)
        .await
        .expect("dashboard should build");
    assert!(stats.next_task.is_none());
}
