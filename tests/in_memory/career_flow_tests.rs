//! End-to-end flows across applications, goals, tasks and the dashboard.

use super::helpers::{Tracker, at, tracker};
use careerlog::application::{
    domain::{ApplicationStatus, DailyApplicationCount},
    services::{RecordApplicationRequest, UpdateApplicationRequest},
};
use careerlog::goal::{
    domain::{Goal, GoalStatus},
    services::CreateGoalRequest,
};
use careerlog::owner::UserId;
use careerlog::skill::{domain::Proficiency, services::CreateSkillRequest};
use careerlog::task::{
    domain::TaskQuery,
    services::{CreateTaskRequest, UpdateTaskRequest},
};
use chrono::NaiveDate;
use rstest::rstest;

async fn create_goal(
    tracker: &Tracker,
    owner: UserId,
    goal_type: &str,
    period: &str,
    target: u32,
    deadline: chrono::DateTime<chrono::Utc>,
) -> Goal {
    tracker
        .goals
        .create(
            owner,
            CreateGoalRequest::new("Keep applying", goal_type, target, period, deadline),
        )
        .await
        .expect("goal should be created")
}

async fn record(tracker: &Tracker, owner: UserId, company: &str) {
    tracker
        .applications
        .record(owner, RecordApplicationRequest::new(company, "Backend Engineer"))
        .await
        .expect("application should be recorded");
}

async fn reload(tracker: &Tracker, goal: &Goal) -> Goal {
    tracker
        .goals
        .get(goal.owner(), goal.id())
        .await
        .expect("goal should load")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn recording_applications_drives_goals_and_dashboard(tracker: Tracker) {
    let owner = UserId::new();
    let daily = create_goal(
        &tracker,
        owner,
        "job_application",
        "daily",
        2,
        at(2026, 10, 14, 23, 0),
    )
    .await;
    let weekly = create_goal(
        &tracker,
        owner,
        "job_application",
        "weekly",
        5,
        at(2026, 10, 17, 23, 0),
    )
    .await;
    let monthly = create_goal(
        &tracker,
        owner,
        "job_application",
        "monthly",
        20,
        at(2026, 10, 31, 23, 0),
    )
    .await;
    let learning = create_goal(
        &tracker,
        owner,
        "learning",
        "weekly",
        3,
        at(2026, 10, 17, 23, 0),
    )
    .await;

    record(&tracker, owner, "Acme").await;
    record(&tracker, owner, "Globex").await;

    let daily_after = reload(&tracker, &daily).await;
    assert_eq!(daily_after.current(), 2);
    assert_eq!(daily_after.status(), GoalStatus::Completed);
    assert!(daily_after.completed_at().is_some());
    let weekly_after = reload(&tracker, &weekly).await;
    assert_eq!(weekly_after.current(), 2);
    assert_eq!(weekly_after.status(), GoalStatus::InProgress);
    assert_eq!(reload(&tracker, &monthly).await.current(), 2);
    let learning_after = reload(&tracker, &learning).await;
    assert_eq!(learning_after.current(), 0);
    assert_eq!(learning_after.status(), GoalStatus::Pending);

    let stats = tracker
        .dashboard
        .stats(owner)
        .await
        .expect("dashboard should build");
    assert_eq!(stats.total_jobs_applied, 2);
    assert_eq!(stats.today_target, 2);
    assert_eq!(stats.today_achieved, 2);
    assert_eq!(stats.remaining_today, 0);
    assert_eq!(stats.streak, 1);
    assert_eq!(stats.active_goals_count, 3);
    assert_eq!(stats.completed_goals_count, 1);
    assert_eq!(stats.overall_progress, 17);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completed_goals_stop_counting(tracker: Tracker) {
    let owner = UserId::new();
    let daily = create_goal(
        &tracker,
        owner,
        "job_application",
        "daily",
        1,
        at(2026, 10, 14, 23, 0),
    )
    .await;
    let weekly = create_goal(
        &tracker,
        owner,
        "job_application",
        "weekly",
        5,
        at(2026, 10, 17, 23, 0),
    )
    .await;

    for company in ["Acme", "Globex", "Initech"] {
        record(&tracker, owner, company).await;
    }

    assert_eq!(reload(&tracker, &daily).await.current(), 1);
    assert_eq!(reload(&tracker, &weekly).await.current(), 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn editing_or_deleting_applications_leaves_goals_alone(tracker: Tracker) {
    let owner = UserId::new();
    let weekly = create_goal(
        &tracker,
        owner,
        "job_application",
        "weekly",
        5,
        at(2026, 10, 17, 23, 0),
    )
    .await;
    let application = tracker
        .applications
        .record(owner, RecordApplicationRequest::new("Acme", "Platform Engineer"))
        .await
        .expect("application should be recorded");

    let updated = tracker
        .applications
        .update(
            owner,
            application.id(),
            UpdateApplicationRequest::new().with_status("interview"),
        )
        .await
        .expect("application should update");
    assert_eq!(updated.status(), ApplicationStatus::Interview);
    tracker
        .applications
        .delete(owner, application.id())
        .await
        .expect("application should delete");

    assert_eq!(reload(&tracker, &weekly).await.current(), 1);
    let stats = tracker
        .dashboard
        .stats(owner)
        .await
        .expect("dashboard should build");
    assert_eq!(stats.total_jobs_applied, 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn time_series_groups_backdated_applications_by_day(tracker: Tracker) {
    let owner = UserId::new();
    for (company, applied) in [
        ("Acme", at(2026, 10, 12, 9, 0)),
        ("Globex", at(2026, 10, 12, 17, 45)),
        ("Initech", at(2026, 10, 14, 8, 15)),
        ("Hooli", at(2026, 9, 1, 10, 0)),
    ] {
        tracker
            .applications
            .record(
                owner,
                RecordApplicationRequest::new(company, "Engineer").with_date_applied(applied),
            )
            .await
            .expect("application should be recorded");
    }

    let series = tracker
        .dashboard
        .progress_over_time(owner, Some(7))
        .await
        .expect("series should build");

    let day = |month, date| NaiveDate::from_ymd_opt(2026, month, date).expect("valid date");
    assert_eq!(
        series,
        vec![
            DailyApplicationCount {
                date: day(10, 12),
                count: 2,
            },
            DailyApplicationCount {
                date: day(10, 14),
                count: 1,
            },
        ]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn next_task_skips_completed_work(tracker: Tracker) {
    let owner = UserId::new();
    let urgent = tracker
        .tasks
        .create(owner, CreateTaskRequest::new("Send offer reply").with_priority("urgent"))
        .await
        .expect("task should be created");
    let high = tracker
        .tasks
        .create(
            owner,
            CreateTaskRequest::new("Prepare system design")
                .with_priority("high")
                .with_due_date(at(2026, 10, 16, 9, 0)),
        )
        .await
        .expect("task should be created");

    let before = tracker
        .dashboard
        .stats(owner)
        .await
        .expect("dashboard should build");
    assert_eq!(before.next_task.map(|task| task.id()), Some(urgent.id()));

    let done = tracker
        .tasks
        .update(owner, urgent.id(), UpdateTaskRequest::new().with_completed(true))
        .await
        .expect("task should update");
    assert!(done.completed_at().is_some());

    let after = tracker
        .dashboard
        .stats(owner)
        .await
        .expect("dashboard should build");
    assert_eq!(after.next_task.map(|task| task.id()), Some(high.id()));
    let open = tracker
        .tasks
        .list(owner, TaskQuery::open())
        .await
        .expect("tasks should list");
    assert_eq!(open.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn skills_are_tracked_independently(tracker: Tracker) {
    let owner = UserId::new();
    let skill = tracker
        .skills
        .create(
            owner,
            CreateSkillRequest::new("Rust")
                .with_category("backend")
                .with_proficiency("Advanced")
                .learning(true),
        )
        .await
        .expect("skill should be created");

    assert_eq!(skill.proficiency(), Proficiency::Advanced);
    assert!(skill.is_learning());
    let stats = tracker
        .dashboard
        .stats(owner)
        .await
        .expect("dashboard should build");
    assert_eq!(stats.active_goals_count, 0);
}
