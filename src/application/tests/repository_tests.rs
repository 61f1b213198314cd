//! Tests for the in-memory application repository aggregates.

use crate::application::{
    adapters::memory::InMemoryApplicationRepository,
    domain::{ApplicationDetails, ApplicationStatus, DailyApplicationCount, JobApplication},
    ports::ApplicationRepository,
};
use crate::calendar::Calendar;
use crate::owner::UserId;
use crate::test_support::{fixture_clock, owner, timestamp};
use chrono::{DateTime, NaiveDate, Utc};
use rstest::{fixture, rstest};

#[fixture]
fn repository() -> InMemoryApplicationRepository {
    InMemoryApplicationRepository::new()
}

async fn seed(
    repository: &InMemoryApplicationRepository,
    owner: UserId,
    applied: DateTime<Utc>,
    status: ApplicationStatus,
) -> JobApplication {
    let details = ApplicationDetails::new("Acme", "Engineer")
        .expect("valid details")
        .applied_at(applied)
        .with_status(status);
    let application = JobApplication::new(owner, details, &fixture_clock());
    repository
        .store(&application)
        .await
        .expect("store application");
    application
}

fn day(year: i32, month: u32, date: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, date).expect("valid date")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_is_most_recently_applied_first(repository: InMemoryApplicationRepository) {
    let user = owner();
    let older = seed(
        &repository,
        user,
        timestamp(2026, 10, 1, 9, 0),
        ApplicationStatus::Applied,
    )
    .await;
    let newer = seed(
        &repository,
        user,
        timestamp(2026, 10, 9, 9, 0),
        ApplicationStatus::Applied,
    )
    .await;
    seed(
        &repository,
        UserId::new(),
        timestamp(2026, 10, 5, 9, 0),
        ApplicationStatus::Applied,
    )
    .await;

    let listed = repository.list(user).await.expect("list applications");

    let ids: Vec<_> = listed.iter().map(JobApplication::id).collect();
    assert_eq!(ids, vec![newer.id(), older.id()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn counts_are_scoped_and_half_open(repository: InMemoryApplicationRepository) {
    let user = owner();
    let calendar = Calendar::utc();
    seed(&repository, user, timestamp(2026, 10, 14, 0, 0), ApplicationStatus::Applied).await;
    seed(&repository, user, timestamp(2026, 10, 14, 23, 59), ApplicationStatus::Offer).await;
    seed(&repository, user, timestamp(2026, 10, 15, 0, 0), ApplicationStatus::Applied).await;
    seed(&repository, UserId::new(), timestamp(2026, 10, 14, 12, 0), ApplicationStatus::Applied)
        .await;

    let today = calendar.day_range(timestamp(2026, 10, 14, 15, 30));

    assert_eq!(repository.count_all(user).await.expect("count all"), 3);
    assert_eq!(
        repository
            .count_applied_between(user, today)
            .await
            .expect("count today"),
        2
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_counts_only_include_present_statuses(repository: InMemoryApplicationRepository) {
    let user = owner();
    for status in [
        ApplicationStatus::Applied,
        ApplicationStatus::Applied,
        ApplicationStatus::Interview,
        ApplicationStatus::Applied,
    ] {
        seed(&repository, user, timestamp(2026, 10, 3, 9, 0), status).await;
    }

    let counts = repository.count_by_status(user).await.expect("count by status");

    assert_eq!(counts.len(), 2);
    assert_eq!(counts.get(&ApplicationStatus::Applied), Some(&3));
    assert_eq!(counts.get(&ApplicationStatus::Interview), Some(&1));
    assert_eq!(counts.get(&ApplicationStatus::Offer), None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn daily_counts_are_sparse_and_ascending(repository: InMemoryApplicationRepository) {
    let user = owner();
    seed(&repository, user, timestamp(2026, 10, 12, 9, 0), ApplicationStatus::Applied).await;
    seed(&repository, user, timestamp(2026, 10, 10, 9, 0), ApplicationStatus::Applied).await;
    seed(&repository, user, timestamp(2026, 10, 12, 18, 0), ApplicationStatus::Rejected).await;
    seed(&repository, user, timestamp(2026, 9, 1, 9, 0), ApplicationStatus::Applied).await;

    let series = repository
        .daily_counts(user, timestamp(2026, 10, 1, 0, 0), &Calendar::utc())
        .await
        .expect("daily counts");

    assert_eq!(
        series,
        vec![
            DailyApplicationCount {
                date: day(2026, 10, 10),
                count: 1,
            },
            DailyApplicationCount {
                date: day(2026, 10, 12),
                count: 2,
            },
        ]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn daily_counts_group_by_local_day(repository: InMemoryApplicationRepository) {
    let user = owner();
    let calendar = Calendar::from_utc_offset_minutes(-7 * 60).expect("valid offset");
    seed(&repository, user, timestamp(2026, 10, 13, 3, 0), ApplicationStatus::Applied).await;
    seed(&repository, user, timestamp(2026, 10, 13, 8, 0), ApplicationStatus::Applied).await;

    let series = repository
        .daily_counts(user, timestamp(2026, 10, 1, 0, 0), &calendar)
        .await
        .expect("daily counts");

    let dates: Vec<NaiveDate> = series.iter().map(|entry| entry.date).collect();
    assert_eq!(dates, vec![day(2026, 10, 12), day(2026, 10, 13)]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn foreign_records_are_hidden_and_kept(repository: InMemoryApplicationRepository) {
    let stored = seed(
        &repository,
        owner(),
        timestamp(2026, 10, 3, 9, 0),
        ApplicationStatus::Applied,
    )
    .await;
    let intruder = UserId::new();

    assert!(
        repository
            .find_by_id(intruder, stored.id())
            .await
            .expect("lookup")
            .is_none()
    );
    assert!(!repository.delete(intruder, stored.id()).await.expect("delete"));
}
