//! Tests for job application domain values.

use crate::application::domain::{
    ApplicationDetails, ApplicationDomainError, ApplicationStatus, JobApplication,
};
use crate::test_support::{fixture_clock, fixture_now, owner, timestamp};
use rstest::rstest;

#[rstest]
#[case("applied", ApplicationStatus::Applied)]
#[case("Interview", ApplicationStatus::Interview)]
#[case(" rejected ", ApplicationStatus::Rejected)]
#[case("OFFER", ApplicationStatus::Offer)]
fn status_parses_canonical_names(#[case] raw: &str, #[case] expected: ApplicationStatus) {
    assert_eq!(ApplicationStatus::try_from(raw), Ok(expected));
}

#[rstest]
fn unknown_status_is_rejected() {
    assert_eq!(
        ApplicationStatus::try_from("ghosted"),
        Err(ApplicationDomainError::UnknownStatus("ghosted".to_owned()))
    );
}

#[rstest]
#[case("   ", "Engineer", ApplicationDomainError::EmptyCompanyName)]
#[case("Acme", "", ApplicationDomainError::EmptyRole)]
fn required_text_must_not_be_blank(
    #[case] company: &str,
    #[case] role: &str,
    #[case] expected: ApplicationDomainError,
) {
    assert_eq!(ApplicationDetails::new(company, role), Err(expected));
}

#[rstest]
fn new_application_defaults_to_applied_now() {
    let details = ApplicationDetails::new(" Acme ", " Backend Engineer ")
        .expect("valid details")
        .with_tech_stack([" Rust", "  ", "Postgres "]);

    let application = JobApplication::new(owner(), details, &fixture_clock());

    assert_eq!(application.company_name(), "Acme");
    assert_eq!(application.role(), "Backend Engineer");
    assert_eq!(application.tech_stack(), ["Rust", "Postgres"]);
    assert_eq!(application.status(), ApplicationStatus::Applied);
    assert_eq!(application.date_applied(), fixture_now());
    assert_eq!(application.created_at(), fixture_now());
    assert_eq!(application.application_link(), None);
}

#[rstest]
fn explicit_date_is_kept_separate_from_creation_time() {
    let applied = timestamp(2026, 10, 12, 9, 0);
    let details = ApplicationDetails::new("Acme", "SRE")
        .expect("valid details")
        .applied_at(applied)
        .with_status(ApplicationStatus::Interview);

    let application = JobApplication::new(owner(), details, &fixture_clock());

    assert_eq!(application.date_applied(), applied);
    assert_eq!(application.created_at(), fixture_now());
    assert_eq!(application.status(), ApplicationStatus::Interview);
}

#[rstest]
fn serializes_with_camel_case_fields() {
    let details = ApplicationDetails::new("Acme", "SRE")
        .expect("valid details")
        .with_application_link("https://jobs.example.com/42");
    let application = JobApplication::new(owner(), details, &fixture_clock());

    let json = serde_json::to_value(&application).expect("serialize application");

    assert_eq!(json["companyName"], "Acme");
    assert_eq!(json["applicationLink"], "https://jobs.example.com/42");
    assert_eq!(json["status"], "applied");
    assert!(json.get("dateApplied").is_some());
    assert!(json["techStack"].as_array().is_some_and(Vec::is_empty));
}
