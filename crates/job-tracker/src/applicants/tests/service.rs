use super::common::*;
use crate::applicants::domain::{ApplicantId, ApplicantSubmission};
use crate::applicants::repository::{ApplicantRepository, RepositoryError};
use crate::applicants::{ApplicantService, ApplicantServiceError, IntakeViolation};
use crate::statistics::{AgeBucket, StatAdjuster};
use std::sync::Arc;

#[test]
fn submit_classifies_age_and_assigns_id() {
    let (service, repository) = build_service();

    let record = service
        .submit(submission("Ana Reyes", "19"))
        .expect("submission accepted");

    assert_eq!(record.id.0, "app-000001");
    assert_eq!(record.age, Some(19));
    assert_eq!(record.age_bucket, Some(AgeBucket::EarlyYouth));
    assert!(repository
        .fetch(&record.id)
        .expect("fetch succeeds")
        .is_some());
}

#[test]
fn malformed_age_is_stored_unclassified() {
    let (service, _) = build_service();

    let record = service
        .submit(submission("Ben Cruz", "nineteen"))
        .expect("malformed age still accepted");
    assert_eq!(record.age, None);
    assert_eq!(record.age_bucket, None);

    let older = service
        .submit(submission("Carla Lim", "34"))
        .expect("out of range age accepted");
    assert_eq!(older.age, Some(34));
    assert_eq!(older.age_bucket, None);
    assert_eq!(older.age_group_label(), "unclassified");
}

#[test]
fn submit_rejects_blank_name() {
    let (service, _) = build_service();

    match service.submit(submission("   ", "20")) {
        Err(ApplicantServiceError::Intake(IntakeViolation::MissingName)) => {}
        other => panic!("expected missing name, got {other:?}"),
    }
}

#[test]
fn submit_rejects_bad_email_and_long_names() {
    let (service, _) = build_service();

    let mut bad_email = submission("Dina Santos", "24");
    bad_email.email = Some("dina at example".to_string());
    assert!(matches!(
        service.submit(bad_email),
        Err(ApplicantServiceError::Intake(IntakeViolation::InvalidEmail(_)))
    ));

    let long_name = "x".repeat(121);
    assert!(matches!(
        service.submit(submission(&long_name, "24")),
        Err(ApplicantServiceError::Intake(IntakeViolation::NameTooLong {
            max: 120,
            found: 121
        }))
    ));
}

#[test]
fn rejected_submissions_do_not_consume_ids() {
    let (service, _) = build_service();

    assert!(service.submit(submission("  ", "20")).is_err());
    let mut bad_email = submission("Dina Santos", "24");
    bad_email.email = Some("dina at example".to_string());
    assert!(service.submit(bad_email).is_err());

    let accepted = service
        .submit(submission("Ana Reyes", "20"))
        .expect("valid submission");
    assert_eq!(accepted.id.0, "app-000001");
}

#[test]
fn blank_optional_fields_become_none() {
    let (service, _) = build_service();
    let record = service
        .submit(ApplicantSubmission {
            name: " Eli Tan ".to_string(),
            age: None,
            region: None,
            job_interest: Some("   ".to_string()),
            email: Some(String::new()),
        })
        .expect("minimal submission accepted");

    assert_eq!(record.name, "Eli Tan");
    assert_eq!(record.job_interest, None);
    assert_eq!(record.email, None);
    assert_eq!(record.age_bucket, None);
}

#[test]
fn tally_counts_each_bucket_and_unclassified() {
    let (service, _) = build_service();
    for (name, age) in [
        ("A One", "18"),
        ("B Two", "21"),
        ("C Three", "23"),
        ("D Four", "30"),
        ("E Five", "17"),
        ("F Six", "abc"),
    ] {
        service.submit(submission(name, age)).expect("submitted");
    }

    let tally = service.tally().expect("tally");
    assert_eq!(tally.counts.get(AgeBucket::EarlyYouth), 2);
    assert_eq!(tally.counts.get(AgeBucket::MidYouth), 1);
    assert_eq!(tally.counts.get(AgeBucket::LateYouth), 1);
    assert_eq!(tally.unclassified, 2);
}

#[test]
fn dashboard_reflects_current_store_contents() {
    let (service, _) = build_service();
    for name in ["A One", "B Two", "C Three"] {
        service.submit(submission(name, "20")).expect("submitted");
    }

    let dashboard = service.dashboard().expect("dashboard");
    let row = dashboard.row("18-21").expect("row");
    assert_eq!(row.applicants, 3);
    assert!((row.derived.unemployment_pct - 13.45).abs() < 1e-9);
    assert!((row.derived.neet_pct - 18.16).abs() < 1e-9);

    let first = service.list().expect("list")[0].id.clone();
    service.delete(&first).expect("delete");
    let after = service.dashboard().expect("dashboard after delete");
    assert_eq!(after.row("18-21").expect("row").applicants, 2);
}

#[test]
fn get_and_delete_propagate_not_found() {
    let (service, _) = build_service();
    let missing = ApplicantId("app-999999".to_string());

    assert!(matches!(
        service.get(&missing),
        Err(ApplicantServiceError::Repository(RepositoryError::NotFound))
    ));
    assert!(matches!(
        service.delete(&missing),
        Err(ApplicantServiceError::Repository(RepositoryError::NotFound))
    ));
}

#[test]
fn repository_outages_surface_as_errors() {
    let service = ApplicantService::new(
        Arc::new(UnavailableRepository),
        Arc::new(StatAdjuster::default()),
    );

    assert!(matches!(
        service.submit(submission("Gia Uy", "22")),
        Err(ApplicantServiceError::Repository(RepositoryError::Unavailable(_)))
    ));
    assert!(service.dashboard().is_err());
}

#[test]
fn clear_empties_the_store() {
    let (service, _) = build_service();
    service.submit(submission("Hana Go", "25")).expect("submitted");
    service.submit(submission("Ivan Ko", "26")).expect("submitted");

    assert_eq!(service.clear().expect("clear"), 2);
    assert_eq!(service.tally().expect("tally").counts.total(), 0);
}
