use std::sync::Arc;

use chrono::Utc;

use super::common::*;
use crate::board::applications::{
    ApplicantAnswers, ApplicationId, ApplicationRecord, ApplicationRepository,
};
use crate::board::jobs::{JobService, JobServiceError, ListParams};
use crate::board::memory::InMemoryApplicationRepository;
use crate::board::profile::{FieldKey, RequirementLevel};
use crate::board::RepositoryError;

#[test]
fn create_rejects_duplicate_openings() {
    let (service, _, _) = build_service(10);

    service.create(draft()).expect("first posting");
    let err = service.create(draft()).expect_err("same opening");
    assert!(matches!(err, JobServiceError::Duplicate));
    assert_eq!(
        err.to_string(),
        "Job (same name, company, location, and type) already exists"
    );

    service
        .create(crate::board::jobs::JobDraft {
            location: "Bandung".to_string(),
            ..draft()
        })
        .expect("different location is a different opening");
}

#[test]
fn create_surfaces_draft_errors() {
    let (service, _, _) = build_service(10);
    let err = service.create(draft_named("")).expect_err("name missing");
    assert_eq!(err.to_string(), "Job name is required");
}

#[test]
fn list_pages_newest_first_and_counts_matches() {
    let (service, _, _) = build_service(2);
    for name in ["Backend Engineer", "Frontend Engineer", "Data Analyst"] {
        service.create(draft_named(name)).expect("posting");
        std::thread::sleep(std::time::Duration::from_millis(2));
    }

    let listing = service
        .list(&candidate(), ListParams::default())
        .expect("listing");
    assert_eq!(listing.meta.total, 3);
    assert_eq!(listing.meta.limit, 2);
    assert_eq!(listing.meta.total_pages, 2);
    assert_eq!(listing.data[0].job_name, "Data Analyst");

    let listing = service
        .list(
            &candidate(),
            ListParams {
                page: Some("2".to_string()),
                sort: Some("asc".to_string()),
                ..ListParams::default()
            },
        )
        .expect("listing");
    assert_eq!(listing.meta.page, 2);
    assert_eq!(listing.data.len(), 1);
    assert_eq!(listing.data[0].job_name, "Data Analyst");

    let listing = service
        .list(
            &candidate(),
            ListParams {
                search: Some("engineer".to_string()),
                limit: Some("500".to_string()),
                ..ListParams::default()
            },
        )
        .expect("listing");
    assert_eq!(listing.meta.total, 2);
    assert_eq!(listing.meta.limit, crate::config::MAX_PAGE_SIZE);
}

#[test]
fn unusable_list_params_fall_back_to_defaults() {
    let (service, _, _) = build_service(2);
    for name in ["Backend Engineer", "Frontend Engineer", "Data Analyst"] {
        service.create(draft_named(name)).expect("posting");
        std::thread::sleep(std::time::Duration::from_millis(2));
    }

    let listing = service
        .list(
            &candidate(),
            ListParams {
                page: Some("abc".to_string()),
                limit: Some("-1".to_string()),
                sort: Some("ASC".to_string()),
                search: None,
            },
        )
        .expect("listing");
    assert_eq!(listing.meta.page, 1);
    assert_eq!(listing.meta.limit, 2);
    assert_eq!(listing.data[0].job_name, "Data Analyst");

    let listing = service
        .list(
            &candidate(),
            ListParams {
                page: Some("0".to_string()),
                limit: Some(String::new()),
                ..ListParams::default()
            },
        )
        .expect("listing");
    assert_eq!(listing.meta.page, 1);
    assert_eq!(listing.meta.limit, 2);
}

#[test]
fn list_and_detail_mark_applied_jobs() {
    let (service, _, applications) = build_service(10);
    let job = service.create(draft()).expect("posting");
    let other = service.create(draft_named("Data Analyst")).expect("posting");
    let caller = candidate();

    applications
        .insert(ApplicationRecord {
            id: ApplicationId::generate(),
            job_id: job.id,
            candidate_id: caller.user_id,
            answers: ApplicantAnswers {
                full_name: Some("Jane Doe".to_string()),
                ..ApplicantAnswers::default()
            },
            submitted_at: Utc::now(),
        })
        .expect("stored");

    let listing = service.list(&caller, ListParams::default()).expect("listing");
    let flags: Vec<(String, bool)> = listing
        .data
        .iter()
        .map(|summary| (summary.job_name.clone(), summary.has_applied))
        .collect();
    assert!(flags.contains(&("Backend Engineer".to_string(), true)));
    assert!(flags.contains(&("Data Analyst".to_string(), false)));

    let detail = service.detail(&caller, &job.id).expect("detail");
    assert!(detail.has_applied);
    assert!(detail.applicants.is_empty(), "candidates never see applicants");
    assert!(!service.detail(&caller, &other.id).expect("detail").has_applied);

    let detail = service.detail(&admin(), &job.id).expect("detail");
    assert_eq!(detail.applicants.len(), 1);
    assert_eq!(detail.applicants[0].full_name.as_deref(), Some("Jane Doe"));
}

#[test]
fn form_lists_active_fields_in_form_order() {
    let (service, _, _) = build_service(10);
    let mut request = draft();
    request
        .profile_config
        .insert(FieldKey::Gender, RequirementLevel::Off);
    request
        .profile_config
        .insert(FieldKey::Birth, RequirementLevel::Mandatory);
    let job = service.create(request).expect("posting");

    let fields = service.form(&job.id).expect("form");
    let keys: Vec<FieldKey> = fields.iter().map(|field| field.key).collect();
    assert_eq!(
        keys,
        vec![
            FieldKey::PhotoProfile,
            FieldKey::FullName,
            FieldKey::Birth,
            FieldKey::Domicile,
            FieldKey::Phone,
            FieldKey::Email,
            FieldKey::Linkedin,
        ]
    );
    assert!(fields[2].required);
    assert!(!fields[3].required);
}

#[test]
fn unknown_jobs_are_not_found() {
    let (service, _, _) = build_service(10);
    let missing = crate::board::jobs::JobId::generate();
    assert!(matches!(
        service.detail(&candidate(), &missing),
        Err(JobServiceError::NotFound)
    ));
    assert!(matches!(service.form(&missing), Err(JobServiceError::NotFound)));
}

#[test]
fn repository_failures_propagate() {
    let service = JobService::new(
        Arc::new(UnavailableJobs),
        Arc::new(InMemoryApplicationRepository::default()),
        10,
    );

    assert!(matches!(
        service.list(&candidate(), ListParams::default()),
        Err(JobServiceError::Repository(RepositoryError::Unavailable(_)))
    ));
    assert!(matches!(
        service.create(draft()),
        Err(JobServiceError::Repository(_))
    ));
}
