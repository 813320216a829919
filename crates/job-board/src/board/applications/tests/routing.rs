use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::board::accounts::Role;
use crate::board::applications::{application_router, ApplicationService};
use crate::board::jobs::{JobId, JobRepository, JobStatus};
use crate::board::memory::InMemoryJobRepository;

fn body() -> serde_json::Value {
    json!({
        "full_name": "Jane Doe",
        "email": "jane@example.com",
        "photo_profile": "http://x/y.png",
        "linkedin": "",
        "birth": ""
    })
}

#[tokio::test]
async fn candidate_submission_is_created_once() {
    let fixture = fixture();
    let router = application_router(fixture.service.clone());
    let candidate = caller(Role::Candidate);
    let uri = format!("/api/jobs/{}/application", fixture.open_job.id);

    let response = router
        .clone()
        .oneshot(post_json(&uri, candidate, body()))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload["message"], "Your application was sent!");
    assert!(payload["application_id"].is_string());

    let response = router
        .oneshot(post_json(&uri, candidate, body()))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json_body(response).await["message"], "Already applied");
    assert_eq!(fixture.applications.len(), 1);
}

#[tokio::test]
async fn field_errors_are_returned_with_the_first_message() {
    let fixture = fixture();
    let router = application_router(fixture.service.clone());
    let uri = format!("/api/jobs/{}/application", fixture.open_job.id);

    let mut submission = body();
    submission["email"] = json!("nope");
    submission["linkedin"] = json!("not a url");

    let response = router
        .oneshot(post_json(&uri, caller(Role::Candidate), submission))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload["message"], "Invalid email format");
    assert_eq!(payload["errors"]["email"], "Invalid email format");
    assert_eq!(payload["errors"]["linkedin"], "LinkedIn must be a valid URL");
}

#[tokio::test]
async fn admins_cannot_apply() {
    let fixture = fixture();
    let router = application_router(fixture.service.clone());
    let uri = format!("/api/jobs/{}/application", fixture.open_job.id);

    let response = router
        .oneshot(post_json(&uri, caller(Role::Admin), body()))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn mistyped_body_answers_json_400() {
    let fixture = fixture();
    let router = application_router(fixture.service.clone());
    let uri = format!("/api/jobs/{}/application", fixture.open_job.id);

    let mut submission = body();
    submission["phone"] = json!(81234567);

    let response = router
        .oneshot(post_json(&uri, caller(Role::Candidate), submission))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json_body(response).await["message"],
        "Invalid request body"
    );
    assert!(fixture.applications.is_empty());
}

#[tokio::test]
async fn missing_and_closed_jobs() {
    let fixture = fixture();
    let router = application_router(fixture.service.clone());

    for uri in [
        "/api/jobs/not-a-uuid/application".to_string(),
        format!("/api/jobs/{}/application", JobId::generate()),
    ] {
        let response = router
            .clone()
            .oneshot(post_json(&uri, caller(Role::Candidate), body()))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }

    let response = router
        .oneshot(post_json(
            &format!("/api/jobs/{}/application", fixture.draft_job.id),
            caller(Role::Candidate),
            body(),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json_body(response).await["message"],
        "Job is not accepting applications"
    );
}

#[tokio::test]
async fn repository_failures_are_internal_errors() {
    let jobs = Arc::new(InMemoryJobRepository::default());
    let open = jobs.insert(job(JobStatus::Active)).expect("job stored");
    let service = Arc::new(ApplicationService::new(
        jobs,
        Arc::new(UnavailableApplications),
    ));

    let response = application_router(service)
        .oneshot(post_json(
            &format!("/api/jobs/{}/application", open.id),
            caller(Role::Candidate),
            body(),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
