use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use serde_json::Value;

use crate::board::accounts::{Role, UserId};
use crate::board::identity::{USER_ID_HEADER, USER_ROLE_HEADER};
use crate::board::jobs::{
    Job, JobDraft, JobId, JobPage, JobQuery, JobRepository, JobService, JobType,
};
use crate::board::memory::{InMemoryApplicationRepository, InMemoryJobRepository};
use crate::board::{Caller, RepositoryError};

pub(super) type MemoryJobService = JobService<InMemoryJobRepository, InMemoryApplicationRepository>;

pub(super) fn draft() -> JobDraft {
    JobDraft {
        salary_min: Some(7_000_000),
        salary_max: Some(9_000_000),
        job_name: "Backend Engineer".to_string(),
        job_type: Some(JobType::FullTime),
        job_description: "Own the hiring platform APIs.".to_string(),
        number_candidates: Some(2),
        company: "Rakamin".to_string(),
        location: "Jakarta".to_string(),
        ..JobDraft::default()
    }
}

pub(super) fn draft_named(name: &str) -> JobDraft {
    JobDraft {
        job_name: name.to_string(),
        ..draft()
    }
}

pub(super) fn build_service(
    page_size: usize,
) -> (
    Arc<MemoryJobService>,
    Arc<InMemoryJobRepository>,
    Arc<InMemoryApplicationRepository>,
) {
    let jobs = Arc::new(InMemoryJobRepository::default());
    let applications = Arc::new(InMemoryApplicationRepository::default());
    let service = Arc::new(JobService::new(
        jobs.clone(),
        applications.clone(),
        page_size,
    ));
    (service, jobs, applications)
}

pub(super) fn admin() -> Caller {
    Caller::new(UserId::generate(), Role::Admin)
}

pub(super) fn candidate() -> Caller {
    Caller::new(UserId::generate(), Role::Candidate)
}

pub(super) fn request(
    method: &str,
    uri: &str,
    caller: Option<Caller>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(caller) = caller {
        builder = builder
            .header(USER_ID_HEADER, caller.user_id.to_string())
            .header(USER_ROLE_HEADER, caller.role.label());
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds"),
        None => builder.body(Body::empty()).expect("request builds"),
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) struct UnavailableJobs;

impl JobRepository for UnavailableJobs {
    fn insert(&self, _job: Job) -> Result<Job, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn fetch(&self, _id: &JobId) -> Result<Option<Job>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn search(&self, _query: &JobQuery) -> Result<JobPage, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }
}
