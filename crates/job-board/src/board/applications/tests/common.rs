use std::collections::HashSet;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use chrono::Utc;
use serde_json::Value;

use crate::board::accounts::{Role, UserId};
use crate::board::applications::{
    ApplicationPayload, ApplicationRecord, ApplicationRepository, ApplicationService,
};
use crate::board::identity::{USER_ID_HEADER, USER_ROLE_HEADER};
use crate::board::jobs::{Job, JobId, JobRepository, JobStatus, JobType};
use crate::board::memory::{InMemoryApplicationRepository, InMemoryJobRepository};
use crate::board::profile::{FieldKey, ProfileConfiguration, RequirementLevel};
use crate::board::{Caller, RepositoryError};

pub(super) type MemoryApplicationService =
    ApplicationService<InMemoryJobRepository, InMemoryApplicationRepository>;

/// Pinned fields mandatory, LinkedIn and birth optional, everything else off.
pub(super) fn scenario_config() -> ProfileConfiguration {
    ProfileConfiguration::uniform(RequirementLevel::Off)
        .with_level(FieldKey::FullName, RequirementLevel::Mandatory)
        .with_level(FieldKey::Email, RequirementLevel::Mandatory)
        .with_level(FieldKey::PhotoProfile, RequirementLevel::Mandatory)
        .with_level(FieldKey::Linkedin, RequirementLevel::Optional)
        .with_level(FieldKey::Birth, RequirementLevel::Optional)
}

pub(super) fn job(status: JobStatus) -> Job {
    Job {
        id: JobId::generate(),
        job_name: "Frontend Engineer".to_string(),
        job_type: JobType::Contract,
        job_description: "Build the candidate application form.".to_string(),
        company: "Rakamin".to_string(),
        location: "Remote".to_string(),
        salary_min: 5_000_000,
        salary_max: 8_000_000,
        number_candidates: 3,
        status,
        created_at: Utc::now(),
        profile_config: scenario_config(),
    }
}

pub(super) fn payload() -> ApplicationPayload {
    ApplicationPayload {
        full_name: Some("  Jane Doe ".to_string()),
        email: Some("jane@example.com".to_string()),
        photo_profile: Some("http://x/y.png".to_string()),
        linkedin: Some(String::new()),
        birth: Some("1994-02-28".to_string()),
        gender: Some("female".to_string()),
        ..ApplicationPayload::default()
    }
}

pub(super) struct Fixture {
    pub(super) service: Arc<MemoryApplicationService>,
    pub(super) applications: Arc<InMemoryApplicationRepository>,
    pub(super) open_job: Job,
    pub(super) draft_job: Job,
}

pub(super) fn fixture() -> Fixture {
    let jobs = Arc::new(InMemoryJobRepository::default());
    let applications = Arc::new(InMemoryApplicationRepository::default());

    let open_job = jobs.insert(job(JobStatus::Active)).expect("job stored");
    let draft_job = jobs
        .insert(Job {
            job_name: "Draft Opening".to_string(),
            ..job(JobStatus::Draft)
        })
        .expect("job stored");

    Fixture {
        service: Arc::new(ApplicationService::new(jobs, applications.clone())),
        applications,
        open_job,
        draft_job,
    }
}

pub(super) fn caller(role: Role) -> Caller {
    Caller::new(UserId::generate(), role)
}

pub(super) fn post_json(uri: &str, caller: Caller, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(USER_ID_HEADER, caller.user_id.to_string())
        .header(USER_ROLE_HEADER, caller.role.label())
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Loses the race: reports no prior application, then refuses the insert.
pub(super) struct RacingApplications;

impl ApplicationRepository for RacingApplications {
    fn insert(&self, _record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn exists(&self, _job_id: &JobId, _candidate_id: &UserId) -> Result<bool, RepositoryError> {
        Ok(false)
    }

    fn for_job(&self, _job_id: &JobId) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Ok(Vec::new())
    }

    fn applied_jobs(&self, _candidate_id: &UserId) -> Result<HashSet<JobId>, RepositoryError> {
        Ok(HashSet::new())
    }
}

pub(super) struct UnavailableApplications;

impl ApplicationRepository for UnavailableApplications {
    fn insert(&self, _record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn exists(&self, _job_id: &JobId, _candidate_id: &UserId) -> Result<bool, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn for_job(&self, _job_id: &JobId) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn applied_jobs(&self, _candidate_id: &UserId) -> Result<HashSet<JobId>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }
}
