use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::domain::{ApplicantAnswers, ApplicationId, ApplicationRecord};
use super::repository::ApplicationRepository;
use crate::board::accounts::UserId;
use crate::board::jobs::{JobId, JobRepository, JobStatus};
use crate::board::profile::{validate, ApplicationPayload, FieldErrors};
use crate::board::RepositoryError;

/// Service validating submissions against the job's profile requirements and storing them.
pub struct ApplicationService<J, A> {
    jobs: Arc<J>,
    applications: Arc<A>,
}

impl<J, A> ApplicationService<J, A>
where
    J: JobRepository + 'static,
    A: ApplicationRepository + 'static,
{
    pub fn new(jobs: Arc<J>, applications: Arc<A>) -> Self {
        Self { jobs, applications }
    }

    /// Apply to a job.
    ///
    /// The payload is validated in full before the duplicate check, and the duplicate check runs
    /// before anything is persisted.
    pub fn submit(
        &self,
        candidate_id: UserId,
        job_id: JobId,
        payload: ApplicationPayload,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        let job = self
            .jobs
            .fetch(&job_id)?
            .ok_or(ApplicationServiceError::JobNotFound)?;

        if !job.status.accepts_applications() {
            return Err(ApplicationServiceError::JobClosed(job.status));
        }

        if let Err(errors) = validate(&job.profile_config, &payload) {
            info!(%job_id, fields = errors.len(), "application rejected by profile requirements");
            return Err(ApplicationServiceError::Invalid(errors));
        }

        if self.applications.exists(&job_id, &candidate_id)? {
            warn!(%job_id, %candidate_id, "duplicate application attempt");
            return Err(ApplicationServiceError::AlreadyApplied);
        }

        let record = ApplicationRecord {
            id: ApplicationId::generate(),
            job_id,
            candidate_id,
            answers: ApplicantAnswers::collect(&job.profile_config, &payload),
            submitted_at: Utc::now(),
        };

        let stored = match self.applications.insert(record) {
            Ok(stored) => stored,
            Err(RepositoryError::Conflict) => {
                warn!(%job_id, %candidate_id, "concurrent duplicate application");
                return Err(ApplicationServiceError::AlreadyApplied);
            }
            Err(other) => return Err(other.into()),
        };

        info!(%job_id, application_id = %stored.id.0, "application accepted");
        Ok(stored)
    }
}

/// Error raised by the application service.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationServiceError {
    #[error("Job not found")]
    JobNotFound,
    #[error("Job is not accepting applications")]
    JobClosed(JobStatus),
    #[error("{}", .0.first_message().unwrap_or("Invalid application"))]
    Invalid(FieldErrors),
    #[error("Already applied")]
    AlreadyApplied,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
