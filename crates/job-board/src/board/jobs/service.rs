use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::{Job, JobId, JobSummary};
use super::draft::{JobDraft, JobDraftError};
use super::repository::{JobQuery, JobRepository, SortOrder};
use crate::board::applications::{ApplicantAnswers, ApplicationRepository};
use crate::board::profile::{build_active_fields, ActiveField};
use crate::board::{Caller, RepositoryError};
use crate::config::MAX_PAGE_SIZE;

/// Query string accepted by the listing endpoint.
///
/// Values are kept raw: anything unusable falls back to the first page, the configured page size
/// and newest first.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
}

fn positive(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| *value > 0)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListMeta {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobListing {
    pub data: Vec<JobSummary>,
    pub meta: ListMeta,
}

/// Job as shown on its detail page.
///
/// `applicants` is only populated for employers.
#[derive(Debug, Clone, Serialize)]
pub struct JobDetail {
    #[serde(flatten)]
    pub job: Job,
    pub form_fields: Vec<ActiveField>,
    pub has_applied: bool,
    pub applicants: Vec<ApplicantAnswers>,
}

/// Posting, listing and detail views over the job repository.
pub struct JobService<J, A> {
    jobs: Arc<J>,
    applications: Arc<A>,
    page_size: usize,
}

impl<J, A> JobService<J, A>
where
    J: JobRepository + 'static,
    A: ApplicationRepository + 'static,
{
    pub fn new(jobs: Arc<J>, applications: Arc<A>, page_size: usize) -> Self {
        Self {
            jobs,
            applications,
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn create(&self, draft: JobDraft) -> Result<Job, JobServiceError> {
        let job = draft.into_job(JobId::generate(), Utc::now())?;

        let stored = match self.jobs.insert(job) {
            Ok(stored) => stored,
            Err(RepositoryError::Conflict) => return Err(JobServiceError::Duplicate),
            Err(other) => return Err(other.into()),
        };

        info!(
            job_id = %stored.id,
            status = stored.status.label(),
            "job posted"
        );
        Ok(stored)
    }

    pub fn list(&self, caller: &Caller, params: ListParams) -> Result<JobListing, JobServiceError> {
        let page = positive(params.page.as_deref()).unwrap_or(1);
        let limit = positive(params.limit.as_deref())
            .unwrap_or(self.page_size)
            .min(MAX_PAGE_SIZE);

        let query = JobQuery {
            search: params.search.unwrap_or_default(),
            sort: SortOrder::from_query(params.sort.as_deref()),
            offset: (page - 1).saturating_mul(limit),
            limit,
        };
        let result = self.jobs.search(&query)?;
        let applied = self.applications.applied_jobs(&caller.user_id)?;

        let data = result
            .jobs
            .iter()
            .map(|job| job.summary(applied.contains(&job.id)))
            .collect();

        Ok(JobListing {
            data,
            meta: ListMeta {
                total: result.total,
                page,
                limit,
                total_pages: result.total.div_ceil(limit),
            },
        })
    }

    pub fn detail(&self, caller: &Caller, id: &JobId) -> Result<JobDetail, JobServiceError> {
        let job = self.fetch(id)?;
        let has_applied = self.applications.exists(id, &caller.user_id)?;

        let applicants = if caller.is_admin() {
            self.applications
                .for_job(id)?
                .into_iter()
                .map(|record| record.answers)
                .collect()
        } else {
            Vec::new()
        };

        Ok(JobDetail {
            form_fields: build_active_fields(&job.profile_config),
            job,
            has_applied,
            applicants,
        })
    }

    /// Fields the application form for this job must render.
    pub fn form(&self, id: &JobId) -> Result<Vec<ActiveField>, JobServiceError> {
        let job = self.fetch(id)?;
        Ok(build_active_fields(&job.profile_config))
    }

    fn fetch(&self, id: &JobId) -> Result<Job, JobServiceError> {
        self.jobs.fetch(id)?.ok_or(JobServiceError::NotFound)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JobServiceError {
    #[error(transparent)]
    Invalid(#[from] JobDraftError),
    #[error("Job (same name, company, location, and type) already exists")]
    Duplicate,
    #[error("Job not found")]
    NotFound,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
