use std::collections::HashSet;

use super::domain::ApplicationRecord;
use crate::board::accounts::UserId;
use crate::board::jobs::JobId;
use crate::board::RepositoryError;

/// Storage abstraction for applications.
///
/// Implementations must make `insert` atomic with respect to the (job, candidate) pair: a second
/// insert for the same pair fails with [`RepositoryError::Conflict`] even under concurrent
/// submissions.
pub trait ApplicationRepository: Send + Sync {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError>;
    fn exists(&self, job_id: &JobId, candidate_id: &UserId) -> Result<bool, RepositoryError>;
    /// Applications for a job, oldest first.
    fn for_job(&self, job_id: &JobId) -> Result<Vec<ApplicationRecord>, RepositoryError>;
    fn applied_jobs(&self, candidate_id: &UserId) -> Result<HashSet<JobId>, RepositoryError>;
}
