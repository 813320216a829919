use super::domain::{Job, JobId};
use crate::board::RepositoryError;

/// Storage abstraction for job postings.
pub trait JobRepository: Send + Sync {
    /// Fails with [`RepositoryError::Conflict`] when the same opening is already posted.
    fn insert(&self, job: Job) -> Result<Job, RepositoryError>;
    fn fetch(&self, id: &JobId) -> Result<Option<Job>, RepositoryError>;
    fn search(&self, query: &JobQuery) -> Result<JobPage, RepositoryError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Only an exact `asc` sorts oldest first.
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw {
            Some("asc") => Self::Asc,
            _ => Self::Desc,
        }
    }
}

/// One page of a case-insensitive search over name, company and location, ordered by creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobQuery {
    pub search: String,
    pub sort: SortOrder,
    pub offset: usize,
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPage {
    pub jobs: Vec<Job>,
    /// Jobs matching the search across all pages.
    pub total: usize,
}
