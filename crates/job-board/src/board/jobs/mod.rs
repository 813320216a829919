//! Job postings: creation by employers, listing and detail views for everyone.

pub mod domain;
mod draft;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Job, JobId, JobStatus, JobSummary, JobType};
pub use draft::{JobDraft, JobDraftError};
pub use repository::{JobPage, JobQuery, JobRepository, SortOrder};
pub use router::job_router;
pub use service::{JobDetail, JobListing, JobService, JobServiceError, ListMeta, ListParams};
