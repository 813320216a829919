//! Candidate applications to posted jobs.
//!
//! Submissions are checked against the job's profile configuration before anything is stored, and
//! a candidate can hold at most one application per job.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use crate::board::profile::ApplicationPayload;
pub use domain::{ApplicantAnswers, ApplicationId, ApplicationRecord};
pub use repository::ApplicationRepository;
pub use router::application_router;
pub use service::{ApplicationService, ApplicationServiceError};
