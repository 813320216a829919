//! Job postings, per-job applicant profile requirements, and candidate applications.

pub mod board;
pub mod config;
pub mod error;
pub mod telemetry;
