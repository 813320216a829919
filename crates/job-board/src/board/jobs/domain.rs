use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::board::profile::ProfileConfiguration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub Uuid);

impl JobId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw.trim()).ok().map(Self)
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Publication state. Only active jobs accept applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    Active,
    Draft,
    Inactive,
}

impl JobStatus {
    pub const fn label(self) -> &'static str {
        match self {
            JobStatus::Active => "active",
            JobStatus::Draft => "draft",
            JobStatus::Inactive => "inactive",
        }
    }

    pub const fn accepts_applications(self) -> bool {
        matches!(self, JobStatus::Active)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    #[serde(alias = "full-time")]
    FullTime,
    Contract,
    #[serde(alias = "part-time")]
    PartTime,
    Internship,
    Freelance,
}

impl JobType {
    pub const fn label(self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::Contract => "Contract",
            JobType::PartTime => "Part-time",
            JobType::Internship => "Internship",
            JobType::Freelance => "Freelance",
        }
    }
}

/// A posted job together with the profile fields it asks candidates for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub job_name: String,
    pub job_type: JobType,
    pub job_description: String,
    pub company: String,
    pub location: String,
    pub salary_min: i64,
    pub salary_max: i64,
    pub number_candidates: u32,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
    pub profile_config: ProfileConfiguration,
}

impl Job {
    /// Two postings are the same opening when name, company, location and type all match.
    pub fn same_opening(&self, other: &Job) -> bool {
        self.job_name == other.job_name
            && self.company == other.company
            && self.location == other.location
            && self.job_type == other.job_type
    }

    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&self.job_name, &self.company, &self.location]
            .iter()
            .any(|haystack| haystack.to_lowercase().contains(&needle))
    }

    pub fn summary(&self, has_applied: bool) -> JobSummary {
        JobSummary {
            id: self.id,
            job_name: self.job_name.clone(),
            job_type: self.job_type,
            job_description: self.job_description.clone(),
            company: self.company.clone(),
            location: self.location.clone(),
            salary_min: self.salary_min,
            salary_max: self.salary_max,
            number_candidates: self.number_candidates,
            status: self.status,
            created_at: self.created_at,
            has_applied,
        }
    }
}

/// List entry, annotated for the requesting user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobSummary {
    pub id: JobId,
    pub job_name: String,
    pub job_type: JobType,
    pub job_description: String,
    pub company: String,
    pub location: String,
    pub salary_min: i64,
    pub salary_max: i64,
    pub number_candidates: u32,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
    pub has_applied: bool,
}
