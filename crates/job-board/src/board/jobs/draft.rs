use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::domain::{Job, JobId, JobStatus, JobType};
use crate::board::profile::{FieldKey, ProfileConfiguration, RequirementLevel};

/// Job creation request as submitted by an employer.
///
/// `profile_config` may name any subset of fields: pinned fields default to mandatory and the
/// rest to optional. Numbers and the job type are read leniently; a value of the wrong shape is
/// treated as missing so the matching rule reports it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobDraft {
    #[serde(default)]
    pub status: Option<JobStatus>,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub salary_min: Option<i64>,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub salary_max: Option<i64>,
    #[serde(default)]
    pub job_name: String,
    #[serde(default, deserialize_with = "lenient_job_type")]
    pub job_type: Option<JobType>,
    #[serde(default)]
    pub job_description: String,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub number_candidates: Option<i64>,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub profile_config: BTreeMap<FieldKey, RequirementLevel>,
}

impl JobDraft {
    /// Validate and materialize the job, reporting the first failing rule.
    pub fn into_job(self, id: JobId, created_at: DateTime<Utc>) -> Result<Job, JobDraftError> {
        let salary_min = self.salary_min.ok_or(JobDraftError::SalaryMinMissing)?;
        if salary_min < 0 {
            return Err(JobDraftError::SalaryMinNegative);
        }
        let salary_max = self.salary_max.ok_or(JobDraftError::SalaryMaxMissing)?;
        if salary_max < 0 {
            return Err(JobDraftError::SalaryMaxNegative);
        }

        let job_name = self.job_name.trim();
        if job_name.is_empty() {
            return Err(JobDraftError::NameRequired);
        }
        if job_name.chars().count() < 3 {
            return Err(JobDraftError::NameTooShort);
        }

        let job_type = self.job_type.ok_or(JobDraftError::TypeRequired)?;

        let job_description = self.job_description.trim();
        if job_description.is_empty() {
            return Err(JobDraftError::DescriptionRequired);
        }
        if job_description.chars().count() < 10 {
            return Err(JobDraftError::DescriptionTooShort);
        }

        let number_candidates = self
            .number_candidates
            .ok_or(JobDraftError::CandidatesMissing)?;
        if number_candidates < 1 {
            return Err(JobDraftError::CandidatesTooFew);
        }
        let number_candidates =
            u32::try_from(number_candidates).map_err(|_| JobDraftError::CandidatesTooMany)?;

        let company = self.company.trim();
        if company.is_empty() {
            return Err(JobDraftError::CompanyRequired);
        }
        let location = self.location.trim();
        if location.is_empty() {
            return Err(JobDraftError::LocationRequired);
        }

        if salary_max < salary_min {
            return Err(JobDraftError::SalaryRangeInverted);
        }

        let profile_config = resolve_profile(&self.profile_config)?;

        Ok(Job {
            id,
            job_name: job_name.to_string(),
            job_type,
            job_description: job_description.to_string(),
            company: company.to_string(),
            location: location.to_string(),
            salary_min,
            salary_max,
            number_candidates,
            status: self.status.unwrap_or_default(),
            created_at,
            profile_config,
        })
    }
}

fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| {
        value.as_i64().or_else(|| {
            value
                .as_f64()
                .filter(|number| number.fract() == 0.0 && number.abs() < i64::MAX as f64)
                .map(|number| number as i64)
        })
    }))
}

fn lenient_job_type<'de, D>(deserializer: D) -> Result<Option<JobType>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| serde_json::from_value(value).ok()))
}

fn resolve_profile(
    requested: &BTreeMap<FieldKey, RequirementLevel>,
) -> Result<ProfileConfiguration, JobDraftError> {
    let mut config = ProfileConfiguration::standard();
    for (key, level) in requested {
        config = config.with_level(*key, *level);
    }

    match config.unpinned_fields().first() {
        Some(field) => Err(JobDraftError::PinnedField(*field)),
        None => Ok(config),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum JobDraftError {
    #[error("Salary min must be a number")]
    SalaryMinMissing,
    #[error("Salary min cannot be negative")]
    SalaryMinNegative,
    #[error("Salary max must be a number")]
    SalaryMaxMissing,
    #[error("Salary max cannot be negative")]
    SalaryMaxNegative,
    #[error("Job name is required")]
    NameRequired,
    #[error("Job name must be at least 3 characters")]
    NameTooShort,
    #[error("Job type is required")]
    TypeRequired,
    #[error("Job description is required")]
    DescriptionRequired,
    #[error("Description must be at least 10 characters")]
    DescriptionTooShort,
    #[error("Number of candidates must be a number")]
    CandidatesMissing,
    #[error("At least one candidate is required")]
    CandidatesTooFew,
    #[error("Number of candidates is too large")]
    CandidatesTooMany,
    #[error("Company name is required")]
    CompanyRequired,
    #[error("Location is required")]
    LocationRequired,
    #[error("Salary max must be greater than or equal to salary min")]
    SalaryRangeInverted,
    #[error("{0} must remain mandatory")]
    PinnedField(FieldKey),
}
