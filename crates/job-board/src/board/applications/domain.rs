use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::board::accounts::UserId;
use crate::board::jobs::JobId;
use crate::board::profile::rules::parse_birth_date;
use crate::board::profile::{ApplicationPayload, FieldKey, ProfileConfiguration};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(pub Uuid);

impl ApplicationId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Profile answers kept for a job. Fields the job does not collect are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantAnswers {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub photo_profile: Option<String>,
    pub gender: Option<String>,
    pub domicile: Option<String>,
    pub phone: Option<String>,
    pub country_code: Option<String>,
    pub birth: Option<NaiveDate>,
    pub linkedin: Option<String>,
}

impl ApplicantAnswers {
    /// Trimmed copy of the active fields of an already validated payload.
    pub fn collect(config: &ProfileConfiguration, payload: &ApplicationPayload) -> Self {
        let keep = |key: FieldKey| {
            config
                .level(key)
                .is_active()
                .then(|| payload.filled(key).map(str::to_string))
                .flatten()
        };

        let phone = keep(FieldKey::Phone);
        let country_code = phone
            .as_ref()
            .and_then(|_| payload.filled_country_code().map(str::to_string));

        Self {
            full_name: keep(FieldKey::FullName),
            email: keep(FieldKey::Email),
            photo_profile: keep(FieldKey::PhotoProfile),
            gender: keep(FieldKey::Gender),
            domicile: keep(FieldKey::Domicile),
            phone,
            country_code,
            birth: keep(FieldKey::Birth).and_then(|raw| parse_birth_date(&raw)),
            linkedin: keep(FieldKey::Linkedin),
        }
    }
}

/// Accepted application of one candidate to one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub id: ApplicationId,
    pub job_id: JobId,
    pub candidate_id: UserId,
    pub answers: ApplicantAnswers,
    pub submitted_at: DateTime<Utc>,
}
