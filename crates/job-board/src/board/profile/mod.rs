//! Per-job applicant profile requirements.
//!
//! A job declares, for each candidate profile field, whether the field is mandatory, optional, or
//! not collected at all. The engine turns that configuration into the list of form fields to
//! render and into the validation applied to submitted applications.

mod engine;
mod payload;
pub(crate) mod rules;

#[cfg(test)]
mod tests;

pub use engine::{build_active_fields, validate, ActiveField, FieldErrors};
pub use payload::ApplicationPayload;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Candidate profile fields a job can ask for.
///
/// Declaration order is the canonical form order, so maps keyed by `FieldKey` iterate the way the
/// form is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    PhotoProfile,
    FullName,
    Birth,
    Gender,
    Domicile,
    Phone,
    Email,
    Linkedin,
}

impl FieldKey {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::PhotoProfile,
            Self::FullName,
            Self::Birth,
            Self::Gender,
            Self::Domicile,
            Self::Phone,
            Self::Email,
            Self::Linkedin,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PhotoProfile => "photo_profile",
            Self::FullName => "full_name",
            Self::Birth => "birth",
            Self::Gender => "gender",
            Self::Domicile => "domicile",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Linkedin => "linkedin",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PhotoProfile => "Photo Profile",
            Self::FullName => "Full Name",
            Self::Birth => "Date of Birth",
            Self::Gender => "Gender",
            Self::Domicile => "Domicile",
            Self::Phone => "Phone Number",
            Self::Email => "Email",
            Self::Linkedin => "LinkedIn Link",
        }
    }

    /// Fields that every job must collect.
    pub const fn is_pinned(self) -> bool {
        matches!(self, Self::FullName | Self::Email | Self::PhotoProfile)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementLevel {
    Mandatory,
    Optional,
    Off,
}

impl RequirementLevel {
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Off)
    }

    pub const fn is_required(self) -> bool {
        matches!(self, Self::Mandatory)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Mandatory => "mandatory",
            Self::Optional => "optional",
            Self::Off => "off",
        }
    }
}

/// Requirement level for every profile field of one job.
///
/// Only complete configurations can be constructed; a partial map is rejected with
/// [`ConfigIncompleteError`] both from code and during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<FieldKey, RequirementLevel>",
    into = "BTreeMap<FieldKey, RequirementLevel>"
)]
pub struct ProfileConfiguration {
    levels: BTreeMap<FieldKey, RequirementLevel>,
}

impl ProfileConfiguration {
    /// Every field set to the same level.
    pub fn uniform(level: RequirementLevel) -> Self {
        Self {
            levels: FieldKey::ordered()
                .into_iter()
                .map(|key| (key, level))
                .collect(),
        }
    }

    /// Pinned fields mandatory, everything else optional.
    pub fn standard() -> Self {
        Self {
            levels: FieldKey::ordered()
                .into_iter()
                .map(|key| {
                    let level = if key.is_pinned() {
                        RequirementLevel::Mandatory
                    } else {
                        RequirementLevel::Optional
                    };
                    (key, level)
                })
                .collect(),
        }
    }

    pub fn level(&self, key: FieldKey) -> RequirementLevel {
        // Every key is present once constructed.
        self.levels
            .get(&key)
            .copied()
            .unwrap_or(RequirementLevel::Off)
    }

    pub fn with_level(mut self, key: FieldKey, level: RequirementLevel) -> Self {
        self.levels.insert(key, level);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, RequirementLevel)> + '_ {
        self.levels.iter().map(|(key, level)| (*key, *level))
    }

    /// Pinned fields configured at anything other than mandatory.
    pub fn unpinned_fields(&self) -> Vec<FieldKey> {
        self.iter()
            .filter(|(key, level)| key.is_pinned() && !level.is_required())
            .map(|(key, _)| key)
            .collect()
    }
}

impl TryFrom<BTreeMap<FieldKey, RequirementLevel>> for ProfileConfiguration {
    type Error = ConfigIncompleteError;

    fn try_from(levels: BTreeMap<FieldKey, RequirementLevel>) -> Result<Self, Self::Error> {
        let missing: Vec<FieldKey> = FieldKey::ordered()
            .into_iter()
            .filter(|key| !levels.contains_key(key))
            .collect();

        if missing.is_empty() {
            Ok(Self { levels })
        } else {
            Err(ConfigIncompleteError { missing })
        }
    }
}

impl From<ProfileConfiguration> for BTreeMap<FieldKey, RequirementLevel> {
    fn from(config: ProfileConfiguration) -> Self {
        config.levels
    }
}

/// A profile configuration did not name every field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("profile configuration is missing levels for: {}", join_keys(.missing))]
pub struct ConfigIncompleteError {
    pub missing: Vec<FieldKey>,
}

fn join_keys(keys: &[FieldKey]) -> String {
    keys.iter()
        .map(|key| key.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
