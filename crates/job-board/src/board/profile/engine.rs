use std::collections::BTreeMap;

use serde::Serialize;

use super::rules::{
    self, required_message, INVALID_BIRTH, INVALID_EMAIL, INVALID_LINKEDIN, MISSING_COUNTRY_CODE,
};
use super::{ApplicationPayload, FieldKey, ProfileConfiguration, RequirementLevel};

/// A field the application form must render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActiveField {
    pub key: FieldKey,
    pub level: RequirementLevel,
    pub label: &'static str,
    pub required: bool,
}

/// Fields whose level is not `off`, in form order.
pub fn build_active_fields(config: &ProfileConfiguration) -> Vec<ActiveField> {
    FieldKey::ordered()
        .into_iter()
        .filter_map(|key| {
            let level = config.level(key);
            level.is_active().then(|| ActiveField {
                key,
                level,
                label: key.label(),
                required: level.is_required(),
            })
        })
        .collect()
}

/// Check a payload against a job's configuration, collecting every field error.
pub fn validate(
    config: &ProfileConfiguration,
    payload: &ApplicationPayload,
) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    for key in FieldKey::ordered() {
        let level = config.level(key);
        if !level.is_active() {
            continue;
        }

        match payload.filled(key) {
            None if level.is_required() => errors.insert(key, required_message(key)),
            None => {}
            Some(value) => {
                if let Some(message) = format_error(key, value, payload) {
                    errors.insert(key, message);
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn format_error(key: FieldKey, value: &str, payload: &ApplicationPayload) -> Option<&'static str> {
    match key {
        FieldKey::Email if !rules::is_email(value) => Some(INVALID_EMAIL),
        FieldKey::Linkedin if !rules::is_web_url(value) => Some(INVALID_LINKEDIN),
        FieldKey::Birth if rules::parse_birth_date(value).is_none() => Some(INVALID_BIRTH),
        FieldKey::Phone if payload.filled_country_code().is_none() => Some(MISSING_COUNTRY_CODE),
        _ => None,
    }
}

/// Field-level validation failures, iterated in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FieldKey, String>);

impl FieldErrors {
    pub fn insert(&mut self, key: FieldKey, message: impl Into<String>) {
        self.0.insert(key, message.into());
    }

    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.0.keys().copied()
    }

    /// First message in form order, for callers that report a single error.
    pub fn first_message(&self) -> Option<&str> {
        self.0.values().next().map(String::as_str)
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|(key, message)| format!("{key}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

impl std::error::Error for FieldErrors {}
