use serde::{Deserialize, Serialize};

use super::FieldKey;

/// Raw values a candidate submits against a job. Unknown members are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationPayload {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub photo_profile: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub domicile: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub birth: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
}

impl ApplicationPayload {
    pub fn value(&self, key: FieldKey) -> Option<&str> {
        let raw = match key {
            FieldKey::FullName => &self.full_name,
            FieldKey::Email => &self.email,
            FieldKey::PhotoProfile => &self.photo_profile,
            FieldKey::Gender => &self.gender,
            FieldKey::Domicile => &self.domicile,
            FieldKey::Phone => &self.phone,
            FieldKey::Birth => &self.birth,
            FieldKey::Linkedin => &self.linkedin,
        };
        raw.as_deref()
    }

    /// Trimmed value, `None` when absent or blank.
    pub fn filled(&self, key: FieldKey) -> Option<&str> {
        non_blank(self.value(key))
    }

    pub fn filled_country_code(&self) -> Option<&str> {
        non_blank(self.country_code.as_deref())
    }

    pub fn set(&mut self, key: FieldKey, value: impl Into<String>) -> &mut Self {
        let slot = match key {
            FieldKey::FullName => &mut self.full_name,
            FieldKey::Email => &mut self.email,
            FieldKey::PhotoProfile => &mut self.photo_profile,
            FieldKey::Gender => &mut self.gender,
            FieldKey::Domicile => &mut self.domicile,
            FieldKey::Phone => &mut self.phone,
            FieldKey::Birth => &mut self.birth,
            FieldKey::Linkedin => &mut self.linkedin,
        };
        *slot = Some(value.into());
        self
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|trimmed| !trimmed.is_empty())
}
