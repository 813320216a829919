use crate::board::profile::{ApplicationPayload, FieldKey, ProfileConfiguration, RequirementLevel};

/// Pinned fields mandatory, LinkedIn and birth optional, everything else off.
pub(super) fn scenario_config() -> ProfileConfiguration {
    ProfileConfiguration::uniform(RequirementLevel::Off)
        .with_level(FieldKey::FullName, RequirementLevel::Mandatory)
        .with_level(FieldKey::Email, RequirementLevel::Mandatory)
        .with_level(FieldKey::PhotoProfile, RequirementLevel::Mandatory)
        .with_level(FieldKey::Linkedin, RequirementLevel::Optional)
        .with_level(FieldKey::Birth, RequirementLevel::Optional)
}

pub(super) fn scenario_payload() -> ApplicationPayload {
    ApplicationPayload {
        full_name: Some("Jane Doe".to_string()),
        email: Some("jane@example.com".to_string()),
        photo_profile: Some("http://x/y.png".to_string()),
        linkedin: Some(String::new()),
        birth: Some(String::new()),
        ..ApplicationPayload::default()
    }
}

pub(super) fn complete_payload() -> ApplicationPayload {
    ApplicationPayload {
        full_name: Some("Jane Doe".to_string()),
        email: Some("jane@example.com".to_string()),
        photo_profile: Some("https://cdn.example.com/jane.png".to_string()),
        gender: Some("female".to_string()),
        domicile: Some("Jakarta".to_string()),
        phone: Some("81234567".to_string()),
        country_code: Some("+62".to_string()),
        birth: Some("1994-02-28".to_string()),
        linkedin: Some("https://www.linkedin.com/in/jane-doe".to_string()),
    }
}
