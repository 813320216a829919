use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use super::FieldKey;

const EMAIL_PATTERN: &str = concat!(
    r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+",
    r"@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?",
    r"(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
);

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));

pub(crate) fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Absolute `http`/`https` URL with a host.
pub(crate) fn is_web_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}

pub(crate) fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

pub(super) fn required_message(key: FieldKey) -> &'static str {
    match key {
        FieldKey::PhotoProfile => "Photo profile is required",
        FieldKey::FullName => "Full name is required",
        FieldKey::Birth => "Date of birth is required",
        FieldKey::Gender => "Gender is required",
        FieldKey::Domicile => "Domicile is required",
        FieldKey::Phone => "Phone number is required",
        FieldKey::Email => "Email is required",
        FieldKey::Linkedin => "LinkedIn is required",
    }
}

pub(super) const INVALID_EMAIL: &str = "Invalid email format";
pub(super) const INVALID_LINKEDIN: &str = "LinkedIn must be a valid URL";
pub(super) const INVALID_BIRTH: &str = "Date of birth must be a valid date (YYYY-MM-DD)";
pub(super) const MISSING_COUNTRY_CODE: &str = "Country code is required";
