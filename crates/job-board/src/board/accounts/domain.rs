use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::board::profile::rules::is_email;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Candidate,
}

impl Role {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Some(Self::Admin),
            "candidate" => Some(Self::Candidate),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Candidate => "candidate",
        }
    }
}

/// Stored account, including the password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub phone: Option<String>,
    pub country_code: Option<String>,
    pub birth: Option<NaiveDate>,
    pub domicile: Option<String>,
    pub gender: Option<String>,
    pub linkedin: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn view(&self) -> UserView {
        UserView {
            id: self.id,
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            role: self.role,
            phone: self.phone.clone(),
            country_code: self.country_code.clone(),
            birth: self.birth,
            domicile: self.domicile.clone(),
            gender: self.gender.clone(),
            linkedin: self.linkedin.clone(),
        }
    }
}

/// Account as exposed over HTTP, without credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    pub id: UserId,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub phone: Option<String>,
    pub country_code: Option<String>,
    pub birth: Option<NaiveDate>,
    pub domicile: Option<String>,
    pub gender: Option<String>,
    pub linkedin: Option<String>,
}

/// Sign-up request body. Any `role` member is ignored; self-service accounts are candidates.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Registration {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl Registration {
    /// First failing rule, checked in form order.
    pub fn check(&self) -> Result<(), RegistrationError> {
        let full_name = self.full_name.trim();
        if full_name.is_empty() {
            return Err(RegistrationError::FullNameRequired);
        }
        if full_name.chars().count() < 3 {
            return Err(RegistrationError::FullNameTooShort);
        }
        check_email(&self.email)?;
        if self.password.is_empty() {
            return Err(RegistrationError::PasswordRequired);
        }
        Ok(())
    }
}

/// Login request body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl Credentials {
    pub fn check(&self) -> Result<(), RegistrationError> {
        check_email(&self.email)?;
        if self.password.is_empty() {
            return Err(RegistrationError::PasswordRequired);
        }
        Ok(())
    }
}

fn check_email(email: &str) -> Result<(), RegistrationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(RegistrationError::EmailRequired);
    }
    if !is_email(email) {
        return Err(RegistrationError::InvalidEmail);
    }
    Ok(())
}

pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    #[error("Full name is required")]
    FullNameRequired,
    #[error("Full name must be at least 3 characters")]
    FullNameTooShort,
    #[error("Email is required")]
    EmailRequired,
    #[error("Invalid email")]
    InvalidEmail,
    #[error("Password is required")]
    PasswordRequired,
}
