use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::domain::{
    normalize_email, Credentials, Registration, RegistrationError, Role, User, UserId,
};
use super::password::{PasswordError, PasswordHasher};
use super::repository::UserRepository;
use crate::board::RepositoryError;

/// Password shared by the seeded demo accounts.
pub const DEMO_PASSWORD: &str = "Password123!";

const DEMO_ACCOUNTS: [(&str, &str, Role); 2] = [
    ("admin", "admin@mail.com", Role::Admin),
    ("candidate", "candidate@mail.com", Role::Candidate),
];

/// Registration and login on top of a user repository.
pub struct AccountService<U> {
    users: Arc<U>,
    hasher: PasswordHasher,
}

impl<U> AccountService<U>
where
    U: UserRepository + 'static,
{
    pub fn new(users: Arc<U>, hasher: PasswordHasher) -> Self {
        Self { users, hasher }
    }

    /// Create a candidate account.
    pub fn register(&self, registration: Registration) -> Result<User, AccountServiceError> {
        registration.check()?;
        let user = self.create(
            registration.full_name.trim(),
            &registration.email,
            &registration.password,
            Role::Candidate,
        )?;
        info!(user_id = %user.id, "candidate account registered");
        Ok(user)
    }

    pub fn authenticate(&self, credentials: Credentials) -> Result<User, AccountServiceError> {
        credentials.check()?;
        let email = normalize_email(&credentials.email);

        let Some(user) = self.users.find_by_email(&email)? else {
            warn!("login attempt for unknown account");
            return Err(AccountServiceError::InvalidCredentials);
        };

        if self.hasher.verify(&credentials.password, &user.password_hash)? {
            Ok(user)
        } else {
            warn!(user_id = %user.id, "login attempt with wrong password");
            Err(AccountServiceError::InvalidCredentials)
        }
    }

    /// Ensure the demo admin and candidate exist. Existing accounts are left untouched.
    pub fn seed_demo_accounts(&self) -> Result<Vec<User>, AccountServiceError> {
        let mut seeded = Vec::with_capacity(DEMO_ACCOUNTS.len());
        for (full_name, email, role) in DEMO_ACCOUNTS {
            let user = match self.users.find_by_email(email)? {
                Some(existing) => existing,
                None => self.create(full_name, email, DEMO_PASSWORD, role)?,
            };
            seeded.push(user);
        }
        info!(accounts = seeded.len(), "demo accounts ready");
        Ok(seeded)
    }

    fn create(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<User, AccountServiceError> {
        let user = User {
            id: UserId::generate(),
            full_name: full_name.to_string(),
            email: normalize_email(email),
            password_hash: self.hasher.hash(password)?,
            role,
            phone: None,
            country_code: None,
            birth: None,
            domicile: None,
            gender: None,
            linkedin: None,
            created_at: Utc::now(),
        };

        match self.users.insert(user) {
            Ok(user) => Ok(user),
            Err(RepositoryError::Conflict) => Err(AccountServiceError::EmailTaken),
            Err(other) => Err(other.into()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AccountServiceError {
    #[error(transparent)]
    Invalid(#[from] RegistrationError),
    #[error("Email already exists")]
    EmailTaken,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error(transparent)]
    Password(#[from] PasswordError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
