use crate::config::AuthConfig;

/// bcrypt hashing at a configured cost.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            cost: config.password_cost,
        }
    }

    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        bcrypt::hash(password, self.cost).map_err(|err| PasswordError(err.to_string()))
    }

    /// Malformed stored hashes are reported as errors rather than a mismatch.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        bcrypt::verify(password, hash).map_err(|err| PasswordError(err.to_string()))
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(AuthConfig::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("password hashing failed: {0}")]
pub struct PasswordError(pub String);
