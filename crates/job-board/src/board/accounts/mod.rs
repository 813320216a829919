//! Employer and candidate accounts: registration, login, and demo seeding.

pub mod domain;
mod password;
pub mod repository;
pub mod router;
pub mod service;

pub use domain::{Credentials, Registration, RegistrationError, Role, User, UserId, UserView};
pub use password::{PasswordError, PasswordHasher};
pub use repository::UserRepository;
pub use router::account_router;
pub use service::{AccountService, AccountServiceError, DEMO_PASSWORD};
