//! Job postings, applications, and the accounts that act on them.

pub mod accounts;
pub mod applications;
pub mod identity;
pub mod jobs;
pub mod memory;
pub mod profile;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::debug;

pub use identity::{Caller, IdentityRejection};

/// Error enumeration shared by every repository.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

pub(crate) fn message_response(status: StatusCode, message: impl Into<String>) -> Response {
    let message = message.into();
    (status, Json(json!({ "message": message }))).into_response()
}

/// Malformed or mistyped JSON bodies answer 400 `{"message"}`.
pub(crate) fn body_rejection_response(rejection: JsonRejection) -> Response {
    debug!(reason = %rejection.body_text(), "request body rejected");
    message_response(StatusCode::BAD_REQUEST, "Invalid request body")
}
