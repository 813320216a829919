use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use tracing::error;

use super::domain::{Credentials, Registration};
use super::repository::UserRepository;
use super::service::{AccountService, AccountServiceError};
use crate::board::{body_rejection_response, message_response};

/// Public sign-up and login endpoints.
pub fn account_router<U>(service: Arc<AccountService<U>>) -> Router
where
    U: UserRepository + 'static,
{
    Router::new()
        .route("/api/auth/register", post(register_handler::<U>))
        .route("/api/auth/login", post(login_handler::<U>))
        .with_state(service)
}

pub(crate) async fn register_handler<U>(
    State(service): State<Arc<AccountService<U>>>,
    body: Result<Json<Registration>, JsonRejection>,
) -> Response
where
    U: UserRepository + 'static,
{
    let Json(registration) = match body {
        Ok(body) => body,
        Err(rejection) => return body_rejection_response(rejection),
    };
    match service.register(registration) {
        Ok(user) => {
            let payload = json!({
                "message": "User registered successfully",
                "data": user.view(),
            });
            (StatusCode::CREATED, Json(payload)).into_response()
        }
        Err(err) => account_error_response(err),
    }
}

pub(crate) async fn login_handler<U>(
    State(service): State<Arc<AccountService<U>>>,
    body: Result<Json<Credentials>, JsonRejection>,
) -> Response
where
    U: UserRepository + 'static,
{
    let Json(credentials) = match body {
        Ok(body) => body,
        Err(rejection) => return body_rejection_response(rejection),
    };
    match service.authenticate(credentials) {
        Ok(user) => {
            let payload = json!({
                "message": "Login successful",
                "data": user.view(),
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => account_error_response(err),
    }
}

fn account_error_response(err: AccountServiceError) -> Response {
    match err {
        AccountServiceError::Invalid(reason) => {
            message_response(StatusCode::BAD_REQUEST, reason.to_string())
        }
        AccountServiceError::EmailTaken => message_response(StatusCode::CONFLICT, err.to_string()),
        AccountServiceError::InvalidCredentials => {
            message_response(StatusCode::UNAUTHORIZED, err.to_string())
        }
        AccountServiceError::Password(_) | AccountServiceError::Repository(_) => {
            error!(error = %err, "account request failed");
            message_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}
