use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use tracing::error;

use super::repository::ApplicationRepository;
use super::service::{ApplicationService, ApplicationServiceError};
use crate::board::accounts::Role;
use crate::board::jobs::{JobId, JobRepository};
use crate::board::profile::ApplicationPayload;
use crate::board::{body_rejection_response, message_response, Caller};

/// Router builder exposing the candidate submission endpoint.
pub fn application_router<J, A>(service: Arc<ApplicationService<J, A>>) -> Router
where
    J: JobRepository + 'static,
    A: ApplicationRepository + 'static,
{
    Router::new()
        .route("/api/jobs/:id/application", post(submit_handler::<J, A>))
        .with_state(service)
}

pub(crate) async fn submit_handler<J, A>(
    State(service): State<Arc<ApplicationService<J, A>>>,
    caller: Caller,
    Path(job_id): Path<String>,
    body: Result<Json<ApplicationPayload>, JsonRejection>,
) -> Response
where
    J: JobRepository + 'static,
    A: ApplicationRepository + 'static,
{
    if let Err(rejection) = caller.require(Role::Candidate) {
        return rejection.into_response();
    }

    let Some(job_id) = JobId::parse(&job_id) else {
        return message_response(StatusCode::NOT_FOUND, "Job not found");
    };
    let Json(payload) = match body {
        Ok(body) => body,
        Err(rejection) => return body_rejection_response(rejection),
    };

    match service.submit(caller.user_id, job_id, payload) {
        Ok(record) => {
            let payload = json!({
                "message": "Your application was sent!",
                "application_id": record.id,
            });
            (StatusCode::CREATED, Json(payload)).into_response()
        }
        Err(ApplicationServiceError::Invalid(errors)) => {
            let payload = json!({
                "message": errors.first_message().unwrap_or("Invalid application"),
                "errors": errors,
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Err(err @ ApplicationServiceError::JobNotFound) => {
            message_response(StatusCode::NOT_FOUND, err.to_string())
        }
        Err(
            err @ (ApplicationServiceError::JobClosed(_) | ApplicationServiceError::AlreadyApplied),
        ) => message_response(StatusCode::BAD_REQUEST, err.to_string()),
        Err(err @ ApplicationServiceError::Repository(_)) => {
            error!(error = %err, "application submission failed");
            message_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}
