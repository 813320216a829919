use std::sync::Arc;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tracing::error;

use super::domain::JobId;
use super::draft::JobDraft;
use super::repository::JobRepository;
use super::service::{JobService, JobServiceError, ListParams};
use crate::board::accounts::Role;
use crate::board::applications::ApplicationRepository;
use crate::board::{body_rejection_response, message_response, Caller};

/// Router builder exposing job posting, listing and detail endpoints.
pub fn job_router<J, A>(service: Arc<JobService<J, A>>) -> Router
where
    J: JobRepository + 'static,
    A: ApplicationRepository + 'static,
{
    Router::new()
        .route(
            "/api/jobs",
            get(list_handler::<J, A>).post(create_handler::<J, A>),
        )
        .route("/api/jobs/:id", get(detail_handler::<J, A>))
        .route("/api/jobs/:id/form", get(form_handler::<J, A>))
        .with_state(service)
}

pub(crate) async fn create_handler<J, A>(
    State(service): State<Arc<JobService<J, A>>>,
    caller: Caller,
    body: Result<Json<JobDraft>, JsonRejection>,
) -> Response
where
    J: JobRepository + 'static,
    A: ApplicationRepository + 'static,
{
    if let Err(rejection) = caller.require(Role::Admin) {
        return rejection.into_response();
    }
    let Json(draft) = match body {
        Ok(body) => body,
        Err(rejection) => return body_rejection_response(rejection),
    };

    match service.create(draft) {
        Ok(job) => {
            let payload = json!({
                "message": "Job created successfully",
                "job": job,
            });
            (StatusCode::CREATED, Json(payload)).into_response()
        }
        Err(err) => job_error_response(err),
    }
}

pub(crate) async fn list_handler<J, A>(
    State(service): State<Arc<JobService<J, A>>>,
    caller: Caller,
    query: Result<Query<ListParams>, QueryRejection>,
) -> Response
where
    J: JobRepository + 'static,
    A: ApplicationRepository + 'static,
{
    let params = query.map(|Query(params)| params).unwrap_or_default();

    match service.list(&caller, params) {
        Ok(listing) => (StatusCode::OK, Json(listing)).into_response(),
        Err(err) => job_error_response(err),
    }
}

pub(crate) async fn detail_handler<J, A>(
    State(service): State<Arc<JobService<J, A>>>,
    caller: Caller,
    Path(id): Path<String>,
) -> Response
where
    J: JobRepository + 'static,
    A: ApplicationRepository + 'static,
{
    let Some(id) = JobId::parse(&id) else {
        return job_error_response(JobServiceError::NotFound);
    };

    match service.detail(&caller, &id) {
        Ok(detail) => (StatusCode::OK, Json(detail)).into_response(),
        Err(err) => job_error_response(err),
    }
}

pub(crate) async fn form_handler<J, A>(
    State(service): State<Arc<JobService<J, A>>>,
    _caller: Caller,
    Path(id): Path<String>,
) -> Response
where
    J: JobRepository + 'static,
    A: ApplicationRepository + 'static,
{
    let Some(id) = JobId::parse(&id) else {
        return job_error_response(JobServiceError::NotFound);
    };

    match service.form(&id) {
        Ok(fields) => {
            let payload = json!({ "job_id": id, "fields": fields });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => job_error_response(err),
    }
}

fn job_error_response(err: JobServiceError) -> Response {
    match err {
        JobServiceError::Invalid(_) | JobServiceError::Duplicate => {
            message_response(StatusCode::BAD_REQUEST, err.to_string())
        }
        JobServiceError::NotFound => message_response(StatusCode::NOT_FOUND, err.to_string()),
        JobServiceError::Repository(_) => {
            error!(error = %err, "job request failed");
            message_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}
