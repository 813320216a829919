//! Request identity stamped by the upstream authentication gateway.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use super::accounts::{Role, UserId};
use super::message_response;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// The authenticated user behind a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub user_id: UserId,
    pub role: Role,
}

impl Caller {
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn require(&self, role: Role) -> Result<(), IdentityRejection> {
        if self.role == role {
            Ok(())
        } else {
            Err(IdentityRejection::Forbidden)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdentityRejection {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Forbidden")]
    Forbidden,
}

impl IntoResponse for IdentityRejection {
    fn into_response(self) -> Response {
        let status = match self {
            IdentityRejection::Unauthorized => StatusCode::UNAUTHORIZED,
            IdentityRejection::Forbidden => StatusCode::FORBIDDEN,
        };
        message_response(status, self.to_string())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = IdentityRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = header(parts, USER_ID_HEADER)
            .and_then(|raw| Uuid::parse_str(raw).ok())
            .map(UserId)
            .ok_or(IdentityRejection::Unauthorized)?;
        let role = header(parts, USER_ROLE_HEADER)
            .and_then(Role::parse)
            .ok_or(IdentityRejection::Unauthorized)?;

        Ok(Caller { user_id, role })
    }
}

fn header<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
}
