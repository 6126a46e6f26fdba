use crate::models::{ticket, ticket_reply};
use axum::{Json, http::StatusCode};
use common::ApiResponse;
use serde::Serialize;
use services::ServiceError;

lazy_static::lazy_static! {
    static ref SORT_REGEX: regex::Regex = regex::Regex::new(r"^-?[a-z_]+(,-?[a-z_]+)*$").unwrap();
}

pub fn is_valid_sort(sort: &str) -> bool {
    SORT_REGEX.is_match(sort)
}

pub fn error_response<T>(err: ServiceError) -> (StatusCode, Json<ApiResponse<T>>)
where
    T: Serialize + Default,
{
    let status = match &err {
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ServiceError::Conflict(_) => StatusCode::CONFLICT,
        ServiceError::Forbidden(_) => StatusCode::FORBIDDEN,
        ServiceError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        ServiceError::Upstream(_) => StatusCode::BAD_GATEWAY,
        ServiceError::Database(_) | ServiceError::Token(_) => {
            tracing::error!(error = %err, "ticket request failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Internal server error")),
            );
        }
    };
    (status, Json(ApiResponse::error(err.to_string())))
}

pub fn bad_request<T>(message: impl Into<String>) -> (StatusCode, Json<ApiResponse<T>>)
where
    T: Serialize + Default,
{
    (StatusCode::BAD_REQUEST, Json(ApiResponse::error(message)))
}

#[derive(Debug, Serialize, Default)]
pub struct TicketResponse {
    pub id: i64,
    pub user_id: i64,
    pub user_email: String,
    pub subject: String,
    pub description: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ticket::Model> for TicketResponse {
    fn from(t: ticket::Model) -> Self {
        Self {
            id: t.id,
            user_id: t.user_id,
            user_email: t.user_email,
            subject: t.subject,
            description: t.description,
            status: t.status.to_string(),
            created_at: t.created_at.to_rfc3339(),
            updated_at: t.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, Default)]
pub struct ReplyResponse {
    pub id: i64,
    pub ticket_id: i64,
    pub replier_id: i64,
    pub replier_email: String,
    pub message: String,
    pub created_at: String,
}

impl From<ticket_reply::Model> for ReplyResponse {
    fn from(r: ticket_reply::Model) -> Self {
        Self {
            id: r.id,
            ticket_id: r.ticket_id,
            replier_id: r.replier_id,
            replier_email: r.replier_email,
            message: r.message,
            created_at: r.created_at.to_rfc3339(),
        }
    }
}
