use crate::auth::AuthUser;
use crate::routes::common::{TicketResponse, error_response};
use crate::service::TicketService;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::ApiResponse;
use util::state::AppState;

/// PUT /api/tickets/{ticket_id}/close
///
/// Owner or admin.
pub async fn close_ticket(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(ticket_id): Path<i64>,
) -> impl IntoResponse {
    match TicketService::close(app_state.db(), &claims, ticket_id).await {
        Ok(ticket) => (
            StatusCode::OK,
            Json(ApiResponse::success(TicketResponse::from(ticket), "Ticket closed successfully")),
        ),
        Err(e) => error_response(e),
    }
}

/// PUT /api/tickets/{ticket_id}/open
///
/// Admin only.
pub async fn open_ticket(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(ticket_id): Path<i64>,
) -> impl IntoResponse {
    match TicketService::reopen(app_state.db(), &claims, ticket_id).await {
        Ok(ticket) => (
            StatusCode::OK,
            Json(ApiResponse::success(TicketResponse::from(ticket), "Ticket reopened successfully")),
        ),
        Err(e) => error_response(e),
    }
}
