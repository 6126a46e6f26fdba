use crate::auth::AuthUser;
use crate::routes::common::{ReplyResponse, TicketResponse, error_response};
use crate::service::{CreateReply, CreateTicket, TicketService};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::ApiResponse;
use serde::Serialize;
use util::state::AppState;

/// POST /api/tickets
///
/// ### Request Body
/// ```json
/// { "subject": "No hot water", "description": "Since this morning" }
/// ```
///
/// ### Responses
/// - `201 Created` with status `Open`
/// - `400 Bad Request` (blank subject or description)
pub async fn create_ticket(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(req): Json<CreateTicket>,
) -> impl IntoResponse {
    match TicketService::create(app_state.db(), &claims, req).await {
        Ok(ticket) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(TicketResponse::from(ticket), "Ticket created successfully")),
        ),
        Err(e) => error_response(e),
    }
}

#[derive(Debug, Serialize, Default)]
pub struct ReplyCreatedResponse {
    pub reply: ReplyResponse,
    pub ticket_status: String,
}

/// POST /api/tickets/{ticket_id}/replies
///
/// ### Request Body
/// ```json
/// { "message": "A technician is on the way" }
/// ```
///
/// ### Responses
/// - `201 Created` with the reply and the ticket's new status
/// - `403 Forbidden` (neither owner nor admin)
/// - `409 Conflict` (ticket is closed)
pub async fn add_reply(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(ticket_id): Path<i64>,
    Json(req): Json<CreateReply>,
) -> impl IntoResponse {
    match TicketService::reply(app_state.db(), &claims, ticket_id, req).await {
        Ok((reply, status)) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                ReplyCreatedResponse { reply: ReplyResponse::from(reply), ticket_status: status.to_string() },
                "Reply added successfully",
            )),
        ),
        Err(e) => error_response(e),
    }
}
