use crate::auth::AuthUser;
use crate::routes::common::error_response;
use crate::service::TicketService;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::ApiResponse;
use util::state::AppState;

/// DELETE /api/tickets/{ticket_id}
///
/// Admin only. Replies are removed with the ticket.
pub async fn delete_ticket(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(ticket_id): Path<i64>,
) -> impl IntoResponse {
    match TicketService::delete(app_state.db(), &claims, ticket_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::<()>::success((), "Ticket deleted successfully")),
        ),
        Err(e) => error_response(e),
    }
}
