use crate::auth::AuthUser;
use crate::models::ticket::TicketStatus;
use crate::routes::common::{ReplyResponse, TicketResponse, bad_request, error_response, is_valid_sort};
use crate::service::{TicketQuery, TicketService};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use common::ApiResponse;
use serde::{Deserialize, Serialize};
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct ListTicketsQuery {
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<u64>,
    #[validate(range(min = 1, max = 100, message = "per_page must be between 1 and 100"))]
    pub per_page: Option<u64>,
    pub user_id: Option<i64>,
    pub status: Option<String>,
    pub query: Option<String>,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
    pub sort: Option<String>,
}

#[derive(Debug, Serialize, Default)]
pub struct TicketsListResponse {
    pub tickets: Vec<TicketResponse>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

#[derive(Debug, Serialize, Default)]
pub struct TicketWithRepliesResponse {
    #[serde(flatten)]
    pub ticket: TicketResponse,
    pub replies: Vec<ReplyResponse>,
}

/// GET /api/tickets
///
/// Tickets visible to the caller: their own, or all of them for admins.
///
/// ### Query Parameters
/// - `page`, `per_page` (1..=100, default 20)
/// - `status` (`Open`, `InProgress`, `CustomerReply`, `Closed`)
/// - `query` (subject, description or email, case-insensitive)
/// - `created_after`, `created_before` (RFC 3339)
/// - `user_id` (admins only)
/// - `sort` (`id|subject|status|created_at|updated_at|user_email`, `-` for descending)
///
/// ### Responses
/// - `200 OK` `{ tickets, page, per_page, total }`
/// - `400 Bad Request` (bad paging, sort or status)
pub async fn list_tickets(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
    Query(params): Query<ListTicketsQuery>,
) -> impl IntoResponse {
    if let Err(e) = params.validate() {
        return bad_request(common::format_validation_errors(&e));
    }
    if let Some(sort) = params.sort.as_deref() {
        if !is_valid_sort(sort) {
            return bad_request("Invalid sort parameter");
        }
    }
    let status = match params.status.as_deref() {
        Some(raw) => match raw.parse::<TicketStatus>() {
            Ok(status) => Some(status),
            Err(_) => return bad_request("Invalid status"),
        },
        None => None,
    };

    let query = TicketQuery {
        user_id: params.user_id,
        status,
        query: params.query,
        created_after: params.created_after,
        created_before: params.created_before,
        page: params.page,
        per_page: params.per_page,
        sort: params.sort,
    };

    match TicketService::list(app_state.db(), &claims, query).await {
        Ok(page) => {
            let response = TicketsListResponse {
                tickets: page.items.into_iter().map(TicketResponse::from).collect(),
                page: page.page,
                per_page: page.per_page,
                total: page.total,
            };
            (
                StatusCode::OK,
                Json(ApiResponse::success(response, "Tickets retrieved successfully")),
            )
        }
        Err(e) => error_response(e),
    }
}

/// GET /api/tickets/{ticket_id}
///
/// The ticket and its replies, oldest reply first. Owner or admin.
pub async fn get_ticket(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(ticket_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();
    let ticket = match TicketService::get(db, &claims, ticket_id).await {
        Ok(ticket) => ticket,
        Err(e) => return error_response(e),
    };

    match TicketService::replies(db, ticket.id).await {
        Ok(replies) => {
            let response = TicketWithRepliesResponse {
                ticket: TicketResponse::from(ticket),
                replies: replies.into_iter().map(ReplyResponse::from).collect(),
            };
            (
                StatusCode::OK,
                Json(ApiResponse::success(response, "Ticket retrieved successfully")),
            )
        }
        Err(e) => error_response(e),
    }
}
