//! Routes of the ticket service.
//!
//! - `/api/health` → liveness (public)
//! - `/api/tickets` → tickets and replies (authenticated; reopen and delete
//!   are admin-only)

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use crate::auth::allow_admin;
use ::common::ApiResponse;
use axum::{
    Json, Router,
    middleware::from_fn,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use util::state::AppState;

pub fn ticket_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get::list_tickets).post(post::create_ticket))
        .route("/{ticket_id}", get(get::get_ticket))
        .route(
            "/{ticket_id}",
            delete(delete::delete_ticket).route_layer(from_fn(allow_admin)),
        )
        .route("/{ticket_id}/replies", post(post::add_reply))
        .route("/{ticket_id}/close", put(put::close_ticket))
        .route(
            "/{ticket_id}/open",
            put(put::open_ticket).route_layer(from_fn(allow_admin)),
        )
}

async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::success("OK", "Ticket service is healthy"))
}

pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/tickets", ticket_routes())
        .with_state(app_state)
}
