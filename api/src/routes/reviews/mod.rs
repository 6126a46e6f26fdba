pub mod delete;
pub mod put;

use axum::{
    Router,
    routing::{delete, put},
};
use util::state::AppState;

/// Builds the `/reviews` route group (authenticated; author or admin).
///
/// - `PUT /reviews/{review_id}` → `update_review`
/// - `DELETE /reviews/{review_id}` → `delete_review`
pub fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/{review_id}", put(put::update_review))
        .route("/{review_id}", delete(delete::delete_review))
}
