//! # users Routes Module
//!
//! Admin-only user management. The admin guard is applied where the group is
//! nested in `routes::routes`.

pub mod delete;
pub mod get;
pub mod put;

use axum::{
    Router,
    routing::{delete, get, put},
};
use util::state::AppState;

/// Builds the `/users` route group.
///
/// - `GET /users` → `list_users`
/// - `GET /users/{user_id}` → `get_user`
/// - `PUT /users/{user_id}` → `update_user`
/// - `DELETE /users/{user_id}` → `delete_user`
pub fn users_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get::list_users))
        .route("/{user_id}", get(get::get_user))
        .route("/{user_id}", put(put::update_user))
        .route("/{user_id}", delete(delete::delete_user))
}
