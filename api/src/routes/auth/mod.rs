//! # auth Routes Module
//!
//! Routes for the `/auth` endpoint group.
//!
//! - `post.rs`: registration and login
//! - `get.rs`: current user info

pub mod get;
pub mod post;

use crate::auth::guards::allow_authenticated;
use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use get::get_me;
use post::{login, register};
use util::state::AppState;

/// Builds the `/auth` route group.
///
/// - `POST /auth/register` → `register`
/// - `POST /auth/login` → `login`
/// - `GET /auth/me` → `get_me` (authenticated)
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(get_me).route_layer(from_fn(allow_authenticated)))
}
