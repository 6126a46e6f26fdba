//! # apartments Routes Module
//!
//! Listing and detail endpoints are public; changes need an admin, reviews
//! need a logged-in user.
//!
//! - `get.rs`: list, detail, reviews, external reviews
//! - `post.rs`: create apartment, add review
//! - `put.rs`: update apartment
//! - `delete.rs`: delete apartment

pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use crate::auth::guards::{allow_admin, allow_authenticated};
use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, post, put},
};
use util::state::AppState;

/// Builds the `/apartments` route group.
///
/// - `GET /apartments` → `list_apartments`
/// - `POST /apartments` → `create_apartment` (admin)
/// - `GET /apartments/{apartment_id}` → `get_apartment`
/// - `PUT /apartments/{apartment_id}` → `update_apartment` (admin)
/// - `DELETE /apartments/{apartment_id}` → `delete_apartment` (admin)
/// - `GET /apartments/{apartment_id}/reviews` → `list_reviews`
/// - `POST /apartments/{apartment_id}/reviews` → `add_review` (authenticated)
/// - `GET /apartments/{apartment_id}/reviews/external` → `list_external_reviews`
pub fn apartment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get::list_apartments))
        .route("/", post(post::create_apartment).route_layer(from_fn(allow_admin)))
        .route("/{apartment_id}", get(get::get_apartment))
        .route(
            "/{apartment_id}",
            put(put::update_apartment).route_layer(from_fn(allow_admin)),
        )
        .route(
            "/{apartment_id}",
            delete(delete::delete_apartment).route_layer(from_fn(allow_admin)),
        )
        .route("/{apartment_id}/reviews", get(get::list_reviews))
        .route(
            "/{apartment_id}/reviews",
            post(post::add_review).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/{apartment_id}/reviews/external",
            get(get::list_external_reviews),
        )
}
