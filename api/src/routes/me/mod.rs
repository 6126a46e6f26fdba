//! # me Routes Module
//!
//! Endpoints scoped to the authenticated user (guard applied where nested).
//!
//! - `profile.rs`: update own account
//! - `bookings.rs`: own bookings
//! - `reviews.rs`: own reviews

pub mod bookings;
pub mod profile;
pub mod reviews;

use axum::{
    Router,
    routing::{get, put},
};
use util::state::AppState;

/// Builds the `/me` route group.
///
/// - `PUT /me` → `update_profile`
/// - `GET /me/bookings` → `get_my_bookings`
/// - `GET /me/reviews` → `get_my_reviews`
pub fn me_routes() -> Router<AppState> {
    Router::new()
        .route("/", put(profile::update_profile))
        .route("/bookings", get(bookings::get_my_bookings))
        .route("/reviews", get(reviews::get_my_reviews))
}
