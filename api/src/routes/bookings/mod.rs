//! # bookings Routes Module
//!
//! All routes require authentication (applied where the group is nested).
//! Guests only see and change their own bookings; admins see all of them.

pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use util::state::AppState;

/// Builds the `/bookings` route group.
///
/// - `GET /bookings` → `list_bookings`
/// - `POST /bookings` → `create_booking`
/// - `GET /bookings/{booking_id}` → `get_booking`
/// - `PUT /bookings/{booking_id}` → `update_booking`
/// - `DELETE /bookings/{booking_id}` → `cancel_booking`
pub fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get::list_bookings))
        .route("/", post(post::create_booking))
        .route("/{booking_id}", get(get::get_booking))
        .route("/{booking_id}", put(put::update_booking))
        .route("/{booking_id}", delete(delete::cancel_booking))
}
