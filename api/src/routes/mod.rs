//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → Health check endpoint (public)
//! - `/auth` → Registration, login and current user
//! - `/apartments` → Apartment catalogue and reviews (public reads, admin writes)
//! - `/bookings` → Bookings of the caller (authenticated)
//! - `/users` → User management (admin-only)
//! - `/me` → Profile, own bookings and reviews (authenticated)
//! - `/reviews` → Editing and deleting reviews (authenticated)

use crate::auth::guards::{allow_admin, allow_authenticated};
use crate::routes::{
    apartments::apartment_routes, auth::auth_routes, bookings::booking_routes,
    health::health_routes, me::me_routes, reviews::review_routes, users::users_routes,
};
use axum::{Router, middleware::from_fn};
use util::state::AppState;

pub mod apartments;
pub mod auth;
pub mod bookings;
pub mod common;
pub mod health;
pub mod me;
pub mod reviews;
pub mod users;

/// Builds the router for everything under `/api`.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/auth", auth_routes())
        .nest("/apartments", apartment_routes())
        .nest("/bookings", booking_routes().route_layer(from_fn(allow_authenticated)))
        .nest("/users", users_routes().route_layer(from_fn(allow_admin)))
        .nest("/me", me_routes().route_layer(from_fn(allow_authenticated)))
        .nest("/reviews", review_routes().route_layer(from_fn(allow_authenticated)))
        .with_state(app_state)
}
