//! Support-ticket microservice: users open tickets about their stays and
//! exchange replies with staff. Runs as its own process over its own
//! database and trusts the booking API's JWTs.

pub mod auth;
pub mod filters;
pub mod migrations;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod service;
pub mod test_utils;

use axum::Router;
use tower_http::cors::CorsLayer;
use util::state::AppState;

pub fn app(app_state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::routes(app_state))
        .layer(CorsLayer::very_permissive())
}
