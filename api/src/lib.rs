pub mod auth;
pub mod graphql;
pub mod response;
pub mod routes;
pub mod services;

use axum::Router;
use graphql::{build_schema, graphql_routes};
use tower_http::{cors::CorsLayer, services::ServeDir};
use util::state::AppState;

/// The full application: `/api` REST routes, `/graphql`, and static files
/// for every other path. Request logging is layered on in `main`.
pub fn app(app_state: AppState, static_dir: &str) -> Router {
    let schema = build_schema(app_state.db_clone());

    Router::new()
        .nest("/api", routes::routes(app_state.clone()))
        .merge(graphql_routes(schema).with_state(app_state))
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::very_permissive())
}
