//! GraphQL schema served at `/graphql`.
//!
//! `POST /graphql` executes queries; `GET /graphql` serves GraphiQL. A valid
//! bearer token makes the caller available to resolvers as a [`Viewer`]; a
//! missing or invalid one leaves the request anonymous.

pub mod context;
pub mod inputs;
pub mod mutation;
pub mod query;
pub mod types;

pub use context::Viewer;

use async_graphql::{EmptySubscription, Schema, http::GraphiQLSource};
use axum::{
    Extension, Json, Router,
    http::{HeaderMap, header::AUTHORIZATION},
    response::{Html, IntoResponse},
    routing::get,
};
use mutation::MutationRoot;
use query::QueryRoot;
use sea_orm::DatabaseConnection;
use util::{jwt::{decode_jwt, strip_bearer}, state::AppState};

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

const MAX_DEPTH: usize = 10;
const MAX_COMPLEXITY: usize = 500;

pub fn build_schema(db: DatabaseConnection) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(db)
        .limit_depth(MAX_DEPTH)
        .limit_complexity(MAX_COMPLEXITY)
        .finish()
}

fn viewer_from(headers: &HeaderMap) -> Option<Viewer> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = strip_bearer(value)?;
    match decode_jwt(token) {
        Ok(claims) => Some(Viewer(claims)),
        Err(e) => {
            tracing::debug!(error = %e, "ignoring invalid bearer token on graphql request");
            None
        }
    }
}

async fn graphql_handler(
    Extension(schema): Extension<AppSchema>,
    headers: HeaderMap,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    let mut request = request;
    if let Some(viewer) = viewer_from(&headers) {
        request = request.data(viewer);
    }
    Json(schema.execute(request).await)
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

pub fn graphql_routes(schema: AppSchema) -> Router<AppState> {
    Router::new()
        .route("/graphql", get(graphiql).post(graphql_handler))
        .layer(Extension(schema))
}
