mod http_test;
mod mutations_test;
mod queries_test;

use api::graphql::{AppSchema, Viewer, build_schema};
use db::models::user::Model as UserModel;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use util::jwt::Claims;

pub fn schema(db: &DatabaseConnection) -> AppSchema {
    build_schema(db.clone())
}

/// Executes `query`, optionally as `user`, and returns the response as JSON.
pub async fn run(schema: &AppSchema, query: &str, user: Option<&UserModel>) -> Value {
    let mut request = async_graphql::Request::new(query);
    if let Some(user) = user {
        request = request.data(Viewer(Claims {
            sub: user.id,
            email: user.email.clone(),
            admin: user.is_admin(),
            exp: 0,
        }));
    }
    serde_json::to_value(schema.execute(request).await).unwrap()
}

pub fn error_code(response: &Value) -> &str {
    response["errors"][0]["extensions"]["code"].as_str().unwrap_or_default()
}
