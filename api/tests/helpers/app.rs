use axum::{Router, response::Response};
use db::test_utils::setup_test_db;
use db::models::user::Model as UserModel;
use serde_json::Value;
use util::{config::AppConfig, jwt::generate_jwt, state::AppState};

/// Router over a fresh in-memory database, without request logging (no
/// `ConnectInfo` under `oneshot`).
pub async fn make_test_app() -> (Router, AppState) {
    AppConfig::reset();
    let app_state = AppState::new(setup_test_db().await);
    let app = api::app(app_state.clone(), "./static-test");
    (app, app_state)
}

pub fn bearer(user: &UserModel) -> String {
    let (token, _) = generate_jwt(user.id, &user.email, user.is_admin()).unwrap();
    format!("Bearer {token}")
}

pub async fn get_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
