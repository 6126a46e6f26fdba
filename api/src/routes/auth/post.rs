use crate::response::ApiResponse;
use crate::routes::common::error_response;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::user;
use serde::Serialize;
use services::{
    ServiceError,
    token_service::TokenService,
    user_service::{LoginUser, RegisterUser, UserService},
};
use util::state::AppState;

#[derive(Debug, Serialize, Default)]
pub struct AuthResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub token: String,
    pub expires_at: String,
}

fn issue(user: user::Model) -> Result<AuthResponse, ServiceError> {
    let token = TokenService::issue_for(&user)?;
    Ok(AuthResponse {
        id: user.id,
        name: user.name,
        email: user.email,
        role: user.role.to_string(),
        token: token.token,
        expires_at: token.expires_at,
    })
}

/// POST /auth/register
///
/// Register a new guest account and log it in.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Ada Lovelace",
///   "email": "ada@example.com",
///   "password": "strongpassword"
/// }
/// ```
///
/// ### Responses
///
/// - `201 Created`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 1,
///     "name": "Ada Lovelace",
///     "email": "ada@example.com",
///     "role": "User",
///     "token": "jwt_token_here",
///     "expires_at": "2025-05-23T11:00:00Z"
///   },
///   "message": "User registered successfully"
/// }
/// ```
///
/// - `400 Bad Request` (validation failure)
/// - `409 Conflict` (email already registered)
pub async fn register(
    State(app_state): State<AppState>,
    Json(req): Json<RegisterUser>,
) -> impl IntoResponse {
    let result = match UserService::register(app_state.db(), req).await {
        Ok(user) => issue(user),
        Err(e) => Err(e),
    };

    match result {
        Ok(data) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(data, "User registered successfully")),
        ),
        Err(e) => error_response(e),
    }
}

/// POST /auth/login
///
/// Authenticate with email and password.
///
/// ### Request Body
/// ```json
/// {
///   "email": "ada@example.com",
///   "password": "strongpassword"
/// }
/// ```
///
/// ### Responses
/// - `200 OK` with the same payload as `register`
/// - `400 Bad Request` (validation failure)
/// - `401 Unauthorized` `Invalid email or password`
pub async fn login(
    State(app_state): State<AppState>,
    Json(req): Json<LoginUser>,
) -> impl IntoResponse {
    let result = match UserService::login(app_state.db(), req).await {
        Ok(user) => issue(user),
        Err(e) => Err(e),
    };

    match result {
        Ok(data) => (
            StatusCode::OK,
            Json(ApiResponse::success(data, "Login successful")),
        ),
        Err(e) => error_response(e),
    }
}
