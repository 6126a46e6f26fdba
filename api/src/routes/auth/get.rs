use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{UserResponse, error_response};
use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use services::user_service::UserService;
use util::state::AppState;

/// GET /auth/me
///
/// Returns the profile of the authenticated user.
///
/// - `200 OK` with the user
/// - `401 Unauthorized` without a valid token
/// - `404 Not Found` when the account was deleted after the token was issued
pub async fn get_me(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> impl IntoResponse {
    match UserService::get(app_state.db(), claims.user_id()).await {
        Ok(user) => (
            StatusCode::OK,
            Json(ApiResponse::success(UserResponse::from(user), "User data retrieved successfully")),
        ),
        Err(e) => error_response(e),
    }
}
