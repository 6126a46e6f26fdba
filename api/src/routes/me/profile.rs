use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{UserResponse, error_response};
use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use services::user_service::{UpdateProfile, UserService};
use util::state::AppState;

/// PUT /api/me
///
/// Update the caller's name, email or password.
///
/// ### Request Body
/// ```json
/// { "name": "Ada", "email": "ada@example.org", "password": "a-new-password" }
/// ```
///
/// ### Responses
/// - `200 OK`
/// - `400 Bad Request` (validation failure)
/// - `409 Conflict` (email used by another account)
pub async fn update_profile(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<UpdateProfile>,
) -> impl IntoResponse {
    match UserService::update_profile(app_state.db(), claims.user_id(), req).await {
        Ok(user) => (
            StatusCode::OK,
            Json(ApiResponse::success(UserResponse::from(user), "Profile updated successfully")),
        ),
        Err(e) => error_response(e),
    }
}
