use crate::response::ApiResponse;
use crate::routes::common::{UserResponse, error_response};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use services::user_service::{AdminUpdateUser, UserService};
use util::state::AppState;

/// PUT /api/users/{user_id}
///
/// Update a user's name, email or role. Admin only.
///
/// ### Request Body
/// ```json
/// { "name": "Ada L.", "role": "Admin" }
/// ```
///
/// ### Responses
/// - `200 OK`
/// - `400 Bad Request` (invalid email, blank name)
/// - `404 Not Found`
/// - `409 Conflict` (email taken by another account)
pub async fn update_user(
    State(app_state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(req): Json<AdminUpdateUser>,
) -> impl IntoResponse {
    match UserService::admin_update(app_state.db(), user_id, req).await {
        Ok(user) => (
            StatusCode::OK,
            Json(ApiResponse::success(UserResponse::from(user), "User updated successfully")),
        ),
        Err(e) => error_response(e),
    }
}
