use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::error_response;
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use services::user_service::UserService;
use util::state::AppState;

/// DELETE /api/users/{user_id}
///
/// Deletes a user along with their bookings and reviews. Admins cannot delete
/// themselves (`403`).
pub async fn delete_user(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(user_id): Path<i64>,
) -> impl IntoResponse {
    match UserService::delete(app_state.db(), &claims, user_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::<()>::success((), "User deleted successfully")),
        ),
        Err(e) => error_response(e),
    }
}
