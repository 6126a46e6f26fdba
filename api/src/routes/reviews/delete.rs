use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::error_response;
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use services::review_service::ReviewService;
use util::state::AppState;

/// DELETE /api/reviews/{review_id}
pub async fn delete_review(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(review_id): Path<i64>,
) -> impl IntoResponse {
    match ReviewService::delete(app_state.db(), &claims, review_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::<()>::success((), "Review deleted successfully")),
        ),
        Err(e) => error_response(e),
    }
}
