use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{ReviewResponse, error_response};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use services::review_service::{ReviewService, UpdateReview};
use util::state::AppState;

/// PUT /api/reviews/{review_id}
///
/// ### Request Body
/// ```json
/// { "rating": 4, "comment": "Still great" }
/// ```
///
/// - `200 OK`
/// - `400 Bad Request` (rating outside 1..=5)
/// - `403 Forbidden` (not the author and not an admin)
/// - `404 Not Found`
pub async fn update_review(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(review_id): Path<i64>,
    Json(req): Json<UpdateReview>,
) -> impl IntoResponse {
    match ReviewService::update(app_state.db(), &claims, review_id, req).await {
        Ok(review) => (
            StatusCode::OK,
            Json(ApiResponse::success(ReviewResponse::from(review), "Review updated successfully")),
        ),
        Err(e) => error_response(e),
    }
}
