use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{ReviewResponse, error_response};
use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use services::review_service::ReviewService;
use util::state::AppState;

/// GET /api/me/reviews
pub async fn get_my_reviews(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> impl IntoResponse {
    match ReviewService::for_user(app_state.db(), claims.user_id()).await {
        Ok(reviews) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                reviews.into_iter().map(ReviewResponse::from).collect::<Vec<_>>(),
                "Reviews retrieved successfully",
            )),
        ),
        Err(e) => error_response(e),
    }
}
