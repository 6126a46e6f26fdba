use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{BookingResponse, error_response};
use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use services::booking_service::BookingService;
use util::state::AppState;

/// GET /api/me/bookings
///
/// All bookings of the caller ordered by check-in date.
pub async fn get_my_bookings(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> impl IntoResponse {
    match BookingService::for_user(app_state.db(), claims.user_id()).await {
        Ok(bookings) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                bookings.into_iter().map(BookingResponse::from).collect::<Vec<_>>(),
                "Bookings retrieved successfully",
            )),
        ),
        Err(e) => error_response(e),
    }
}
