use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::error_response;
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use services::booking_service::BookingService;
use util::state::AppState;

/// DELETE /api/bookings/{booking_id}
pub async fn cancel_booking(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(booking_id): Path<i64>,
) -> impl IntoResponse {
    match BookingService::cancel(app_state.db(), &claims, booking_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::<()>::success((), "Booking cancelled successfully")),
        ),
        Err(e) => error_response(e),
    }
}
