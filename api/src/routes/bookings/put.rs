use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{BookingResponse, error_response};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use services::booking_service::{BookingService, UpdateBooking};
use util::state::AppState;

/// PUT /api/bookings/{booking_id}
///
/// Change the dates of a booking. Availability and price are re-evaluated;
/// the booking's own dates do not count as a clash.
pub async fn update_booking(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(booking_id): Path<i64>,
    Json(req): Json<UpdateBooking>,
) -> impl IntoResponse {
    match BookingService::update(app_state.db(), &claims, booking_id, req).await {
        Ok(booking) => (
            StatusCode::OK,
            Json(ApiResponse::success(BookingResponse::from(booking), "Booking updated successfully")),
        ),
        Err(e) => error_response(e),
    }
}
