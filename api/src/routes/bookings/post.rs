use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{BookingResponse, error_response};
use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use services::booking_service::{BookingService, CreateBooking};
use util::state::AppState;

/// POST /api/bookings
///
/// Book an apartment for the authenticated user.
///
/// ### Request Body
/// ```json
/// {
///   "apartment_id": 3,
///   "check_in": "2025-07-01",
///   "check_out": "2025-07-05"
/// }
/// ```
///
/// ### Responses
/// - `201 Created` with `total_price = nights × price_per_night`
/// - `400 Bad Request` (check-out not after check-in)
/// - `404 Not Found` (unknown apartment)
/// - `409 Conflict` (apartment unavailable or dates overlap another stay)
pub async fn create_booking(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<CreateBooking>,
) -> impl IntoResponse {
    match BookingService::create(app_state.db(), &claims, req).await {
        Ok(booking) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(BookingResponse::from(booking), "Booking created successfully")),
        ),
        Err(e) => error_response(e),
    }
}
