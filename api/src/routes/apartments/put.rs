use crate::response::ApiResponse;
use crate::routes::common::{ApartmentResponse, error_response};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use services::apartment_service::{ApartmentService, UpdateApartment};
use util::state::AppState;

/// PUT /api/apartments/{apartment_id}
///
/// Partial update; omitted fields keep their value. Admin only.
///
/// ### Request Body
/// ```json
/// { "price_per_night": 135.0, "is_available": false }
/// ```
///
/// ### Responses
/// - `200 OK`
/// - `400 Bad Request`
/// - `404 Not Found`
pub async fn update_apartment(
    State(app_state): State<AppState>,
    Path(apartment_id): Path<i64>,
    Json(req): Json<UpdateApartment>,
) -> impl IntoResponse {
    match ApartmentService::update(app_state.db(), apartment_id, req).await {
        Ok(apartment) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                ApartmentResponse::from(apartment),
                "Apartment updated successfully",
            )),
        ),
        Err(e) => error_response(e),
    }
}
