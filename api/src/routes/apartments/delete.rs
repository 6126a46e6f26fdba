use crate::response::ApiResponse;
use crate::routes::common::error_response;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use services::apartment_service::ApartmentService;
use util::state::AppState;

/// DELETE /api/apartments/{apartment_id}
///
/// Deletes the apartment together with its bookings and reviews. Admin only.
pub async fn delete_apartment(
    State(app_state): State<AppState>,
    Path(apartment_id): Path<i64>,
) -> impl IntoResponse {
    match ApartmentService::delete(app_state.db(), apartment_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::<()>::success((), "Apartment deleted successfully")),
        ),
        Err(e) => error_response(e),
    }
}
