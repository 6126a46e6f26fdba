use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{ApartmentResponse, ReviewResponse, error_response};
use crate::services::review_proxy::forward_in_background;
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use services::{
    apartment_service::{ApartmentService, CreateApartment},
    review_service::{CreateReview, ReviewService},
};
use util::state::AppState;

/// POST /api/apartments
///
/// Create an apartment. Admin only.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Sea View Loft",
///   "description": "Bright loft above the harbour",
///   "location": "Lisbon",
///   "bedrooms": 2,
///   "bathrooms": 1,
///   "amenities": ["WiFi", "Balcony"],
///   "price_per_night": 120.0
/// }
/// ```
///
/// ### Responses
/// - `201 Created`
/// - `400 Bad Request` (blank name/location, negative rooms, non-positive price)
/// - `401 Unauthorized` / `403 Forbidden`
pub async fn create_apartment(
    State(app_state): State<AppState>,
    Json(req): Json<CreateApartment>,
) -> impl IntoResponse {
    match ApartmentService::create(app_state.db(), req).await {
        Ok(apartment) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                ApartmentResponse::from(apartment),
                "Apartment created successfully",
            )),
        ),
        Err(e) => error_response(e),
    }
}

/// POST /api/apartments/{apartment_id}/reviews
///
/// Review an apartment as the authenticated user.
///
/// ### Request Body
/// ```json
/// { "rating": 5, "comment": "Wonderful view" }
/// ```
///
/// ### Responses
/// - `201 Created`
/// - `400 Bad Request` (rating outside 1..=5)
/// - `404 Not Found` (unknown apartment)
pub async fn add_review(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(apartment_id): Path<i64>,
    Json(mut req): Json<CreateReview>,
) -> impl IntoResponse {
    req.apartment_id = apartment_id;
    req.user_id = claims.user_id();

    match ReviewService::create(app_state.db(), req).await {
        Ok(review) => {
            forward_in_background(review.clone());
            (
                StatusCode::CREATED,
                Json(ApiResponse::success(ReviewResponse::from(review), "Review added successfully")),
            )
        }
        Err(e) => error_response(e),
    }
}
