use crate::response::ApiResponse;
use crate::routes::common::{ApartmentResponse, ReviewResponse, bad_request, error_response, is_valid_sort};
use crate::services::review_proxy::ReviewProxy;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::filters::ApartmentFilter;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use services::{apartment_service::ApartmentService, review_service::ReviewService};
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct ListApartmentsQuery {
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<u64>,
    #[validate(range(min = 1, max = 100, message = "per_page must be between 1 and 100"))]
    pub per_page: Option<u64>,
    pub query: Option<String>,
    pub location: Option<String>,
    #[validate(range(min = 0.0, message = "min_price must not be negative"))]
    pub min_price: Option<f64>,
    #[validate(range(min = 0.0, message = "max_price must not be negative"))]
    pub max_price: Option<f64>,
    pub min_bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub amenity: Option<String>,
    pub available: Option<bool>,
    pub sort: Option<String>,
}

impl ListApartmentsQuery {
    fn filter(&self) -> ApartmentFilter {
        ApartmentFilter {
            query: self.query.clone(),
            location: self.location.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            min_bedrooms: self.min_bedrooms,
            bathrooms: self.bathrooms,
            amenity: self.amenity.clone(),
            available: self.available,
        }
    }
}

#[derive(Debug, Serialize, Default)]
pub struct ApartmentsListResponse {
    pub apartments: Vec<ApartmentResponse>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

/// GET /api/apartments
///
/// Paginated, filterable list of apartments. Public.
///
/// ### Query Parameters
/// - `page` (optional): Page number (default: 1, min: 1)
/// - `per_page` (optional): Items per page (default: 20, min: 1, max: 100)
/// - `query` (optional): Case-insensitive match against name, description or location
/// - `location` (optional): Case-insensitive partial match on location
/// - `min_price` / `max_price` (optional): Bounds on the nightly price
/// - `min_bedrooms` (optional): Minimum number of bedrooms
/// - `bathrooms` (optional): Exact number of bathrooms
/// - `amenity` (optional): Amenity the apartment must offer
/// - `available` (optional): Filter by availability
/// - `sort` (optional): Comma-separated fields (`name`, `location`, `price`, `bedrooms`,
///   `bathrooms`, `created_at`); prefix with `-` for descending
///
/// ### Examples
/// ```http
/// GET /api/apartments?location=lisbon&min_bedrooms=2
/// GET /api/apartments?amenity=wifi&sort=-price
/// ```
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "apartments": [ { "id": 1, "name": "Sea View Loft", "price_per_night": 120.0 } ],
///     "page": 1,
///     "per_page": 20,
///     "total": 1
///   },
///   "message": "Apartments retrieved successfully"
/// }
/// ```
/// - `400 Bad Request` - Invalid query parameters
pub async fn list_apartments(
    State(app_state): State<AppState>,
    Query(query): Query<ListApartmentsQuery>,
) -> impl IntoResponse {
    if let Err(e) = query.validate() {
        return bad_request(common::format_validation_errors(&e));
    }
    if let Some(sort) = query.sort.as_deref() {
        if !is_valid_sort(sort) {
            return bad_request("Invalid sort parameter");
        }
    }

    let filter = query.filter();
    match ApartmentService::list(app_state.db(), &filter, query.page, query.per_page, query.sort.as_deref()).await {
        Ok(page) => {
            let response = ApartmentsListResponse {
                apartments: page.items.into_iter().map(ApartmentResponse::from).collect(),
                page: page.page,
                per_page: page.per_page,
                total: page.total,
            };
            (
                StatusCode::OK,
                Json(ApiResponse::success(response, "Apartments retrieved successfully")),
            )
        }
        Err(e) => error_response(e),
    }
}

/// GET /api/apartments/{apartment_id}
///
/// Single apartment including `average_rating` (null without reviews) and `review_count`.
///
/// - `200 OK`
/// - `404 Not Found`
pub async fn get_apartment(
    State(app_state): State<AppState>,
    Path(apartment_id): Path<i64>,
) -> impl IntoResponse {
    match ApartmentService::details(app_state.db(), apartment_id).await {
        Ok(details) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                ApartmentResponse::from(details.apartment).with_rating(details.rating),
                "Apartment retrieved successfully",
            )),
        ),
        Err(e) => error_response(e),
    }
}

/// GET /api/apartments/{apartment_id}/reviews
///
/// Reviews of an apartment, newest first.
pub async fn list_reviews(
    State(app_state): State<AppState>,
    Path(apartment_id): Path<i64>,
) -> impl IntoResponse {
    match ReviewService::for_apartment(app_state.db(), apartment_id).await {
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

/// GET /api/apartments/{apartment_id}/reviews/external
///
/// Proxies the review service's listing for this apartment.
///
/// - `200 OK` with the upstream JSON as `data`
/// - `502 Bad Gateway` when the review service fails
/// - `503 Service Unavailable` when no review service is configured
pub async fn list_external_reviews(Path(apartment_id): Path<i64>) -> impl IntoResponse {
    let proxy = match ReviewProxy::from_config() {
        Ok(Some(proxy)) => proxy,
        Ok(None) => {
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse::<Value>::error("Review service is not configured")),
            );
        }
        Err(e) => return error_response(e),
    };

    match proxy.fetch_reviews(apartment_id).await {
        Ok(data) => (
            StatusCode::OK,
            Json(ApiResponse::success(data, "External reviews retrieved successfully")),
        ),
        Err(e) => {
            tracing::warn!(apartment_id, error = %e, "review service request failed");
            error_response(e)
        }
    }
}
