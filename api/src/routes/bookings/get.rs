use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{BookingResponse, bad_request, error_response, is_valid_sort};
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use services::booking_service::{BookingQuery, BookingService};
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct ListBookingsQuery {
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<u64>,
    #[validate(range(min = 1, max = 100, message = "per_page must be between 1 and 100"))]
    pub per_page: Option<u64>,
    pub user_id: Option<i64>,
    pub apartment_id: Option<i64>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub sort: Option<String>,
}

#[derive(Debug, Serialize, Default)]
pub struct BookingsListResponse {
    pub bookings: Vec<BookingResponse>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

/// GET /api/bookings
///
/// Paginated bookings. Regular users get their own bookings; admins get all and
/// may narrow them down with `user_id`.
///
/// ### Query Parameters
/// - `page`, `per_page` (optional): Paging (defaults 1 and 20, `per_page` max 100)
/// - `user_id` (optional, admin only): Guest to list bookings for
/// - `apartment_id` (optional): Restrict to one apartment
/// - `from` / `to` (optional, `YYYY-MM-DD`): Stays intersecting `[from, to)`
/// - `sort` (optional): `check_in`, `check_out`, `total_price`, `booked_at`; `-` for descending
pub async fn list_bookings(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Query(query): Query<ListBookingsQuery>,
) -> impl IntoResponse {
    if let Err(e) = query.validate() {
        return bad_request(common::format_validation_errors(&e));
    }
    if let Some(sort) = query.sort.as_deref() {
        if !is_valid_sort(sort) {
            return bad_request("Invalid sort parameter");
        }
    }

    let options = BookingQuery {
        user_id: query.user_id,
        apartment_id: query.apartment_id,
        from: query.from,
        to: query.to,
        page: query.page,
        per_page: query.per_page,
        sort: query.sort,
    };

    match BookingService::list(app_state.db(), &claims, options).await {
        Ok(page) => {
            let response = BookingsListResponse {
                bookings: page.items.into_iter().map(BookingResponse::from).collect(),
                page: page.page,
                per_page: page.per_page,
                total: page.total,
            };
            (
                StatusCode::OK,
                Json(ApiResponse::success(response, "Bookings retrieved successfully")),
            )
        }
        Err(e) => error_response(e),
    }
}

/// GET /api/bookings/{booking_id}
///
/// - `200 OK`
/// - `403 Forbidden` when the booking belongs to someone else
/// - `404 Not Found`
pub async fn get_booking(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(booking_id): Path<i64>,
) -> impl IntoResponse {
    match BookingService::get(app_state.db(), &claims, booking_id).await {
        Ok(booking) => (
            StatusCode::OK,
            Json(ApiResponse::success(BookingResponse::from(booking), "Booking retrieved successfully")),
        ),
        Err(e) => error_response(e),
    }
}
