//! Shared response DTOs and error mapping for the `/api` handlers.

use crate::response::ApiResponse;
use axum::{Json, http::StatusCode};
use db::models::{apartment, booking, review, user};
use serde::Serialize;
use services::ServiceError;
use services::review_service::RatingSummary;

lazy_static::lazy_static! {
    static ref SORT_REGEX: regex::Regex = regex::Regex::new(r"^-?[a-z_]+(,-?[a-z_]+)*$").unwrap();
}

/// True for a well formed `sort` parameter such as `name,-created_at`.
pub fn is_valid_sort(sort: &str) -> bool {
    SORT_REGEX.is_match(sort)
}

/// HTTP status for a service failure.
pub fn status_for(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ServiceError::Conflict(_) => StatusCode::CONFLICT,
        ServiceError::Forbidden(_) => StatusCode::FORBIDDEN,
        ServiceError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        ServiceError::Database(_) | ServiceError::Token(_) => StatusCode::INTERNAL_SERVER_ERROR,
        ServiceError::Upstream(_) => StatusCode::BAD_GATEWAY,
    }
}

/// Converts a service failure into the error envelope. Internal errors are
/// logged and reported without their details.
pub fn error_response<T>(err: ServiceError) -> (StatusCode, Json<ApiResponse<T>>)
where
    T: Serialize + Default,
{
    let status = status_for(&err);
    let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %err, "request failed");
        "Internal server error".to_string()
    } else {
        err.to_string()
    };
    (status, Json(ApiResponse::error(message)))
}

pub fn bad_request<T>(message: impl Into<String>) -> (StatusCode, Json<ApiResponse<T>>)
where
    T: Serialize + Default,
{
    (StatusCode::BAD_REQUEST, Json(ApiResponse::error(message)))
}

#[derive(Debug, Serialize, Default)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<user::Model> for UserResponse {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role.to_string(),
            created_at: user.created_at.to_rfc3339(),
            updated_at: user.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, Default)]
pub struct ApartmentResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub location: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub amenities: Vec<String>,
    pub is_available: bool,
    pub price_per_night: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u64>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<apartment::Model> for ApartmentResponse {
    fn from(a: apartment::Model) -> Self {
        Self {
            id: a.id,
            name: a.name,
            description: a.description,
            location: a.location,
            bedrooms: a.bedrooms,
            bathrooms: a.bathrooms,
            amenities: a.amenities.0,
            is_available: a.is_available,
            price_per_night: a.price_per_night,
            average_rating: None,
            review_count: None,
            created_at: a.created_at.to_rfc3339(),
            updated_at: a.updated_at.to_rfc3339(),
        }
    }
}

impl ApartmentResponse {
    pub fn with_rating(mut self, rating: RatingSummary) -> Self {
        self.average_rating = rating.average;
        self.review_count = Some(rating.count);
        self
    }
}

#[derive(Debug, Serialize, Default)]
pub struct BookingResponse {
    pub id: i64,
    pub apartment_id: i64,
    pub user_id: i64,
    pub check_in: String,
    pub check_out: String,
    pub nights: i64,
    pub total_price: f64,
    pub booked_at: String,
}

impl From<booking::Model> for BookingResponse {
    fn from(b: booking::Model) -> Self {
        Self {
            id: b.id,
            apartment_id: b.apartment_id,
            user_id: b.user_id,
            nights: b.nights(),
            check_in: b.check_in.to_string(),
            check_out: b.check_out.to_string(),
            total_price: b.total_price,
            booked_at: b.booked_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct ReviewResponse {
    pub id: i64,
    pub apartment_id: i64,
    pub user_id: i64,
    pub rating: i32,
    pub comment: String,
    pub reviewed_at: String,
}

impl From<review::Model> for ReviewResponse {
    fn from(r: review::Model) -> Self {
        Self {
            id: r.id,
            apartment_id: r.apartment_id,
            user_id: r.user_id,
            rating: r.rating,
            comment: r.comment,
            reviewed_at: r.reviewed_at.to_rfc3339(),
        }
    }
}
