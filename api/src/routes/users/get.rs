use crate::response::ApiResponse;
use crate::routes::common::{UserResponse, bad_request, error_response, is_valid_sort};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::{filters::UserFilter, models::user::UserRole};
use serde::{Deserialize, Serialize};
use services::user_service::UserService;
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct ListUsersQuery {
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<u64>,
    #[validate(range(min = 1, max = 100, message = "per_page must be between 1 and 100"))]
    pub per_page: Option<u64>,
    pub sort: Option<String>,
    pub query: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Serialize, Default)]
pub struct UsersListResponse {
    pub users: Vec<UserResponse>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

/// GET /api/users
///
/// Retrieve a paginated list of users with optional filtering and sorting.
/// Requires admin privileges.
///
/// ### Query Parameters
/// - `page` (optional): Page number (default: 1, min: 1)
/// - `per_page` (optional): Items per page (default: 20, min: 1, max: 100)
/// - `query` (optional): Case-insensitive partial match against name OR email
/// - `email` (optional): Exact email
/// - `role` (optional): `Admin` or `User`
/// - `sort` (optional): Comma-separated sort fields (`name`, `email`, `role`, `created_at`).
///   Use `-` prefix for descending
///
/// ### Examples
/// ```http
/// GET /api/users?page=2&per_page=10
/// GET /api/users?query=ada
/// GET /api/users?role=admin&sort=-created_at
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "users": [
///       {
///         "id": 1,
///         "name": "Ada Lovelace",
///         "email": "ada@example.com",
///         "role": "User",
///         "created_at": "2025-05-23T18:00:00Z",
///         "updated_at": "2025-05-23T18:00:00Z"
///       }
///     ],
///     "page": 1,
///     "per_page": 20,
///     "total": 1
///   },
///   "message": "Users retrieved successfully"
/// }
/// ```
///
/// - `400 Bad Request` - Invalid query parameters
/// - `401 Unauthorized` - Missing or invalid JWT
/// - `403 Forbidden` - Authenticated but not admin user
pub async fn list_users(
    State(app_state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> impl IntoResponse {
    if let Err(e) = query.validate() {
        return bad_request(common::format_validation_errors(&e));
    }
    if let Some(sort) = query.sort.as_deref() {
        if !is_valid_sort(sort) {
            return bad_request("Invalid sort parameter");
        }
    }

    let mut filter = UserFilter::new();
    if let Some(role) = query.role.as_deref() {
        match role.parse::<UserRole>() {
            Ok(role) => filter = filter.with_role(role),
            Err(_) => return bad_request("Invalid role"),
        }
    }
    if let Some(email) = query.email.clone() {
        filter = filter.with_email(email);
    }
    if let Some(q) = query.query.clone() {
        filter = filter.with_query(q);
    }

    match UserService::list(app_state.db(), &filter, query.page, query.per_page, query.sort.as_deref()).await {
        Ok(page) => {
            let response = UsersListResponse {
                users: page.items.into_iter().map(UserResponse::from).collect(),
                page: page.page,
                per_page: page.per_page,
                total: page.total,
            };
            (
                StatusCode::OK,
                Json(ApiResponse::success(response, "Users retrieved successfully")),
            )
        }
        Err(e) => error_response(e),
    }
}

/// GET /api/users/{user_id}
pub async fn get_user(
    State(app_state): State<AppState>,
    Path(user_id): Path<i64>,
) -> impl IntoResponse {
    match UserService::get(app_state.db(), user_id).await {
        Ok(user) => (
            StatusCode::OK,
            Json(ApiResponse::success(UserResponse::from(user), "User retrieved successfully")),
        ),
        Err(e) => error_response(e),
    }
}
