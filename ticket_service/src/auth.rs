//! Bearer-token authentication against the shared `JWT_SECRET`.

use axum::{
    Json,
    body::Body,
    extract::FromRequestParts,
    http::{Request, StatusCode, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use common::ApiResponse;
use util::jwt::{Claims, decode_jwt, strip_bearer};

#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

pub struct AuthRejection(StatusCode, &'static str);

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        (self.0, Json(ApiResponse::<()>::error(self.1))).into_response()
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(strip_bearer)
            .ok_or(AuthRejection(
                StatusCode::UNAUTHORIZED,
                "Missing or invalid Authorization header",
            ))?;

        decode_jwt(token)
            .map(AuthUser)
            .map_err(|_| AuthRejection(StatusCode::UNAUTHORIZED, "Invalid or expired token"))
    }
}

/// Rejects callers without a valid token or without the admin flag.
pub async fn allow_admin(req: Request<Body>, next: Next) -> Result<Response, AuthRejection> {
    let (mut parts, body) = req.into_parts();
    let user = AuthUser::from_request_parts(&mut parts, &()).await?;
    if !user.0.is_admin() {
        return Err(AuthRejection(StatusCode::FORBIDDEN, "Admin access required"));
    }
    Ok(next.run(Request::from_parts(parts, body)).await)
}
