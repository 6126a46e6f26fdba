use crate::error::{ServiceError, ServiceResult};
use db::models::user;
use serde::Serialize;
use util::jwt::{self, Claims};

#[derive(Debug, Clone, Serialize)]
pub struct AuthToken {
    pub token: String,
    pub expires_at: String,
}

/// Issues and validates the HS256 bearer tokens shared by both services.
pub struct TokenService;

impl TokenService {
    pub fn issue_for(user: &user::Model) -> ServiceResult<AuthToken> {
        let (token, expires_at) = jwt::generate_jwt(user.id, &user.email, user.is_admin())
            .map_err(|e| ServiceError::Token(e.to_string()))?;
        Ok(AuthToken { token, expires_at })
    }

    pub fn decode(token: &str) -> ServiceResult<Claims> {
        jwt::decode_jwt(token).map_err(|_| ServiceError::Unauthorized("Invalid or expired token".into()))
    }
}
