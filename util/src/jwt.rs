//! JWT claims shared by the booking API and the ticket service.
//!
//! Both services sign and verify with the same `JWT_SECRET`, so a token issued
//! at login is accepted by the ticket service without a second login.

use crate::config::AppConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    pub sub: i64,
    pub email: String,
    pub admin: bool,
    pub exp: usize,
}

impl Claims {
    pub fn user_id(&self) -> i64 {
        self.sub
    }

    pub fn is_admin(&self) -> bool {
        self.admin
    }

    /// True for the user identified by `user_id` and for admins.
    pub fn can_access(&self, user_id: i64) -> bool {
        self.admin || self.sub == user_id
    }
}

/// Signs a token for the given user and returns it with its RFC 3339 expiry.
pub fn generate_jwt(
    user_id: i64,
    email: &str,
    admin: bool,
) -> Result<(String, String), jsonwebtoken::errors::Error> {
    let (secret, minutes) = {
        let cfg = AppConfig::global();
        (cfg.jwt_secret.clone(), cfg.jwt_duration_minutes as i64)
    };

    let expiry = Utc::now() + Duration::minutes(minutes);
    let claims = Claims {
        sub: user_id,
        email: email.to_string(),
        admin,
        exp: expiry.timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok((token, expiry.to_rfc3339()))
}

/// Verifies signature and expiry of `token`.
pub fn decode_jwt(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let secret = AppConfig::global().jwt_secret.clone();
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )?;
    Ok(data.claims)
}

/// Extracts the token from an `Authorization: Bearer <token>` header value.
pub fn strip_bearer(header_value: &str) -> Option<&str> {
    let (scheme, token) = header_value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
