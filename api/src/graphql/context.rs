//! Request context helpers: database handle, caller identity and error codes.

use async_graphql::{Context, Error, ErrorExtensions, Result};
use sea_orm::DatabaseConnection;
use services::{ServiceError, ServiceResult};
use util::jwt::Claims;

/// Claims of a request that carried a valid bearer token.
#[derive(Debug, Clone)]
pub struct Viewer(pub Claims);

/// An error carrying `extensions.code`.
pub fn coded(message: impl Into<String>, code: &'static str) -> Error {
    Error::new(message).extend_with(|_, e| e.set("code", code))
}

pub fn service_error(err: ServiceError) -> Error {
    let code = match &err {
        ServiceError::NotFound(_) => "NOT_FOUND",
        ServiceError::Validation(_) => "BAD_REQUEST",
        ServiceError::Conflict(_) => "CONFLICT",
        ServiceError::Forbidden(_) => "FORBIDDEN",
        ServiceError::Unauthorized(_) => "UNAUTHENTICATED",
        ServiceError::Database(_) | ServiceError::Token(_) | ServiceError::Upstream(_) => {
            tracing::error!(error = %err, "graphql resolver failed");
            return coded("Internal server error", "INTERNAL");
        }
    };
    coded(err.to_string(), code)
}

pub fn relay_error(err: util::relay::RelayError) -> Error {
    coded(err.to_string(), "BAD_REQUEST")
}

/// Maps `NotFound` to `None`, as node lookups return null for unknown ids.
pub fn found<T>(result: ServiceResult<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ServiceError::NotFound(_)) => Ok(None),
        Err(e) => Err(service_error(e)),
    }
}

pub fn db<'a>(ctx: &Context<'a>) -> Result<&'a DatabaseConnection> {
    ctx.data::<DatabaseConnection>()
}

pub fn viewer<'a>(ctx: &Context<'a>) -> Result<&'a Claims> {
    ctx.data_opt::<Viewer>()
        .map(|v| &v.0)
        .ok_or_else(|| coded("Authentication required", "UNAUTHENTICATED"))
}

pub fn admin<'a>(ctx: &Context<'a>) -> Result<&'a Claims> {
    let claims = viewer(ctx)?;
    if !claims.is_admin() {
        return Err(coded("Admin access required", "FORBIDDEN"));
    }
    Ok(claims)
}
