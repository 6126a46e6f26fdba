use common::format_validation_errors;
use sea_orm::DbErr;
use validator::ValidationErrors;

/// Failure of a service operation, independent of the transport that reports it.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    #[error("Token error: {0}")]
    Token(String),
    #[error("{0}")]
    Upstream(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn not_found(entity: &str, id: i64) -> Self {
        Self::NotFound(format!("{entity} {id} not found"))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(format_validation_errors(&errors))
    }
}

impl From<util::relay::RelayError> for ServiceError {
    fn from(err: util::relay::RelayError) -> Self {
        Self::Validation(err.to_string())
    }
}
