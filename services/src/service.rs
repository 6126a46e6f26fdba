use crate::error::{ServiceError, ServiceResult};
use sea_orm::EntityTrait;
use validator::ValidationError;

pub const DEFAULT_PER_PAGE: u64 = 20;
pub const MAX_PER_PAGE: u64 = 100;

/// Turns a validated create request into an insertable active model.
pub trait ToActiveModel<E>
where
    E: EntityTrait,
{
    fn into_active_model(self) -> ServiceResult<E::ActiveModel>;
}

/// Copies the fields present in a partial update onto an active model.
pub trait ApplyChanges<E>
where
    E: EntityTrait,
{
    fn apply_changes(self, active: &mut E::ActiveModel) -> ServiceResult<()>;
}

/// One page of a list endpoint.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

/// Resolves optional paging arguments; `page` is 1-based.
pub fn check_paging(page: Option<u64>, per_page: Option<u64>) -> ServiceResult<(u64, u64)> {
    let page = page.unwrap_or(1);
    let per_page = per_page.unwrap_or(DEFAULT_PER_PAGE);
    if page < 1 {
        return Err(ServiceError::validation("page must be at least 1"));
    }
    if !(1..=MAX_PER_PAGE).contains(&per_page) {
        return Err(ServiceError::validation(format!(
            "per_page must be between 1 and {MAX_PER_PAGE}"
        )));
    }
    Ok((page, per_page))
}

/// `validator` custom rule rejecting empty or whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
