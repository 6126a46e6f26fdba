pub mod apartment_service;
pub mod booking_service;
pub mod error;
pub mod review_service;
pub mod service;
pub mod token_service;
pub mod user_service;

pub use error::{ServiceError, ServiceResult};
