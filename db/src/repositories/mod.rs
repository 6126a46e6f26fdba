pub mod apartment_repository;
pub mod booking_repository;
pub mod repository;
pub mod review_repository;
pub mod user_repository;

pub use repository::Repository;
