pub mod apartment;
pub mod booking;
pub mod review;
pub mod user;
