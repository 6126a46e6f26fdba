pub mod m202406010001_create_users;
pub mod m202406010002_create_apartments;
pub mod m202406010003_create_bookings;
pub mod m202406010004_create_reviews;
