mod apartments_test;
mod auth_test;
mod bookings_test;
mod health_test;
mod reviews_test;
mod users_test;
