pub mod app;

pub use app::{bearer, get_json_body, make_test_app};
