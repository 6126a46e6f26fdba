//! Re-export of the shared response envelope so handlers can keep using
//! `crate::response::ApiResponse`.

pub use common::ApiResponse;
