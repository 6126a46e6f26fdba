pub mod config;
pub mod jwt;
pub mod relay;
pub mod state;
