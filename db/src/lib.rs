pub mod filters;
pub mod models;
pub mod repositories;
pub mod test_utils;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::path::Path;
use util::config::AppConfig;

/// Turns a configured path into a connection URL.
///
/// DSNs are passed through unchanged; anything else is treated as a SQLite file
/// path whose parent directory is created on demand.
pub fn database_url(path_or_url: &str) -> String {
    if path_or_url.starts_with("sqlite:")
        || path_or_url.starts_with("postgres://")
        || path_or_url.starts_with("mysql://")
    {
        return path_or_url.to_string();
    }

    if let Some(parent) = Path::new(path_or_url).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    format!("sqlite://{path_or_url}?mode=rwc")
}

/// Connects to `path_or_url` (see [`database_url`]).
pub async fn connect_to(path_or_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url(path_or_url));
    options.sqlx_logging(false);
    Database::connect(options).await
}

/// Connects to the booking database configured by `DATABASE_PATH`.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let path = AppConfig::global().database_path.clone();
    connect_to(&path).await
}
