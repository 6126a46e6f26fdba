use crate::migrations::TicketMigrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

/// Fresh, migrated in-memory ticket database on a single pooled connection.
pub async fn setup_ticket_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to connect to in-memory db");

    TicketMigrator::up(&db, None)
        .await
        .expect("Failed to run ticket migrations");

    db
}
