use colored::*;
use futures::FutureExt;
use migration::Migrator;
use sea_orm_migration::prelude::*;
use std::io::{self, Write};
use std::time::Instant;

const STATUS_COLUMN: usize = 80;

pub async fn run_all_migrations(url: &str) {
    let db = connect(url).await;

    println!("Applying booking schema to {}", url.dimmed());
    let schema_manager = SchemaManager::new(&db);

    for migration in <Migrator as MigratorTrait>::migrations() {
        run_step("Applying", &schema_manager, migration, true).await;
    }
}

pub async fn rollback_all(url: &str) {
    let db = connect(url).await;

    println!("Reverting booking schema on {}", url.dimmed());
    let schema_manager = SchemaManager::new(&db);

    for migration in <Migrator as MigratorTrait>::migrations().into_iter().rev() {
        run_step("Reverting", &schema_manager, migration, false).await;
    }
}

async fn connect(url: &str) -> sea_orm::DatabaseConnection {
    match sea_orm::Database::connect(url).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("{} {}", "Database connection failed:".red(), e);
            std::process::exit(1);
        }
    }
}

async fn run_step(
    verb: &str,
    schema_manager: &SchemaManager<'_>,
    migration: Box<dyn MigrationTrait>,
    up: bool,
) {
    let name_str = format!("{} {}", verb, migration.name().bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(name_str.len()));
    print!("{}{} ", name_str, dots);
    io::stdout().flush().ok();

    let start = Instant::now();
    let result = if up {
        std::panic::AssertUnwindSafe(migration.up(schema_manager))
            .catch_unwind()
            .await
    } else {
        std::panic::AssertUnwindSafe(migration.down(schema_manager))
            .catch_unwind()
            .await
    };

    match result {
        Ok(Ok(())) => {
            let time_str = format!("({:.2?})", start.elapsed()).dimmed();
            println!("{} {}", "done".green(), time_str);
        }
        Ok(Err(e)) => {
            println!("{} {}", "failed".red(), e);
            std::process::exit(1);
        }
        Err(_) => {
            println!("{}", "panicked".red());
            std::process::exit(1);
        }
    }
}
