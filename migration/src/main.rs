//! `migration [up|fresh|down|clean]` against the booking database at
//! `DATABASE_PATH`.

use colored::*;
use std::{env, fs, path::Path};
use util::config::AppConfig;

mod runner;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let db_path = AppConfig::global().database_path.clone();
    let url = if db_path.starts_with("sqlite:") {
        db_path.clone()
    } else {
        format!("sqlite://{}?mode=rwc", db_path)
    };

    match env::args().nth(1).as_deref() {
        Some("clean") => remove_db_file(&db_path),
        Some("fresh") => {
            remove_db_file(&db_path);
            create_db_dir(&db_path);
            runner::run_all_migrations(&url).await;
        }
        Some("down") => runner::rollback_all(&url).await,
        Some("up") | None => {
            create_db_dir(&db_path);
            runner::run_all_migrations(&url).await;
        }
        Some(other) => {
            eprintln!("{} unknown command `{}` (expected up, fresh, down or clean)", "error:".red(), other);
            std::process::exit(2);
        }
    }
}

fn remove_db_file(path: &str) {
    let db_path = Path::new(path);
    if !db_path.exists() {
        println!("Database file does not exist: {}", db_path.display());
        return;
    }
    match fs::remove_file(db_path) {
        Ok(()) => println!("Deleted database: {}", db_path.display()),
        Err(e) => {
            eprintln!("{} failed to delete {}: {}", "error:".red(), db_path.display(), e);
            std::process::exit(1);
        }
    }
}

fn create_db_dir(path: &str) {
    let Some(parent) = Path::new(path).parent() else {
        return;
    };
    if let Err(e) = fs::create_dir_all(parent) {
        eprintln!("{} failed to create {}: {}", "error:".red(), parent.display(), e);
        std::process::exit(1);
    }
}
