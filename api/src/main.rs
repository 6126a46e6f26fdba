use api::app;
use api::auth::middleware::log_request;
use axum::middleware::from_fn;
use migration::{Migrator, MigratorTrait};
use std::net::SocketAddr;
use tracing_appender::rolling;
use util::config::{AppConfig, DEV_JWT_SECRET};
use util::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = AppConfig::global().clone();

    // Initialize logging
    let _log_guard = init_logging(&config.log_file, &config.log_level, config.log_to_stdout);

    if config.is_production() && config.jwt_secret == DEV_JWT_SECRET {
        tracing::error!("JWT_SECRET must be set in production");
        return;
    }

    // Connect and migrate
    let db = match db::connect().await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!(error = %e, path = %config.database_path, "failed to connect to database");
            return;
        }
    };
    if let Err(e) = Migrator::up(&db, None).await {
        tracing::error!(error = %e, "failed to run migrations");
        return;
    }

    let app_state = AppState::new(db);

    // Build app router
    let app = app(app_state, &config.static_dir).layer(from_fn(log_request));

    // Start server
    let addr: SocketAddr = match format!("{}:{}", config.host, config.port).parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!(error = %e, host = %config.host, port = config.port, "invalid listen address");
            return;
        }
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %addr, "failed to bind");
            return;
        }
    };

    println!("Starting {} on http://{}", config.project_name, addr);
    tracing::info!(%addr, "api listening");

    if let Err(e) = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    {
        tracing::error!(error = %e, "server crashed");
    }
}

fn init_logging(
    log_file: &str,
    log_level: &str,
    log_to_stdout: bool,
) -> tracing_appender::non_blocking::WorkerGuard {
    use std::fs;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    fs::create_dir_all("logs").ok();

    let file_appender = rolling::daily("logs", log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(true)
        .with_thread_ids(true);

    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("api=info"));

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    if log_to_stdout {
        registry.with(stdout_layer).init();
    } else {
        registry.init();
    }

    guard
}
