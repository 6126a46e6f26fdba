use std::net::SocketAddr;
use ticket_service::{app, migrations::TicketMigrator};
use sea_orm_migration::MigratorTrait;
use tracing_appender::rolling;
use util::config::{AppConfig, DEV_JWT_SECRET};
use util::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = AppConfig::global().clone();

    let _log_guard = init_logging(&config.log_level, config.log_to_stdout);

    if config.is_production() && config.jwt_secret == DEV_JWT_SECRET {
        tracing::error!("JWT_SECRET must be set in production");
        return;
    }

    let db = match db::connect_to(&config.ticket_database_path).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!(error = %e, path = %config.ticket_database_path, "failed to connect to ticket database");
            return;
        }
    };
    if let Err(e) = TicketMigrator::up(&db, None).await {
        tracing::error!(error = %e, "failed to run ticket migrations");
        return;
    }

    let app = app(AppState::new(db));

    let addr: SocketAddr = match format!("{}:{}", config.ticket_service_host, config.ticket_service_port).parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!(error = %e, "invalid ticket service listen address");
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

    println!("Starting ticket service on http://{}", addr);
    tracing::info!(%addr, "ticket service listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server crashed");
    }
}

fn init_logging(log_level: &str, log_to_stdout: bool) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    std::fs::create_dir_all("logs").ok();
    let (file_writer, guard) = tracing_appender::non_blocking(rolling::daily("logs", "ticket_service.log"));

    let file_layer = fmt::layer().with_writer(file_writer).with_ansi(false).with_target(true);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(true);

    let filter = format!("{log_level},ticket_service=info");
    let env_filter = EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("ticket_service=info"));

    let registry = tracing_subscriber::registry().with(env_filter).with(file_layer);
    if log_to_stdout {
        registry.with(stdout_layer).init();
    } else {
        registry.init();
    }
    guard
}
