use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::Context;
use delishop_db::store::PgProductStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use delishop_api::app::build_router;
use delishop_api::config::ServerConfig;
use delishop_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "delishop_api=debug,delishop_db=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().context("Invalid server configuration")?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        migration_failure_policy = ?config.migration_failure_policy,
        "Loaded server configuration",
    );

    // --- Database ---
    let pool = delishop_db::connect(&config.database_url, config.migration_failure_policy)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connection pool created");

    delishop_db::apply_migrations(&pool, config.migration_failure_policy)
        .await
        .context("Failed to run database migrations")?;

    // --- App state ---
    let addr = SocketAddr::new(
        config.host.parse::<IpAddr>().context("Invalid HOST address")?,
        config.port,
    );
    let state = AppState::new(Arc::new(PgProductStore::new(pool)), config);
    let app = build_router(state);

    // --- Start server ---
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
