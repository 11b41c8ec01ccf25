use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use contact_db::store::{PgStore, SubmissionStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use contact_api::config::ServerConfig;
use contact_api::router::build_app_router;
use contact_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    init_tracing();

    // --- Configuration ---
    let config = ServerConfig::from_env().context("Invalid configuration")?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        database = %config.database,
        cors = ?config.cors,
        "Loaded server configuration",
    );

    // --- Database ---
    let pool = contact_db::create_pool(&config.database, config.pool)
        .context("Invalid database connection settings")?;
    tracing::info!(
        max_connections = config.pool.max_connections,
        "Database connection pool created",
    );

    match contact_db::health_check(&pool).await {
        Ok(()) => tracing::info!("Database health check passed"),
        Err(e) => tracing::error!(error = %e, "Database health check failed"),
    }

    let store = Arc::new(PgStore::new(pool.clone()));

    // An unreachable database is reported but does not stop the server;
    // requests fail individually until it comes back.
    match store.initialize().await {
        Ok(()) => tracing::info!(backend = store.backend(), "Database initialized"),
        Err(e) => tracing::error!(error = %e, "Error setting up database"),
    }

    // --- App state ---
    let addr = SocketAddr::new(
        config.host.parse().context("Invalid HOST address")?,
        config.port,
    );
    let state = AppState {
        store,
        config: Arc::new(config),
    };

    // --- Router ---
    let app = build_app_router(state);

    // --- Start server ---
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, closing database pool");
    pool.close().await;
    tracing::info!("Graceful shutdown complete");

    Ok(())
}

/// Install the global subscriber. `RUST_LOG` overrides the default filter;
/// `LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "contact_api=debug,contact_db=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    if std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")) {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a container
/// runtime.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
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
