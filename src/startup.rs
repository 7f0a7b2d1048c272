use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::db;
use crate::error::StartupError;

/// Give up on the initial connection after this long instead of hanging.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Installs the fmt subscriber, filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Opens the connection pool and runs pending migrations.
///
/// The pool connects eagerly, so an unreachable or unopenable database fails
/// here rather than on the first request.
pub async fn connect_to_database(config: &Config) -> Result<SqlitePool, StartupError> {
    tracing::info!("Connecting to database at {}", config.database_url);

    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .acquire_timeout(CONNECT_TIMEOUT)
        .connect_with(options)
        .await?;

    db::migrate(&pool).await?;

    let name = db::database_name(&pool).await?;
    tracing::info!("Connected to database {}", name);

    Ok(pool)
}

/// Closes the pool, waiting for checked-out connections to be returned.
pub async fn disconnect_from_database(pool: SqlitePool) {
    pool.close().await;
    tracing::info!("Disconnected from database");
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to listen for SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
