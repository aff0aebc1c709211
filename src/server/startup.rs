use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::server::{config::Config, error::AppError};

/// Connects to the database and runs pending migrations.
///
/// The backend (SQLite or Postgres) is chosen by the connection string. Connect and
/// acquire operations are bounded by the configured database timeout, so an
/// unreachable database fails startup instead of hanging it.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and timeout
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.connect_timeout(config.database_timeout)
        .acquire_timeout(config.database_timeout)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Connected to database and applied migrations");

    Ok(db)
}

/// Completes when the process receives Ctrl-C, starting a graceful shutdown.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }

    tracing::info!("Shutdown signal received");
}

/// Builds the HTTP client used for key authority lookups.
///
/// Requests share the configured database timeout so a hung authority cannot hold a
/// write request open indefinitely.
pub fn setup_http_client(config: &Config) -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .timeout(config.database_timeout)
        .build()?;

    Ok(client)
}
