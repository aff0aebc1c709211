use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use ementa::server::{
    config::Config,
    error::AppError,
    router,
    startup::{self, shutdown_signal},
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_http_client(&config)?;

    if config.auth_url.is_none() {
        tracing::warn!("IPEA_URL is not set, write requests are not authorized");
    }

    let app = router::router(AppState::new(
        db.clone(),
        http_client,
        config.auth_url.clone(),
    ));

    let listener = TcpListener::bind(config.socket_addr()).await?;
    tracing::info!("Listening on {}", config.socket_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await?;
    tracing::info!("Server stopped");

    Ok(())
}
