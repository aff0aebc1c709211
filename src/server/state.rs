//! Application state shared across all request handlers.

use reqwest::Url;
use sea_orm::DatabaseConnection;

/// Shared resources handed to every request handler through Axum's state extraction.
///
/// Cloning is cheap: `DatabaseConnection` and `reqwest::Client` wrap pools and clones
/// share them.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
    /// HTTP client used to reach the key authority.
    pub http_client: reqwest::Client,
    /// Key authority base URL; `None` leaves write routes open.
    pub auth_url: Option<Url>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, http_client: reqwest::Client, auth_url: Option<Url>) -> Self {
        Self {
            db,
            http_client,
            auth_url,
        }
    }
}
