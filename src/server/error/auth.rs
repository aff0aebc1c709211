use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carries no `Authorization: Basic <key>` header, or the key is empty.
    #[error("Write request without an API key")]
    MissingKey,

    /// The key authority answered the lookup for the key with a non-success status.
    ///
    /// # Fields
    /// - Status returned by the key authority
    #[error("API key rejected by key authority with status {0}")]
    KeyRejected(reqwest::StatusCode),
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant is a 401 Unauthorized with an empty body; the reason is only logged.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::warn!("Write request failed authorization: {}", self);

        StatusCode::UNAUTHORIZED.into_response()
    }
}
