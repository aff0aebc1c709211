use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, Method},
    middleware::Next,
    response::Response,
};

use crate::server::{error::AppError, service::auth::AuthService, state::AppState};

/// Requires a key accepted by the key authority on write requests.
///
/// Only `POST` and `DELETE` are checked, and only when a key authority is configured.
/// The key is read from `Authorization: Basic <key>`.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(auth_url) = state.auth_url.as_ref() else {
        return Ok(next.run(request).await);
    };

    if !matches!(*request.method(), Method::POST | Method::DELETE) {
        return Ok(next.run(request).await);
    }

    let key = basic_key(request.headers()).unwrap_or_default().to_owned();

    AuthService::new(&state.http_client, auth_url)
        .verify(&key)
        .await?;

    Ok(next.run(request).await)
}

/// Extracts the raw key from an `Authorization: Basic <key>` header.
fn basic_key(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Basic ")
        .map(str::trim)
}
