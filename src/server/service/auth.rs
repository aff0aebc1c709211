use reqwest::Url;

use crate::server::error::{auth::AuthError, AppError};

/// Checks API keys against the external key authority.
///
/// A key is valid when `GET {auth_url}/{key}` answers with a success status.
pub struct AuthService<'a> {
    http_client: &'a reqwest::Client,
    auth_url: &'a Url,
}

impl<'a> AuthService<'a> {
    pub fn new(http_client: &'a reqwest::Client, auth_url: &'a Url) -> Self {
        Self {
            http_client,
            auth_url,
        }
    }

    /// Verifies a key with the key authority.
    ///
    /// # Returns
    /// - `Ok(())`: The authority accepted the key
    /// - `Err(AppError::AuthErr)`: The key is empty or the authority rejected it
    /// - `Err(AppError::ReqwestErr)`: The authority could not be reached
    pub async fn verify(&self, key: &str) -> Result<(), AppError> {
        if key.is_empty() {
            return Err(AuthError::MissingKey.into());
        }

        let response = self.http_client.get(key_url(self.auth_url, key)).send().await?;

        if !response.status().is_success() {
            return Err(AuthError::KeyRejected(response.status()).into());
        }

        Ok(())
    }
}

/// Appends the key as a single, percent-encoded path segment.
fn key_url(base: &Url, key: &str) -> Url {
    let mut url = base.clone();

    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(key);
    }

    url
}
