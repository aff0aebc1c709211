use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    str::FromStr,
    time::Duration,
};

use reqwest::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_DATABASE_TIMEOUT_SECS: u64 = 5;

/// Runtime configuration read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    /// Connect and acquire timeout applied to the database pool.
    pub database_timeout: Duration,
    /// Base URL of the key authority that write requests are checked against.
    ///
    /// `None` leaves write routes open.
    pub auth_url: Option<Url>,
}

impl Config {
    /// Reads the configuration from environment variables.
    ///
    /// `DATABASE_URL` and `PORT` are required. `HOST` defaults to `127.0.0.1` and
    /// `DATABASE_TIMEOUT_SECS` to `5`. `IPEA_URL` is optional and must be an absolute
    /// http(s) URL when set.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every variable present and parseable
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is invalid
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let database_url = required("DATABASE_URL")?;
        let port = parse("PORT", required("PORT")?)?;
        let host = match lookup("HOST") {
            Some(value) => parse("HOST", value)?,
            None => DEFAULT_HOST,
        };
        let timeout_secs = match lookup("DATABASE_TIMEOUT_SECS") {
            Some(value) => parse("DATABASE_TIMEOUT_SECS", value)?,
            None => DEFAULT_DATABASE_TIMEOUT_SECS,
        };
        let auth_url = lookup("IPEA_URL")
            .map(|value| parse_base_url("IPEA_URL", value))
            .transpose()?;

        Ok(Self {
            database_url,
            host,
            port,
            database_timeout: Duration::from_secs(timeout_secs),
            auth_url,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse<T>(name: &str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let parsed = value.trim().parse::<T>();

    parsed.map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
        value,
    })
}

/// Parses a URL that key segments can be appended to.
fn parse_base_url(name: &str, value: String) -> Result<Url, ConfigError> {
    let url: Url = parse(name, value.clone())?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: "expected an absolute http(s) URL".to_string(),
            value,
        });
    }

    Ok(url)
}
