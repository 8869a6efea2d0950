use axum::http::HeaderValue;
use botdo_shared::{IntegrationState, Integrations};
use std::net::SocketAddr;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_ENVIRONMENT: &str = "production";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Allowed cross-origin callers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<HeaderValue>),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub environment: String,
    pub cors_origins: CorsOrigins,
    pub integrations: Integrations,
}

impl Config {
    /// Load from the process environment, after reading `.env` if present
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT"))?,
            None => DEFAULT_PORT,
        };

        let environment = lookup("ENVIRONMENT")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        let cors_origins = parse_cors_origins(lookup("CORS_ORIGINS").as_deref())?;

        let integrations = Integrations {
            slack: IntegrationState::from_credential(lookup("SLACK_BOT_TOKEN").as_deref()),
            whapi: IntegrationState::from_credential(lookup("WHAPI_API_KEY").as_deref()),
            digitalocean: IntegrationState::from_credential(
                lookup("DIGITALOCEAN_API_KEY").as_deref(),
            ),
        };

        Ok(Self {
            port,
            environment,
            cors_origins,
            integrations,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_cors_origins(raw: Option<&str>) -> Result<CorsOrigins, ConfigError> {
    let raw = match raw.map(str::trim) {
        None | Some("") | Some("*") => return Ok(CorsOrigins::Any),
        Some(raw) => raw,
    };

    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid("CORS_ORIGINS"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsOrigins::List(origins))
}
