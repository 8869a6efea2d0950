use botdo_shared::RootMessage;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    /// Backend answered with a non-success status
    #[error("HTTP error! status: {}", .0.as_u16())]
    HttpStatus(StatusCode),

    /// Request could not be sent, or the body was not a `RootMessage`
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// One-shot health check against the backend root
#[derive(Debug, Clone)]
pub struct StatusProbe {
    url: String,
    http_client: reqwest::Client,
}

impl StatusProbe {
    pub fn new(base_url: &str) -> Result<Self, ProbeError> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("botdo-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            url: format!("{}/", base_url),
            http_client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send the request and return the backend's `message`
    pub async fn check(&self) -> Result<String, ProbeError> {
        tracing::debug!("Probing backend at {}", self.url);

        let response = self.http_client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::HttpStatus(status));
        }

        let body: RootMessage = response.json().await?;
        Ok(body.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{spawn_backend, unreachable_url};
    use axum::{http::StatusCode as AxumStatus, routing::get, Json, Router};
    use serde_json::json;

    #[test]
    fn test_url_is_base_plus_root() {
        let probe = StatusProbe::new("http://localhost:8000").unwrap();
        assert_eq!(probe.url(), "http://localhost:8000/");
    }

    #[tokio::test]
    async fn test_success_returns_message() {
        let base = spawn_backend(
            Router::new().route("/", get(|| async { Json(json!({"message": "ok"})) })),
        )
        .await;

        let probe = StatusProbe::new(&base).unwrap();
        assert_eq!(probe.check().await.unwrap(), "ok");
    }

    #[tokio::test]
    async fn test_server_error_is_http_status() {
        let base = spawn_backend(
            Router::new().route("/", get(|| async { AxumStatus::INTERNAL_SERVER_ERROR })),
        )
        .await;

        let err = StatusProbe::new(&base).unwrap().check().await.unwrap_err();
        assert!(matches!(err, ProbeError::HttpStatus(code) if code.as_u16() == 500));
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }

    #[tokio::test]
    async fn test_missing_message_is_transport_error() {
        let base = spawn_backend(
            Router::new().route("/", get(|| async { Json(json!({"status": "running"})) })),
        )
        .await;

        let err = StatusProbe::new(&base).unwrap().check().await.unwrap_err();
        assert!(matches!(err, ProbeError::Transport(_)));
    }

    #[tokio::test]
    async fn test_non_json_body_is_transport_error() {
        let base =
            spawn_backend(Router::new().route("/", get(|| async { "<html>up</html>" }))).await;

        let err = StatusProbe::new(&base).unwrap().check().await.unwrap_err();
        assert!(matches!(err, ProbeError::Transport(_)));
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        let base = unreachable_url().await;

        let err = StatusProbe::new(&base).unwrap().check().await.unwrap_err();
        assert!(matches!(err, ProbeError::Transport(_)));
        assert!(!err.to_string().is_empty());
    }
}
