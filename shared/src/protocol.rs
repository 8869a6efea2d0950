use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Server -> Client: body of `GET /`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootMessage {
    /// Greeting shown on the status screen once connected
    pub message: String,

    /// Free-form run state, e.g. "running"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Backend version string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Whether an outbound integration has credentials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationState {
    Configured,
    NotConfigured,
}

/// Server -> Client: body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,

    /// Service name
    pub service: String,

    /// Deployment environment, e.g. "production"
    pub environment: String,

    pub integrations: Integrations,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Integrations {
    pub slack: IntegrationState,
    pub whapi: IntegrationState,
    pub digitalocean: IntegrationState,
}

/// Server -> Client: body of `GET /api/test`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiIndex {
    pub message: String,

    /// Endpoint name -> path
    pub endpoints: BTreeMap<String, String>,
}

impl RootMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            version: None,
        }
    }
}

impl IntegrationState {
    /// A credential counts as configured when it is present and non-empty
    pub fn from_credential(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => Self::Configured,
            _ => Self::NotConfigured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_message_only_requires_message() {
        let decoded: RootMessage = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
        assert_eq!(decoded, RootMessage::new("ok"));
    }

    #[test]
    fn test_root_message_rejects_missing_message() {
        let decoded = serde_json::from_str::<RootMessage>(r#"{"status":"running"}"#);
        assert!(decoded.is_err());
    }

    #[test]
    fn test_root_message_keeps_extra_fields() {
        let body = r#"{"message":"Hello","status":"running","version":"1.0.0"}"#;
        let decoded: RootMessage = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.status.as_deref(), Some("running"));
        assert_eq!(decoded.version.as_deref(), Some("1.0.0"));
    }

    #[test]
    fn test_integration_state_wire_format() {
        let json = serde_json::to_string(&IntegrationState::NotConfigured).unwrap();
        assert_eq!(json, r#""not_configured""#);
    }

    #[test]
    fn test_integration_state_from_credential() {
        assert_eq!(
            IntegrationState::from_credential(Some("xoxb-123")),
            IntegrationState::Configured
        );
        assert_eq!(
            IntegrationState::from_credential(Some("  ")),
            IntegrationState::NotConfigured
        );
        assert_eq!(
            IntegrationState::from_credential(None),
            IntegrationState::NotConfigured
        );
    }
}
