use serde::{Deserialize, Serialize};
use std::fmt;

/// Connection state of the status screen
///
/// Starts as `Checking` and is resolved exactly once, by the probe outcome.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Checking,
    Connected(String),
    Error(String),
}

/// Fieldless view of [`ConnectionStatus`], used for styling and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Checking,
    Connected,
    Error,
}

impl ConnectionStatus {
    /// Apply the probe outcome. Only the first call has any effect.
    ///
    /// Returns `true` if the status changed.
    pub fn resolve<E: fmt::Display>(&mut self, outcome: Result<String, E>) -> bool {
        if !self.is_checking() {
            return false;
        }

        *self = match outcome {
            Ok(message) => Self::Connected(message),
            Err(err) => {
                let detail = err.to_string();
                if detail.trim().is_empty() {
                    Self::Error("unknown error".to_string())
                } else {
                    Self::Error(detail)
                }
            }
        };

        true
    }

    pub fn is_checking(&self) -> bool {
        matches!(self, Self::Checking)
    }

    pub fn kind(&self) -> StatusKind {
        match self {
            Self::Checking => StatusKind::Checking,
            Self::Connected(_) => StatusKind::Connected,
            Self::Error(_) => StatusKind::Error,
        }
    }

    /// Badge label
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Checking => "⏳ Checking...",
            Self::Connected(_) => "✓ Connected",
            Self::Error(_) => "✗ Error",
        }
    }

    /// Line shown under the badge
    pub fn backend_message(&self) -> &str {
        match self {
            Self::Checking => "Loading...",
            Self::Connected(message) => message,
            Self::Error(_) => "Failed to connect to backend",
        }
    }

    pub fn error_detail(&self) -> Option<&str> {
        match self {
            Self::Error(detail) => Some(detail),
            _ => None,
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Checking => "checking",
            Self::Connected => "connected",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}
