//! Backend liveness payloads

use serde::{Deserialize, Serialize};

/// `GET /health` response
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    /// Language model availability as reported by the backend
    #[serde(default)]
    pub ollama: Option<bool>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }

    /// Whether replies may come from the language model
    pub fn ai_online(&self) -> bool {
        self.ollama.unwrap_or(false)
    }
}

/// Connectivity indicator shown in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendStatus {
    /// No health check has completed yet
    #[default]
    Unknown,
    /// Backend answered; `ai` tells whether the language model is reachable
    Online { ai: bool },
    Offline,
}

impl BackendStatus {
    pub fn from_health(health: &HealthStatus) -> Self {
        if health.is_healthy() {
            BackendStatus::Online {
                ai: health.ai_online(),
            }
        } else {
            BackendStatus::Offline
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BackendStatus::Unknown => "Connecting…",
            BackendStatus::Online { ai: true } => "Online · AI",
            BackendStatus::Online { ai: false } => "Online",
            BackendStatus::Offline => "Offline",
        }
    }
}
