//! Error types for symcheck.

use thiserror::Error;

/// Failures in the analysis request path.
///
/// Every variant except `EmptyInput` collapses to one generic user-facing
/// message; the detail lands in the diagnostic log only.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("symptom description is empty")]
    EmptyInput,

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("analysis endpoint returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed reply body: {0}")]
    MalformedReply(#[from] serde_json::Error),
}

/// Failures resolving the client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no analysis endpoint configured; set SYMCHECK_ENDPOINT or add `endpoint` to {0}")]
    MissingEndpoint(String),

    #[error("could not read config file {path}: {source}")]
    Unreadable {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Invalid {
        path: String,
        source: toml::de::Error,
    },
}
