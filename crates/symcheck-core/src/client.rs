//! Analysis endpoint client and request orchestrator.
//!
//! [`AnalysisClient`] is the transport seam: one JSON POST per submission,
//! a status gate, and reply-text extraction. [`Orchestrator`] owns the
//! [`RequestState`] on top of it and is its only writer. No retries, no
//! cancellation, no streaming: a submission runs to completion and lands in
//! exactly one terminal state.

use crate::error::AnalysisError;
use crate::state::{RequestState, CONNECTION_ERROR_MESSAGE, EMPTY_INPUT_MESSAGE};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Wire body for the analysis endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRequest {
    /// Trimmed symptom description.
    pub symptoms: String,
}

/// HTTP client for the remote symptom analysis endpoint.
///
/// The endpoint URL is an opaque string supplied by the host; see
/// [`crate::config`] for how the CLI resolves it.
pub struct AnalysisClient {
    client: reqwest::Client,
    endpoint: String,
}

impl AnalysisClient {
    /// Create a client with the default timeout.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, AnalysisError> {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT_SECS)
    }

    /// Create a client with an explicit per-request timeout.
    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self, AnalysisError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit one symptom description and return the reply text.
    ///
    /// Posts `{"symptoms": …}` with the JSON content type, requires a 2xx
    /// status, then picks the reply text out of the body: a non-empty
    /// `reply` string field first, a non-empty `output` string field next,
    /// and the whole body serialized back to text as the last resort.
    pub async fn analyze(&self, symptoms: &str) -> Result<String, AnalysisError> {
        let symptoms = symptoms.trim();
        if symptoms.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let request_id = Uuid::new_v4();
        debug!(%request_id, endpoint = %self.endpoint, "submitting symptoms for analysis");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&AnalysisRequest {
                symptoms: symptoms.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%request_id, %status, "analysis endpoint returned an error status");
            return Err(AnalysisError::Status(status));
        }

        let body = response.text().await?;
        let value: serde_json::Value = serde_json::from_str(&body)?;
        let reply = extract_reply(&value)?;
        debug!(%request_id, reply_len = reply.len(), "analysis reply received");
        Ok(reply)
    }
}

/// Pick the reply text out of a decoded body.
///
/// Empty string fields count as absent, so `{"reply": ""}` falls through to
/// `output` and then to the serialized body.
fn extract_reply(value: &serde_json::Value) -> Result<String, AnalysisError> {
    let field = |name: &str| {
        value
            .get(name)
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    match field("reply").or_else(|| field("output")) {
        Some(text) => Ok(text),
        None => Ok(serde_json::to_string(value)?),
    }
}

/// Owns the lifecycle of analysis submissions.
///
/// Single writer for [`RequestState`]: each submission replaces the whole
/// state, so a prior reply or failure never leaks into the next attempt.
/// Callers keep at most one request in flight by gating on
/// [`RequestState::Loading`]; the CLI is sequential, which makes that hold
/// by construction.
pub struct Orchestrator {
    client: AnalysisClient,
    state: RequestState,
}

impl Orchestrator {
    pub fn new(client: AnalysisClient) -> Self {
        Self {
            client,
            state: RequestState::Idle,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Drive one full submission and return the terminal state.
    ///
    /// Whitespace-only input fails validation directly, without touching
    /// the network. Valid input transitions through `Loading` for the
    /// duration of the call. Transport, status, and decode failures all
    /// collapse to the one generic connection message; the detail is
    /// logged, not surfaced.
    pub async fn submit(&mut self, raw_input: &str) -> &RequestState {
        let symptoms = raw_input.trim();
        if symptoms.is_empty() {
            self.state = RequestState::Failed {
                message: EMPTY_INPUT_MESSAGE.to_string(),
            };
            return &self.state;
        }

        self.state = RequestState::Loading;
        self.state = match self.client.analyze(symptoms).await {
            Ok(reply) => RequestState::Succeeded { reply },
            Err(AnalysisError::EmptyInput) => RequestState::Failed {
                message: EMPTY_INPUT_MESSAGE.to_string(),
            },
            Err(err) => {
                warn!(error = %err, "analysis request failed");
                RequestState::Failed {
                    message: CONNECTION_ERROR_MESSAGE.to_string(),
                }
            }
        };
        &self.state
    }
}
