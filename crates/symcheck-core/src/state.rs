//! Request lifecycle state.
//!
//! One enum replaces the loose loading/error/result flags a UI would
//! otherwise juggle: exactly one variant is active at any time, so a stale
//! reply can never show up next to a fresh loading indicator. The
//! orchestrator is the single writer and replaces the whole value on every
//! submission; the presentation layer only reads.

use serde::{Deserialize, Serialize};

/// User-facing message for an empty or whitespace-only submission.
pub const EMPTY_INPUT_MESSAGE: &str = "Please describe your symptoms before checking.";

/// User-facing message for any transport, status, or decode failure.
pub const CONNECTION_ERROR_MESSAGE: &str = "An error occurred. Please check your connection.";

/// Lifecycle of a single analysis request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RequestState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A request is in flight; callers gate new submissions on this.
    Loading,
    /// The endpoint replied; the raw reply text is ready for formatting.
    Succeeded { reply: String },
    /// Validation or the request itself failed; the message is what the
    /// user sees.
    Failed { message: String },
}

impl RequestState {
    /// Whether a request is currently in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    /// The reply text, when the last submission succeeded.
    pub fn reply(&self) -> Option<&str> {
        match self {
            RequestState::Succeeded { reply } => Some(reply),
            _ => None,
        }
    }

    /// The user-facing failure message, when the last submission failed.
    pub fn failure(&self) -> Option<&str> {
        match self {
            RequestState::Failed { message } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_state_is_idle() {
        assert_eq!(RequestState::default(), RequestState::Idle);
    }

    #[test]
    fn accessors_match_variants() {
        let succeeded = RequestState::Succeeded {
            reply: "ok".to_string(),
        };
        assert_eq!(succeeded.reply(), Some("ok"));
        assert_eq!(succeeded.failure(), None);
        assert!(!succeeded.is_loading());

        let failed = RequestState::Failed {
            message: CONNECTION_ERROR_MESSAGE.to_string(),
        };
        assert_eq!(failed.failure(), Some(CONNECTION_ERROR_MESSAGE));
        assert_eq!(failed.reply(), None);

        assert!(RequestState::Loading.is_loading());
        assert_eq!(RequestState::Idle.reply(), None);
    }

    #[test]
    fn serializes_with_status_tag() {
        let state = RequestState::Succeeded {
            reply: "ok".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            json!({"status": "succeeded", "reply": "ok"})
        );
        assert_eq!(
            serde_json::to_value(RequestState::Idle).unwrap(),
            json!({"status": "idle"})
        );
    }
}
