//! Core library for the symcheck symptom analysis client.
//!
//! Two pieces carry the real logic: [`format::format_reply`], which turns
//! the endpoint's reply text into typed content blocks, and
//! [`client::Orchestrator`], which owns the lifecycle of a single analysis
//! request. Everything else here is support for those two: the request
//! state, the endpoint configuration, and the error types. Terminal
//! presentation lives in the `symcheck` binary.

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod state;

pub use client::{AnalysisClient, AnalysisRequest, Orchestrator};
pub use config::{ClientConfig, ConfigFile};
pub use error::{AnalysisError, ConfigError};
pub use format::{format_reply, split_spans, ContentBlock, InlineSpan};
pub use state::{RequestState, CONNECTION_ERROR_MESSAGE, EMPTY_INPUT_MESSAGE};
