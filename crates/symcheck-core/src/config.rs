//! Client configuration.
//!
//! The analysis endpoint is never hardcoded; it comes from the host
//! environment. Resolution order:
//!
//! 1. An explicit override (the CLI `--endpoint` flag)
//! 2. The `SYMCHECK_ENDPOINT` environment variable
//! 3. The `endpoint` key in `~/.config/symcheck/config.toml`
//!
//! The per-request timeout follows the same chain (`--timeout`, then the
//! `timeout_secs` key) and defaults to 60 seconds.

use crate::client::DEFAULT_TIMEOUT_SECS;
use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming the analysis endpoint.
pub const ENDPOINT_ENV: &str = "SYMCHECK_ENDPOINT";

/// On-disk configuration (`config.toml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    /// Analysis endpoint URL.
    pub endpoint: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ConfigFile {
    /// Load the default config file, or built-in defaults when it does not
    /// exist.
    pub fn load_default() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load a specific config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Invalid {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Resolved configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Analysis endpoint URL.
    pub endpoint: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Resolve from explicit overrides, the environment, and the config
    /// file, in that order.
    pub fn resolve(
        override_endpoint: Option<String>,
        override_timeout: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let file = ConfigFile::load_default()?;
        let env_endpoint = std::env::var(ENDPOINT_ENV).ok();
        Self::resolve_from(file, env_endpoint, override_endpoint, override_timeout)
    }

    /// Pure resolution step, split out so precedence is testable without
    /// touching the process environment.
    fn resolve_from(
        file: ConfigFile,
        env_endpoint: Option<String>,
        override_endpoint: Option<String>,
        override_timeout: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let endpoint = override_endpoint
            .or_else(|| env_endpoint.filter(|v| !v.is_empty()))
            .or(file.endpoint)
            .ok_or_else(|| ConfigError::MissingEndpoint(config_path_display()))?;
        Ok(Self {
            endpoint,
            timeout_secs: override_timeout.unwrap_or(file.timeout_secs),
        })
    }
}

/// Path of the config file under the XDG config directory.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("symcheck").join("config.toml"))
}

fn config_path_display() -> String {
    config_path()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "~/.config/symcheck/config.toml".to_string())
}
