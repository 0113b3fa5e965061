//! Dashboard configuration: parsing, defaults, environment overrides.
//!
//! Configuration is an optional TOML file. Every section and key has a
//! default, so running without a file is the same as an empty one:
//!
//! ```toml
//! [server]
//! bind = "127.0.0.1:8501"
//!
//! [provider]
//! base_url = "https://query1.finance.yahoo.com"
//! user_agent = "Mozilla/5.0"
//!
//! [presentation]
//! tail_rows = 5
//! ```
//!
//! After parsing, `DASHBOARD_BIND` and `DASHBOARD_PROVIDER_URL` override the
//! file values when set to a non-empty string.

use std::path::Path;

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use shared_utils::env::get_non_empty_env_var;
use tracing::debug;

use crate::providers::yahoo::DEFAULT_BASE_URL;

pub const BIND_ENV: &str = "DASHBOARD_BIND";
pub const PROVIDER_URL_ENV: &str = "DASHBOARD_PROVIDER_URL";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub server: ServerConfig,
    pub provider: ProviderConfig,
    pub presentation: PresentationConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Socket address the HTTP dashboard listens on.
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8501".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderConfig {
    /// Scheme and host of the chart API, without a path.
    pub base_url: String,
    pub user_agent: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: "Mozilla/5.0".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PresentationConfig {
    /// Number of trailing rows in the raw-data preview.
    pub tail_rows: usize,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self { tail_rows: 5 }
    }
}

impl Config {
    /// Parse a config from a TOML string. No overrides, no validation.
    pub fn from_toml_str(toml_str: &str) -> anyhow::Result<Self> {
        toml::from_str(toml_str).context("failed to parse dashboard config TOML")
    }

    /// Read and parse a config file. No overrides, no validation.
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("read config file {}", path.as_ref().display()))?;
        Self::from_toml_str(&text)
    }

    /// Load the effective configuration.
    ///
    /// Steps:
    /// - Parse `path` if given, otherwise start from defaults
    /// - Apply environment overrides
    /// - Validate
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides();
        config.validate()?;
        debug!(?config, "configuration loaded");
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(bind) = get_non_empty_env_var(BIND_ENV) {
            self.server.bind = bind;
        }
        if let Ok(url) = get_non_empty_env_var(PROVIDER_URL_ENV) {
            self.provider.base_url = url;
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.bind.trim().is_empty() {
            bail!("server.bind cannot be empty");
        }
        if self.provider.base_url.trim().is_empty() {
            bail!("provider.base_url cannot be empty");
        }
        if self.provider.user_agent.trim().is_empty() {
            bail!("provider.user_agent cannot be empty");
        }
        if self.presentation.tail_rows == 0 {
            bail!("presentation.tail_rows must be at least 1");
        }
        Ok(())
    }
}
