//! Configuration file handling
//!
//! Values are layered: CLI flags over environment over the config file over
//! built-in defaults.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use super::paths::config_path;
use super::{Error, Result};

/// Environment variable overriding `api.base_url`
pub const ENV_BASE_URL: &str = "FOODY_BASE_URL";

/// Environment variable overriding `api.token`
pub const ENV_TOKEN: &str = "FOODY_TOKEN";

/// Main configuration structure
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    /// Remote API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Timeout settings
    #[serde(default)]
    pub timeouts: Timeouts,
}

/// Remote API settings
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL every endpoint path is resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token presented on every request
    #[serde(default)]
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
        }
    }
}

fn default_base_url() -> String {
    "http://softuni-qa-loadbalancer-2137572849.eu-north-1.elb.amazonaws.com:86".to_string()
}

/// Timeout settings in seconds
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Timeouts {
    /// Whole-request timeout. Unset leaves the transport default in place.
    #[serde(default)]
    pub request_secs: Option<u64>,
}

impl Timeouts {
    pub fn request(&self) -> Option<Duration> {
        self.request_secs.map(Duration::from_secs)
    }
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    /// Apply `FOODY_BASE_URL` / `FOODY_TOKEN` from the process environment
    pub fn apply_env(self) -> Self {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides using a custom lookup
    pub fn apply_env_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url;
        }
        if let Some(token) = lookup(ENV_TOKEN).filter(|v| !v.trim().is_empty()) {
            self.api.token = Some(token);
        }
        self
    }

    /// Apply explicit overrides (typically from CLI flags)
    ///
    /// Blank values are ignored, the same as blank environment variables.
    pub fn with_overrides(mut self, base_url: Option<String>, token: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url;
        }
        if let Some(token) = token.filter(|v| !v.trim().is_empty()) {
            self.api.token = Some(token);
        }
        self
    }

    /// The configured token, or a setup error if there is none
    pub fn require_token(&self) -> Result<&str> {
        self.api
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(Error::MissingCredential)
    }
}
