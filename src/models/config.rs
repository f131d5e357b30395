//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP and scanning behavior settings
    #[serde(default)]
    pub scan: ScanConfig,

    /// Response body classification settings
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.scan.user_agent.trim().is_empty() {
            return Err(AppError::validation("scan.user_agent is empty"));
        }
        if self.scan.timeout_secs == 0 {
            return Err(AppError::validation("scan.timeout_secs must be > 0"));
        }
        if self.scan.parallel == 0 {
            return Err(AppError::validation("scan.parallel must be > 0"));
        }
        if self.classifier.pattern.trim().is_empty() {
            return Err(AppError::validation("classifier.pattern is empty"));
        }
        Ok(())
    }
}

/// HTTP client and scanning behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds, covering connect and body transfer
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Maximum number of domains scanned at once
    #[serde(default = "defaults::parallel")]
    pub parallel: usize,

    /// Qualifying paths per domain before moving on; 0 checks every path
    #[serde(default = "defaults::stop_count")]
    pub stop_count: usize,

    /// Distinct matches a body needs before its path qualifies
    #[serde(default = "defaults::min_matches")]
    pub min_matches: usize,
}

impl ScanConfig {
    /// Whether the per-domain early stop is disabled.
    pub fn is_unbounded(&self) -> bool {
        self.stop_count == 0
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            parallel: defaults::parallel(),
            stop_count: defaults::stop_count(),
            min_matches: defaults::min_matches(),
        }
    }
}

/// Classification pattern settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Case-insensitive alternation applied to every response body
    #[serde(default = "defaults::pattern")]
    pub pattern: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            pattern: defaults::pattern(),
        }
    }
}

mod defaults {
    use crate::services::DEFAULT_PATTERN;

    pub fn user_agent() -> String {
        format!("bbpscraper/{}", env!("CARGO_PKG_VERSION"))
    }
    pub fn timeout() -> u64 {
        15
    }
    pub fn parallel() -> usize {
        10
    }
    pub fn stop_count() -> usize {
        1
    }
    pub fn min_matches() -> usize {
        2
    }
    pub fn pattern() -> String {
        DEFAULT_PATTERN.to_string()
    }
}
