//! Configuration handling for the site

use crate::state::{DEFAULT_RESET_DWELL, DEFAULT_SCROLL_THRESHOLD};
use crate::transport::DEFAULT_SUBMIT_DELAY;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment override for the contact endpoint
pub const ENDPOINT_ENV: &str = "LAUNCH_SCHOLAR_CONTACT_ENDPOINT";

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// User configuration. Every field is optional and falls back to a default.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SiteConfig {
    /// Artificial round-trip of the simulated submission, in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// How long the thank-you message stays up, in milliseconds
    pub reset_dwell_ms: Option<u64>,
    /// Rows scrolled before the nav bar switches style
    pub scroll_threshold: Option<u16>,
    /// Where to POST submissions. Unset means simulate.
    pub contact_endpoint: Option<String>,
    /// Timeout for the POST, in seconds
    pub request_timeout_secs: Option<u64>,
}

impl SiteConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "launchscholar", "launch-scholar")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Where the log file goes
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("launch-scholar.log"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let config = match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };

        Ok(config.with_endpoint_override(std::env::var(ENDPOINT_ENV).ok()))
    }

    /// An endpoint from the environment wins over the file
    fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            self.contact_endpoint = Some(endpoint);
        }
        self
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: SiteConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    pub fn submit_delay(&self) -> Duration {
        self.submit_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SUBMIT_DELAY)
    }

    pub fn reset_dwell(&self) -> Duration {
        self.reset_dwell_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_RESET_DWELL)
    }

    pub fn scroll_threshold(&self) -> u16 {
        self.scroll_threshold.unwrap_or(DEFAULT_SCROLL_THRESHOLD)
    }

    /// Configured endpoint, ignoring blank values
    pub fn contact_endpoint(&self) -> Option<&str> {
        self.contact_endpoint
            .as_deref()
            .map(str::trim)
            .filter(|endpoint| !endpoint.is_empty())
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT)
    }
}
