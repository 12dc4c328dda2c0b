use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

use crate::domain::page::{is_offered_page_size, DEFAULT_PAGE_SIZE};

pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/comments";

const APP_DIR: &str = "swift-dashboard";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// JSON endpoint serving the full record collection
    pub endpoint: String,

    /// Give up on the fetch after this many seconds; unset waits forever
    pub request_timeout_secs: Option<u64>,

    /// Page size used until the user picks one
    pub default_page_size: usize,

    /// Where the desktop build keeps its preference file
    pub preferences_path: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: None,
            default_page_size: DEFAULT_PAGE_SIZE,
            preferences_path: None,
        }
    }
}

impl DashboardConfig {
    /// Loads from `SWIFT_DASHBOARD_CONFIG` or the user config directory, then
    /// applies environment overrides. A missing file means defaults.
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Like [`load`](Self::load), but a broken file is logged and replaced by
    /// defaults so the dashboard still starts.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!(error = %format!("{e:#}"), "Falling back to default configuration");
            let mut config = Self::default();
            config.apply_env_overrides();
            config
        })
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config.normalized())
    }

    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("SWIFT_DASHBOARD_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    /// Explicit path if configured, otherwise `<data dir>/swift-dashboard/preferences.json`.
    pub fn resolved_preferences_path(&self) -> Option<PathBuf> {
        self.preferences_path.clone().or_else(|| {
            dirs::data_dir().map(|dir| dir.join(APP_DIR).join("preferences.json"))
        })
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(endpoint) = std::env::var("SWIFT_DASHBOARD_ENDPOINT") {
            if !endpoint.trim().is_empty() {
                self.endpoint = endpoint;
            }
        }
    }

    fn normalized(mut self) -> Self {
        if !is_offered_page_size(self.default_page_size) {
            warn!(
                page_size = self.default_page_size,
                "Configured page size is not offered, using {}", DEFAULT_PAGE_SIZE
            );
            self.default_page_size = DEFAULT_PAGE_SIZE;
        }
        self
    }
}
