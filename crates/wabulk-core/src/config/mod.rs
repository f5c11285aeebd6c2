mod defaults;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::WabulkError;
use defaults::*;

/// Top-level wabulk configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub wabulk: AppConfig,
    #[serde(default)]
    pub browser: BrowserConfig,
    #[serde(default)]
    pub timeouts: TimeoutConfig,
    #[serde(default)]
    pub contacts: ContactsConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Browser session config.
///
/// `webdriver_url` points at a running chromedriver-compatible endpoint.
/// The profile directory is persisted across runs so the WhatsApp Web QR
/// pairing survives restarts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub headless: bool,
    /// Chrome user-data-dir. Empty = `{data_dir}/browser_profile`.
    #[serde(default)]
    pub profile_dir: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            webdriver_url: default_webdriver_url(),
            base_url: default_base_url(),
            headless: false,
            profile_dir: String::new(),
        }
    }
}

impl BrowserConfig {
    /// Resolve the profile directory, falling back to `{data_dir}/browser_profile`.
    pub fn resolved_profile_dir(&self, data_dir: &str) -> String {
        if self.profile_dir.is_empty() {
            format!("{}/browser_profile", shellexpand(data_dir))
        } else {
            shellexpand(&self.profile_dir)
        }
    }
}

/// Wait policies for the send workflow.
///
/// Two kinds of waits: bounded element waits (compose box, login) that poll
/// until a deadline, and fixed settle intervals after fire-and-forget actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    #[serde(default = "default_compose_wait_secs")]
    pub compose_wait_secs: u64,
    #[serde(default = "default_login_wait_secs")]
    pub login_wait_secs: u64,
    #[serde(default = "default_settle_secs")]
    pub settle_secs: u64,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            compose_wait_secs: default_compose_wait_secs(),
            login_wait_secs: default_login_wait_secs(),
            settle_secs: default_settle_secs(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl TimeoutConfig {
    pub fn compose_wait(&self) -> Duration {
        Duration::from_secs(self.compose_wait_secs)
    }

    pub fn login_wait(&self) -> Duration {
        Duration::from_secs(self.login_wait_secs)
    }

    pub fn settle(&self) -> Duration {
        Duration::from_secs(self.settle_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Contact list config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactsConfig {
    /// Default CSV file for `contacts` subcommands and `send --contacts`.
    #[serde(default = "default_contacts_path")]
    pub path: String,
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            path: default_contacts_path(),
        }
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, WabulkError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| WabulkError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| WabulkError::Config(format!("failed to parse config: {}", e)))?;

    Ok(config)
}
