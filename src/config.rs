use std::{
    fs,
    path::{Path, PathBuf}
};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{Level, event};

use crate::domain::constant::config::CONFIG_UNREADABLE;

/// Configuration for telemetry reporting
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Whether events are reported at all
    pub enabled:         bool,
    /// Event types removed from the catalog
    pub disabled_events: Vec<String>,
    /// Pretty-print JSON output
    pub pretty:          bool
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self { enabled: true, disabled_events: Vec::new(), pretty: false }
    }
}

impl TelemetryConfig {
    /// Returns false when the event was already disabled
    pub fn disable_event(&mut self, event_type: &str) -> bool {
        if self.disabled_events.iter().any(|name| name == event_type) {
            return false;
        }
        self.disabled_events.push(event_type.to_string());
        true
    }

    /// Returns false when the event wasn't disabled
    pub fn enable_event(&mut self, event_type: &str) -> bool {
        let before = self.disabled_events.len();
        self.disabled_events.retain(|name| name != event_type);
        self.disabled_events.len() != before
    }
}

/// Get the project directories for cross-platform config path resolution
pub fn get_project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "secsol-telemetry").context("Failed to determine project directories")
}

/// Get the configuration directory path
pub fn get_config_dir() -> Result<PathBuf> {
    let project_dirs = get_project_dirs()?;
    Ok(project_dirs.config_dir().to_path_buf())
}

/// Get the config file path
pub fn get_config_file_path() -> Result<PathBuf> {
    let config_dir = get_config_dir()?;
    Ok(config_dir.join("config.yaml"))
}

/// Load configuration from file or create default if it doesn't exist
pub fn load_config() -> Result<TelemetryConfig> {
    load_config_from(&get_config_file_path()?)
}

/// Read configuration without touching the file system, defaults when missing
pub fn read_config() -> Result<TelemetryConfig> {
    Ok(read_config_from(&get_config_file_path()?)?.unwrap_or_default())
}

/// Configuration for read-only commands; an unreadable file falls back to defaults
pub fn config_or_default() -> TelemetryConfig {
    match get_config_file_path() {
        Ok(path) => config_or_default_from(&path),
        Err(e) => {
            event!(Level::WARN, event = CONFIG_UNREADABLE, error = %e);
            TelemetryConfig::default()
        }
    }
}

/// Save configuration to file
pub fn save_config(config: &TelemetryConfig) -> Result<()> {
    save_config_to(&get_config_file_path()?, config)
}

/// Load configuration from `path`, writing the default there when missing
pub fn load_config_from(path: &Path) -> Result<TelemetryConfig> {
    match read_config_from(path)? {
        Some(config) => Ok(config),
        None => {
            let config = TelemetryConfig::default();
            save_config_to(path, &config)?;
            Ok(config)
        }
    }
}

/// Read configuration from `path`; `None` when the file doesn't exist
pub fn read_config_from(path: &Path) -> Result<Option<TelemetryConfig>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path).with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config =
        serde_yaml::from_str(&content).with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(Some(config))
}

pub fn config_or_default_from(path: &Path) -> TelemetryConfig {
    match read_config_from(path) {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            event!(Level::WARN, event = CONFIG_UNREADABLE, path = %path.display(), error = format!("{e:#}"));
            TelemetryConfig::default()
        }
    }
}

/// Save configuration to `path`, creating parent directories
pub fn save_config_to(path: &Path, config: &TelemetryConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }

    let content = serde_yaml::to_string(config).context("Failed to serialize config")?;

    fs::write(path, content).with_context(|| format!("Failed to write config file: {}", path.display()))?;

    Ok(())
}

/// Initialize the configuration directory and default config file
pub fn init_config_dirs() -> Result<PathBuf> {
    let config_dir = get_config_dir()?;

    fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create config directory: {}", config_dir.display()))?;

    let config_path = get_config_file_path()?;
    if !config_path.exists() {
        save_config_to(&config_path, &TelemetryConfig::default())?;
    }

    Ok(config_path)
}
