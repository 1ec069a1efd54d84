// SPDX-License-Identifier: MPL-2.0
//! Manager-wide configuration.
//!
//! This module handles the notification manager's settings and loading/saving
//! them to a `notifications.toml` file. Values read from disk are clamped to
//! their valid ranges when the manager consumes them.
//!
//! # Examples
//!
//! ```no_run
//! use iced_snackbar::config::{self, Config};
//!
//! // Load existing configuration (defaults when the file is absent)
//! let mut config = config::load("MyApp").unwrap_or_default();
//!
//! // Modify a setting
//! config.max_visible = 3;
//!
//! // Save the modified configuration
//! config::save("MyApp", &config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::notification::{
    DisplayDuration, HistoryCapacity, MaxVisible, Spacing, TickInterval,
};
use crate::error::Result;
use crate::notifications::Position;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "notifications.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Visible notifications per position before the oldest is evicted.
    pub max_visible: usize,
    /// Anchor used when a request does not name a (valid) position.
    pub default_position: String,
    /// Gap between stacked notifications, in pixels.
    pub spacing: f32,
    /// Auto-dismiss duration for requests that do not set one. Zero is persistent.
    pub default_duration_ms: u64,
    /// Countdown tick cadence.
    pub tick_interval_ms: u64,
    /// Number of lifecycle events kept for diagnostics.
    pub history_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_visible: DEFAULT_MAX_VISIBLE,
            default_position: Position::default().to_string(),
            spacing: DEFAULT_SPACING_PX,
            default_duration_ms: DEFAULT_DURATION_MS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl Config {
    #[must_use]
    pub fn max_visible(&self) -> MaxVisible {
        let clamped = MaxVisible::new(self.max_visible);
        if clamped.value() != self.max_visible {
            warn!(
                "max_visible {} out of range, using {}",
                self.max_visible,
                clamped.value()
            );
        }
        clamped
    }

    /// Resolves the configured default position, falling back to bottom-right.
    #[must_use]
    pub fn default_position(&self) -> Position {
        match self.default_position.parse() {
            Ok(position) => position,
            Err(_) => {
                warn!(
                    "unknown default_position {:?}, using {}",
                    self.default_position,
                    Position::default()
                );
                Position::default()
            }
        }
    }

    #[must_use]
    pub fn spacing(&self) -> Spacing {
        Spacing::new(self.spacing)
    }

    #[must_use]
    pub fn default_duration(&self) -> DisplayDuration {
        let clamped = DisplayDuration::capped_millis(self.default_duration_ms);
        if clamped.as_millis() != self.default_duration_ms {
            warn!(
                "default_duration_ms {} out of range, using {}",
                self.default_duration_ms,
                clamped.as_millis()
            );
        }
        clamped
    }

    #[must_use]
    pub fn tick_interval(&self) -> TickInterval {
        TickInterval::from_millis(self.tick_interval_ms)
    }

    #[must_use]
    pub fn history_capacity(&self) -> HistoryCapacity {
        HistoryCapacity::new(self.history_capacity)
    }
}

fn get_default_config_path(app_name: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(app_name);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads `<config_dir>/<app_name>/notifications.toml`, or defaults when absent.
pub fn load(app_name: &str) -> Result<Config> {
    if let Some(path) = get_default_config_path(app_name) {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(app_name: &str, config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path(app_name) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a config file. Unparseable content yields the default configuration.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match from_toml_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            warn!("ignoring invalid config at {}: {err}", path.display());
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// Parses a configuration from TOML text.
pub fn from_toml_str(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}
