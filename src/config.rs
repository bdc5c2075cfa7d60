//! Configuration file support
//!
//! Loads settings from ~/.sage-highlight.toml (or
//! %USERPROFILE%\.sage-highlight.toml on Windows).
//!
//! Example:
//! ```toml
//! enabled = true
//!
//! [debounce]
//! typing_ms = 300
//! external_ms = 100
//!
//! [theme]
//! Keyword = "#569cd6"
//! Comment = "bright-black"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::controller::Debounce;
use crate::error::Result;
use crate::syntax::Theme;

/// Upper bound for either debounce delay
const MAX_DELAY_MS: u64 = 5_000;

/// Configuration settings
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Whether highlighting is applied at all
    pub enabled: bool,
    /// Debounce delays
    pub debounce: DebounceConfig,
    /// Classification name to colour overrides
    pub theme: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DebounceConfig {
    /// Delay after the last keystroke
    pub typing_ms: u64,
    /// Delay after an external content replacement
    pub external_ms: u64,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            typing_ms: 300,
            external_ms: 100,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: true,
            debounce: DebounceConfig::default(),
            theme: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".sage-highlight.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".sage-highlight.toml"))
        }
    }

    /// Load configuration from the default path, falling back to defaults
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("no home directory, using default config");
                Self::default()
            }
        }
    }

    /// Load configuration from a file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::debug!("config not read from {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::parse(&contents) {
            Ok(config) => {
                tracing::info!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("failed to parse config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(contents)?;
        config.debounce.typing_ms = config.debounce.typing_ms.min(MAX_DELAY_MS);
        config.debounce.external_ms = config.debounce.external_ms.min(MAX_DELAY_MS);
        Ok(config)
    }

    pub fn debounce(&self) -> Debounce {
        Debounce {
            typing: Duration::from_millis(self.debounce.typing_ms),
            external: Duration::from_millis(self.debounce.external_ms),
        }
    }

    /// Default theme with this config's overrides applied
    pub fn theme(&self) -> Theme {
        let mut theme = Theme::default();
        let ignored =
            theme.apply_overrides(self.theme.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        for name in ignored {
            tracing::warn!("ignoring theme entry '{}'", name);
        }
        theme
    }
}
