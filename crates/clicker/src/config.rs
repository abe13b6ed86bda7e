//! Application configuration
//!
//! Loaded from `<config dir>/clicker/config.toml` when present, otherwise
//! built-in defaults. Command-line flags are layered on top through
//! [`ConfigOverrides`].

use rapidclick::{ApiLevel, GuardScope, DEFAULT_INTERVAL_MS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Longest debounce interval accepted
pub const MAX_INTERVAL_MS: u64 = 60_000;

pub const DEFAULT_SHORT_MESSAGE: &str = "This is a short Toast";
pub const DEFAULT_LONG_MESSAGE: &str = "This is a long Toast";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("debounce.interval_ms must be at most 60000, got {0}")]
    IntervalTooLong(u64),

    #[error("platform.api_level must be between 1 and 100, got {0}")]
    ApiLevelOutOfRange(u32),

    #[error("toast.{0} must not be empty")]
    EmptyMessage(&'static str),

    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebounceConfig {
    /// Minimum time between accepted taps
    pub interval_ms: u64,
    /// Whether guarded buttons share one timestamp
    pub scope: GuardScope,
    /// Also guard the long-toast button
    pub guard_long_button: bool,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            scope: GuardScope::Process,
            guard_long_button: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub short_message: String,
    pub long_message: String,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            short_message: DEFAULT_SHORT_MESSAGE.to_string(),
            long_message: DEFAULT_LONG_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    pub api_level: ApiLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub debounce: DebounceConfig,
    pub toast: ToastConfig,
    pub platform: PlatformConfig,
}

impl AppConfig {
    /// Parse TOML; missing keys fall back to defaults
    pub fn from_toml_str(raw: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.debounce.interval_ms > MAX_INTERVAL_MS {
            return Err(ConfigError::IntervalTooLong(self.debounce.interval_ms));
        }
        if !(1..=100).contains(&self.platform.api_level.0) {
            return Err(ConfigError::ApiLevelOutOfRange(self.platform.api_level.0));
        }
        if self.toast.short_message.trim().is_empty() {
            return Err(ConfigError::EmptyMessage("short_message"));
        }
        if self.toast.long_message.trim().is_empty() {
            return Err(ConfigError::EmptyMessage("long_message"));
        }
        Ok(())
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub interval_ms: Option<u64>,
    pub scope: Option<GuardScope>,
    pub guard_long_button: Option<bool>,
    pub api_level: Option<u32>,
    pub short_message: Option<String>,
    pub long_message: Option<String>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(interval_ms) = self.interval_ms {
            config.debounce.interval_ms = interval_ms;
        }
        if let Some(scope) = self.scope {
            config.debounce.scope = scope;
        }
        if let Some(guard_long_button) = self.guard_long_button {
            config.debounce.guard_long_button = guard_long_button;
        }
        if let Some(level) = self.api_level {
            config.platform.api_level = ApiLevel(level);
        }
        if let Some(message) = &self.short_message {
            config.toast.short_message = message.clone();
        }
        if let Some(message) = &self.long_message {
            config.toast.long_message = message.clone();
        }
    }
}

/// Default location of the config file
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("clicker").join("config.toml"))
}

/// Load configuration
///
/// An explicit `path` must exist. Without one, the default location is used
/// if it exists and defaults otherwise.
pub fn load(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let resolved = match path {
        Some(path) => Some(path.to_path_buf()),
        None => config_file_path().filter(|p| p.exists()),
    };

    let config = match resolved {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?;
            AppConfig::from_toml_str(&raw, &path)?
        }
        None => {
            debug!("no config file, using defaults");
            AppConfig::default()
        }
    };

    config.validate()?;
    Ok(config)
}

/// Annotated example configuration
pub fn example_config() -> &'static str {
    r#"# Clicker configuration

[debounce]
# Minimum milliseconds between accepted taps (0-60000)
interval_ms = 300
# "process": every guarded button shares one timestamp
# "per-target": each guarded button has its own
scope = "process"
# Guard the long-toast button as well
guard_long_button = false

[toast]
short_message = "This is a short Toast"
long_message = "This is a long Toast"

[platform]
# Host API level; 33 and above use type-checked extras lookup
api_level = 34
"#
}
