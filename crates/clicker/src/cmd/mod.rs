//! CLI command implementations

pub mod config;
pub mod interactive;
pub mod replay;

use anyhow::{Context, Result};
use clicker_lib::config::{load, AppConfig, ConfigOverrides};
use std::path::Path;

/// Load the config file, then apply command-line overrides
pub fn effective_config(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<AppConfig> {
    let mut config = load(path).context("Failed to load configuration")?;
    overrides.apply(&mut config);
    config.validate().context("Invalid configuration")?;
    Ok(config)
}
