//! Configuration command
//!
//! Shows the effective configuration, the config file location, or an
//! example file.

use super::effective_config;
use anyhow::{Context, Result};
use clicker_lib::config::{self, ConfigOverrides};
use owo_colors::OwoColorize;
use std::path::Path;

/// Print the effective configuration (file plus overrides)
pub fn run_show(config_path: Option<&Path>, overrides: &ConfigOverrides) -> Result<()> {
    let config = effective_config(config_path, overrides)?;

    println!("{}", "Effective Configuration".bold());
    match config_path {
        Some(path) => println!("{}: {}\n", "Source".dimmed(), path.display().dimmed()),
        None => println!("{}: {}\n", "Source".dimmed(), "defaults + default file".dimmed()),
    }

    println!("{}", "[debounce]".yellow());
    println!(
        "  {} = {} {}",
        "interval_ms".cyan(),
        config.debounce.interval_ms,
        format!("({}ms)", config.debounce.interval_ms).dimmed()
    );
    println!("  {} = {}", "scope".cyan(), config.debounce.scope);
    println!(
        "  {} = {}",
        "guard_long_button".cyan(),
        config.debounce.guard_long_button
    );

    println!("\n{}", "[toast]".yellow());
    println!("  {} = {:?}", "short_message".cyan(), config.toast.short_message);
    println!("  {} = {:?}", "long_message".cyan(), config.toast.long_message);

    println!("\n{}", "[platform]".yellow());
    println!(
        "  {} = {} {}",
        "api_level".cyan(),
        config.platform.api_level.0,
        if config.platform.api_level.supports_typed_extras() {
            "(typed extras)".dimmed().to_string()
        } else {
            "(legacy extras)".dimmed().to_string()
        }
    );

    println!("\n{}", "Valid Ranges:".bold());
    println!("  interval_ms: 0-60000");
    println!("  scope: process | per-target");
    println!("  api_level: 1-100");

    Ok(())
}

/// Print the default config file location
pub fn run_path() -> Result<()> {
    let path = config::config_file_path().context("Could not determine config file path")?;
    println!("{}", path.display());
    if !path.exists() {
        println!(
            "{}",
            "File does not exist. Use 'clicker config --example' for a template.".yellow()
        );
    }
    Ok(())
}

/// Print an example configuration
pub fn run_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}
