//! Interactive command - tap buttons from stdin in real time

use super::effective_config;
use anyhow::{Context, Result};
use clicker_lib::config::ConfigOverrides;
use clicker_lib::{ButtonId, MainActivity, TerminalSurface};
use owo_colors::OwoColorize;
use rapidclick::SystemClock;
use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

pub async fn run(config_path: Option<&Path>, overrides: &ConfigOverrides) -> Result<()> {
    let config = effective_config(config_path, overrides)?;
    let intent = MainActivity::launch_intent(&config).context("Failed to build launch intent")?;
    let mut activity = MainActivity::on_create(
        Rc::new(TerminalSurface),
        Arc::new(SystemClock),
        &intent,
        &config.debounce,
    );

    eprintln!(
        "{} {}",
        "Tap away:".bold(),
        "s = short toast, l = long toast, q = quit".dimmed()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if matches!(input, "q" | "quit" | "exit") {
            break;
        }

        match ButtonId::from_name(input) {
            Some(id) => {
                debug!(button = %id, "tap");
                activity.click(id);
            }
            None => eprintln!("{} unknown input '{}'", "?".yellow(), input),
        }
    }

    Ok(())
}
