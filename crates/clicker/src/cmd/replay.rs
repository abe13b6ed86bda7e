//! Replay command - run a tap script on a simulated clock

use super::effective_config;
use anyhow::{Context, Result};
use clicker_lib::config::ConfigOverrides;
use clicker_lib::script::{self, TapOutcome};
use clicker_lib::{MainActivity, RecordingSurface};
use owo_colors::OwoColorize;
use rapidclick::ManualClock;
use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;

pub fn run(config_path: Option<&Path>, overrides: &ConfigOverrides, script: &str) -> Result<()> {
    let config = effective_config(config_path, overrides)?;
    let taps = script::parse_script(script).context("Invalid tap script")?;

    let clock = Arc::new(ManualClock::new(0));
    let surface = RecordingSurface::new(clock.clone());
    let intent = MainActivity::launch_intent(&config).context("Failed to build launch intent")?;
    let mut activity =
        MainActivity::on_create(Rc::new(surface.clone()), clock.clone(), &intent, &config.debounce);

    println!(
        "{} {} taps {}",
        "Replaying".bold(),
        taps.len(),
        format!(
            "(interval {}ms, scope {}, long button {}, {})",
            config.debounce.interval_ms,
            config.debounce.scope,
            if config.debounce.guard_long_button { "guarded" } else { "unguarded" },
            config.platform.api_level,
        )
        .dimmed()
    );

    let outcomes = script::replay(&mut activity, &clock, &surface, &taps);
    for outcome in &outcomes {
        print_outcome(outcome);
    }

    let shown = outcomes.iter().filter(|o| o.shown.is_some()).count();
    println!("{} shown, {} suppressed", shown, outcomes.len() - shown);

    Ok(())
}

fn print_outcome(outcome: &TapOutcome) {
    let time = format!("{:>7}ms", outcome.tap.at_ms);
    let button = format!("{:<5}", outcome.tap.button.to_string());

    match &outcome.shown {
        Some(shown) => println!(
            "{}  {}  {} {} {}",
            time,
            button,
            "✓".green(),
            shown.toast.message,
            format!("({} toast)", shown.toast.length).dimmed()
        ),
        None => println!("{}  {}  {} {}", time, button, "✗".red(), "suppressed".dimmed()),
    }
}
