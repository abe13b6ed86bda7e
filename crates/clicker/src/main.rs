//! Clicker CLI - clicker command

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use clicker_lib::config::ConfigOverrides;
use rapidclick::GuardScope;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cmd;

/// Clicker - two buttons, two toasts, no double taps
#[derive(Parser)]
#[command(name = "clicker")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/clicker/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Minimum milliseconds between accepted taps
    #[arg(long, global = true)]
    interval_ms: Option<u64>,

    /// Whether guarded buttons share one timestamp
    #[arg(long, global = true, value_enum)]
    scope: Option<ScopeArg>,

    /// Guard the long-toast button too (`--guard-long=false` turns it off)
    #[arg(
        long,
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    guard_long: Option<bool>,

    /// Host API level
    #[arg(long, global = true)]
    api_level: Option<u32>,

    /// Text of the short toast
    #[arg(long, global = true)]
    short_message: Option<String>,

    /// Text of the long toast
    #[arg(long, global = true)]
    long_message: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum ScopeArg {
    Process,
    PerTarget,
}

impl From<ScopeArg> for GuardScope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::Process => GuardScope::Process,
            ScopeArg::PerTarget => GuardScope::PerTarget,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a tap script such as "short@0,short@200,long@350"
    Replay {
        /// Comma or space separated <button>@<millis> entries
        script: String,
    },
    /// Tap buttons from stdin: s = short, l = long, q = quit
    Interactive,
    /// Show configuration
    Config {
        /// Print the config file location
        #[arg(long)]
        path: bool,
        /// Print an annotated example config
        #[arg(long)]
        example: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let overrides = ConfigOverrides {
        interval_ms: cli.interval_ms,
        scope: cli.scope.map(GuardScope::from),
        guard_long_button: cli.guard_long,
        api_level: cli.api_level,
        short_message: cli.short_message,
        long_message: cli.long_message,
    };
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Replay { script } => cmd::replay::run(config_path, &overrides, &script),
        Commands::Interactive => cmd::interactive::run(config_path, &overrides).await,
        Commands::Config { path, example } => {
            if example {
                cmd::config::run_example()
            } else if path {
                cmd::config::run_path()
            } else {
                cmd::config::run_show(config_path, &overrides)
            }
        }
    }
}
