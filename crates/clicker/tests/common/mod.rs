//! CLI command execution helpers with automatic timing
//!
//! Wraps the `clicker` binary so tests can run it with arguments, stdin
//! and an isolated config directory, then assert on the result.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// CLI command builder with timing
pub struct ClickerCommand {
    binary_path: PathBuf,
    args: Vec<String>,
    env: HashMap<String, String>,
    stdin_data: Option<String>,
}

impl ClickerCommand {
    /// New command whose config lookups are confined to `config_home`
    pub fn new(config_home: impl AsRef<Path>) -> Self {
        let home = config_home.as_ref().display().to_string();
        let mut env = HashMap::new();
        env.insert("XDG_CONFIG_HOME".to_string(), home.clone());
        env.insert("HOME".to_string(), home);
        env.insert("RUST_LOG".to_string(), "warn".to_string());

        Self {
            binary_path: PathBuf::from(env!("CARGO_BIN_EXE_clicker")),
            args: Vec::new(),
            env,
            stdin_data: None,
        }
    }

    pub fn args(&mut self, args: &[&str]) -> &mut Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    pub fn stdin(&mut self, data: &str) -> &mut Self {
        self.stdin_data = Some(data.to_string());
        self
    }

    pub fn execute(&self) -> Result<CommandResult> {
        let start = Instant::now();

        let mut child = Command::new(&self.binary_path)
            .args(&self.args)
            .envs(&self.env)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .context("Failed to spawn clicker")?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Some(data) = &self.stdin_data {
                stdin.write_all(data.as_bytes())?;
            }
            // Dropping stdin closes it so interactive mode sees EOF.
        }

        let output = child
            .wait_with_output()
            .context("Failed to wait for clicker")?;

        Ok(CommandResult {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(-1),
            duration: start.elapsed(),
        })
    }

    pub fn assert_success(&self) -> Result<CommandResult> {
        let result = self.execute()?;
        if !result.success() {
            anyhow::bail!(
                "Command failed (exit code: {}):\nArgs: {:?}\nStdout: {}\nStderr: {}",
                result.exit_code,
                self.args,
                result.stdout,
                result.stderr
            );
        }
        Ok(result)
    }

    pub fn assert_failure(&self) -> Result<CommandResult> {
        let result = self.execute()?;
        if result.success() {
            anyhow::bail!(
                "Command should have failed but succeeded:\nArgs: {:?}\nStdout: {}",
                self.args,
                result.stdout
            );
        }
        Ok(result)
    }
}

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    #[allow(dead_code)]
    pub duration: Duration,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Tap times (ms) of replay lines marked as shown
    pub fn shown_taps(&self) -> Vec<u64> {
        self.tap_lines("✓")
    }

    /// Tap times (ms) of replay lines marked as suppressed
    pub fn suppressed_taps(&self) -> Vec<u64> {
        self.tap_lines("✗")
    }

    fn tap_lines(&self, mark: &str) -> Vec<u64> {
        self.stdout
            .lines()
            .filter(|line| line.contains(mark))
            .filter_map(|line| line.trim_start().split("ms").next())
            .filter_map(|time| time.trim().parse().ok())
            .collect()
    }
}

/// Build a command: `clicker!(dir, "replay", "short@0")`
#[macro_export]
macro_rules! clicker {
    ($dir:expr, $($arg:expr),*) => {{
        let mut cmd = $crate::common::ClickerCommand::new($dir);
        cmd.args(&[$($arg),*]);
        cmd
    }};
}
