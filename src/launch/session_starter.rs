//! Hand-off to the streaming session.

use anyhow::{anyhow, Context, Result};
use std::process::Command;

/// Placeholder in `stream_command` replaced by the target host.
pub const HOST_PLACEHOLDER: &str = "{host}";

/// Takes over once the picker has been hidden and starts streaming from `host`.
pub trait SessionStarter: Send + Sync {
    fn start_session(&self, host: &str) -> Result<()>;
}

/// Runs an external streaming client and waits for it to exit.
pub struct CommandSessionStarter {
    command: Vec<String>,
}

impl CommandSessionStarter {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }

    /// Returns the program and its arguments with `{host}` substituted.
    pub fn command_line(&self, host: &str) -> Result<(String, Vec<String>)> {
        let (program, args) = self
            .command
            .split_first()
            .ok_or_else(|| anyhow!("No stream command configured"))?;
        let args = args
            .iter()
            .map(|arg| arg.replace(HOST_PLACEHOLDER, host))
            .collect();
        Ok((program.replace(HOST_PLACEHOLDER, host), args))
    }
}

impl SessionStarter for CommandSessionStarter {
    fn start_session(&self, host: &str) -> Result<()> {
        let (program, args) = self.command_line(host)?;
        let resolved = which::which(&program)
            .with_context(|| format!("Stream command not found: {}", program))?;

        tracing::info!("Starting stream: {} {}", program, args.join(" "));
        let status = Command::new(resolved)
            .args(&args)
            .status()
            .with_context(|| format!("Failed to run stream command: {}", program))?;

        if !status.success() {
            return Err(anyhow!("Stream command exited with {}", status));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/session_starter_tests.rs"]
mod tests;
