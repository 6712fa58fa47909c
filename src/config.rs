use crate::launcher_paths;
use crate::remote::http_client::DEFAULT_HTTP_PORT;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Launcher settings read from `config.yaml`. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LauncherConfig {
    /// Host to stream from. The command-line host overrides this.
    #[serde(default)]
    pub host: String,
    #[serde(default = "default_http_port")]
    pub http_port: u16,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Label of the default-launch entry shown first in the picker.
    #[serde(default = "default_fallback_label")]
    pub fallback_label: String,
    /// Program and arguments that start the stream. `{host}` is substituted.
    #[serde(default = "default_stream_command")]
    pub stream_command: Vec<String>,
    /// Stream right away when discovery resumed a running session.
    #[serde(default)]
    pub stream_on_resume: bool,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            http_port: default_http_port(),
            request_timeout_secs: default_request_timeout_secs(),
            fallback_label: default_fallback_label(),
            stream_command: default_stream_command(),
            stream_on_resume: false,
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

fn default_http_port() -> u16 {
    DEFAULT_HTTP_PORT
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_fallback_label() -> String {
    "Steam".to_string()
}

fn default_stream_command() -> Vec<String> {
    vec![
        "moonlight".to_string(),
        "stream".to_string(),
        "{host}".to_string(),
    ]
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl LauncherConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file as YAML: {}", path.display()))
    }

    /// Loads `explicit` if given, otherwise `~/.stream-launcher/config.yaml`.
    ///
    /// Only the default location may be missing.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let path = launcher_paths::config_path()?;
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    fn parse(content: &str) -> Result<Self> {
        // An empty file deserializes to unit, not to an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.http_port = port;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            anyhow::bail!("No host configured: pass a host or set `host` in config.yaml");
        }
        if self.stream_command.is_empty() {
            anyhow::bail!("`stream_command` must name a program");
        }
        if self.request_timeout_secs == 0 {
            anyhow::bail!("`request_timeout_secs` must be greater than zero");
        }
        if self.tick_rate_ms == 0 {
            anyhow::bail!("`tick_rate_ms` must be greater than zero");
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
