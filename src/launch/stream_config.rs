//! Stream preferences and the stream configuration derived from them.

use crate::launcher_paths;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Supported stream modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "1280x720@30")]
    Res720p30,
    #[default]
    #[serde(rename = "1280x720@60")]
    Res720p60,
    #[serde(rename = "1366x768@30")]
    Res768p30,
    #[serde(rename = "1366x768@60")]
    Res768p60,
    #[serde(rename = "1600x900@30")]
    Res900p30,
    #[serde(rename = "1600x900@60")]
    Res900p60,
    #[serde(rename = "1920x1080@30")]
    Res1080p30,
    #[serde(rename = "1920x1080@60")]
    Res1080p60,
}

impl Resolution {
    pub const ALL: [Resolution; 8] = [
        Resolution::Res720p30,
        Resolution::Res720p60,
        Resolution::Res768p30,
        Resolution::Res768p60,
        Resolution::Res900p30,
        Resolution::Res900p60,
        Resolution::Res1080p30,
        Resolution::Res1080p60,
    ];

    pub fn width(self) -> u32 {
        match self {
            Self::Res720p30 | Self::Res720p60 => 1280,
            Self::Res768p30 | Self::Res768p60 => 1366,
            Self::Res900p30 | Self::Res900p60 => 1600,
            Self::Res1080p30 | Self::Res1080p60 => 1920,
        }
    }

    pub fn height(self) -> u32 {
        match self {
            Self::Res720p30 | Self::Res720p60 => 720,
            Self::Res768p30 | Self::Res768p60 => 768,
            Self::Res900p30 | Self::Res900p60 => 900,
            Self::Res1080p30 | Self::Res1080p60 => 1080,
        }
    }

    pub fn refresh_rate(self) -> u32 {
        match self {
            Self::Res720p30 | Self::Res768p30 | Self::Res900p30 | Self::Res1080p30 => 30,
            Self::Res720p60 | Self::Res768p60 | Self::Res900p60 | Self::Res1080p60 => 60,
        }
    }
}

impl Display for Resolution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{}@{}",
            self.width(),
            self.height(),
            self.refresh_rate()
        )
    }
}

impl FromStr for Resolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|res| res.to_string() == wanted)
            .ok_or_else(|| {
                let supported: Vec<String> = Self::ALL.iter().map(|r| r.to_string()).collect();
                format!(
                    "unsupported resolution '{}' (expected one of: {})",
                    wanted,
                    supported.join(", ")
                )
            })
    }
}

/// Persisted user preferences for streaming.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub resolution: Resolution,
}

impl Preferences {
    /// Loads preferences from `~/.stream-launcher/preferences.json`.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let path = launcher_paths::preferences_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read preferences: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse preferences: {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        let path = launcher_paths::preferences_path()?;
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize preferences")?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write preferences: {}", path.display()))
    }
}

/// Stream mode requested from the host on launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamConfiguration {
    pub width: u32,
    pub height: u32,
    pub refresh_rate: u32,
}

pub fn create_configuration(resolution: Resolution) -> StreamConfiguration {
    StreamConfiguration {
        width: resolution.width(),
        height: resolution.height(),
        refresh_rate: resolution.refresh_rate(),
    }
}

#[cfg(test)]
#[path = "tests/stream_config_tests.rs"]
mod tests;
