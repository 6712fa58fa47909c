use crate::launch::Resolution;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stream-launcher")]
#[command(about = "Pick an application on a streaming host and start the stream")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("STREAM_LAUNCHER_GIT_SHA"), ")"))]
pub struct Cli {
    /// Host to stream from (overrides `host` in config.yaml)
    pub host: Option<String>,

    /// Config file (defaults to ~/.stream-launcher/config.yaml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Host control API port
    #[arg(long)]
    pub port: Option<u16>,

    /// Stream mode for this run, e.g. 1920x1080@60
    #[arg(long)]
    pub resolution: Option<Resolution>,

    /// Persist --resolution as the new default
    #[arg(long, requires = "resolution")]
    pub save_preferences: bool,

    /// Print the host's applications and exit
    #[arg(long, conflicts_with_all = ["launch", "default"])]
    pub list: bool,

    /// Launch an application by name without the picker
    #[arg(long, value_name = "NAME", conflicts_with = "default")]
    pub launch: Option<String>,

    /// Start the default stream without fetching the app list
    #[arg(long)]
    pub default: bool,

    /// Debug-level diagnostics in the log file
    #[arg(short, long)]
    pub verbose: bool,
}

/// What to do once configuration is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    List,
    Launch(String),
    Default,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.list {
            Mode::List
        } else if let Some(name) = &self.launch {
            Mode::Launch(name.clone())
        } else if self.default {
            Mode::Default
        } else {
            Mode::Interactive
        }
    }
}

#[cfg(test)]
#[path = "tests/cli_tests.rs"]
mod tests;
