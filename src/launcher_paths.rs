//! Home-based storage paths for stream-launcher persistence.
//!
//! Everything lives under `~/.stream-launcher/`:
//! - `config.yaml` - Launcher configuration
//! - `preferences.json` - Stream preferences
//! - `uniqueid` - Client identifier sent to the remote host
//! - `logs/debug.log` - Diagnostic log
//! - `logs/events.jsonl` - Structured launcher events

use anyhow::{Context, Result};
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

/// The name of the launcher directory.
const LAUNCHER_DIR: &str = ".stream-launcher";

thread_local! {
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

fn home_dir() -> Option<PathBuf> {
    HOME_OVERRIDE
        .with(|home| home.borrow().clone())
        .or_else(dirs::home_dir)
}

/// Returns the home-based launcher directory: `~/.stream-launcher/`
///
/// Creates the directory if it doesn't exist.
///
/// # Errors
///
/// Returns an error if:
/// - Home directory cannot be determined
/// - Directory creation fails
pub fn launcher_home_dir() -> Result<PathBuf> {
    let home = home_dir().context("Could not determine home directory")?;
    let dir = home.join(LAUNCHER_DIR);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create launcher directory: {}", dir.display()))?;
    Ok(dir)
}

/// Returns the default config path: `~/.stream-launcher/config.yaml`
pub fn config_path() -> Result<PathBuf> {
    Ok(launcher_home_dir()?.join("config.yaml"))
}

/// Returns the preferences path: `~/.stream-launcher/preferences.json`
pub fn preferences_path() -> Result<PathBuf> {
    Ok(launcher_home_dir()?.join("preferences.json"))
}

/// Returns the client unique id path: `~/.stream-launcher/uniqueid`
pub fn unique_id_path() -> Result<PathBuf> {
    Ok(launcher_home_dir()?.join("uniqueid"))
}

/// Returns the logs directory: `~/.stream-launcher/logs/`
///
/// Creates the directory if it doesn't exist.
pub fn logs_dir() -> Result<PathBuf> {
    let dir = launcher_home_dir()?.join("logs");
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create logs directory: {}", dir.display()))?;
    Ok(dir)
}

/// Returns the debug log path: `~/.stream-launcher/logs/debug.log`
pub fn debug_log_path() -> Result<PathBuf> {
    Ok(logs_dir()?.join("debug.log"))
}

/// Restores the real home directory when dropped.
#[cfg(test)]
pub struct TestHomeGuard {
    previous: Option<PathBuf>,
}

#[cfg(test)]
impl Drop for TestHomeGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        HOME_OVERRIDE.with(|home| *home.borrow_mut() = previous);
    }
}

/// Points the launcher home at `path` for the current thread.
///
/// Tests using this must be `#[serial]` since they share on-disk state.
#[cfg(test)]
pub fn set_home_for_test(path: PathBuf) -> TestHomeGuard {
    let previous = HOME_OVERRIDE.with(|home| home.borrow_mut().replace(path));
    TestHomeGuard { previous }
}

#[cfg(test)]
#[path = "tests/launcher_paths_tests.rs"]
mod tests;
