//! Non-interactive commands: list the catalog or launch without the picker.

use crate::catalog::{CatalogFetcher, FetchDisposition, SelectionIndex};
use crate::launch::{LaunchCoordinator, LaunchOutcome, PickerShell};
use anyhow::Result;
use std::io::Write;

/// Nothing is drawn in headless mode, so there is nothing to hide.
pub struct HeadlessShell;

impl PickerShell for HeadlessShell {
    fn hide(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Prints `id<TAB>name` per app, or a note when the host resumed a session.
///
/// An empty or failed fetch is not an error.
pub fn list_apps(fetcher: &CatalogFetcher, out: &mut impl Write) -> Result<()> {
    let report = fetcher.fetch_report();
    match &report.disposition {
        FetchDisposition::Listed if report.catalog.is_empty() => {
            writeln!(out, "No apps available")?;
        }
        FetchDisposition::Listed => {
            for entry in &report.catalog {
                writeln!(out, "{}\t{}", entry.id, entry.name)?;
            }
        }
        FetchDisposition::ResumedSession { session_id } => {
            writeln!(out, "Resumed running session {}", session_id)?;
        }
        FetchDisposition::Failed(error) => {
            writeln!(out, "No apps available ({})", error)?;
        }
    }
    Ok(())
}

/// Fetches the catalog, then launches `name` (or the default when it is not
/// listed) and hands off.
pub fn launch_by_name(
    fetcher: &CatalogFetcher,
    coordinator: &LaunchCoordinator,
    name: &str,
    shell: &mut dyn PickerShell,
) -> Result<()> {
    let mut index = SelectionIndex::new();
    index.replace(&fetcher.fetch());
    if index.is_empty() {
        tracing::info!("No apps listed, '{}' will use the default launch", name);
    } else {
        tracing::info!("Indexed {} apps for headless launch", index.len());
    }

    let outcome = coordinator.launch(Some(name), &index, shell)?;
    ensure_streaming(outcome)
}

/// Starts the default stream without contacting the catalog.
pub fn launch_default(coordinator: &LaunchCoordinator, shell: &mut dyn PickerShell) -> Result<()> {
    let outcome = coordinator.launch(None, &SelectionIndex::new(), shell)?;
    ensure_streaming(outcome)
}

fn ensure_streaming(outcome: LaunchOutcome) -> Result<()> {
    match outcome {
        LaunchOutcome::Streaming => Ok(()),
        LaunchOutcome::Failed(error) => Err(anyhow::anyhow!("Launch failed: {}", error)),
    }
}

#[cfg(test)]
#[path = "tests/headless_tests.rs"]
mod tests;
