//! Launch orchestration: resolve the user's selection, launch it on the host,
//! and hand off to the streaming session.

use super::session_starter::SessionStarter;
use super::stream_config::{create_configuration, Preferences};
use crate::catalog::{AppEntry, SelectionIndex};
use crate::remote::{RemoteCatalogClient, RemoteError};
use anyhow::{Context, Result};
use std::sync::Arc;

/// What a launch attempt will do, decided from the index at the moment of the
/// user's action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchPlan {
    /// Launch a catalog entry on the host.
    Remote(AppEntry),
    /// No entry resolved; start streaming the host's default target.
    DefaultFallback,
}

/// Per-attempt launch state.
///
/// `Idle -> Resolving -> {RemoteLaunching -> (Succeeded | Failed)} | DefaultFallback`,
/// then `Succeeded | DefaultFallback -> Streaming` and `Failed -> Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaunchState {
    #[default]
    Idle,
    Resolving,
    RemoteLaunching,
    Succeeded,
    Failed,
    DefaultFallback,
    Streaming,
}

impl LaunchState {
    /// State entered once `plan` has been resolved.
    pub fn for_plan(plan: &LaunchPlan) -> Self {
        match plan {
            LaunchPlan::Remote(_) => Self::RemoteLaunching,
            LaunchPlan::DefaultFallback => Self::DefaultFallback,
        }
    }

    /// Follows the automatic transition out of a finished state.
    pub fn settle(self) -> Self {
        match self {
            Self::Succeeded | Self::DefaultFallback => Self::Streaming,
            Self::Failed => Self::Idle,
            other => other,
        }
    }

    /// True while a launch call may still be outstanding.
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Resolving | Self::RemoteLaunching)
    }
}

/// How a launch attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// Launch succeeded or the fallback was chosen; hand off to the session.
    Streaming,
    /// The launch stopped; the picker stays interactive.
    Failed(RemoteError),
}

impl LaunchOutcome {
    pub fn is_streaming(&self) -> bool {
        matches!(self, Self::Streaming)
    }
}

/// The surface the user picked from. Hidden before the session takes over.
pub trait PickerShell {
    fn hide(&mut self) -> Result<()>;
}

#[derive(Clone)]
pub struct LaunchCoordinator {
    client: Arc<dyn RemoteCatalogClient>,
    starter: Arc<dyn SessionStarter>,
    host: String,
    preferences: Preferences,
}

impl LaunchCoordinator {
    pub fn new(
        client: Arc<dyn RemoteCatalogClient>,
        starter: Arc<dyn SessionStarter>,
        host: impl Into<String>,
        preferences: Preferences,
    ) -> Self {
        Self {
            client,
            starter,
            host: host.into(),
            preferences,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Resolves `selection` against the current index.
    ///
    /// `None`, an unknown name, or an empty index all fall back.
    pub fn resolve(&self, index: &SelectionIndex, selection: Option<&str>) -> LaunchPlan {
        match selection.and_then(|name| index.resolve(name)) {
            Some(entry) => LaunchPlan::Remote(entry.clone()),
            None => {
                if let Some(name) = selection {
                    tracing::debug!("'{}' not in catalog, using default launch", name);
                }
                LaunchPlan::DefaultFallback
            }
        }
    }

    /// Performs the remote part of `plan`. Blocks on network I/O.
    pub fn execute(&self, plan: &LaunchPlan) -> LaunchOutcome {
        let entry = match plan {
            LaunchPlan::Remote(entry) => entry,
            LaunchPlan::DefaultFallback => return LaunchOutcome::Streaming,
        };

        let config = create_configuration(self.preferences.resolution);
        let result = self
            .client
            .launch_app(entry.id, config.width, config.height, config.refresh_rate)
            .and_then(|handle| {
                if handle.is_active() {
                    Ok(handle)
                } else {
                    Err(RemoteError::LaunchRejected { app_id: entry.id })
                }
            });

        match result {
            Ok(handle) => {
                tracing::info!("Launched '{}' as session {}", entry.name, handle);
                LaunchOutcome::Streaming
            }
            Err(error) => {
                tracing::warn!("Failed to launch '{}': {}", entry.name, error);
                LaunchOutcome::Failed(error)
            }
        }
    }

    /// Runs [`LaunchCoordinator::execute`] on the blocking pool.
    pub async fn execute_off_thread(&self, plan: LaunchPlan) -> LaunchOutcome {
        let coordinator = self.clone();
        tokio::task::spawn_blocking(move || coordinator.execute(&plan))
            .await
            .unwrap_or_else(|e| {
                tracing::warn!("Launch task failed: {}", e);
                LaunchOutcome::Failed(RemoteError::transport(format!("launch task failed: {}", e)))
            })
    }

    /// Hides the picker and starts the session against the configured host.
    pub fn hand_off(&self, shell: &mut dyn PickerShell) -> Result<()> {
        shell.hide().context("Failed to hide picker")?;
        tracing::info!("Handing off to stream session on {}", self.host);
        self.starter.start_session(&self.host)
    }

    /// Resolve, launch and, when the outcome is streaming, hand off.
    ///
    /// Launch failures are returned as [`LaunchOutcome::Failed`]; only errors
    /// from the hand-off itself are propagated.
    pub fn launch(
        &self,
        selection: Option<&str>,
        index: &SelectionIndex,
        shell: &mut dyn PickerShell,
    ) -> Result<LaunchOutcome> {
        let plan = self.resolve(index, selection);
        let outcome = self.execute(&plan);
        if outcome.is_streaming() {
            self.hand_off(shell)?;
        }
        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "tests/coordinator_tests.rs"]
mod tests;
