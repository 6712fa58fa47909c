//! Reacts to picker events: starts background fetches and launches and
//! applies their results on the loop that owns the [`PickerState`].

use super::input::{handle_key, Action};
use crate::catalog::{CatalogFetcher, FetchDisposition};
use crate::launch::{LaunchCoordinator, LaunchOutcome, LaunchPlan, LaunchState, PickerShell};
use crate::structured_logger::{LauncherEvent, StructuredLogger};
use crate::tui::{Event, PickerState};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;

/// What the picker loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
    /// The launch reached `Streaming`; hide the picker and start the session.
    HandOff,
}

pub struct PickerController {
    fetcher: CatalogFetcher,
    coordinator: LaunchCoordinator,
    tx: mpsc::UnboundedSender<Event>,
    event_log: Option<Arc<StructuredLogger>>,
    stream_on_resume: bool,
}

impl PickerController {
    pub fn new(
        fetcher: CatalogFetcher,
        coordinator: LaunchCoordinator,
        tx: mpsc::UnboundedSender<Event>,
    ) -> Self {
        Self {
            fetcher,
            coordinator,
            tx,
            event_log: None,
            stream_on_resume: false,
        }
    }

    pub fn with_event_log(mut self, event_log: Option<Arc<StructuredLogger>>) -> Self {
        self.event_log = event_log;
        self
    }

    pub fn with_stream_on_resume(mut self, stream_on_resume: bool) -> Self {
        self.stream_on_resume = stream_on_resume;
        self
    }

    pub fn host(&self) -> &str {
        self.coordinator.host()
    }

    fn record(&self, component: &str, event: LauncherEvent) {
        if let Some(log) = &self.event_log {
            log.log(component, event);
        }
    }

    /// Starts a background fetch unless a launch is in flight.
    pub fn start_fetch(&self, state: &mut PickerState) {
        let Some(generation) = state.begin_fetch() else {
            tracing::debug!("Refresh ignored while launching");
            return;
        };
        self.record("Picker", LauncherEvent::FetchStarted { generation });

        let fetcher = self.fetcher.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let report = fetcher.fetch_off_thread().await;
            // Receiver dropped means the picker is gone - nothing to update
            let _ = tx.send(Event::CatalogFetched { generation, report });
        });
    }

    /// Resolves `selection` against the current index and starts the launch.
    pub fn start_launch(&self, state: &mut PickerState, selection: Option<String>) -> Flow {
        if !state.request_launch() {
            tracing::debug!("Launch ignored, another launch is in flight");
            return Flow::Continue;
        }

        let plan = self.coordinator.resolve(&state.index, selection.as_deref());
        self.record(
            "Launch",
            LauncherEvent::launch_requested(selection.as_deref(), &plan),
        );
        state.begin_launch(&plan);

        match plan {
            LaunchPlan::DefaultFallback => self.finish_launch(state, &LaunchOutcome::Streaming),
            remote => {
                let coordinator = self.coordinator.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let outcome = coordinator.execute_off_thread(remote).await;
                    let _ = tx.send(Event::LaunchFinished(outcome));
                });
                Flow::Continue
            }
        }
    }

    fn finish_launch(&self, state: &mut PickerState, outcome: &LaunchOutcome) -> Flow {
        self.record("Launch", LauncherEvent::launch_finished(outcome));
        match state.finish_launch(outcome) {
            LaunchState::Streaming => Flow::HandOff,
            _ => Flow::Continue,
        }
    }

    pub fn handle_event(&self, state: &mut PickerState, event: Event) -> Flow {
        match event {
            Event::Key(key) => match handle_key(state, key) {
                Action::Quit => Flow::Quit,
                Action::Refresh => {
                    self.start_fetch(state);
                    Flow::Continue
                }
                Action::Launch(selection) => self.start_launch(state, selection),
                Action::None => Flow::Continue,
            },
            Event::CatalogFetched { generation, report } => {
                tracing::info!("Fetch {} finished: {}", generation, report.summary());
                self.record("Picker", LauncherEvent::fetch_completed(generation, &report));
                let applied = state.apply_fetch(generation, &report);
                let resumed = matches!(report.disposition, FetchDisposition::ResumedSession { .. });
                if applied && resumed && self.stream_on_resume {
                    self.start_launch(state, None)
                } else {
                    Flow::Continue
                }
            }
            Event::LaunchFinished(outcome) => self.finish_launch(state, &outcome),
            Event::Tick | Event::Resize => Flow::Continue,
        }
    }

    /// Hides `shell` and runs the session starter. Blocks until it exits.
    pub fn hand_off(&self, shell: &mut dyn PickerShell) -> Result<()> {
        self.record(
            "Launch",
            LauncherEvent::HandOff {
                host: self.coordinator.host().to_string(),
            },
        );
        self.coordinator.hand_off(shell)
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
