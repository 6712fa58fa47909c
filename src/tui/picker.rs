//! Presentation state of the app picker.
//!
//! Only the picker loop mutates this state, so the selection index needs no
//! locking.

use crate::catalog::{FetchDisposition, FetchReport, SelectionIndex};
use crate::launch::{LaunchOutcome, LaunchPlan, LaunchState};

/// One selectable row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerItem {
    /// The default launch target. Always the first row.
    Default,
    App(String),
}

impl PickerItem {
    pub fn label<'a>(&'a self, fallback_label: &'a str) -> &'a str {
        match self {
            Self::Default => fallback_label,
            Self::App(name) => name,
        }
    }

    /// Name to resolve against the index; `None` for the default row.
    pub fn selection(&self) -> Option<&str> {
        match self {
            Self::Default => None,
            Self::App(name) => Some(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Loading,
    Listed(usize),
    Resumed(u32),
    NoApps,
    Launching(String),
    LaunchFailed(String),
}

impl Status {
    pub fn text(&self) -> String {
        match self {
            Self::Loading => "Loading apps…".to_string(),
            Self::Listed(count) => format!("{} apps", count),
            Self::Resumed(session_id) => format!("Resumed running session {}", session_id),
            Self::NoApps => "No apps available".to_string(),
            Self::Launching(label) => format!("Launching {}…", label),
            Self::LaunchFailed(reason) => format!("Launch failed: {}", reason),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::LaunchFailed(_))
    }
}

pub struct PickerState {
    pub fallback_label: String,
    pub items: Vec<PickerItem>,
    pub selected_idx: usize,
    pub index: SelectionIndex,
    pub fetch_generation: u64,
    pub launch_state: LaunchState,
    pub status: Status,
}

impl PickerState {
    pub fn new(fallback_label: impl Into<String>) -> Self {
        Self {
            fallback_label: fallback_label.into(),
            items: vec![PickerItem::Default],
            selected_idx: 0,
            index: SelectionIndex::new(),
            fetch_generation: 0,
            launch_state: LaunchState::Idle,
            status: Status::NoApps,
        }
    }

    pub fn is_launching(&self) -> bool {
        self.launch_state.is_busy()
    }

    /// Starts a new fetch cycle and returns its generation.
    ///
    /// Returns `None` while a launch is in flight.
    pub fn begin_fetch(&mut self) -> Option<u64> {
        if self.is_launching() {
            return None;
        }
        self.fetch_generation += 1;
        self.status = Status::Loading;
        Some(self.fetch_generation)
    }

    /// Applies a fetch result unless a newer fetch has been started since.
    ///
    /// The index and the app rows are replaced wholesale. Returns false for a
    /// stale result.
    pub fn apply_fetch(&mut self, generation: u64, report: &FetchReport) -> bool {
        if generation != self.fetch_generation {
            tracing::debug!(
                "Dropping stale fetch {} (current {})",
                generation,
                self.fetch_generation
            );
            return false;
        }

        self.index.replace(&report.catalog);
        self.items.clear();
        self.items.push(PickerItem::Default);
        self.items.extend(
            report
                .catalog
                .iter()
                .map(|entry| PickerItem::App(entry.name.clone())),
        );
        self.selected_idx = 0;

        if !self.is_launching() {
            self.status = match &report.disposition {
                FetchDisposition::Listed if !report.catalog.is_empty() => {
                    Status::Listed(report.catalog.len())
                }
                FetchDisposition::ResumedSession { session_id } => Status::Resumed(*session_id),
                _ => Status::NoApps,
            };
        }
        true
    }

    pub fn select_next(&mut self) {
        if self.selected_idx + 1 < self.items.len() {
            self.selected_idx += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_idx = self.selected_idx.saturating_sub(1);
    }

    pub fn selected_item(&self) -> &PickerItem {
        self.items.get(self.selected_idx).unwrap_or(&PickerItem::Default)
    }

    pub fn selection(&self) -> Option<&str> {
        self.selected_item().selection()
    }

    /// Label shown for `plan` while it runs.
    pub fn plan_label(&self, plan: &LaunchPlan) -> String {
        match plan {
            LaunchPlan::Remote(entry) => entry.name.clone(),
            LaunchPlan::DefaultFallback => self.fallback_label.clone(),
        }
    }

    /// Starts resolving a launch.
    ///
    /// Returns false, leaving the state untouched, while another launch runs.
    pub fn request_launch(&mut self) -> bool {
        if self.is_launching() {
            return false;
        }
        self.launch_state = LaunchState::Resolving;
        true
    }

    /// Enters the launch state for a resolved plan.
    pub fn begin_launch(&mut self, plan: &LaunchPlan) {
        self.launch_state = LaunchState::for_plan(plan);
        self.status = Status::Launching(self.plan_label(plan));
    }

    /// Records how the launch ended and returns the settled state.
    pub fn finish_launch(&mut self, outcome: &LaunchOutcome) -> LaunchState {
        let finished = match (self.launch_state, outcome) {
            (LaunchState::DefaultFallback, LaunchOutcome::Streaming) => LaunchState::DefaultFallback,
            (_, LaunchOutcome::Streaming) => LaunchState::Succeeded,
            (_, LaunchOutcome::Failed(error)) => {
                self.status = Status::LaunchFailed(error.to_string());
                LaunchState::Failed
            }
        };
        self.launch_state = finished.settle();
        self.launch_state
    }
}

#[cfg(test)]
#[path = "tests/picker_tests.rs"]
mod tests;
