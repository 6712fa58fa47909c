//! Structured JSONL log of fetch and launch events.
//!
//! Each line carries a monotonic sequence number, a microsecond UTC timestamp
//! and the run id, so one launcher run can be reconstructed from the file.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::catalog::{FetchDisposition, FetchReport};
use crate::launch::{LaunchOutcome, LaunchPlan};

/// Milestones recorded in `events.jsonl`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LauncherEvent {
    FetchStarted {
        generation: u64,
    },
    FetchCompleted {
        generation: u64,
        apps: usize,
        resumed_session: Option<u32>,
        error: Option<String>,
    },
    LaunchRequested {
        selection: Option<String>,
        app_id: Option<u32>,
    },
    LaunchFinished {
        streaming: bool,
        error: Option<String>,
    },
    HandOff {
        host: String,
    },
}

impl LauncherEvent {
    pub fn fetch_completed(generation: u64, report: &FetchReport) -> Self {
        let (resumed_session, error) = match &report.disposition {
            FetchDisposition::Listed => (None, None),
            FetchDisposition::ResumedSession { session_id } => (Some(*session_id), None),
            FetchDisposition::Failed(error) => (None, Some(error.to_string())),
        };
        Self::FetchCompleted {
            generation,
            apps: report.catalog.len(),
            resumed_session,
            error,
        }
    }

    pub fn launch_requested(selection: Option<&str>, plan: &LaunchPlan) -> Self {
        Self::LaunchRequested {
            selection: selection.map(str::to_string),
            app_id: match plan {
                LaunchPlan::Remote(entry) => Some(entry.id),
                LaunchPlan::DefaultFallback => None,
            },
        }
    }

    pub fn launch_finished(outcome: &LaunchOutcome) -> Self {
        match outcome {
            LaunchOutcome::Streaming => Self::LaunchFinished {
                streaming: true,
                error: None,
            },
            LaunchOutcome::Failed(error) => Self::LaunchFinished {
                streaming: false,
                error: Some(error.to_string()),
            },
        }
    }
}

pub struct StructuredLogger {
    run_id: String,
    seq: AtomicU64,
    log_file: Mutex<File>,
    log_path: PathBuf,
}

/// A single log entry in JSONL format.
#[derive(Serialize, Deserialize)]
pub struct LogEntry {
    /// Monotonic sequence number within the run
    pub seq: u64,
    /// RFC 3339 timestamp with microseconds
    pub ts: String,
    pub run_id: String,
    /// Component that emitted the entry
    pub component: String,
    pub event: LauncherEvent,
}

impl StructuredLogger {
    /// Opens `<logs_dir>/events.jsonl` for appending under a fresh run id.
    pub fn new(logs_dir: &Path) -> anyhow::Result<Self> {
        std::fs::create_dir_all(logs_dir)?;
        let log_path = logs_dir.join("events.jsonl");
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        Ok(Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            seq: AtomicU64::new(0),
            log_file: Mutex::new(file),
            log_path,
        })
    }

    fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Appends one event. Write failures are ignored.
    pub fn log(&self, component: &str, event: LauncherEvent) {
        let entry = LogEntry {
            seq: self.next_seq(),
            ts: Utc::now().format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
            run_id: self.run_id.clone(),
            component: component.to_string(),
            event,
        };

        if let Ok(mut file) = self.log_file.lock() {
            if let Ok(line) = serde_json::to_string(&entry) {
                let _ = writeln!(file, "{}", line);
                let _ = file.flush();
            }
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }
}

#[cfg(test)]
#[path = "tests/structured_logger_tests.rs"]
mod tests;
