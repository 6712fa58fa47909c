//! Scripted collaborators shared by unit tests.

use crate::catalog::{AppEntry, SessionHandle};
use crate::launch::{PickerShell, SessionStarter};
use crate::remote::{RemoteCatalogClient, RemoteError, RemoteResult};
use std::sync::Mutex;

/// A remote call as observed by [`FakeCatalogClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteCall {
    CurrentGame,
    AppList,
    ResumeApp,
    LaunchApp {
        app_id: u32,
        width: u32,
        height: u32,
        refresh_rate: u32,
    },
}

/// Remote client answering from fixed scripted results and recording calls.
pub struct FakeCatalogClient {
    pub current_game: RemoteResult<u32>,
    pub app_list: RemoteResult<Vec<AppEntry>>,
    pub resume: RemoteResult<()>,
    pub launch: RemoteResult<SessionHandle>,
    calls: Mutex<Vec<RemoteCall>>,
}

impl FakeCatalogClient {
    /// An idle host with no apps whose launches succeed with handle 1.
    pub fn idle() -> Self {
        Self {
            current_game: Ok(0),
            app_list: Ok(Vec::new()),
            resume: Ok(()),
            launch: Ok(SessionHandle(1)),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_apps(mut self, apps: Vec<AppEntry>) -> Self {
        self.app_list = Ok(apps);
        self
    }

    pub fn with_current_game(mut self, session_id: u32) -> Self {
        self.current_game = Ok(session_id);
        self
    }

    pub fn with_launch(mut self, result: RemoteResult<SessionHandle>) -> Self {
        self.launch = result;
        self
    }

    pub fn calls(&self) -> Vec<RemoteCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, call: fn(&RemoteCall) -> bool) -> usize {
        self.calls().iter().filter(|c| call(c)).count()
    }

    pub fn launch_calls(&self) -> Vec<RemoteCall> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, RemoteCall::LaunchApp { .. }))
            .collect()
    }

    fn record(&self, call: RemoteCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl RemoteCatalogClient for FakeCatalogClient {
    fn current_game(&self) -> RemoteResult<u32> {
        self.record(RemoteCall::CurrentGame);
        self.current_game.clone()
    }

    fn app_list(&self) -> RemoteResult<Vec<AppEntry>> {
        self.record(RemoteCall::AppList);
        self.app_list.clone()
    }

    fn resume_app(&self) -> RemoteResult<()> {
        self.record(RemoteCall::ResumeApp);
        self.resume.clone()
    }

    fn launch_app(
        &self,
        app_id: u32,
        width: u32,
        height: u32,
        refresh_rate: u32,
    ) -> RemoteResult<SessionHandle> {
        self.record(RemoteCall::LaunchApp {
            app_id,
            width,
            height,
            refresh_rate,
        });
        self.launch.clone()
    }
}

pub fn transport_error() -> RemoteError {
    RemoteError::transport("connection refused")
}

/// Session starter that records the hosts it was asked to stream from.
#[derive(Default)]
pub struct RecordingStarter {
    pub started: Mutex<Vec<String>>,
    pub fail: bool,
}

impl RecordingStarter {
    pub fn hosts(&self) -> Vec<String> {
        self.started.lock().unwrap().clone()
    }
}

impl SessionStarter for RecordingStarter {
    fn start_session(&self, host: &str) -> anyhow::Result<()> {
        self.started.lock().unwrap().push(host.to_string());
        if self.fail {
            anyhow::bail!("stream command exited with status 1");
        }
        Ok(())
    }
}

/// Shell that only counts how often it was hidden.
#[derive(Debug, Default)]
pub struct RecordingShell {
    pub hidden: usize,
}

impl PickerShell for RecordingShell {
    fn hide(&mut self) -> anyhow::Result<()> {
        self.hidden += 1;
        Ok(())
    }
}
