//! Remote host control API.
//!
//! The launcher only depends on the [`RemoteCatalogClient`] capability set;
//! [`HttpCatalogClient`] is the production implementation.

pub mod http_client;
pub mod response;

use crate::catalog::{AppEntry, SessionHandle};
use std::fmt::{Display, Formatter};

pub use http_client::HttpCatalogClient;

/// Failures of a remote call, already classified for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// Connection refused, timeout, or other I/O failure.
    Transport { message: String },
    /// The host answered, but the response was malformed or reported an error.
    Protocol { message: String },
    /// The launch call succeeded structurally but returned a zero session handle.
    LaunchRejected { app_id: u32 },
}

impl RemoteError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }
}

impl Display for RemoteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport { message } => write!(f, "transport error: {}", message),
            Self::Protocol { message } => write!(f, "protocol error: {}", message),
            Self::LaunchRejected { app_id } => {
                write!(f, "host returned no session for app {}", app_id)
            }
        }
    }
}

impl std::error::Error for RemoteError {}

pub type RemoteResult<T> = Result<T, RemoteError>;

/// Network operations against one remote host.
///
/// Implementations block on I/O; callers run them off the interactive thread.
pub trait RemoteCatalogClient: Send + Sync {
    /// Returns the id of the currently running session (zero when idle).
    fn current_game(&self) -> RemoteResult<u32>;

    /// Lists the applications the host can launch.
    fn app_list(&self) -> RemoteResult<Vec<AppEntry>>;

    /// Resumes the running session.
    fn resume_app(&self) -> RemoteResult<()>;

    /// Launches `app_id` with the given stream mode and returns its session handle.
    fn launch_app(
        &self,
        app_id: u32,
        width: u32,
        height: u32,
        refresh_rate: u32,
    ) -> RemoteResult<SessionHandle>;
}
