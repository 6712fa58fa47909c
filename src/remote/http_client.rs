//! HTTP implementation of the host control API.

use super::{response, RemoteCatalogClient, RemoteError, RemoteResult};
use crate::catalog::{AppEntry, SessionHandle};
use crate::launcher_paths;
use anyhow::{Context, Result};
use std::sync::Mutex;
use std::time::Duration;

/// Default port of the host's plain-HTTP control endpoint.
pub const DEFAULT_HTTP_PORT: u16 = 47989;

const UNIQUE_ID_LEN: usize = 16;

/// Blocking client for one remote host.
///
/// Every call holds `call_gate` for its whole duration, so calls issued from
/// different tasks against the same client never overlap.
pub struct HttpCatalogClient {
    agent: ureq::Agent,
    base_url: String,
    unique_id: String,
    call_gate: Mutex<()>,
}

impl HttpCatalogClient {
    pub fn new(host: &str, port: u16, timeout: Duration, unique_id: String) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();

        Self {
            agent,
            base_url: format!("http://{}:{}", host, port),
            unique_id,
            call_gate: Mutex::new(()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, endpoint: &str, params: &[(&str, String)]) -> RemoteResult<String> {
        let _gate = self
            .call_gate
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let url = format!("{}/{}", self.base_url, endpoint);
        let mut request = self.agent.get(url.as_str()).query("uniqueid", &self.unique_id);
        for (key, value) in params {
            request = request.query(*key, value);
        }

        tracing::debug!(endpoint, "sending host request");
        let mut response = request.call().map_err(classify_error)?;
        response
            .body_mut()
            .read_to_string()
            .map_err(classify_error)
    }
}

/// HTTP status failures mean the host answered; everything else is transport.
fn classify_error(err: ureq::Error) -> RemoteError {
    match err {
        ureq::Error::StatusCode(code) => RemoteError::protocol(format!("HTTP status {}", code)),
        other => RemoteError::transport(other.to_string()),
    }
}

impl RemoteCatalogClient for HttpCatalogClient {
    fn current_game(&self) -> RemoteResult<u32> {
        let body = self.get("serverinfo", &[])?;
        response::parse_current_game(&body)
    }

    fn app_list(&self) -> RemoteResult<Vec<AppEntry>> {
        let body = self.get("applist", &[])?;
        response::parse_app_list(&body)
    }

    fn resume_app(&self) -> RemoteResult<()> {
        let body = self.get("resume", &[])?;
        response::parse_resume(&body)
    }

    fn launch_app(
        &self,
        app_id: u32,
        width: u32,
        height: u32,
        refresh_rate: u32,
    ) -> RemoteResult<SessionHandle> {
        let body = self.get(
            "launch",
            &[
                ("appid", app_id.to_string()),
                ("mode", format!("{}x{}x{}", width, height, refresh_rate)),
                ("additionalStates", "1".to_string()),
                ("sops", "1".to_string()),
            ],
        )?;
        response::parse_launch(&body)
    }
}

/// Loads the persisted client id, generating and saving one on first use.
pub fn load_or_create_unique_id() -> Result<String> {
    let path = launcher_paths::unique_id_path()?;

    if path.exists() {
        let existing = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read unique id: {}", path.display()))?;
        let existing = existing.trim();
        if is_valid_unique_id(existing) {
            return Ok(existing.to_string());
        }
        tracing::warn!("Ignoring malformed unique id in {}", path.display());
    }

    let generated: String = uuid::Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(UNIQUE_ID_LEN)
        .collect();
    std::fs::write(&path, &generated)
        .with_context(|| format!("Failed to write unique id: {}", path.display()))?;
    Ok(generated)
}

fn is_valid_unique_id(value: &str) -> bool {
    value.len() == UNIQUE_ID_LEN && value.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
#[path = "tests/http_client_tests.rs"]
mod tests;
