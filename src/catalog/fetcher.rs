//! Catalog discovery: resume a running session or list launchable apps.

use super::types::Catalog;
use crate::remote::{RemoteCatalogClient, RemoteError, RemoteResult};
use std::sync::Arc;

/// How a discovery attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchDisposition {
    /// The host was idle and reported its app list.
    Listed,
    /// A session was already running and has been resumed.
    ResumedSession { session_id: u32 },
    /// A remote call failed; the catalog is empty.
    Failed(RemoteError),
}

/// Result of one fetch. `catalog` is empty unless the disposition is `Listed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchReport {
    pub catalog: Catalog,
    pub disposition: FetchDisposition,
}

impl FetchReport {
    fn failed(error: RemoteError) -> Self {
        Self {
            catalog: Catalog::new(),
            disposition: FetchDisposition::Failed(error),
        }
    }

    /// Short human-readable form for logs and the status line.
    pub fn summary(&self) -> String {
        match &self.disposition {
            FetchDisposition::Listed => format!("{} apps", self.catalog.len()),
            FetchDisposition::ResumedSession { session_id } => {
                format!("resumed running session {}", session_id)
            }
            FetchDisposition::Failed(error) => format!("fetch failed: {}", error),
        }
    }
}

/// Runs the discovery policy against one remote host.
///
/// Never propagates errors: any failure is logged and surfaces as an empty
/// catalog. Nothing is retried.
#[derive(Clone)]
pub struct CatalogFetcher {
    client: Arc<dyn RemoteCatalogClient>,
}

impl CatalogFetcher {
    pub fn new(client: Arc<dyn RemoteCatalogClient>) -> Self {
        Self { client }
    }

    /// Blocking fetch returning only the catalog.
    pub fn fetch(&self) -> Catalog {
        self.fetch_report().catalog
    }

    /// Blocking fetch that also reports how discovery ended.
    pub fn fetch_report(&self) -> FetchReport {
        match self.discover() {
            Ok(report) => report,
            Err(error) => {
                tracing::warn!("Failed to fetch app list: {}", error);
                FetchReport::failed(error)
            }
        }
    }

    /// Runs [`CatalogFetcher::fetch_report`] on the blocking pool.
    pub async fn fetch_off_thread(&self) -> FetchReport {
        let fetcher = self.clone();
        tokio::task::spawn_blocking(move || fetcher.fetch_report())
            .await
            .unwrap_or_else(|e| {
                tracing::warn!("Catalog fetch task failed: {}", e);
                FetchReport::failed(RemoteError::transport(format!("fetch task failed: {}", e)))
            })
    }

    fn discover(&self) -> RemoteResult<FetchReport> {
        let session_id = self.client.current_game()?;

        if session_id != 0 {
            // The running session takes precedence over picking a new app.
            self.client.resume_app()?;
            tracing::info!("Resumed existing game session {}", session_id);
            return Ok(FetchReport {
                catalog: Catalog::new(),
                disposition: FetchDisposition::ResumedSession { session_id },
            });
        }

        let catalog = self.client.app_list()?;
        tracing::info!("Fetched {} apps from host", catalog.len());
        Ok(FetchReport {
            catalog,
            disposition: FetchDisposition::Listed,
        })
    }
}

#[cfg(test)]
#[path = "tests/fetcher_tests.rs"]
mod tests;
