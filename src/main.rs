mod app;
mod catalog;
mod config;
mod launch;
mod launcher_paths;
mod logging;
mod remote;
mod structured_logger;
#[cfg(test)]
mod test_support;
mod tui;

use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = app::cli::Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose) {
        eprintln!("[stream-launcher] Warning: Failed to initialize logging: {}", e);
    }
    tracing::info!(
        "stream-launcher {} ({}) starting",
        env!("CARGO_PKG_VERSION"),
        env!("STREAM_LAUNCHER_GIT_SHA")
    );

    app::run(cli).await
}
