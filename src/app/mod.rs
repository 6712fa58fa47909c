pub mod cli;
pub mod controller;
pub mod headless;
pub mod input;
pub mod terminal;

use crate::catalog::CatalogFetcher;
use crate::config::LauncherConfig;
use crate::launch::{CommandSessionStarter, LaunchCoordinator, PickerShell, Preferences};
use crate::launcher_paths;
use crate::remote::http_client::{load_or_create_unique_id, HttpCatalogClient};
use crate::structured_logger::StructuredLogger;
use crate::tui::{ui, EventHandler, PickerState};
use anyhow::{Context, Result};
use cli::{Cli, Mode};
use controller::{Flow, PickerController};
use headless::HeadlessShell;
use std::sync::Arc;
use terminal::{setup_terminal, TerminalShell};

/// Collaborators wired from configuration, shared by every mode.
pub struct Launcher {
    pub config: LauncherConfig,
    pub fetcher: CatalogFetcher,
    pub coordinator: LaunchCoordinator,
}

/// Loads preferences once and applies the command-line resolution.
fn resolve_preferences(cli: &Cli) -> Result<Preferences> {
    let mut preferences = Preferences::load().unwrap_or_else(|e| {
        tracing::warn!("Ignoring unreadable preferences: {:#}", e);
        Preferences::default()
    });

    if let Some(resolution) = cli.resolution {
        preferences.resolution = resolution;
        if cli.save_preferences {
            preferences.save()?;
            tracing::info!("Saved default resolution {}", resolution);
        }
    }
    Ok(preferences)
}

pub fn build_launcher(cli: &Cli) -> Result<Launcher> {
    let config = LauncherConfig::load_or_default(cli.config.as_deref())?
        .with_overrides(cli.host.clone(), cli.port);
    config.validate()?;

    let preferences = resolve_preferences(cli)?;
    let unique_id = load_or_create_unique_id().context("Failed to load client id")?;

    let client = Arc::new(HttpCatalogClient::new(
        &config.host,
        config.http_port,
        config.request_timeout(),
        unique_id,
    ));
    let starter = Arc::new(CommandSessionStarter::new(config.stream_command.clone()));
    tracing::info!(
        "Using host {} at {} ({})",
        config.host,
        client.base_url(),
        preferences.resolution
    );

    Ok(Launcher {
        fetcher: CatalogFetcher::new(client.clone()),
        coordinator: LaunchCoordinator::new(client, starter, config.host.clone(), preferences),
        config,
    })
}

pub async fn run(cli: Cli) -> Result<()> {
    let launcher = build_launcher(&cli)?;

    match cli.mode() {
        Mode::List => tokio::task::block_in_place(|| {
            headless::list_apps(&launcher.fetcher, &mut std::io::stdout().lock())
        }),
        Mode::Launch(name) => tokio::task::block_in_place(|| {
            headless::launch_by_name(
                &launcher.fetcher,
                &launcher.coordinator,
                &name,
                &mut HeadlessShell,
            )
        }),
        Mode::Default => tokio::task::block_in_place(|| {
            headless::launch_default(&launcher.coordinator, &mut HeadlessShell)
        }),
        Mode::Interactive => run_tui(launcher).await,
    }
}

fn open_event_log() -> Option<Arc<StructuredLogger>> {
    match launcher_paths::logs_dir().and_then(|dir| StructuredLogger::new(&dir)) {
        Ok(logger) => {
            tracing::debug!(
                "Recording run {} to {}",
                logger.run_id(),
                logger.path().display()
            );
            Some(Arc::new(logger))
        }
        Err(e) => {
            tracing::warn!("Structured event log disabled: {:#}", e);
            None
        }
    }
}

async fn picker_loop(
    shell: &mut TerminalShell,
    events: &mut EventHandler,
    controller: &PickerController,
    state: &mut PickerState,
) -> Result<Flow> {
    loop {
        shell
            .terminal_mut()
            .draw(|frame| ui::draw(frame, state, controller.host()))?;

        let event = events.next().await?;
        match controller.handle_event(state, event) {
            Flow::Continue => {}
            flow => return Ok(flow),
        }
    }
}

async fn run_tui(launcher: Launcher) -> Result<()> {
    let Launcher {
        config,
        fetcher,
        coordinator,
    } = launcher;

    let mut shell = TerminalShell::new(setup_terminal()?);
    let mut events = EventHandler::new(config.tick_rate());
    let controller = PickerController::new(fetcher, coordinator, events.sender())
        .with_event_log(open_event_log())
        .with_stream_on_resume(config.stream_on_resume);

    let mut state = PickerState::new(config.fallback_label.clone());
    controller.start_fetch(&mut state);

    let flow = picker_loop(&mut shell, &mut events, &controller, &mut state).await;
    events.stop_input();

    match flow {
        Ok(Flow::HandOff) => tokio::task::block_in_place(|| controller.hand_off(&mut shell)),
        Ok(_) => shell.hide(),
        Err(e) => {
            let _ = shell.hide();
            Err(e)
        }
    }
}
