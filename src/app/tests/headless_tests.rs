use super::*;
use crate::catalog::{AppEntry, SessionHandle};
use crate::launch::{Preferences, SessionStarter};
use crate::remote::RemoteCatalogClient;
use crate::test_support::{transport_error, FakeCatalogClient, RecordingStarter};
use std::sync::Arc;

struct Setup {
    fetcher: CatalogFetcher,
    coordinator: LaunchCoordinator,
    client: Arc<FakeCatalogClient>,
    starter: Arc<RecordingStarter>,
}

fn setup(client: FakeCatalogClient) -> Setup {
    let client = Arc::new(client);
    let starter = Arc::new(RecordingStarter::default());
    let remote: Arc<dyn RemoteCatalogClient> = client.clone();
    let session: Arc<dyn SessionStarter> = starter.clone();
    Setup {
        fetcher: CatalogFetcher::new(remote.clone()),
        coordinator: LaunchCoordinator::new(remote, session, "den-pc", Preferences::default()),
        client,
        starter,
    }
}

fn listing(client: FakeCatalogClient) -> String {
    let s = setup(client);
    let mut out = Vec::new();
    list_apps(&s.fetcher, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_list_prints_tab_separated_entries() {
    let out = listing(
        FakeCatalogClient::idle().with_apps(vec![AppEntry::new(7, "Chess"), AppEntry::new(8, "Go")]),
    );
    assert_eq!(out, "7\tChess\n8\tGo\n");
}

#[test]
fn test_list_reports_resumed_session_and_failures() {
    let out = listing(FakeCatalogClient::idle().with_current_game(42));
    assert_eq!(out, "Resumed running session 42\n");

    let mut failing = FakeCatalogClient::idle();
    failing.current_game = Err(transport_error());
    let out = listing(failing);
    assert!(out.starts_with("No apps available ("));

    assert_eq!(listing(FakeCatalogClient::idle()), "No apps available\n");
}

#[test]
fn test_launch_by_name_uses_fetched_index() {
    let s = setup(
        FakeCatalogClient::idle()
            .with_apps(vec![AppEntry::new(7, "Chess")])
            .with_launch(Ok(SessionHandle(1001))),
    );

    launch_by_name(&s.fetcher, &s.coordinator, "Chess", &mut HeadlessShell).unwrap();

    assert_eq!(s.client.launch_calls().len(), 1);
    assert_eq!(s.starter.hosts(), vec!["den-pc".to_string()]);
}

#[test]
fn test_launch_by_unknown_name_falls_back() {
    let s = setup(FakeCatalogClient::idle().with_apps(vec![AppEntry::new(7, "Chess")]));

    launch_by_name(&s.fetcher, &s.coordinator, "Steam", &mut HeadlessShell).unwrap();

    assert!(s.client.launch_calls().is_empty());
    assert_eq!(s.starter.hosts().len(), 1);
}

#[test]
fn test_rejected_launch_is_an_error() {
    let s = setup(
        FakeCatalogClient::idle()
            .with_apps(vec![AppEntry::new(7, "Chess")])
            .with_launch(Ok(SessionHandle::NONE)),
    );

    let err =
        launch_by_name(&s.fetcher, &s.coordinator, "Chess", &mut HeadlessShell).unwrap_err();

    assert!(err.to_string().contains("Launch failed"));
    assert!(s.starter.hosts().is_empty());
}

#[test]
fn test_launch_default_skips_catalog() {
    let s = setup(FakeCatalogClient::idle());

    launch_default(&s.coordinator, &mut HeadlessShell).unwrap();

    assert!(s.client.calls().is_empty());
    assert_eq!(s.starter.hosts().len(), 1);
}
