use super::*;
use crate::launcher_paths::set_home_for_test;
use serial_test::serial;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use tempfile::TempDir;

/// Serves exactly one HTTP response and reports the request line it saw.
fn serve_once(status: &str, body: &str) -> (u16, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let (tx, rx) = mpsc::channel();
    let status = status.to_string();
    let body = body.to_string();

    std::thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        loop {
            let mut header = String::new();
            if reader.read_line(&mut header).unwrap() == 0 || header == "\r\n" {
                break;
            }
        }
        let _ = tx.send(request_line.trim().to_string());

        let mut stream = stream;
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
    });

    (port, rx)
}

fn client_for(port: u16) -> HttpCatalogClient {
    HttpCatalogClient::new(
        "127.0.0.1",
        port,
        Duration::from_secs(5),
        "0123456789abcdef".to_string(),
    )
}

#[test]
fn test_current_game_sends_unique_id() {
    let (port, requests) = serve_once(
        "200 OK",
        r#"<root status_code="200"><currentgame>42</currentgame></root>"#,
    );
    let client = client_for(port);

    assert_eq!(client.current_game(), Ok(42));
    let request_line = requests.recv().unwrap();
    assert!(request_line.starts_with("GET /serverinfo?"));
    assert!(request_line.contains("uniqueid=0123456789abcdef"));
}

#[test]
fn test_launch_encodes_stream_mode() {
    let (port, requests) = serve_once(
        "200 OK",
        r#"<root status_code="200"><gamesession>1001</gamesession></root>"#,
    );
    let client = client_for(port);

    assert_eq!(client.launch_app(7, 1920, 1080, 60), Ok(SessionHandle(1001)));
    let request_line = requests.recv().unwrap();
    assert!(request_line.starts_with("GET /launch?"));
    assert!(request_line.contains("appid=7"));
    assert!(request_line.contains("mode=1920x1080x60"));
}

#[test]
fn test_app_list_round_trip() {
    let (port, _requests) = serve_once(
        "200 OK",
        r#"<root status_code="200"><App><AppTitle>Chess</AppTitle><ID>7</ID></App></root>"#,
    );
    let client = client_for(port);

    assert_eq!(client.app_list(), Ok(vec![AppEntry::new(7, "Chess")]));
}

#[test]
fn test_http_error_status_is_protocol_error() {
    let (port, _requests) = serve_once("503 Service Unavailable", "");
    let client = client_for(port);

    assert!(matches!(
        client.app_list(),
        Err(RemoteError::Protocol { .. })
    ));
}

#[test]
fn test_refused_connection_is_transport_error() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = client_for(port);

    assert!(matches!(
        client.current_game(),
        Err(RemoteError::Transport { .. })
    ));
}

#[test]
fn test_base_url_uses_host_and_port() {
    let client = HttpCatalogClient::new(
        "den-pc",
        DEFAULT_HTTP_PORT,
        Duration::from_secs(1),
        "0123456789abcdef".to_string(),
    );
    assert_eq!(client.base_url(), "http://den-pc:47989");
}

#[test]
#[serial]
fn test_unique_id_is_generated_once_and_reused() {
    let temp_dir = TempDir::new().unwrap();
    let _guard = set_home_for_test(temp_dir.path().to_path_buf());

    let first = load_or_create_unique_id().unwrap();
    assert_eq!(first.len(), 16);
    assert!(first.chars().all(|c| c.is_ascii_hexdigit()));

    let second = load_or_create_unique_id().unwrap();
    assert_eq!(first, second);
}

#[test]
#[serial]
fn test_malformed_unique_id_is_replaced() {
    let temp_dir = TempDir::new().unwrap();
    let _guard = set_home_for_test(temp_dir.path().to_path_buf());

    std::fs::write(launcher_paths::unique_id_path().unwrap(), "not-hex").unwrap();
    let id = load_or_create_unique_id().unwrap();
    assert!(is_valid_unique_id(&id));
}
