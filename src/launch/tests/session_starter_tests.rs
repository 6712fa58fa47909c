use super::*;

fn starter(parts: &[&str]) -> CommandSessionStarter {
    CommandSessionStarter::new(parts.iter().map(|s| s.to_string()).collect())
}

#[test]
fn test_command_line_substitutes_host() {
    let (program, args) = starter(&["moonlight", "stream", "{host}", "-app", "Steam"])
        .command_line("den-pc")
        .unwrap();
    assert_eq!(program, "moonlight");
    assert_eq!(args, vec!["stream", "den-pc", "-app", "Steam"]);
}

#[test]
fn test_command_line_substitutes_inside_argument() {
    let (_, args) = starter(&["client", "--target=http://{host}:47989"])
        .command_line("10.0.0.5")
        .unwrap();
    assert_eq!(args, vec!["--target=http://10.0.0.5:47989"]);
}

#[test]
fn test_empty_command_is_an_error() {
    let err = starter(&[]).command_line("den-pc").unwrap_err();
    assert!(err.to_string().contains("No stream command"));
}

#[test]
fn test_missing_program_is_an_error() {
    let err = starter(&["definitely-not-a-stream-client-3f9a", "{host}"])
        .start_session("den-pc")
        .unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[cfg(unix)]
#[test]
fn test_successful_command_completes_hand_off() {
    assert!(starter(&["true", "{host}"]).start_session("den-pc").is_ok());
}

#[cfg(unix)]
#[test]
fn test_failing_command_reports_exit_status() {
    let err = starter(&["false"]).start_session("den-pc").unwrap_err();
    assert!(err.to_string().contains("exited"));
}
