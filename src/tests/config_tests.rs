use super::*;
use crate::launcher_paths::set_home_for_test;
use serial_test::serial;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = LauncherConfig::default();
    assert_eq!(config.http_port, 47989);
    assert_eq!(config.fallback_label, "Steam");
    assert_eq!(config.stream_command, vec!["moonlight", "stream", "{host}"]);
    assert!(!config.stream_on_resume);
    assert_eq!(config.request_timeout(), Duration::from_secs(10));
    assert_eq!(config.tick_rate(), Duration::from_millis(250));
}

#[test]
fn test_partial_yaml_keeps_other_defaults() {
    let yaml = r#"
host: den-pc
fallback_label: "Desktop"
stream_on_resume: true
"#;
    let config: LauncherConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.host, "den-pc");
    assert_eq!(config.fallback_label, "Desktop");
    assert!(config.stream_on_resume);
    assert_eq!(config.http_port, 47989);
    assert_eq!(config.tick_rate_ms, 250);
}

#[test]
fn test_unknown_field_is_rejected() {
    let result: Result<LauncherConfig, _> = serde_yaml::from_str("hots: den-pc\n");
    assert!(result.is_err());
}

#[test]
fn test_overrides_replace_config_values() {
    let config = LauncherConfig {
        host: "from-file".to_string(),
        ..Default::default()
    }
    .with_overrides(Some("from-cli".to_string()), Some(48000));
    assert_eq!(config.host, "from-cli");
    assert_eq!(config.http_port, 48000);

    let unchanged = LauncherConfig {
        host: "from-file".to_string(),
        ..Default::default()
    }
    .with_overrides(None, None);
    assert_eq!(unchanged.host, "from-file");
}

#[test]
fn test_validate_requires_host() {
    let err = LauncherConfig::default().validate().unwrap_err();
    assert!(err.to_string().contains("No host configured"));

    let config = LauncherConfig::default().with_overrides(Some("den-pc".to_string()), None);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_empty_command_and_zero_durations() {
    let base = LauncherConfig::default().with_overrides(Some("den-pc".to_string()), None);

    let no_command = LauncherConfig {
        stream_command: Vec::new(),
        ..base.clone()
    };
    assert!(no_command.validate().is_err());

    let no_timeout = LauncherConfig {
        request_timeout_secs: 0,
        ..base.clone()
    };
    assert!(no_timeout.validate().is_err());

    let no_tick = LauncherConfig {
        tick_rate_ms: 0,
        ..base
    };
    assert!(no_tick.validate().is_err());
}

#[test]
fn test_load_explicit_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("launcher.yaml");
    std::fs::write(&path, "host: den-pc\nhttp_port: 48010\n").unwrap();

    let config = LauncherConfig::load_or_default(Some(&path)).unwrap();
    assert_eq!(config.host, "den-pc");
    assert_eq!(config.http_port, 48010);
}

#[test]
fn test_load_explicit_missing_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.yaml");

    let err = LauncherConfig::load_or_default(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_load_invalid_yaml_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.yaml");
    std::fs::write(&path, "host: [unterminated\n").unwrap();

    assert!(LauncherConfig::load(&path).is_err());
}

#[test]
fn test_empty_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.yaml");
    std::fs::write(&path, "\n").unwrap();

    assert_eq!(LauncherConfig::load(&path).unwrap(), LauncherConfig::default());
}

#[test]
#[serial]
fn test_missing_default_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let _guard = set_home_for_test(temp_dir.path().to_path_buf());

    let config = LauncherConfig::load_or_default(None).unwrap();
    assert_eq!(config, LauncherConfig::default());
}

#[test]
#[serial]
fn test_default_file_is_read_from_launcher_home() {
    let temp_dir = TempDir::new().unwrap();
    let _guard = set_home_for_test(temp_dir.path().to_path_buf());
    std::fs::write(launcher_paths::config_path().unwrap(), "host: living-room\n").unwrap();

    let config = LauncherConfig::load_or_default(None).unwrap();
    assert_eq!(config.host, "living-room");
}
