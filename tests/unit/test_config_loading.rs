//! Unit Tests for Configuration Loading

use std::fs;

use serialview::config::loader::ConfigLoader;
use serialview::error::Error;
use serialview::{BaudRate, Config, LineEnding};
use tempfile::TempDir;

#[test]
fn test_load_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
        [monitor]
        timestamps = true
        line_ending = "none"
        baud_rate = 57600
        "#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_path(&path).unwrap();
    assert!(config.monitor.timestamps);
    assert!(config.monitor.auto_scroll);
    assert_eq!(config.monitor.line_ending, LineEnding::None);
    assert_eq!(config.monitor.baud_rate, BaudRate::B57600);
}

#[test]
fn test_load_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("serialview.json");
    fs::write(&path, r#"{"monitor": {"auto_scroll": false, "baud_rate": 1200}}"#).unwrap();

    let config = ConfigLoader::load_from_path(&path).unwrap();
    assert!(!config.monitor.auto_scroll);
    assert_eq!(config.monitor.baud_rate, BaudRate::B1200);
}

#[test]
fn test_first_existing_candidate_wins() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.toml");
    let present = dir.path().join("present.toml");
    let shadowed = dir.path().join("shadowed.toml");
    fs::write(&present, "[monitor]\nbaud_rate = 38400\n").unwrap();
    fs::write(&shadowed, "[monitor]\nbaud_rate = 300\n").unwrap();

    let loader = ConfigLoader::with_search_paths(vec![missing, present, shadowed]);
    assert_eq!(loader.load_first().unwrap().monitor.baud_rate, BaudRate::B38400);
}

#[test]
fn test_unsupported_baud_rate_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[monitor]\nbaud_rate = 74880\n").unwrap();

    let err = ConfigLoader::load_from_path(&path).unwrap_err();
    assert!(matches!(err, Error::ConfigParseFailed { ref reason, .. } if reason.contains("74880")));
}

#[test]
fn test_unknown_line_ending_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[monitor]\nline_ending = \"tab\"\n").unwrap();

    assert!(matches!(
        ConfigLoader::load_from_path(&path),
        Err(Error::ConfigParseFailed { .. })
    ));
}

#[test]
fn test_invalid_capacity_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[transport]\nevent_capacity = 0\n").unwrap();

    let err = ConfigLoader::load_from_path(&path).unwrap_err();
    assert!(matches!(err, Error::ConfigValidationFailed { ref field, .. } if field == "transport.event_capacity"));
}

#[test]
fn test_unreadable_path_reports_load_failure() {
    let dir = TempDir::new().unwrap();
    let err = ConfigLoader::load_from_path(dir.path()).unwrap_err();
    assert!(matches!(err, Error::ConfigLoadFailed { .. }));
}

#[test]
fn test_empty_file_is_all_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "").unwrap();

    assert_eq!(ConfigLoader::load_from_path(&path).unwrap(), Config::default());
}
