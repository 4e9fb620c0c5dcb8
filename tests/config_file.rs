//! Loading the optional config file from disk.

use std::io::Write;
use std::time::Duration;

use chrono::Weekday;
use commit::Config;
use commit::config::ConfigError;
use tempfile::{NamedTempFile, tempdir};

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.week_start, Weekday::Mon);
}

#[test]
fn file_values_are_applied() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "week_start = \"sunday\"").unwrap();
    writeln!(file, "tick_rate_ms = 500").unwrap();

    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.week_start, Weekday::Sun);
    assert_eq!(config.tick_rate, Duration::from_millis(500));
    assert_eq!(config.log_level, "info");
}

#[test]
fn malformed_file_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "week_start = [").unwrap();
    assert!(matches!(
        Config::load_from(file.path()),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn directory_path_is_a_read_error() {
    let dir = tempdir().unwrap();
    let err = Config::load_from(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains(&dir.path().display().to_string()));
}
