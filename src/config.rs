// ============================================================================
// CONFIGURATION - Optional TOML file with week start, tick rate, log level
// ============================================================================

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Weekday;
use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_ENV: &str = "COMMIT_CONFIG";
const APP_DIR: &str = "commit";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown week start `{0}` (expected a weekday such as \"monday\" or \"sun\")")]
    WeekStart(String),
    #[error("tick_rate_ms must be greater than zero")]
    TickRate,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    week_start: Option<String>,
    tick_rate_ms: Option<u64>,
    log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub week_start: Weekday,
    pub tick_rate: Duration,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            week_start: Weekday::Mon,
            tick_rate: Duration::from_millis(250),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(text)?;
        let mut config = Config::default();

        if let Some(name) = raw.week_start {
            config.week_start = name
                .trim()
                .parse::<Weekday>()
                .map_err(|_| ConfigError::WeekStart(name.clone()))?;
        }
        if let Some(ms) = raw.tick_rate_ms {
            if ms == 0 {
                return Err(ConfigError::TickRate);
            }
            config.tick_rate = Duration::from_millis(ms);
        }
        if let Some(level) = raw.log_level {
            config.log_level = level;
        }
        Ok(config)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Load from `$COMMIT_CONFIG`, falling back to the platform config dir.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Directory for log files, next to other per-user application data.
pub fn data_dir() -> anyhow::Result<PathBuf> {
    if let Some(data_home) = dirs::data_local_dir() {
        Ok(data_home.join(APP_DIR))
    } else {
        Err(anyhow::anyhow!("Could not determine data directory"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn fields_override_defaults() {
        let config = Config::parse(
            r#"
            week_start = "Sunday"
            tick_rate_ms = 100
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.week_start, Weekday::Sun);
        assert_eq!(config.tick_rate, Duration::from_millis(100));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn short_weekday_names_work() {
        let config = Config::parse("week_start = \"sat\"").unwrap();
        assert_eq!(config.week_start, Weekday::Sat);
    }

    #[test]
    fn bad_week_start_is_rejected() {
        let err = Config::parse("week_start = \"someday\"").unwrap_err();
        assert!(matches!(err, ConfigError::WeekStart(ref name) if name == "someday"));
    }

    #[test]
    fn zero_tick_rate_is_rejected() {
        assert!(matches!(
            Config::parse("tick_rate_ms = 0"),
            Err(ConfigError::TickRate)
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            Config::parse("colour = \"green\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
