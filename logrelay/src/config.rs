//! Configuration for building a registry from an INI file.
//!
//! ```ini
//! [logging]
//! level = error
//! suppressed = Network, Cache
//! backend = console
//! ```
//!
//! Every key is optional; missing keys keep their defaults. The
//! `LOGRELAY_LEVEL` environment variable overrides `level` when
//! [`LogConfig::with_env_overrides`] is applied.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use ini::Ini;
use thiserror::Error;

use crate::backend::{Backend, ConsoleBackend, TracingBackend};
use crate::level::LogLevel;

/// Environment variable overriding the configured threshold.
pub const LEVEL_ENV_VAR: &str = "LOGRELAY_LEVEL";

const SECTION: &str = "logging";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or parse the config file
    #[error("Failed to read config file: {0}")]
    Read(#[from] ini::Error),

    /// Failed to parse config text
    #[error("Failed to parse config: {0}")]
    Parse(#[from] ini::ParseError),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },
}

/// Which backend a configuration installs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// Forward to the `tracing` crate
    #[default]
    Tracing,
    /// Marker-prefixed lines on stderr
    Console,
    /// Install nothing
    None,
}

impl BackendKind {
    /// Build the backend this kind names, if any.
    pub fn build(self) -> Option<Arc<dyn Backend>> {
        match self {
            Self::Tracing => Some(Arc::new(TracingBackend::new())),
            Self::Console => Some(Arc::new(ConsoleBackend::new())),
            Self::None => None,
        }
    }

    /// Name used in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tracing => "tracing",
            Self::Console => "console",
            Self::None => "none",
        }
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tracing" => Ok(Self::Tracing),
            "console" => Ok(Self::Console),
            "none" => Ok(Self::None),
            other => Err(other.to_string()),
        }
    }
}

/// Settings applied to a [`Registry`](crate::registry::Registry).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogConfig {
    /// Threshold; messages less severe than this are dropped
    pub minimum_level: LogLevel,
    /// Components muted regardless of level
    pub suppressed: Vec<String>,
    /// Backend to install
    pub backend: BackendKind,
}

impl LogConfig {
    /// Load configuration from `path`.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let ini = Ini::load_from_file(path)?;
        parse_ini(&ini)
    }

    /// Parse configuration from INI text.
    pub fn parse_str(text: &str) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_str(text)?;
        parse_ini(&ini)
    }

    /// Builder-style threshold setter.
    pub fn with_minimum_level(mut self, level: LogLevel) -> Self {
        self.minimum_level = level;
        self
    }

    /// Builder-style suppression entry.
    pub fn with_suppressed(mut self, component: impl Into<String>) -> Self {
        self.suppressed.push(component.into());
        self
    }

    /// Builder-style backend selection.
    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    /// Apply `LOGRELAY_LEVEL` if it is set.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_level_override(std::env::var(LEVEL_ENV_VAR).ok().as_deref())
    }

    /// Apply a level override taken from outside the config file.
    pub fn with_level_override(mut self, value: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(v) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.minimum_level = v.parse().map_err(|_| ConfigError::InvalidValue {
                section: "env".to_string(),
                key: LEVEL_ENV_VAR.to_string(),
                value: v.to_string(),
                reason: "must be one of: fault, error, debug, info, default".to_string(),
            })?;
        }
        Ok(self)
    }
}

/// Overlay the `[logging]` section onto `LogConfig::default()`.
fn parse_ini(ini: &Ini) -> Result<LogConfig, ConfigError> {
    let mut config = LogConfig::default();

    let Some(section) = ini.section(Some(SECTION)) else {
        return Ok(config);
    };

    if let Some(v) = section.get("level") {
        config.minimum_level = v.parse().map_err(|_| ConfigError::InvalidValue {
            section: SECTION.to_string(),
            key: "level".to_string(),
            value: v.to_string(),
            reason: "must be one of: fault, error, debug, info, default".to_string(),
        })?;
    }

    if let Some(v) = section.get("suppressed") {
        config.suppressed = v
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
    }

    if let Some(v) = section.get("backend") {
        config.backend = v.parse().map_err(|_| ConfigError::InvalidValue {
            section: SECTION.to_string(),
            key: "backend".to_string(),
            value: v.to_string(),
            reason: "must be one of: tracing, console, none".to_string(),
        })?;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = LogConfig::default();
        assert_eq!(config.minimum_level, LogLevel::Default);
        assert!(config.suppressed.is_empty());
        assert_eq!(config.backend, BackendKind::Tracing);
    }

    #[test]
    fn test_parse_full_section() {
        let config = LogConfig::parse_str(
            "[logging]\nlevel = error\nsuppressed = Network, Cache ,\nbackend = console\n",
        )
        .unwrap();

        assert_eq!(config.minimum_level, LogLevel::Error);
        assert_eq!(config.suppressed, vec!["Network", "Cache"]);
        assert_eq!(config.backend, BackendKind::Console);
    }

    #[test]
    fn test_missing_section_gives_defaults() {
        let config = LogConfig::parse_str("[other]\nkey = value\n").unwrap();
        assert_eq!(config, LogConfig::default());
    }

    #[test]
    fn test_invalid_level() {
        let err = LogConfig::parse_str("[logging]\nlevel = verbose\n").unwrap_err();
        match err {
            ConfigError::InvalidValue { key, value, .. } => {
                assert_eq!(key, "level");
                assert_eq!(value, "verbose");
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_backend() {
        let err = LogConfig::parse_str("[logging]\nbackend = syslog\n").unwrap_err();
        assert!(err.to_string().contains("logging.backend"));
    }

    #[test]
    fn test_load_from_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = LogConfig::load_from(&dir.path().join("absent.ini")).unwrap();
        assert_eq!(config, LogConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logging.ini");
        fs::write(&path, "[logging]\nlevel = debug\nbackend = none\n").unwrap();

        let config = LogConfig::load_from(&path).unwrap();
        assert_eq!(config.minimum_level, LogLevel::Debug);
        assert_eq!(config.backend, BackendKind::None);
    }

    #[test]
    fn test_level_override() {
        let config = LogConfig::default()
            .with_level_override(Some("fault"))
            .unwrap();
        assert_eq!(config.minimum_level, LogLevel::Fault);

        let unchanged = LogConfig::default()
            .with_minimum_level(LogLevel::Info)
            .with_level_override(Some("  "))
            .unwrap();
        assert_eq!(unchanged.minimum_level, LogLevel::Info);

        assert!(LogConfig::default()
            .with_level_override(Some("loud"))
            .is_err());
    }

    #[test]
    fn test_backend_kind_build() {
        assert!(BackendKind::Tracing.build().is_some());
        assert!(BackendKind::Console.build().is_some());
        assert!(BackendKind::None.build().is_none());
    }

    #[test]
    fn test_builders() {
        let config = LogConfig::default()
            .with_minimum_level(LogLevel::Error)
            .with_suppressed("Cache")
            .with_backend(BackendKind::None);
        assert_eq!(config.suppressed, vec!["Cache"]);
        assert_eq!(config.backend, BackendKind::None);
    }
}
