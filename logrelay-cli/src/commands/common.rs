//! Common types and utilities shared across CLI commands.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use logrelay::config::{BackendKind, LogConfig};
use logrelay::logging::init_tracing;
use logrelay::{LogLevel, Registry};

use crate::error::CliError;

/// Backend selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum BackendArg {
    /// Forward to tracing, printed on stdout
    Tracing,
    /// Marker-prefixed lines on stderr
    Console,
    /// Deliver nothing
    None,
}

impl From<BackendArg> for BackendKind {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Tracing => BackendKind::Tracing,
            BackendArg::Console => BackendKind::Console,
            BackendArg::None => BackendKind::None,
        }
    }
}

/// Options every command accepts for building its registry.
#[derive(Debug, Clone, Args)]
pub struct RegistryArgs {
    /// INI file with a [logging] section (defaults apply if missing)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the configured threshold
    #[arg(long)]
    pub threshold: Option<LogLevel>,

    /// Override the configured backend
    #[arg(long, value_enum)]
    pub backend: Option<BackendArg>,

    /// Mute a component (repeatable)
    #[arg(long = "suppress")]
    pub suppress: Vec<String>,
}

impl RegistryArgs {
    /// Resolve the effective configuration.
    ///
    /// Order: config file, then `LOGRELAY_LEVEL`, then command-line flags.
    pub fn load_config(&self) -> Result<LogConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => LogConfig::load_from(path)?,
            None => LogConfig::default(),
        }
        .with_env_overrides()?;

        if let Some(level) = self.threshold {
            config.minimum_level = level;
        }
        if let Some(backend) = self.backend {
            config.backend = backend.into();
        }
        config.suppressed.extend(self.suppress.iter().cloned());
        Ok(config)
    }

    /// Build a registry ready to use, initializing tracing output if the
    /// tracing backend is selected.
    pub fn build_registry(&self) -> Result<Registry, CliError> {
        let config = self.load_config()?;
        if config.backend == BackendKind::Tracing {
            init_tracing(config.minimum_level, false);
        }
        Ok(Registry::from_config(&config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args() -> RegistryArgs {
        RegistryArgs {
            config: None,
            threshold: None,
            backend: None,
            suppress: Vec::new(),
        }
    }

    #[test]
    fn test_flags_override_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logging.ini");
        fs::write(
            &path,
            "[logging]\nlevel = info\nsuppressed = Cache\nbackend = tracing\n",
        )
        .unwrap();

        let mut args = args();
        args.config = Some(path);
        args.threshold = Some(LogLevel::Fault);
        args.backend = Some(BackendArg::None);
        args.suppress = vec!["Network".to_string()];

        let config = args.load_config().unwrap();
        assert_eq!(config.minimum_level, LogLevel::Fault);
        assert_eq!(config.backend, BackendKind::None);
        assert_eq!(config.suppressed, vec!["Cache", "Network"]);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logging.ini");
        fs::write(&path, "[logging]\nbackend = syslog\n").unwrap();

        let mut args = args();
        args.config = Some(path);

        assert!(matches!(args.load_config(), Err(CliError::Config(_))));
    }
}
