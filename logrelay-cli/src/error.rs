//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use logrelay::config::ConfigError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Configuration file could not be loaded or holds invalid values
    Config(ConfigError),
    /// Invalid command-line usage not caught by argument parsing
    Usage(String),
    /// Async runtime could not be started
    Runtime(std::io::Error),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        if let CliError::Config(ConfigError::InvalidValue { .. }) = self {
            eprintln!();
            eprintln!("Valid [logging] keys:");
            eprintln!("  level      = fault | error | debug | info | default");
            eprintln!("  suppressed = comma-separated component names");
            eprintln!("  backend    = tracing | console | none");
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Usage(msg) => write!(f, "{}", msg),
            CliError::Runtime(e) => write!(f, "Failed to start async runtime: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Usage(_) => None,
            CliError::Runtime(e) => Some(e),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}
