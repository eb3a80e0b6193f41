//! Tracing subscriber setup for processes using [`TracingBackend`].
//!
//! Records delivered through the tracing backend only show up once a
//! subscriber is installed. This sets up a stdout formatter filtered by
//! `RUST_LOG` (falling back to the level given by the caller).
//!
//! [`TracingBackend`]: crate::backend::TracingBackend

use std::io;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::level::LogLevel;

/// Tracing filter directive that lets every record at `level` through.
///
/// Thresholds `Debug`, `Info` and `Default` all admit `Debug` records, which
/// the tracing backend emits at DEBUG, so they share the `debug` directive.
/// `Fault` and `Error` only admit records emitted at ERROR.
pub fn filter_directive(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Fault | LogLevel::Error => "error",
        LogLevel::Debug | LogLevel::Info | LogLevel::Default => "debug",
    }
}

/// Install a global stdout subscriber.
///
/// `RUST_LOG` wins when set; otherwise `fallback` decides the filter.
/// Returns `false` if a global subscriber was already installed, in which
/// case nothing changes.
pub fn init_tracing(fallback: LogLevel, ansi: bool) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(fallback)));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .with_ansi(ansi)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(LogLevel::Fault), "error");
        assert_eq!(filter_directive(LogLevel::Error), "error");
        assert_eq!(filter_directive(LogLevel::Debug), "debug");
        assert_eq!(filter_directive(LogLevel::Info), "debug");
        assert_eq!(filter_directive(LogLevel::Default), "debug");
    }

    #[test]
    fn test_directive_admits_every_passing_level() {
        use tracing::level_filters::LevelFilter;

        fn emitted_at(level: LogLevel) -> LevelFilter {
            match level {
                LogLevel::Fault | LogLevel::Error => LevelFilter::ERROR,
                LogLevel::Debug => LevelFilter::DEBUG,
                LogLevel::Info | LogLevel::Default => LevelFilter::INFO,
            }
        }

        for threshold in LogLevel::ALL {
            let directive: LevelFilter = filter_directive(threshold).parse().unwrap();
            for level in LogLevel::ALL.into_iter().filter(|l| l.passes(threshold)) {
                assert!(
                    emitted_at(level) <= directive,
                    "{} at threshold {} filtered out by '{}'",
                    level,
                    threshold,
                    filter_directive(threshold)
                );
            }
        }
    }

    #[test]
    fn test_directives_parse_as_filters() {
        for level in LogLevel::ALL {
            let _ = EnvFilter::new(filter_directive(level));
        }
    }

    // Installing the global subscriber is exercised by the CLI; a unit test
    // here would leak the subscriber into every other test in the binary.
}
