//! Tracing library adapter implementation.

use super::{Backend, Record};
use crate::level::LogLevel;

/// Backend that delegates to the `tracing` crate.
///
/// Levels map onto tracing's as follows: `Fault` and `Error` become ERROR,
/// `Info` and `Default` become INFO, `Debug` becomes DEBUG. The logrelay
/// level, component and call site travel as event fields.
///
/// # Example
///
/// ```ignore
/// use logrelay::backend::TracingBackend;
/// use logrelay::registry::Registry;
/// use std::sync::Arc;
///
/// // Assumes a tracing subscriber is already initialized
/// let registry = Registry::new();
/// registry.install_backend(Arc::new(TracingBackend));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBackend;

impl TracingBackend {
    /// Create a new tracing backend.
    pub fn new() -> Self {
        Self
    }
}

impl Backend for TracingBackend {
    fn log(&self, record: &Record<'_>) {
        let severity = record.level.as_str();
        let component = record.component;
        let file = record.call_site.file;
        let function = record.call_site.function;
        let line = record.call_site.line;

        match record.level {
            LogLevel::Fault | LogLevel::Error => tracing::error!(
                severity,
                component,
                file,
                function,
                line,
                "{}",
                record.message
            ),
            LogLevel::Debug => tracing::debug!(
                severity,
                component,
                file,
                function,
                line,
                "{}",
                record.message
            ),
            LogLevel::Info | LogLevel::Default => tracing::info!(
                severity,
                component,
                file,
                function,
                line,
                "{}",
                record.message
            ),
        }
    }
}
