//! Call-site facade: filter first, build the message only if it will be
//! delivered.
//!
//! Message producers are plain closures. A filtered call never invokes its
//! producer; a delivered call invokes it exactly once. Filtering and the
//! choice of backend come from one registry snapshot, so a configuration
//! change racing with a call either applies to the whole call or not at all.

use std::sync::Arc;

use crate::backend::{CallSite, Record};
use crate::level::LogLevel;
use crate::registry::{Registry, RegistrySource};

/// Entry point used by call sites.
///
/// Cheap to clone; holds only a [`RegistrySource`].
#[derive(Debug, Clone)]
pub struct Dispatcher {
    source: RegistrySource,
}

impl Dispatcher {
    /// Dispatcher that resolves the process-wide registry on every call.
    pub fn current() -> Self {
        Self {
            source: RegistrySource::Current,
        }
    }

    /// Dispatcher bound to one registry.
    pub fn with_registry(registry: Arc<Registry>) -> Self {
        Self {
            source: RegistrySource::Fixed(registry),
        }
    }

    pub fn from_source(source: RegistrySource) -> Self {
        Self { source }
    }

    /// The registry this dispatcher would use right now.
    pub fn registry(&self) -> Arc<Registry> {
        self.source.resolve()
    }

    /// Log a message from `component`, blocking until the backend returns.
    pub fn log<F, M>(&self, level: LogLevel, component: &str, message: F, call_site: CallSite<'_>)
    where
        F: FnOnce() -> M,
        M: AsRef<str>,
    {
        let registry = self.source.resolve();
        let Some(backend) = registry.enabled_backend(level, component) else {
            return;
        };
        let message = message();
        backend.log(&Record::new(level, component, message.as_ref(), call_site));
    }

    /// Log a message from `component` through the backend's suspending path.
    ///
    /// Filtering happens when the future is first polled, before any
    /// suspension.
    pub async fn log_async<F, M>(
        &self,
        level: LogLevel,
        component: &str,
        message: F,
        call_site: CallSite<'_>,
    ) where
        F: FnOnce() -> M,
        M: AsRef<str>,
    {
        let registry = self.source.resolve();
        let Some(backend) = registry.enabled_backend(level, component) else {
            return;
        };
        let message = message();
        backend
            .log_async(Record::new(level, component, message.as_ref(), call_site))
            .await;
    }

    pub fn default<F, M>(&self, component: &str, message: F, call_site: CallSite<'_>)
    where
        F: FnOnce() -> M,
        M: AsRef<str>,
    {
        self.log(LogLevel::Default, component, message, call_site);
    }

    pub fn info<F, M>(&self, component: &str, message: F, call_site: CallSite<'_>)
    where
        F: FnOnce() -> M,
        M: AsRef<str>,
    {
        self.log(LogLevel::Info, component, message, call_site);
    }

    pub fn debug<F, M>(&self, component: &str, message: F, call_site: CallSite<'_>)
    where
        F: FnOnce() -> M,
        M: AsRef<str>,
    {
        self.log(LogLevel::Debug, component, message, call_site);
    }

    pub fn error<F, M>(&self, component: &str, message: F, call_site: CallSite<'_>)
    where
        F: FnOnce() -> M,
        M: AsRef<str>,
    {
        self.log(LogLevel::Error, component, message, call_site);
    }

    pub fn fault<F, M>(&self, component: &str, message: F, call_site: CallSite<'_>)
    where
        F: FnOnce() -> M,
        M: AsRef<str>,
    {
        self.log(LogLevel::Fault, component, message, call_site);
    }

    pub async fn default_async<F, M>(&self, component: &str, message: F, call_site: CallSite<'_>)
    where
        F: FnOnce() -> M,
        M: AsRef<str>,
    {
        self.log_async(LogLevel::Default, component, message, call_site)
            .await;
    }

    pub async fn info_async<F, M>(&self, component: &str, message: F, call_site: CallSite<'_>)
    where
        F: FnOnce() -> M,
        M: AsRef<str>,
    {
        self.log_async(LogLevel::Info, component, message, call_site)
            .await;
    }

    pub async fn debug_async<F, M>(&self, component: &str, message: F, call_site: CallSite<'_>)
    where
        F: FnOnce() -> M,
        M: AsRef<str>,
    {
        self.log_async(LogLevel::Debug, component, message, call_site)
            .await;
    }

    pub async fn error_async<F, M>(&self, component: &str, message: F, call_site: CallSite<'_>)
    where
        F: FnOnce() -> M,
        M: AsRef<str>,
    {
        self.log_async(LogLevel::Error, component, message, call_site)
            .await;
    }

    pub async fn fault_async<F, M>(&self, component: &str, message: F, call_site: CallSite<'_>)
    where
        F: FnOnce() -> M,
        M: AsRef<str>,
    {
        self.log_async(LogLevel::Fault, component, message, call_site)
            .await;
    }

    /// Unmute `component`.
    pub fn allow_logging(&self, component: &str) {
        self.source.resolve().allow(component);
    }

    /// Mute `component`.
    pub fn disable_logging(&self, component: &str) {
        self.source.resolve().suppress(component);
    }
}
