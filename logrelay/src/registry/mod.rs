//! The registry: threshold, suppression set, backend slot and object tracker.
//!
//! All state sits behind a single `RwLock`, so every mutation and every
//! filtering decision is linearizable with respect to the others. The lock
//! is never held while a backend runs.
//!
//! # Example
//!
//! ```
//! use logrelay::backend::{CallSite, MemoryBackend, Record};
//! use logrelay::registry::Registry;
//! use logrelay::LogLevel;
//! use std::sync::Arc;
//!
//! let registry = Registry::new();
//! let backend = Arc::new(MemoryBackend::new());
//! registry.install_backend(backend.clone());
//! registry.set_minimum_level(LogLevel::Error);
//!
//! assert!(registry.should_log(LogLevel::Fault, "Storage"));
//! assert!(!registry.should_log(LogLevel::Info, "Storage"));
//!
//! registry.suppress("Storage");
//! assert!(!registry.should_log(LogLevel::Fault, "Storage"));
//! ```

mod instance;

pub use instance::{current, swap_instance, RegistrySource};

use std::any::Any;
use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::backend::{Backend, Record};
use crate::config::LogConfig;
use crate::level::LogLevel;
use crate::tracking::ObjectTracker;

/// Mutable state guarded by the registry lock.
#[derive(Default)]
struct RegistryState {
    backend: Option<Arc<dyn Backend>>,
    suppressed: HashSet<String>,
    minimum_level: LogLevel,
    tracked: ObjectTracker,
}

impl RegistryState {
    fn passes(&self, level: LogLevel, component: &str) -> bool {
        level.passes(self.minimum_level) && !self.suppressed.contains(component)
    }
}

/// Shared logging configuration plus the one installed backend.
///
/// A fresh registry has no backend, a threshold of [`LogLevel::Default`]
/// (everything passes) and nothing suppressed. Without a backend nothing is
/// ever delivered.
#[derive(Default)]
pub struct Registry {
    state: RwLock<RegistryState>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from configuration.
    pub fn from_config(config: &LogConfig) -> Self {
        let registry = Self::new();
        registry.apply_config(config);
        registry
    }

    /// Apply a configuration: threshold and suppression list are replaced,
    /// and the configured backend is installed if no backend is present yet.
    pub fn apply_config(&self, config: &LogConfig) {
        {
            let mut state = self.state.write();
            state.minimum_level = config.minimum_level;
            state.suppressed = config.suppressed.iter().cloned().collect();
        }
        let kind = config.backend;
        self.install_backend_with(|| kind.build());
        tracing::debug!(
            minimum_level = %config.minimum_level,
            suppressed = config.suppressed.len(),
            backend = config.backend.as_str(),
            "logrelay configuration applied"
        );
    }

    /// Install `backend` if none is installed yet.
    ///
    /// Returns `true` if this call installed it. Once a backend is present,
    /// later calls change nothing.
    pub fn install_backend(&self, backend: Arc<dyn Backend>) -> bool {
        let mut state = self.state.write();
        if state.backend.is_some() {
            drop(state);
            tracing::debug!("logrelay backend already installed, ignoring replacement");
            return false;
        }
        state.backend = Some(backend);
        true
    }

    /// Install the backend `make` builds, calling it only if no backend is
    /// installed yet.
    ///
    /// Returns `true` if a backend was installed. `make` returning `None`
    /// leaves the slot empty. `make` runs under the registry lock and must
    /// not call back into this registry.
    pub fn install_backend_with<F>(&self, make: F) -> bool
    where
        F: FnOnce() -> Option<Arc<dyn Backend>>,
    {
        let mut state = self.state.write();
        if state.backend.is_some() {
            return false;
        }
        match make() {
            Some(backend) => {
                state.backend = Some(backend);
                true
            }
            None => false,
        }
    }

    pub fn has_backend(&self) -> bool {
        self.state.read().backend.is_some()
    }

    /// Replace the threshold.
    pub fn set_minimum_level(&self, level: LogLevel) {
        self.state.write().minimum_level = level;
    }

    pub fn minimum_level(&self) -> LogLevel {
        self.state.read().minimum_level
    }

    /// Mute `component`. Returns `true` if it was not already muted.
    pub fn suppress(&self, component: impl Into<String>) -> bool {
        self.state.write().suppressed.insert(component.into())
    }

    /// Unmute `component`. Returns `true` if it was muted.
    pub fn allow(&self, component: &str) -> bool {
        self.state.write().suppressed.remove(component)
    }

    pub fn is_suppressed(&self, component: &str) -> bool {
        self.state.read().suppressed.contains(component)
    }

    /// Muted components, sorted.
    pub fn suppressed_components(&self) -> Vec<String> {
        let mut names: Vec<String> = self.state.read().suppressed.iter().cloned().collect();
        names.sort();
        names
    }

    /// True iff a backend is installed, `level` passes the threshold and
    /// `component` is not suppressed.
    pub fn should_log(&self, level: LogLevel, component: &str) -> bool {
        let state = self.state.read();
        state.backend.is_some() && state.passes(level, component)
    }

    /// The backend to deliver to, if a message at `level` from `component`
    /// should be logged.
    ///
    /// Decision and backend come from the same lock acquisition.
    pub fn enabled_backend(&self, level: LogLevel, component: &str) -> Option<Arc<dyn Backend>> {
        let state = self.state.read();
        if state.passes(level, component) {
            state.backend.clone()
        } else {
            None
        }
    }

    fn backend(&self) -> Option<Arc<dyn Backend>> {
        self.state.read().backend.clone()
    }

    /// Forward `record` to the backend, blocking until it returns.
    ///
    /// No-op without a backend. Filtering is the caller's job.
    pub fn dispatch(&self, record: &Record<'_>) {
        if let Some(backend) = self.backend() {
            backend.log(record);
        }
    }

    /// Forward `record` through the backend's suspending path.
    ///
    /// No-op without a backend. Filtering is the caller's job.
    pub async fn dispatch_async(&self, record: Record<'_>) {
        if let Some(backend) = self.backend() {
            backend.log_async(record).await;
        }
    }

    /// Remember a weak reference to `object` under `component`, pruning
    /// entries whose objects are gone.
    pub fn track<T>(&self, component: impl Into<String>, object: &Arc<T>)
    where
        T: Any + Send + Sync,
    {
        self.state.write().tracked.track(component, object);
    }

    /// Returns true if the object tracked for `component` is still alive.
    pub fn is_tracked_alive(&self, component: &str) -> bool {
        self.state.read().tracked.is_alive(component)
    }

    /// The object tracked for `component`, if alive and of type `T`.
    pub fn tracked_object<T>(&self, component: &str) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        self.state.read().tracked.get(component)
    }

    /// Components whose tracked objects are alive, sorted.
    pub fn tracked_components(&self) -> Vec<String> {
        self.state.read().tracked.live_components()
    }

    /// Drop tracked entries whose objects are gone. Returns how many went.
    pub fn prune_tracked(&self) -> usize {
        self.state.write().tracked.prune()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("Registry")
            .field("has_backend", &state.backend.is_some())
            .field("minimum_level", &state.minimum_level)
            .field("suppressed", &state.suppressed.len())
            .field("tracked", &state.tracked)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{CallSite, MemoryBackend};
    use crate::config::BackendKind;

    fn record<'a>(level: LogLevel, component: &'a str, message: &'a str) -> Record<'a> {
        Record::new(
            level,
            component,
            message,
            CallSite::new(file!(), "registry::tests", line!()),
        )
    }

    fn with_memory() -> (Registry, Arc<MemoryBackend>) {
        let registry = Registry::new();
        let backend = Arc::new(MemoryBackend::new());
        assert!(registry.install_backend(backend.clone()));
        (registry, backend)
    }

    #[test]
    fn test_should_log_requires_backend() {
        let registry = Registry::new();
        assert!(!registry.should_log(LogLevel::Fault, "A"));
        assert!(registry.enabled_backend(LogLevel::Fault, "A").is_none());

        registry.install_backend(Arc::new(MemoryBackend::new()));
        assert!(registry.should_log(LogLevel::Fault, "A"));
    }

    #[test]
    fn test_threshold_for_every_pair() {
        let (registry, _) = with_memory();
        for threshold in LogLevel::ALL {
            registry.set_minimum_level(threshold);
            for level in LogLevel::ALL {
                assert_eq!(
                    registry.should_log(level, "A"),
                    level <= threshold,
                    "{} at threshold {}",
                    level,
                    threshold
                );
            }
        }
    }

    #[test]
    fn test_suppress_then_allow_round_trip() {
        let (registry, _) = with_memory();
        registry.set_minimum_level(LogLevel::Info);
        let before: Vec<bool> = LogLevel::ALL
            .iter()
            .map(|l| registry.should_log(*l, "Cache"))
            .collect();

        assert!(registry.suppress("Cache"));
        assert!(!registry.suppress("Cache"));
        assert!(LogLevel::ALL.iter().all(|l| !registry.should_log(*l, "Cache")));
        assert!(registry.should_log(LogLevel::Fault, "Other"));

        assert!(registry.allow("Cache"));
        assert!(!registry.allow("Cache"));
        let after: Vec<bool> = LogLevel::ALL
            .iter()
            .map(|l| registry.should_log(*l, "Cache"))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_second_install_is_ignored() {
        let registry = Registry::new();
        let first = Arc::new(MemoryBackend::new());
        let second = Arc::new(MemoryBackend::new());

        assert!(registry.install_backend(first.clone()));
        assert!(!registry.install_backend(second.clone()));

        registry.dispatch(&record(LogLevel::Error, "A", "hello"));

        assert_eq!(first.messages(), vec!["hello"]);
        assert!(second.is_empty());
    }

    #[test]
    fn test_dispatch_without_backend_is_noop() {
        let registry = Registry::new();
        registry.dispatch(&record(LogLevel::Fault, "A", "dropped"));
    }

    #[test]
    fn test_dispatch_echoes_record() {
        let (registry, backend) = with_memory();
        let site = CallSite::new("src/io.rs", "io::read", 99);
        registry.dispatch(&Record::new(LogLevel::Debug, "Io", "short read", site));

        let records = backend.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].component, "Io");
        assert_eq!(records[0].file, "src/io.rs");
        assert_eq!(records[0].function, "io::read");
        assert_eq!(records[0].line, 99);
    }

    #[test]
    fn test_suppressed_components_sorted() {
        let registry = Registry::new();
        registry.suppress("b");
        registry.suppress("a");
        registry.suppress("c");
        registry.allow("c");
        assert_eq!(registry.suppressed_components(), vec!["a", "b"]);
        assert!(registry.is_suppressed("a"));
        assert!(!registry.is_suppressed("c"));
    }

    #[test]
    fn test_from_config() {
        let config = LogConfig::default()
            .with_minimum_level(LogLevel::Error)
            .with_suppressed("Noisy")
            .with_backend(BackendKind::None);

        let registry = Registry::from_config(&config);

        assert_eq!(registry.minimum_level(), LogLevel::Error);
        assert!(registry.is_suppressed("Noisy"));
        assert!(!registry.has_backend());
    }

    #[test]
    fn test_apply_config_keeps_existing_backend() {
        let (registry, backend) = with_memory();
        registry.apply_config(&LogConfig::default().with_backend(BackendKind::Console));

        registry.dispatch(&record(LogLevel::Info, "A", "still memory"));
        assert_eq!(backend.messages(), vec!["still memory"]);
    }

    #[test]
    fn test_install_backend_with_builds_only_when_empty() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let built = AtomicUsize::new(0);
        let make = || -> Option<Arc<dyn Backend>> {
            built.fetch_add(1, Ordering::SeqCst);
            Some(Arc::new(MemoryBackend::new()))
        };

        let registry = Registry::new();
        assert!(!registry.install_backend_with(|| None));
        assert!(!registry.has_backend());

        assert!(registry.install_backend_with(make));
        assert!(!registry.install_backend_with(make));
        assert_eq!(built.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_tracking_through_registry() {
        let registry = Registry::new();
        let session = Arc::new(String::from("s-1"));
        let scratch = Arc::new(0u8);

        registry.track("Session", &session);
        registry.track("Scratch", &scratch);
        assert_eq!(registry.tracked_components(), vec!["Scratch", "Session"]);
        assert_eq!(
            registry.tracked_object::<String>("Session").as_deref(),
            Some(&"s-1".to_string())
        );

        drop(scratch);
        assert!(!registry.is_tracked_alive("Scratch"));
        assert_eq!(registry.prune_tracked(), 1);
        assert_eq!(registry.tracked_components(), vec!["Session"]);
    }

    #[tokio::test]
    async fn test_dispatch_async_falls_back_to_blocking_backend() {
        let (registry, backend) = with_memory();
        registry
            .dispatch_async(record(LogLevel::Fault, "A", "async"))
            .await;
        assert_eq!(backend.messages(), vec!["async"]);
    }

    #[tokio::test]
    async fn test_dispatch_async_without_backend_is_noop() {
        let registry = Registry::new();
        registry
            .dispatch_async(record(LogLevel::Fault, "A", "dropped"))
            .await;
    }

    #[test]
    fn test_registry_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Registry>();
    }
}
