//! The process-wide registry and how call sites find a registry.
//!
//! A default registry is created on first use. [`swap_instance`] replaces it
//! atomically; anything resolving through [`RegistrySource::Current`] sees
//! the replacement on its next call. Code that must stay isolated (parallel
//! tests, embedded subsystems) uses [`RegistrySource::Fixed`] instead.

use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use super::Registry;

static CURRENT: OnceLock<RwLock<Arc<Registry>>> = OnceLock::new();

fn slot() -> &'static RwLock<Arc<Registry>> {
    CURRENT.get_or_init(|| RwLock::new(Arc::new(Registry::new())))
}

/// The current process-wide registry.
pub fn current() -> Arc<Registry> {
    slot().read().clone()
}

/// Replace the process-wide registry, returning the previous one.
///
/// Meant for test isolation and startup wiring, not for reconfiguring a
/// loaded system: in-flight calls keep the instance they already resolved.
pub fn swap_instance(registry: Arc<Registry>) -> Arc<Registry> {
    std::mem::replace(&mut *slot().write(), registry)
}

/// Where a dispatcher looks up its registry.
#[derive(Debug, Clone, Default)]
pub enum RegistrySource {
    /// Resolve the process-wide registry at every call
    #[default]
    Current,
    /// Always use this registry
    Fixed(Arc<Registry>),
}

impl RegistrySource {
    /// The registry to use for one call.
    pub fn resolve(&self) -> Arc<Registry> {
        match self {
            Self::Current => current(),
            Self::Fixed(registry) => Arc::clone(registry),
        }
    }
}

impl From<Arc<Registry>> for RegistrySource {
    fn from(registry: Arc<Registry>) -> Self {
        Self::Fixed(registry)
    }
}
