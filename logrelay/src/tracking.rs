//! Weak object tracking for liveness diagnostics.
//!
//! The tracker maps a component name to a [`Weak`] handle on some object the
//! component cares about. It never keeps an object alive. Entries whose
//! referent has been dropped are discarded whenever a new entry is added, or
//! on an explicit [`ObjectTracker::prune`].

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, Weak};

type TrackedRef = Weak<dyn Any + Send + Sync>;

/// Component name → non-owning object reference.
#[derive(Default)]
pub struct ObjectTracker {
    entries: HashMap<String, TrackedRef>,
}

impl ObjectTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a weak reference to `object` under `component`.
    ///
    /// Dead entries are pruned first. An existing entry for the same
    /// component is replaced.
    pub fn track<T>(&mut self, component: impl Into<String>, object: &Arc<T>)
    where
        T: Any + Send + Sync,
    {
        self.prune();
        let weak: Weak<T> = Arc::downgrade(object);
        let weak: TrackedRef = weak;
        self.entries.insert(component.into(), weak);
    }

    /// Drop entries whose referent no longer exists. Returns how many went.
    pub fn prune(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, weak| weak.strong_count() > 0);
        before - self.entries.len()
    }

    /// Returns true if `component` is tracked and its object is still alive.
    pub fn is_alive(&self, component: &str) -> bool {
        self.entries
            .get(component)
            .is_some_and(|weak| weak.strong_count() > 0)
    }

    /// Upgrade the tracked object for `component`, if alive and of type `T`.
    pub fn get<T>(&self, component: &str) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        self.entries
            .get(component)?
            .upgrade()?
            .downcast::<T>()
            .ok()
    }

    /// Names of components whose objects are still alive, sorted.
    pub fn live_components(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, weak)| weak.strong_count() > 0)
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        names
    }

    /// Number of entries, including dead ones not yet pruned.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for ObjectTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectTracker")
            .field("entries", &self.entries.len())
            .field("live", &self.live_components())
            .finish()
    }
}
