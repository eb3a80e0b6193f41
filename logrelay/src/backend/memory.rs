//! In-memory backend that keeps every delivered record.

use parking_lot::Mutex;

use super::{Backend, OwnedRecord, Record};

/// Backend that stores an owned copy of every record it receives.
///
/// Intended for tests and for embedders that want to inspect what was
/// delivered.
///
/// # Example
///
/// ```
/// use logrelay::backend::MemoryBackend;
/// use logrelay::dispatcher::Dispatcher;
/// use logrelay::registry::Registry;
/// use logrelay::{call_site, LogLevel};
/// use std::sync::Arc;
///
/// let backend = Arc::new(MemoryBackend::new());
/// let registry = Arc::new(Registry::new());
/// registry.install_backend(backend.clone());
///
/// let dispatcher = Dispatcher::with_registry(registry);
/// dispatcher.error("Storage", || "disk full".to_string(), call_site!());
///
/// assert_eq!(backend.messages(), vec!["disk full".to_string()]);
/// assert_eq!(backend.records()[0].level, LogLevel::Error);
/// ```
#[derive(Debug, Default)]
pub struct MemoryBackend {
    records: Mutex<Vec<OwnedRecord>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records received so far, oldest first.
    pub fn records(&self) -> Vec<OwnedRecord> {
        self.records.lock().clone()
    }

    /// Message texts received so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|r| r.message.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Removes and returns all records.
    pub fn take(&self) -> Vec<OwnedRecord> {
        std::mem::take(&mut *self.records.lock())
    }
}

impl Backend for MemoryBackend {
    fn log(&self, record: &Record<'_>) {
        self.records.lock().push(record.to_owned_record());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::CallSite;
    use crate::level::LogLevel;

    #[test]
    fn test_records_in_arrival_order() {
        let backend = MemoryBackend::new();
        let site = CallSite::new("m.rs", "m", 3);

        backend.log(&Record::new(LogLevel::Info, "A", "one", site));
        backend.log(&Record::new(LogLevel::Debug, "B", "two", site));

        assert_eq!(backend.len(), 2);
        assert_eq!(backend.messages(), vec!["one", "two"]);
        assert_eq!(backend.records()[1].component, "B");
    }

    #[test]
    fn test_take_drains() {
        let backend = MemoryBackend::new();
        backend.log(&Record::new(
            LogLevel::Fault,
            "A",
            "x",
            CallSite::new("m.rs", "m", 1),
        ));

        assert_eq!(backend.take().len(), 1);
        assert!(backend.is_empty());
    }
}
