//! No-operation backend implementation.

use super::{Backend, Record};

/// A backend that discards all records.
///
/// Useful for:
/// - Benchmarks where delivery overhead should be eliminated
/// - Claiming the backend slot so nothing else can be installed later
///
/// # Example
///
/// ```
/// use logrelay::backend::NoOpBackend;
/// use logrelay::registry::Registry;
/// use std::sync::Arc;
///
/// let registry = Registry::new();
/// assert!(registry.install_backend(Arc::new(NoOpBackend)));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpBackend;

impl Backend for NoOpBackend {
    #[inline]
    fn log(&self, _record: &Record<'_>) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::CallSite;
    use crate::level::LogLevel;

    #[test]
    fn test_noop_backend_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NoOpBackend>();
    }

    #[test]
    fn test_noop_backend_as_trait_object() {
        let backend: Box<dyn Backend> = Box::new(NoOpBackend);
        let record = Record::new(
            LogLevel::Fault,
            "Test",
            "discarded",
            CallSite::new(file!(), "tests", line!()),
        );
        backend.log(&record);
    }

    #[test]
    fn test_noop_backend_debug_impl() {
        assert_eq!(format!("{:?}", NoOpBackend), "NoOpBackend");
    }
}
