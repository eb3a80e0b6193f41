//! Backend trait definition.

use std::future::Future;
use std::pin::Pin;

use super::record::Record;

/// Future returned by [`Backend::log_async`].
pub type DeliveryFuture<'a> = Pin<Box<dyn Future<Output = ()> + Send + 'a>>;

/// The sink that actually renders or ships filtered messages.
///
/// A registry holds at most one backend. Backends only ever see records that
/// already passed the level and suppression checks, and they must not panic:
/// the logging call site has no way to observe a failure.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; any number of threads may deliver
/// through the same backend concurrently.
///
/// # Example
///
/// ```
/// use logrelay::backend::{Backend, Record};
///
/// struct Stdout;
///
/// impl Backend for Stdout {
///     fn log(&self, record: &Record<'_>) {
///         println!("[{}] {}: {}", record.level, record.component, record.message);
///     }
/// }
/// ```
pub trait Backend: Send + Sync {
    /// Deliver a record, returning once delivery is complete.
    fn log(&self, record: &Record<'_>);

    /// Deliver a record on a path that may suspend.
    ///
    /// The default implementation falls back to [`Backend::log`], so a
    /// backend that only knows how to block still receives every record
    /// exactly once.
    fn log_async<'a>(&'a self, record: Record<'a>) -> DeliveryFuture<'a> {
        Box::pin(async move { self.log(&record) })
    }
}
