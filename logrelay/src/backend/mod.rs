//! Backend abstraction layer.
//!
//! A backend is the one sink that renders or ships messages after the
//! registry has filtered them. Application code never talks to a backend
//! directly; it goes through the [`Dispatcher`](crate::dispatcher::Dispatcher),
//! and the registry forwards whatever passes.
//!
//! # Architecture
//!
//! - `Backend` trait: blocking `log` plus a suspending `log_async` that
//!   falls back to `log` unless overridden
//! - `TracingBackend`: production adapter that delegates to the `tracing` crate
//! - `ConsoleBackend`: marker-prefixed lines on stderr
//! - `MemoryBackend`: keeps records for inspection
//! - `NoOpBackend`: discards everything

mod console;
mod memory;
mod noop;
mod record;
mod tracing_adapter;
mod r#trait;

pub use console::ConsoleBackend;
pub use memory::MemoryBackend;
pub use noop::NoOpBackend;
pub use r#trait::{Backend, DeliveryFuture};
pub use record::{CallSite, OwnedRecord, Record};
pub use tracing_adapter::TracingBackend;
