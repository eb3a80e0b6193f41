//! logrelay - component-tagged logging with one pluggable backend
//!
//! Callers emit leveled messages on behalf of a named component. The
//! [`registry`] decides whether a message is wanted (threshold, per-component
//! suppression, backend present); the [`dispatcher`] builds the message only
//! when it is, and hands it to the single installed [`backend`].
//!
//! # Quick start
//!
//! ```
//! use logrelay::backend::ConsoleBackend;
//! use logrelay::component::Component;
//! use logrelay::{log_debug, log_error, registry, LogLevel};
//! use std::sync::Arc;
//!
//! struct Downloader;
//! impl Component for Downloader {}
//!
//! let registry = registry::current();
//! registry.install_backend(Arc::new(ConsoleBackend::new()));
//! registry.set_minimum_level(LogLevel::Error);
//!
//! let downloader = Downloader;
//! log_debug!(downloader, "never formatted");
//! log_error!(downloader, "timed out after {}s", 30);
//! ```

pub mod backend;
pub mod component;
pub mod config;
pub mod dispatcher;
pub mod level;
pub mod logging;
mod macros;
pub mod registry;
pub mod tracking;

pub use backend::{Backend, CallSite, Record};
pub use component::{Component, Loggable};
pub use dispatcher::Dispatcher;
pub use level::LogLevel;
pub use registry::Registry;

/// Version of the logrelay library and CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
