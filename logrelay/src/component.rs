//! Component identity for logging participants.
//!
//! A type opts in by implementing [`Component`]. Its type-level name tags
//! type-style calls; its instance name (the type-level name unless
//! overridden) tags instance-style calls. [`Loggable`] is implemented for
//! every component and carries the logging methods the macros expand to.
//!
//! # Example
//!
//! ```
//! use logrelay::backend::MemoryBackend;
//! use logrelay::component::Component;
//! use logrelay::dispatcher::Dispatcher;
//! use logrelay::registry::Registry;
//! use logrelay::{log_error, log_info};
//! use std::sync::Arc;
//!
//! struct Uploader {
//!     dispatcher: Dispatcher,
//! }
//!
//! impl Component for Uploader {
//!     fn dispatcher(&self) -> Dispatcher {
//!         self.dispatcher.clone()
//!     }
//! }
//!
//! impl Uploader {
//!     fn upload(&self, bytes: usize) {
//!         log_info!(self, "uploading {} bytes", bytes);
//!         log_error!(self, "upload failed");
//!     }
//! }
//!
//! let registry = Arc::new(Registry::new());
//! let backend = Arc::new(MemoryBackend::new());
//! registry.install_backend(backend.clone());
//!
//! let uploader = Uploader { dispatcher: Dispatcher::with_registry(registry) };
//! uploader.upload(512);
//!
//! let records = backend.records();
//! assert_eq!(records[0].component, "Uploader");
//! assert_eq!(records[0].message, "uploading 512 bytes");
//! ```

use std::borrow::Cow;
use std::future::Future;

use crate::backend::CallSite;
use crate::dispatcher::Dispatcher;
use crate::level::LogLevel;

/// Unqualified name of `T` without generic arguments.
///
/// `my_crate::net::Pool<u8>` becomes `Pool`.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// A participant in logging with a stable identity.
pub trait Component: Sized {
    /// Identity used by type-style calls.
    fn component_name() -> Cow<'static, str> {
        Cow::Borrowed(short_type_name::<Self>())
    }

    /// Identity used by instance-style calls.
    fn instance_name(&self) -> Cow<'_, str> {
        Self::component_name()
    }

    /// Dispatcher used by type-style calls.
    fn type_dispatcher() -> Dispatcher {
        Dispatcher::current()
    }

    /// Dispatcher used by instance-style calls.
    fn dispatcher(&self) -> Dispatcher {
        Self::type_dispatcher()
    }
}

/// Logging methods available on every [`Component`].
pub trait Loggable: Component {
    /// Instance-style log call.
    fn log_with<F, M>(&self, level: LogLevel, message: F, call_site: CallSite<'_>)
    where
        F: FnOnce() -> M,
        M: AsRef<str>,
    {
        let name = self.instance_name();
        self.dispatcher().log(level, &name, message, call_site);
    }

    /// Instance-style log call on the suspending path.
    fn log_async_with<F, M>(
        &self,
        level: LogLevel,
        message: F,
        call_site: CallSite<'_>,
    ) -> impl Future<Output = ()> + Send
    where
        Self: Sync,
        F: FnOnce() -> M + Send,
        M: AsRef<str> + Send,
    {
        async move {
            let name = self.instance_name();
            self.dispatcher()
                .log_async(level, &name, message, call_site)
                .await;
        }
    }

    /// Unmute this instance's component.
    fn allow_logging(&self) {
        self.dispatcher().allow_logging(&self.instance_name());
    }

    /// Mute this instance's component.
    fn disable_logging(&self) {
        self.dispatcher().disable_logging(&self.instance_name());
    }

    /// Type-style log call.
    fn type_log_with<F, M>(level: LogLevel, message: F, call_site: CallSite<'_>)
    where
        F: FnOnce() -> M,
        M: AsRef<str>,
    {
        let name = Self::component_name();
        Self::type_dispatcher().log(level, &name, message, call_site);
    }

    /// Type-style log call on the suspending path.
    fn type_log_async_with<F, M>(
        level: LogLevel,
        message: F,
        call_site: CallSite<'_>,
    ) -> impl Future<Output = ()> + Send
    where
        F: FnOnce() -> M + Send,
        M: AsRef<str> + Send,
    {
        async move {
            let name = Self::component_name();
            Self::type_dispatcher()
                .log_async(level, &name, message, call_site)
                .await;
        }
    }

    /// Unmute this type's component.
    fn type_allow_logging() {
        Self::type_dispatcher().allow_logging(&Self::component_name());
    }

    /// Mute this type's component.
    fn type_disable_logging() {
        Self::type_dispatcher().disable_logging(&Self::component_name());
    }
}

impl<T: Component> Loggable for T {}
