//! Call-site capture and per-level logging macros.
//!
//! Every logging macro takes a target first:
//!
//! - an expression implementing [`Component`](crate::component::Component)
//!   (usually `self`) for instance-style calls, or
//! - `type SomeType` for type-style calls.
//!
//! The format arguments are wrapped in a closure and only formatted if the
//! message is going to be delivered. The `_async` forms return a future
//! that must be awaited.
//!
//! ```
//! use logrelay::component::Component;
//! use logrelay::{log_debug, log_fault};
//!
//! struct Scheduler;
//! impl Component for Scheduler {}
//!
//! let scheduler = Scheduler;
//! log_debug!(scheduler, "tick {}", 1);
//! log_fault!(type Scheduler, "clock lost");
//! ```

/// Path of the enclosing function, e.g. `my_crate::net::connect`.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __logrelay_here() {}
        fn __logrelay_type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __logrelay_type_name_of(__logrelay_here);
        let mut name = name.strip_suffix("::__logrelay_here").unwrap_or(name);
        while let Some(outer) = name.strip_suffix("::{{closure}}") {
            name = outer;
        }
        name
    }};
}

/// A [`CallSite`](crate::backend::CallSite) for the current location.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::backend::CallSite::new(
            ::std::file!(),
            $crate::function_name!(),
            ::std::line!(),
        )
    };
}

/// Log at an explicit level.
#[macro_export]
macro_rules! log_at {
    (type $ty:ty, $level:expr, $($arg:tt)+) => {
        <$ty as $crate::component::Loggable>::type_log_with(
            $level,
            || ::std::format!($($arg)+),
            $crate::call_site!(),
        )
    };
    ($target:expr, $level:expr, $($arg:tt)+) => {{
        use $crate::component::Loggable as _;
        $target.log_with($level, || ::std::format!($($arg)+), $crate::call_site!())
    }};
}

/// Log at an explicit level on the suspending path. Evaluates to a future.
#[macro_export]
macro_rules! log_at_async {
    (type $ty:ty, $level:expr, $($arg:tt)+) => {
        <$ty as $crate::component::Loggable>::type_log_async_with(
            $level,
            || ::std::format!($($arg)+),
            $crate::call_site!(),
        )
    };
    ($target:expr, $level:expr, $($arg:tt)+) => {{
        use $crate::component::Loggable as _;
        $target.log_async_with($level, || ::std::format!($($arg)+), $crate::call_site!())
    }};
}

#[macro_export]
macro_rules! log_default {
    (type $ty:ty, $($arg:tt)+) => { $crate::log_at!(type $ty, $crate::LogLevel::Default, $($arg)+) };
    ($target:expr, $($arg:tt)+) => { $crate::log_at!($target, $crate::LogLevel::Default, $($arg)+) };
}

#[macro_export]
macro_rules! log_info {
    (type $ty:ty, $($arg:tt)+) => { $crate::log_at!(type $ty, $crate::LogLevel::Info, $($arg)+) };
    ($target:expr, $($arg:tt)+) => { $crate::log_at!($target, $crate::LogLevel::Info, $($arg)+) };
}

#[macro_export]
macro_rules! log_debug {
    (type $ty:ty, $($arg:tt)+) => { $crate::log_at!(type $ty, $crate::LogLevel::Debug, $($arg)+) };
    ($target:expr, $($arg:tt)+) => { $crate::log_at!($target, $crate::LogLevel::Debug, $($arg)+) };
}

#[macro_export]
macro_rules! log_error {
    (type $ty:ty, $($arg:tt)+) => { $crate::log_at!(type $ty, $crate::LogLevel::Error, $($arg)+) };
    ($target:expr, $($arg:tt)+) => { $crate::log_at!($target, $crate::LogLevel::Error, $($arg)+) };
}

#[macro_export]
macro_rules! log_fault {
    (type $ty:ty, $($arg:tt)+) => { $crate::log_at!(type $ty, $crate::LogLevel::Fault, $($arg)+) };
    ($target:expr, $($arg:tt)+) => { $crate::log_at!($target, $crate::LogLevel::Fault, $($arg)+) };
}

#[macro_export]
macro_rules! log_default_async {
    (type $ty:ty, $($arg:tt)+) => { $crate::log_at_async!(type $ty, $crate::LogLevel::Default, $($arg)+) };
    ($target:expr, $($arg:tt)+) => { $crate::log_at_async!($target, $crate::LogLevel::Default, $($arg)+) };
}

#[macro_export]
macro_rules! log_info_async {
    (type $ty:ty, $($arg:tt)+) => { $crate::log_at_async!(type $ty, $crate::LogLevel::Info, $($arg)+) };
    ($target:expr, $($arg:tt)+) => { $crate::log_at_async!($target, $crate::LogLevel::Info, $($arg)+) };
}

#[macro_export]
macro_rules! log_debug_async {
    (type $ty:ty, $($arg:tt)+) => { $crate::log_at_async!(type $ty, $crate::LogLevel::Debug, $($arg)+) };
    ($target:expr, $($arg:tt)+) => { $crate::log_at_async!($target, $crate::LogLevel::Debug, $($arg)+) };
}

#[macro_export]
macro_rules! log_error_async {
    (type $ty:ty, $($arg:tt)+) => { $crate::log_at_async!(type $ty, $crate::LogLevel::Error, $($arg)+) };
    ($target:expr, $($arg:tt)+) => { $crate::log_at_async!($target, $crate::LogLevel::Error, $($arg)+) };
}

#[macro_export]
macro_rules! log_fault_async {
    (type $ty:ty, $($arg:tt)+) => { $crate::log_at_async!(type $ty, $crate::LogLevel::Fault, $($arg)+) };
    ($target:expr, $($arg:tt)+) => { $crate::log_at_async!($target, $crate::LogLevel::Fault, $($arg)+) };
}
