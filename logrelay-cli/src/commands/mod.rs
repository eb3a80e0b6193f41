//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`check`] - Report whether a message would be delivered
//! - [`emit`] - Send one message through a configured registry

pub mod check;
pub mod common;
pub mod emit;
