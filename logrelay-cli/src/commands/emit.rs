//! Emit command - send one message through a configured registry.

use std::sync::Arc;

use clap::Args;
use logrelay::{call_site, Dispatcher, LogLevel};

use super::common::RegistryArgs;
use crate::error::CliError;

/// Arguments for the emit command.
#[derive(Debug, Args)]
pub struct EmitArgs {
    /// Component the message is logged on behalf of
    #[arg(long)]
    pub component: String,

    /// Severity of the message
    #[arg(long, default_value = "default")]
    pub level: LogLevel,

    /// Deliver through the async path
    #[arg(long = "async")]
    pub use_async: bool,

    #[command(flatten)]
    pub registry: RegistryArgs,

    /// Message text
    pub message: String,
}

/// Run the emit command.
pub fn run(args: EmitArgs) -> Result<(), CliError> {
    if args.component.trim().is_empty() {
        return Err(CliError::Usage("--component must not be empty".to_string()));
    }

    let registry = Arc::new(args.registry.build_registry()?);
    let dispatcher = Dispatcher::with_registry(registry);
    let message = args.message;

    if args.use_async {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .map_err(CliError::Runtime)?;
        runtime.block_on(dispatcher.log_async(
            args.level,
            &args.component,
            move || message,
            call_site!(),
        ));
    } else {
        dispatcher.log(args.level, &args.component, move || message, call_site!());
    }

    tracing::debug!(component = %args.component, level = %args.level, "emit finished");
    Ok(())
}
