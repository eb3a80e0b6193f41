//! Check command - report whether a message would be delivered.

use clap::Args;
use logrelay::{LogLevel, Registry};

use super::common::RegistryArgs;
use crate::error::CliError;

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Component to check
    #[arg(long)]
    pub component: String,

    /// Severity to check
    #[arg(long, default_value = "default")]
    pub level: LogLevel,

    #[command(flatten)]
    pub registry: RegistryArgs,
}

/// Why a message would or would not reach the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Deliver,
    NoBackend,
    Suppressed,
    BelowThreshold { threshold: LogLevel },
}

impl Verdict {
    /// Evaluate in the same order the dispatcher filters.
    pub fn evaluate(registry: &Registry, level: LogLevel, component: &str) -> Self {
        if !registry.has_backend() {
            return Verdict::NoBackend;
        }
        if registry.is_suppressed(component) {
            return Verdict::Suppressed;
        }
        let threshold = registry.minimum_level();
        if !level.passes(threshold) {
            return Verdict::BelowThreshold { threshold };
        }
        Verdict::Deliver
    }

    pub fn describe(&self) -> String {
        match self {
            Verdict::Deliver => "deliver".to_string(),
            Verdict::NoBackend => "drop: no backend installed".to_string(),
            Verdict::Suppressed => "drop: component is suppressed".to_string(),
            Verdict::BelowThreshold { threshold } => {
                format!("drop: less severe than threshold '{}'", threshold)
            }
        }
    }
}

/// Run the check command.
pub fn run(args: CheckArgs) -> Result<(), CliError> {
    let registry = args.registry.build_registry()?;
    let verdict = Verdict::evaluate(&registry, args.level, &args.component);
    println!("{}", verdict.describe());
    Ok(())
}
