//! logrelay CLI - exercise registry configurations from the shell
//!
//! `emit` sends one message through a registry built from an INI file and
//! flags; `check` reports whether that message would be delivered.

mod commands;
mod error;

use clap::{Parser, Subcommand};

use commands::{check, emit};
use error::CliError;

#[derive(Parser)]
#[command(name = "logrelay")]
#[command(version = logrelay::VERSION)]
#[command(about = "Component-tagged logging through one pluggable backend", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send one message through the configured backend
    Emit(emit::EmitArgs),
    /// Report whether a message would be delivered, and why not
    Check(check::CheckArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Emit(args) => emit::run(args),
        Commands::Check(args) => check::run(args),
    }
}
