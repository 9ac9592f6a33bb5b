//! Development tasks for the agent decision engine
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`
//!
//! Set `RUST_LOG=agent_runtime=debug` to trace every decision.

mod commands;
mod inputs;

use anyhow::Result;
use clap::Parser;
use commands::{Awareness, Decide, Presets};

/// Development tasks for the agent decision engine
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for the agent decision engine", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Run the decision engine against a snapshot file
    Decide(Decide),

    /// Print the awareness record derived from a snapshot file
    Awareness(Awareness),

    /// List built-in presets and file-defined agents
    Presets(Presets),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for AGENT_DATA_DIR and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Decide(cmd) => cmd.execute(),
        Command::Awareness(cmd) => cmd.execute(),
        Command::Presets(cmd) => cmd.execute(),
    }
}
