//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod awareness;
mod decide;
mod presets;

pub use awareness::Awareness;
pub use decide::Decide;
pub use presets::Presets;

/// Output format shared by every command.
#[derive(Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Summary,
    /// Full JSON output
    Json,
}
