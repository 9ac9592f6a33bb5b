//! Data-driven inputs for the decision engine.
//!
//! Loaders for the files the engine is configured and exercised with:
//! - Engine tuning (TOML)
//! - Agent definitions (RON)
//! - World snapshots and directives (JSON)
//!
//! All loaders deserialize agent-core types directly and validate them before
//! handing them out. The engine itself never touches the filesystem.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{AgentLoader, ConfigLoader, LoadResult, SnapshotLoader};

/// Directory holding the bundled sample data.
pub fn data_dir() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}
