//! Shared input resolution for commands.
//!
//! Paths given on the command line win; otherwise files are looked up in
//! `AGENT_DATA_DIR`, then in the bundled content data directory.

use std::path::{Path, PathBuf};

use agent_content::{AgentLoader, ConfigLoader};
use agent_core::{AgentConfig, AgentId, EngineConfig};
use agent_runtime::Preset;
use anyhow::{Context, Result};

/// Root directory for default data files.
pub fn data_dir() -> PathBuf {
    std::env::var_os("AGENT_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(agent_content::data_dir)
}

/// Resolves a file argument: as given if it exists, else relative to the
/// data directory.
pub fn resolve(path: &Path) -> PathBuf {
    if path.exists() {
        return path.to_path_buf();
    }
    let candidate = data_dir().join(path);
    if candidate.exists() { candidate } else { path.to_path_buf() }
}

/// Engine tuning from `path`, or defaults.
pub fn engine_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => ConfigLoader::load(&resolve(path)),
        None => Ok(EngineConfig::default()),
    }
}

/// Looks an agent up by preset name, then in the agents file.
pub fn agent(name: &str, agents_file: Option<&Path>) -> Result<AgentConfig> {
    if let Ok(preset) = Preset::parse(name) {
        return Ok(preset.config(AgentId::PLAYER));
    }

    let path = agents_file
        .map(resolve)
        .unwrap_or_else(|| data_dir().join("agents.ron"));
    let agents = AgentLoader::load(&path)?;
    agents.get(name).copied().with_context(|| {
        let known: Vec<&str> = agents.keys().map(String::as_str).collect();
        format!(
            "unknown agent `{}`: not a preset and not in {} (known: {})",
            name,
            path.display(),
            known.join(", ")
        )
    })
}
