//! World snapshot and directive loader.

use std::path::Path;

use agent_core::{ExternalDirective, WorldSnapshot};

use crate::loaders::{LoadResult, read_file};

/// Loader for JSON snapshots captured from the world layer.
pub struct SnapshotLoader;

impl SnapshotLoader {
    pub fn load(path: &Path) -> LoadResult<WorldSnapshot> {
        let content = read_file(path)?;
        serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse snapshot JSON at {}: {}", path.display(), e))
    }

    pub fn load_directive(path: &Path) -> LoadResult<ExternalDirective> {
        let content = read_file(path)?;
        serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse directive JSON at {}: {}", path.display(), e))
    }
}
