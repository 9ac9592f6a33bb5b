//! Agent definition loader.
//!
//! File format: `BTreeMap<String, AgentConfig>`
//!
//! ```ron
//! {
//!     "scout": (
//!         id: 4,
//!         kind: npc,
//!         capabilities: "AWARENESS | EXPLORE | FLEE",
//!         traits: (curiosity: 0.9, caution: 0.7),
//!     ),
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use agent_core::AgentConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for named agent definitions from RON files.
pub struct AgentLoader;

impl AgentLoader {
    /// Load every agent in the file, validating trait dials.
    pub fn load(path: &Path) -> LoadResult<BTreeMap<String, AgentConfig>> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| e.context(format!("in {}", path.display())))
    }

    pub fn parse(content: &str) -> LoadResult<BTreeMap<String, AgentConfig>> {
        let agents: BTreeMap<String, AgentConfig> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse agents RON: {}", e))?;

        for (name, agent) in &agents {
            agent
                .traits
                .validate()
                .map_err(|e| anyhow::anyhow!("agent `{}`: {}", name, e))?;
        }

        Ok(agents)
    }
}

#[cfg(test)]
mod tests {
    use agent_core::{AgentId, AgentKind, Capabilities};

    use super::*;

    #[test]
    fn parses_capability_expressions() {
        let agents = AgentLoader::parse(
            r#"{
                "scout": (
                    id: 4,
                    kind: npc,
                    capabilities: "AWARENESS | EXPLORE | FLEE",
                    traits: (curiosity: 0.9, caution: 0.7),
                ),
            }"#,
        )
        .unwrap();

        let scout = &agents["scout"];
        assert_eq!(scout.id, AgentId(4));
        assert_eq!(scout.kind, AgentKind::Npc);
        assert!(scout.can(Capabilities::EXPLORE | Capabilities::FLEE));
        assert!(!scout.can(Capabilities::COMBAT));
        assert!((scout.traits.curiosity - 0.9).abs() < 1e-6);
        assert_eq!(scout.traits.aggression, 0.5);
    }

    #[test]
    fn out_of_range_trait_names_the_agent() {
        let err = AgentLoader::parse(r#"{ "berserker": (id: 1, kind: npc, traits: (aggression: 3.0)) }"#)
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("berserker"), "{message}");
        assert!(message.contains("aggression"), "{message}");
    }

    #[test]
    fn bundled_agents_load() {
        let agents = AgentLoader::load(&crate::data_dir().join("agents.ron")).unwrap();
        assert!(agents.contains_key("rival"));
        assert!(agents["rival"].can(Capabilities::RIVAL));
    }
}
