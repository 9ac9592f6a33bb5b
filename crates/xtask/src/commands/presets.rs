//! List built-in presets and agents defined in a RON file.

use std::collections::BTreeMap;
use std::path::PathBuf;

use agent_content::AgentLoader;
use agent_core::{AgentConfig, AgentId};
use agent_runtime::Preset;
use anyhow::Result;
use clap::Parser;

use super::OutputFormat;
use crate::inputs;

/// Show available agent definitions
#[derive(Parser)]
pub struct Presets {
    /// Also list agents from this RON file (defaults to agents.ron in the data directory)
    #[arg(long)]
    agents: Option<PathBuf>,

    /// Skip file-defined agents
    #[arg(long)]
    builtin_only: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Presets {
    pub fn execute(self) -> Result<()> {
        let mut agents: BTreeMap<String, AgentConfig> = Preset::all()
            .map(|preset| (preset.to_string(), preset.config(AgentId::PLAYER)))
            .collect();
        let builtin = agents.len();

        if !self.builtin_only {
            let path = self
                .agents
                .as_deref()
                .map(inputs::resolve)
                .unwrap_or_else(|| inputs::data_dir().join("agents.ron"));
            if path.exists() || self.agents.is_some() {
                for (name, config) in AgentLoader::load(&path)? {
                    if agents.contains_key(&name) {
                        tracing::warn!(agent = %name, "file-defined agent shadows a preset; skipped");
                        continue;
                    }
                    agents.insert(name, config);
                }
            }
        }

        match self.format {
            OutputFormat::Summary => print_summary(&agents, builtin),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&agents)?),
        }

        Ok(())
    }
}

fn print_summary(agents: &BTreeMap<String, AgentConfig>, builtin: usize) {
    println!("{}", console::style("Agents").bold().cyan());
    println!("  {} presets, {} from file\n", builtin, agents.len() - builtin);

    for (name, agent) in agents {
        let tag = if Preset::parse(name).is_ok() { "preset" } else { "file" };
        println!(
            "{} {}",
            console::style(name).bold(),
            console::style(format!("({}, {})", agent.kind, tag)).dim()
        );

        let capabilities: Vec<&str> = agent.capabilities.iter_names().map(|(n, _)| n).collect();
        println!("  capabilities: {}", capabilities.join(" | "));

        let t = &agent.traits;
        println!(
            "  traits: aggression {:.2}  curiosity {:.2}  caution {:.2}  resourcefulness {:.2}  mysticism {:.2}",
            t.aggression, t.curiosity, t.caution, t.resourcefulness, t.mysticism
        );
    }
}
