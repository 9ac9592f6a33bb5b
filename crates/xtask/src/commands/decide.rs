//! Run the decision engine against a snapshot file.
//!
//! With `--ticks N` the command replays N consecutive ticks against the same
//! world, appending each chosen action to the snapshot history the way the
//! execution layer would. Nothing else in the world changes between ticks,
//! which makes cooldowns and loop breaking easy to watch.

use std::path::PathBuf;

use agent_content::SnapshotLoader;
use agent_core::{AgentConfig, ExternalDirective, WorldSnapshot};
use agent_runtime::{ActionProvider, BehaviorTreeProvider, Decision, DecisionRequest, SeededRng};
use anyhow::{Context, Result};
use clap::Parser;

use super::OutputFormat;
use crate::inputs;

/// Decide the next action(s) for an agent
#[derive(Parser)]
pub struct Decide {
    /// Snapshot JSON file (absolute, relative, or under the data directory)
    #[arg(short, long)]
    snapshot: PathBuf,

    /// Preset name or agent name from the agents file
    #[arg(short, long, default_value = "autoplay")]
    agent: String,

    /// Agents RON file (defaults to agents.ron in the data directory)
    #[arg(long)]
    agents: Option<PathBuf>,

    /// Engine tuning TOML file (defaults to built-in tuning)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// External directive JSON file
    #[arg(short, long)]
    directive: Option<PathBuf>,

    /// Global seed for the decision RNG
    #[arg(long, default_value = "0")]
    seed: u64,

    /// Number of consecutive ticks to simulate
    #[arg(short, long, default_value = "1")]
    ticks: u32,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Decide {
    pub fn execute(self) -> Result<()> {
        let agent = inputs::agent(&self.agent, self.agents.as_deref())?;
        let config = inputs::engine_config(self.config.as_deref())?;

        let snapshot_path = inputs::resolve(&self.snapshot);
        let mut snapshot = SnapshotLoader::load(&snapshot_path)?;

        let directive = self
            .directive
            .as_deref()
            .map(|path| SnapshotLoader::load_directive(&inputs::resolve(path)))
            .transpose()
            .context("Failed to load directive")?;

        let provider = BehaviorTreeProvider::new(config);
        let mut rng = SeededRng::for_agent(self.seed, agent.id);

        if matches!(self.format, OutputFormat::Summary) {
            println!("{}", console::style("Decision Trace").bold().cyan());
            println!("  Snapshot: {}", snapshot_path.display());
            println!("  Agent: {} ({}, {})", self.agent, agent.id, agent.kind);
            println!("  Seed: {}", self.seed);
            println!();
        }

        let mut trace = Vec::with_capacity(self.ticks as usize);
        for tick in 0..self.ticks {
            let decision = decide_once(&provider, &agent, &snapshot, directive.as_ref(), &mut rng);
            apply(&mut snapshot, &decision);

            match self.format {
                OutputFormat::Summary => print_decision(tick, &decision),
                OutputFormat::Json => trace.push(serde_json::json!({
                    "tick": tick,
                    "node": decision.node,
                    "respawn_acknowledged": decision.respawn_acknowledged,
                    "action": decision.action,
                })),
            }
        }

        if matches!(self.format, OutputFormat::Json) {
            println!("{}", serde_json::to_string_pretty(&trace)?);
        }

        Ok(())
    }
}

fn decide_once(
    provider: &BehaviorTreeProvider,
    agent: &AgentConfig,
    snapshot: &WorldSnapshot,
    directive: Option<&ExternalDirective>,
    rng: &mut SeededRng,
) -> Decision {
    let request = DecisionRequest::new(agent, snapshot).with_directive(directive);
    provider.provide_action(&request, rng)
}

/// Stands in for the execution layer between ticks.
fn apply(snapshot: &mut WorldSnapshot, decision: &Decision) {
    let timestamp = snapshot
        .history
        .last()
        .map_or(0, |entry| entry.timestamp + 1);
    snapshot.history.record(decision.action.kind, timestamp);

    if decision.respawn_acknowledged
        && let Some(player) = snapshot.player.as_mut()
    {
        player.just_respawned = false;
    }
}

fn print_decision(tick: u32, decision: &Decision) {
    let action = &decision.action;
    let payload = action
        .payload
        .as_ref()
        .map(|payload| format!(" {payload:?}"))
        .unwrap_or_default();

    println!(
        "  [{:>3}] {:<16} {}{}",
        tick,
        console::style(action.kind.to_string()).bold().green(),
        console::style(format!("via {}", decision.node)).dim(),
        payload,
    );
    if !action.reason.is_empty() {
        println!("        {}", console::style(&action.reason).italic());
    }
    if decision.respawn_acknowledged {
        println!("        {}", console::style("respawn flag acknowledged").yellow());
    }
}
