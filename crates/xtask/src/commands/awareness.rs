//! Print the awareness record the engine derives from a snapshot.

use std::path::PathBuf;

use agent_content::SnapshotLoader;
use agent_core::ActionKind;
use agent_runtime::{Awareness as Record, ExitClass, compute_awareness};
use anyhow::{Result, anyhow};
use clap::Parser;

use super::OutputFormat;
use crate::inputs;

/// Inspect derived awareness for a snapshot
#[derive(Parser)]
pub struct Awareness {
    /// Snapshot JSON file (absolute, relative, or under the data directory)
    #[arg(short, long)]
    snapshot: PathBuf,

    /// Engine tuning TOML file (defaults to built-in tuning)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Last action to assume when the snapshot carries no history (e.g. `scan`)
    #[arg(long)]
    hint: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Awareness {
    pub fn execute(self) -> Result<()> {
        let config = inputs::engine_config(self.config.as_deref())?;
        let snapshot = SnapshotLoader::load(&inputs::resolve(&self.snapshot))?;

        let hint = self
            .hint
            .as_deref()
            .map(|name| {
                name.parse::<ActionKind>()
                    .map_err(|_| anyhow!("unknown action kind `{}`", name))
            })
            .transpose()?;

        let awareness = compute_awareness(&snapshot, hint, &config);

        match self.format {
            OutputFormat::Summary => print_summary(&awareness),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&awareness)?),
        }

        Ok(())
    }
}

fn print_summary(awareness: &Record) {
    println!("{}", console::style("Awareness").bold().cyan());

    if !awareness.has_world {
        println!("  {}", console::style("no player or location in snapshot").yellow());
        return;
    }

    println!("\n{}", console::style("Vitals").bold());
    println!("  HP ratio: {:.2}", awareness.hp_ratio);
    println!("  Stress ratio: {:.2}", awareness.stress_ratio);
    if awareness.is_dead {
        println!("  {}", console::style("dead").red().bold());
    }
    if awareness.just_respawned {
        println!("  {}", console::style("just respawned").yellow());
    }

    println!("\n{}", console::style("Threats").bold());
    println!("  Hostiles: {}", awareness.hostile_count);
    for hostile in &awareness.hostiles {
        let marker = if awareness.primary_target == Some(hostile.id) { "*" } else { " " };
        println!(
            "  {} #{} {} hp {}/{} at {}",
            marker, hostile.id.0, hostile.tag, hostile.hp, hostile.max_hp, hostile.distance
        );
    }
    println!("  In combat: {}", awareness.in_combat);
    println!("  Recently damaged: {}", awareness.recently_damaged);
    println!("  In danger: {} ({} hazards)", awareness.in_danger, awareness.hazard_count);

    println!("\n{}", console::style("Exits").bold());
    for (label, class) in [
        ("available", ExitClass::Available),
        ("unvisited", ExitClass::Unvisited),
        ("safe", ExitClass::Safe),
        ("base camp", ExitClass::BaseCamp),
        ("known", ExitClass::Known),
    ] {
        let exits: Vec<&str> = awareness.exits(class).iter().map(|d| d.as_ref()).collect();
        println!("  {:<10} [{}]", label, exits.join(", "));
    }

    println!("\n{}", console::style("Inventory").bold());
    println!("  Currency: {}", awareness.currency);
    println!("  Items: {}", awareness.inventory_size);
    if let Some(item) = &awareness.healing_item {
        println!("  Healing: {}", item.0);
    }
    if let Some(item) = &awareness.calming_item {
        println!("  Calming: {}", item.0);
    }
    if awareness.has_equipment_gap() {
        println!("  {}", console::style("equipment slot empty with gear in pack").yellow());
    }

    println!("\n{}", console::style("History").bold());
    let history: Vec<&str> = awareness.history.iter().map(|k| k.as_ref()).collect();
    println!("  Recent: [{}]", history.join(", "));
    println!("  Recently scanned: {}", awareness.recently_scanned);

    if !awareness.quests.is_empty() {
        println!("\n{}", console::style("Quests").bold());
        for quest in &awareness.quests {
            println!("  #{} {} {:.0}%", quest.id.0, quest.kind, quest.ratio * 100.0);
        }
    }
}
