//! Read-only view of the world handed to the engine each tick.
//!
//! The world simulation owns the real state; it builds a [`WorldSnapshot`]
//! per tick and shares it (by reference) with every agent that evaluates on
//! that tick. The engine never mutates or retains it.

mod actor;
mod location;
mod quest;

use std::collections::BTreeMap;

pub use actor::{ActorState, CapabilityId, EntityId, Item, ItemId, ItemKind};
pub use location::{
    BaseCamp, Disposition, Exit, Hazard, Location, LocationId, Occupant, Offer, PlotId, Recipe,
    RecipeId, ResourcePlot, Vendor,
};
pub use quest::{Quest, QuestId, QuestKind};

use crate::action::ActionHistory;

/// A line of narrated history.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    pub tick: u64,
    pub text: String,
}

impl LogEntry {
    pub fn new(tick: u64, text: impl Into<String>) -> Self {
        Self {
            tick,
            text: text.into(),
        }
    }
}

/// Everything an agent may look at during one tick.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldSnapshot {
    /// The actor this agent controls.
    pub player: Option<ActorState>,
    /// Where that actor currently stands.
    pub location: Option<Location>,
    /// Previously explored locations, keyed by id.
    pub explored: BTreeMap<LocationId, Location>,
    /// Recent narrated events, oldest first.
    pub log: Vec<LogEntry>,
    pub quests: Vec<Quest>,
    /// Structured record of the agent's recent actions.
    pub history: ActionHistory,
}

impl WorldSnapshot {
    pub fn new(player: ActorState, location: Location) -> Self {
        Self {
            player: Some(player),
            location: Some(location),
            ..Self::default()
        }
    }

    /// Adds a previously explored location (builder pattern).
    #[must_use]
    pub fn with_explored(mut self, location: Location) -> Self {
        self.explored.insert(location.id, location);
        self
    }

    /// Appends a narrated line (builder pattern).
    #[must_use]
    pub fn with_log(mut self, tick: u64, text: impl Into<String>) -> Self {
        self.log.push(LogEntry::new(tick, text));
        self
    }

    #[must_use]
    pub fn with_quest(mut self, quest: Quest) -> Self {
        self.quests.push(quest);
        self
    }

    #[must_use]
    pub fn with_history(mut self, history: ActionHistory) -> Self {
        self.history = history;
        self
    }

    /// Looks up an explored location.
    pub fn explored(&self, id: LocationId) -> Option<&Location> {
        self.explored.get(&id)
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use crate::{ActionKind, Direction, ItemKind};

    #[test]
    fn sparse_json_snapshot_fills_defaults() {
        let json = r#"{
            "player": { "hp": 12, "max_hp": 40, "inventory": [{ "id": "tonic", "kind": "healing" }] },
            "location": {
                "id": 3,
                "name": "well",
                "exits": [{ "direction": "down" }],
                "hazards": ["toxic seep"]
            },
            "history": [{ "kind": "scan", "timestamp": 9 }]
        }"#;
        let snapshot: WorldSnapshot = serde_json::from_str(json).unwrap();

        let player = snapshot.player.unwrap();
        assert_eq!(player.max_stress, 100);
        assert_eq!(player.inventory[0].kind, ItemKind::Healing);
        assert_eq!(player.inventory[0].quantity, 1);

        let location = snapshot.location.unwrap();
        assert!(location.exits[0].open);
        assert_eq!(location.exits[0].direction, Direction::Down);
        assert!(location.is_dangerous());

        assert_eq!(snapshot.history.last().map(|e| e.kind), Some(ActionKind::Scan));
        assert!(snapshot.explored.is_empty());
    }
}
