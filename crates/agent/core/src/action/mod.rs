//! Actions an agent can intend, and the record of the ones it took.
//!
//! The engine emits exactly one [`Action`] per tick. It does not execute it;
//! the execution layer applies the action to the world, appends an entry to
//! the agent's [`ActionHistory`] and narrates it into the log.

mod directive;
mod history;

pub use directive::ExternalDirective;
pub use history::{ActionHistory, ActionHistoryEntry, HISTORY_CAPACITY};

use crate::world::{CapabilityId, EntityId, ItemId, PlotId, RecipeId};

/// Closed set of action types the engine can emit.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionKind {
    // ========================================================================
    // Survival
    // ========================================================================
    /// Return to life after death.
    Respawn,
    /// Consume a healing item.
    Heal,
    /// Consume a calming item.
    ReduceStress,

    // ========================================================================
    // Base camp
    // ========================================================================
    /// Collect a ready resource plot.
    Harvest,
    /// Craft a recipe whose ingredients are all in inventory.
    Craft,

    // ========================================================================
    // Equipment
    // ========================================================================
    EquipWeapon,
    EquipArmor,

    // ========================================================================
    // Combat
    // ========================================================================
    /// Use a known capability (spell, technique) against a target.
    CastCapability,
    /// Plain attack against a target.
    Engage,

    // ========================================================================
    // Items and economy
    // ========================================================================
    Loot,
    Sell,
    Buy,

    // ========================================================================
    // Reconnaissance
    // ========================================================================
    /// Survey the current location.
    Scan,
    /// Ask an oracle a question.
    Inquire,
    /// Commune with an oracle.
    Commune,

    // ========================================================================
    // Movement and fallback
    // ========================================================================
    /// Travel through an exit. Flight is expressed as a move.
    Move,
    /// Do nothing this tick.
    Idle,
}

/// Exit directions out of a location.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Up,
    Down,
}

/// Optional argument carried by an action.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Payload {
    Direction(Direction),
    Item(ItemId),
    Capability { id: CapabilityId, target: Option<EntityId> },
    Target(EntityId),
    Plot(PlotId),
    Recipe(RecipeId),
}

/// The single output of a tick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    pub kind: ActionKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub payload: Option<Payload>,
    /// Human-readable explanation, for logs and tests.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reason: String,
}

impl Action {
    pub fn new(kind: ActionKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            payload: None,
            reason: reason.into(),
        }
    }

    /// Attaches a payload (builder pattern).
    #[must_use]
    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn idle(reason: impl Into<String>) -> Self {
        Self::new(ActionKind::Idle, reason)
    }

    /// A `move` through the exit in `direction`.
    pub fn travel(direction: Direction, reason: impl Into<String>) -> Self {
        Self::new(ActionKind::Move, reason).with_payload(Payload::Direction(direction))
    }

    /// Direction carried by a `move`, if any.
    pub fn direction(&self) -> Option<Direction> {
        match self.payload {
            Some(Payload::Direction(direction)) => Some(direction),
            _ => None,
        }
    }

    /// Target carried by an `engage` or `cast_capability`, if any.
    pub fn target(&self) -> Option<EntityId> {
        match self.payload {
            Some(Payload::Target(id)) => Some(id),
            Some(Payload::Capability { target, .. }) => target,
            _ => None,
        }
    }
}
