//! Immutable per-agent definitions.

use crate::{Capabilities, TraitProfile};

/// Unique identifier for an agent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AgentId(pub u32);

impl AgentId {
    /// The player's own autoplay agent.
    pub const PLAYER: AgentId = AgentId(0);
}

impl core::fmt::Display for AgentId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "agent#{}", self.0)
    }
}

/// What kind of actor the agent drives.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AgentKind {
    /// The player's autoplay mode.
    #[default]
    Player,
    /// An allied companion.
    Companion,
    /// Any other non-player character, hostile or rival.
    Npc,
}

/// Immutable agent definition, created once at spawn.
///
/// The capability set gates which decision nodes may fire; the trait profile
/// tunes the thresholds and probabilities inside them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentConfig {
    pub id: AgentId,
    pub kind: AgentKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub capabilities: Capabilities,
    #[cfg_attr(feature = "serde", serde(default))]
    pub traits: TraitProfile,
}

impl AgentConfig {
    pub fn new(
        id: AgentId,
        kind: AgentKind,
        capabilities: Capabilities,
        traits: TraitProfile,
    ) -> Self {
        Self {
            id,
            kind,
            capabilities,
            traits,
        }
    }

    /// True if every flag in `required` is present.
    #[inline]
    pub fn can(&self, required: Capabilities) -> bool {
        self.capabilities.contains(required)
    }
}
