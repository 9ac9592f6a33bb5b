//! Standard agent definitions.
//!
//! Presets are plain data: a capability set and a trait profile. Callers
//! pick one by name at spawn and may still tweak the result.
//!
//! - [`autoplay`]: the player's own autoplay, every capability except the
//!   companion and rival roles
//! - [`combat_ally`]: a hired fighter that hunts, loots and patches itself up
//! - [`follower`]: an order-following companion that never wanders off

use agent_core::{AgentConfig, AgentId, AgentKind, Capabilities, PresetError, TraitProfile};
use strum::IntoEnumIterator;

/// Named preset.
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Preset {
    Autoplay,
    CombatAlly,
    Follower,
}

impl Preset {
    /// Parses a preset name, reporting the accepted names on failure.
    pub fn parse(name: &str) -> Result<Self, PresetError> {
        name.parse().map_err(|_| PresetError {
            name: name.to_owned(),
            expected: "autoplay, combat_ally, follower",
        })
    }

    /// Builds the preset's definition for `id`.
    pub fn config(self, id: AgentId) -> AgentConfig {
        match self {
            Preset::Autoplay => autoplay(id),
            Preset::CombatAlly => combat_ally(id),
            Preset::Follower => follower(id),
        }
    }

    pub fn all() -> impl Iterator<Item = Preset> {
        Preset::iter()
    }
}

pub fn autoplay(id: AgentId) -> AgentConfig {
    let capabilities = Capabilities::all() - Capabilities::SERVE - Capabilities::RIVAL;
    let traits = TraitProfile::clamped(0.6, 0.7, 0.5, 0.6, 0.4);
    AgentConfig::new(id, AgentKind::Player, capabilities, traits)
}

pub fn combat_ally(id: AgentId) -> AgentConfig {
    let capabilities = Capabilities::AWARENESS
        | Capabilities::COMBAT
        | Capabilities::FLEE
        | Capabilities::EXPLORE
        | Capabilities::HEAL
        | Capabilities::EQUIP
        | Capabilities::LOOT
        | Capabilities::CAST;
    let traits = TraitProfile::clamped(0.8, 0.4, 0.3, 0.3, 0.2);
    AgentConfig::new(id, AgentKind::Companion, capabilities, traits)
}

pub fn follower(id: AgentId) -> AgentConfig {
    let capabilities = Capabilities::AWARENESS
        | Capabilities::COMBAT
        | Capabilities::FLEE
        | Capabilities::EXPLORE
        | Capabilities::HEAL
        | Capabilities::EQUIP
        | Capabilities::SERVE;
    let traits = TraitProfile::clamped(0.4, 0.3, 0.7, 0.4, 0.2);
    AgentConfig::new(id, AgentKind::Companion, capabilities, traits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for preset in Preset::all() {
            assert_eq!(Preset::parse(preset.as_ref()), Ok(preset));
        }
        assert_eq!(Preset::parse("Combat_Ally"), Ok(Preset::CombatAlly));
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = Preset::parse("berserker").unwrap_err();
        assert_eq!(err.name, "berserker");
    }

    #[test]
    fn roles_are_distinct() {
        let player = Preset::Autoplay.config(AgentId::PLAYER);
        assert!(player.can(Capabilities::TRADE | Capabilities::QUEST | Capabilities::ORACLE));
        assert!(!player.can(Capabilities::SERVE));

        let ally = Preset::CombatAlly.config(AgentId(1));
        assert!(ally.can(Capabilities::CAST));
        assert!(!ally.can(Capabilities::TRADE));

        let follower = Preset::Follower.config(AgentId(2));
        assert_eq!(follower.kind, AgentKind::Companion);
        assert!(follower.can(Capabilities::SERVE));
    }

    #[test]
    fn preset_traits_validate() {
        for preset in Preset::all() {
            assert!(preset.config(AgentId(9)).traits.validate().is_ok());
        }
    }
}
