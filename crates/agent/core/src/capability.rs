//! Capability set gating which decision nodes an agent may use.

bitflags::bitflags! {
    /// Classes of behavior an agent is allowed to perform.
    ///
    /// Each decision node checks a single membership test against this set
    /// before doing any work; an agent without [`Capabilities::TRADE`] never
    /// reaches the economy logic at all.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct Capabilities: u16 {
        /// Scan surroundings.
        const AWARENESS = 1 << 0;
        /// Engage hostiles.
        const COMBAT = 1 << 1;
        /// Leave a room to survive.
        const FLEE = 1 << 2;
        /// Wander through exits.
        const EXPLORE = 1 << 3;
        /// Buy and sell with vendors.
        const TRADE = 1 << 4;
        /// Harvest and craft at base camp.
        const CRAFT = 1 << 5;
        /// Use healing and calming consumables.
        const HEAL = 1 << 6;
        /// Equip weapons and armor.
        const EQUIP = 1 << 7;
        /// Inquire of and commune with oracles.
        const ORACLE = 1 << 8;
        /// Pick up ground loot.
        const LOOT = 1 << 9;
        /// Cast known capabilities in combat.
        const CAST = 1 << 10;
        /// Pursue active quests.
        const QUEST = 1 << 11;
        /// Follow a leader instead of wandering.
        const SERVE = 1 << 12;
        /// Compete for kills using rival scoring.
        const RIVAL = 1 << 13;
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_per_flag() {
        let caps = Capabilities::COMBAT | Capabilities::FLEE;
        assert!(caps.contains(Capabilities::COMBAT));
        assert!(!caps.contains(Capabilities::TRADE));
        assert!(Capabilities::all().contains(Capabilities::RIVAL | Capabilities::SERVE));
    }
}
