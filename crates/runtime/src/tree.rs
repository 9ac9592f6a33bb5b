//! The standard priority tree.
//!
//! ```text
//! decision (Selector)
//!   ├─ directive            external override, always first
//!   ├─ no_world             idle when the snapshot is empty
//!   ├─ rival                RIVAL
//!   ├─ survival
//!   ├─ post_respawn
//!   ├─ base_camp            CRAFT
//!   ├─ equipment            EQUIP
//!   ├─ companion_prep       TRADE, buy off cooldown
//!   ├─ combat               COMBAT
//!   ├─ loot                 LOOT, loot off cooldown
//!   ├─ economy              TRADE
//!   ├─ quest                QUEST
//!   ├─ recon
//!   ├─ exploration          EXPLORE
//!   └─ fallback             idle
//! ```
//!
//! Survival, post-respawn and recon gate their own sub-branches, since a
//! respawn must never depend on a capability.

use agent_core::{ActionKind, Capabilities};
use behavior_tree::Selector;
use behavior_tree::builder::{inverter, node, sequence};

use crate::context::DecisionContext;
use crate::nodes::*;

/// Builds the tree every agent is evaluated against.
pub fn standard_tree() -> Selector<DecisionContext> {
    Selector::new(
        "decision",
        vec![
            node(FollowDirective),
            node(RequireWorld),
            sequence(
                "rival",
                vec![node(HasCapability(Capabilities::RIVAL)), node(RivalOverride)],
            ),
            node(Survival),
            node(PostRespawnPrep),
            sequence(
                "base_camp",
                vec![node(HasCapability(Capabilities::CRAFT)), node(TendBaseCamp)],
            ),
            sequence(
                "equipment",
                vec![node(HasCapability(Capabilities::EQUIP)), node(EquipGear)],
            ),
            sequence(
                "companion_prep",
                vec![
                    node(HasCapability(Capabilities::TRADE)),
                    inverter(node(OnCooldown(ActionKind::Buy))),
                    node(HireCompanion),
                ],
            ),
            sequence(
                "combat",
                vec![node(HasCapability(Capabilities::COMBAT)), node(Combat)],
            ),
            sequence(
                "loot",
                vec![
                    node(HasCapability(Capabilities::LOOT)),
                    inverter(node(OnCooldown(ActionKind::Loot))),
                    node(CollectLoot),
                ],
            ),
            sequence(
                "economy",
                vec![node(HasCapability(Capabilities::TRADE)), node(Trade)],
            ),
            sequence(
                "quest",
                vec![node(HasCapability(Capabilities::QUEST)), node(PursueQuest)],
            ),
            node(Recon),
            sequence(
                "exploration",
                vec![node(HasCapability(Capabilities::EXPLORE)), node(Explore)],
            ),
            node(Fallback),
        ],
    )
}
