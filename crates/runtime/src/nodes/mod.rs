//! Behavior tree nodes for the decision engine.
//!
//! - **Conditions** check capabilities and throttles and never commit
//! - **Decision nodes** own one concern each and commit at most one action
//!
//! Every node that can fire overrides [`Behavior::name`] so the provider
//! can report which branch produced the tick's action.
//!
//! [`Behavior::name`]: behavior_tree::Behavior::name

mod base_camp;
mod combat;
mod companion;
mod conditions;
mod directive;
mod economy;
mod equipment;
mod exploration;
mod fallback;
mod loot;
mod quest;
mod recon;
mod respawn;
mod rival;
mod survival;

pub use base_camp::TendBaseCamp;
pub use combat::Combat;
pub use companion::HireCompanion;
pub use conditions::{HasCapability, OnCooldown};
pub use directive::{FollowDirective, RequireWorld};
pub use economy::Trade;
pub use equipment::EquipGear;
pub use exploration::{Explore, retreat_exit};
pub use fallback::Fallback;
pub use loot::CollectLoot;
pub use quest::PursueQuest;
pub use recon::Recon;
pub use respawn::PostRespawnPrep;
pub use rival::RivalOverride;
pub use survival::Survival;
