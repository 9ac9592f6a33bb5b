//! Plain data shared by the agent decision engine and its tooling.
//!
//! `agent-core` defines what an agent *is* ([`AgentConfig`]), what it can
//! *see* ([`WorldSnapshot`]) and what it can *do* ([`Action`]). Nothing in
//! this crate decides anything; the decision runtime reads these types and
//! the execution layer outside the engine mutates the world they describe.
pub mod action;
pub mod agent;
pub mod capability;
pub mod config;
pub mod error;
pub mod traits;
pub mod world;

pub use action::{
    Action, ActionHistory, ActionHistoryEntry, ActionKind, Direction, ExternalDirective,
    HISTORY_CAPACITY, Payload,
};
pub use agent::{AgentConfig, AgentId, AgentKind};
pub use capability::Capabilities;
pub use config::{CooldownTable, EngineConfig};
pub use error::{ConfigError, PresetError, TraitError};
pub use traits::{TraitKind, TraitProfile};
pub use world::{
    ActorState, BaseCamp, CapabilityId, Disposition, EntityId, Exit, Hazard, Item, ItemId,
    ItemKind, Location, LocationId, LogEntry, Occupant, Offer, PlotId, Quest, QuestId, QuestKind,
    Recipe, RecipeId, ResourcePlot, Vendor, WorldSnapshot,
};
