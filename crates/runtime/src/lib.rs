//! Per-tick decision engine for autonomous agents.
//!
//! Each tick the caller hands over an [`AgentConfig`], a read-only
//! [`WorldSnapshot`] and optionally an [`ExternalDirective`]; the engine
//! returns exactly one [`Action`] wrapped in a [`Decision`]. The engine never
//! mutates the world and never fails: missing data degrades to `idle`.
//!
//! Modules are organized by responsibility:
//! - [`awareness`] derives the flat feature record every node reads
//! - [`guard`] throttles repeated actions (cooldowns and loop breaking)
//! - [`rival`] scores hostile targets for competitive agents
//! - [`nodes`] holds one behavior per concern (survival, combat, trade, ...)
//! - [`tree`] assembles the nodes in priority order
//! - [`provider`] exposes the [`ActionProvider`] seam callers plug into
//! - [`presets`] ships the standard agent definitions
//! - [`rng`] abstracts randomness so decisions can be replayed
//!
//! [`AgentConfig`]: agent_core::AgentConfig
//! [`WorldSnapshot`]: agent_core::WorldSnapshot
//! [`ExternalDirective`]: agent_core::ExternalDirective
//! [`Action`]: agent_core::Action
pub mod awareness;
pub mod context;
pub mod guard;
pub mod nodes;
pub mod presets;
pub mod provider;
pub mod rival;
pub mod rng;
pub mod tree;

pub use awareness::{
    Awareness, ExitClass, HostileView, OfferView, QuestView, SellableView, compute_awareness,
};
pub use context::DecisionContext;
pub use guard::{is_looping, is_on_cooldown};
pub use presets::Preset;
pub use provider::{
    ActionProvider, BehaviorTreeProvider, Decision, DecisionRequest, IdleProvider, decide,
};
pub use rival::score_target;
pub use rng::{DecisionRng, FixedRng, ScriptedRng, SeededRng};
pub use tree::standard_tree;
