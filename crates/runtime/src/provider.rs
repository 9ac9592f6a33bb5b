//! Pluggable sources of agent actions.
//!
//! Callers hold an [`ActionProvider`] per agent class and ask it for one
//! [`Decision`] per tick. [`BehaviorTreeProvider`] is the standard engine;
//! [`IdleProvider`] is a stand-in for agents that should do nothing.

use agent_core::{
    Action, ActionKind, AgentConfig, EngineConfig, ExternalDirective, WorldSnapshot,
};
use behavior_tree::Selector;

use crate::awareness::compute_awareness;
use crate::context::DecisionContext;
use crate::rng::DecisionRng;
use crate::tree::standard_tree;

/// Everything the engine reads for one tick.
#[derive(Clone, Copy, Debug)]
pub struct DecisionRequest<'a> {
    pub agent: &'a AgentConfig,
    pub snapshot: &'a WorldSnapshot,
    pub directive: Option<&'a ExternalDirective>,
    /// Fallback for the last action when history is empty.
    pub last_action_hint: Option<ActionKind>,
}

impl<'a> DecisionRequest<'a> {
    pub fn new(agent: &'a AgentConfig, snapshot: &'a WorldSnapshot) -> Self {
        Self {
            agent,
            snapshot,
            directive: None,
            last_action_hint: None,
        }
    }

    pub fn with_directive(mut self, directive: Option<&'a ExternalDirective>) -> Self {
        self.directive = directive;
        self
    }

    pub fn with_last_action_hint(mut self, hint: Option<ActionKind>) -> Self {
        self.last_action_hint = hint;
        self
    }
}

/// One tick's outcome.
#[derive(Clone, Debug, PartialEq)]
pub struct Decision {
    pub action: Action,
    /// Name of the tree branch that produced the action.
    pub node: &'static str,
    /// The actor's one-shot respawn flag was read this tick; the caller
    /// should clear it before the next tick.
    pub respawn_acknowledged: bool,
}

/// Source of per-tick actions.
///
/// Implementations must be total: every request yields a decision.
pub trait ActionProvider: Send + Sync {
    fn provide_action(&self, request: &DecisionRequest<'_>, rng: &mut dyn DecisionRng) -> Decision;
}

/// Always idles. Useful for parked agents and as a test double.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdleProvider;

impl ActionProvider for IdleProvider {
    fn provide_action(&self, _request: &DecisionRequest<'_>, _rng: &mut dyn DecisionRng) -> Decision {
        Decision {
            action: Action::idle("idle provider"),
            node: "idle_provider",
            respawn_acknowledged: false,
        }
    }
}

/// Evaluates the standard priority tree.
///
/// The tree is built once and shared by every tick and agent; all per-tick
/// state lives in a fresh [`DecisionContext`].
pub struct BehaviorTreeProvider {
    tree: Selector<DecisionContext>,
    config: EngineConfig,
}

impl BehaviorTreeProvider {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            tree: standard_tree(),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for BehaviorTreeProvider {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl ActionProvider for BehaviorTreeProvider {
    fn provide_action(&self, request: &DecisionRequest<'_>, rng: &mut dyn DecisionRng) -> Decision {
        let agent = *request.agent;
        let awareness = compute_awareness(request.snapshot, request.last_action_hint, &self.config);
        tracing::debug!(
            agent = %agent.id,
            has_world = awareness.has_world,
            hp = awareness.hp_ratio,
            hostiles = awareness.hostile_count,
            in_danger = awareness.in_danger,
            last_action = ?awareness.last_action,
            "awareness"
        );
        let respawn_acknowledged = request
            .snapshot
            .player
            .as_ref()
            .is_some_and(|player| player.just_respawned);

        let mut ctx = DecisionContext::new(agent, awareness, self.config, rng.fork())
            .with_directive(request.directive.cloned());

        let fired = self.tree.select(&mut ctx);
        let (action, node) = match (ctx.take_action(), fired) {
            (Some(action), Some(node)) => (action, node),
            (Some(action), None) => (action, "unattributed"),
            (None, node) => {
                tracing::warn!(
                    agent = %agent.id,
                    node = node.unwrap_or("none"),
                    "tree finished without an action, idling"
                );
                (Action::idle("no node produced an action"), "fallback")
            }
        };

        tracing::debug!(
            agent = %agent.id,
            kind = %agent.kind,
            node,
            action = %action.kind,
            reason = %action.reason,
            "decision"
        );

        Decision {
            action,
            node,
            respawn_acknowledged,
        }
    }
}

/// One-shot evaluation with default tuning.
///
/// Builds a fresh tree per call; hold a [`BehaviorTreeProvider`] instead when
/// deciding every tick. Callers must still clear the actor's respawn flag
/// when [`Decision::respawn_acknowledged`] is set.
pub fn decide(
    agent: &AgentConfig,
    snapshot: &WorldSnapshot,
    directive: Option<&ExternalDirective>,
    rng: &mut dyn DecisionRng,
) -> Decision {
    let request = DecisionRequest::new(agent, snapshot).with_directive(directive);
    BehaviorTreeProvider::default().provide_action(&request, rng)
}

#[cfg(test)]
mod tests {
    use agent_core::{ActorState, AgentId, Location};

    use super::*;
    use crate::presets::Preset;
    use crate::rng::FixedRng;

    #[test]
    fn idle_provider_always_idles() {
        let agent = Preset::Autoplay.config(AgentId::PLAYER);
        let snapshot = WorldSnapshot::default();
        let decision = IdleProvider.provide_action(&DecisionRequest::new(&agent, &snapshot), &mut FixedRng(0.0));
        assert_eq!(decision.action.kind, ActionKind::Idle);
    }

    #[test]
    fn respawn_flag_is_acknowledged() {
        let agent = Preset::Autoplay.config(AgentId::PLAYER);
        let snapshot = WorldSnapshot::new(ActorState::new(100, 100).respawned(), Location::new(1, "camp"));
        let decision = BehaviorTreeProvider::default()
            .provide_action(&DecisionRequest::new(&agent, &snapshot), &mut FixedRng(0.0));
        assert!(decision.respawn_acknowledged);
        assert_eq!(decision.node, "post_respawn");
        assert_eq!(decision.action.kind, ActionKind::Scan);
    }

    #[test]
    fn provider_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BehaviorTreeProvider>();
    }
}
