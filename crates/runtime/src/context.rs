//! Blackboard shared by every node during one evaluation.
//!
//! A [`DecisionContext`] owns everything a node may read: the agent's
//! definition, the tick's [`Awareness`], the engine tuning, the pending
//! directive if any, and a forked random stream. Nodes write exactly one
//! thing back, the chosen [`Action`], through [`DecisionContext::commit`].

use agent_core::{
    Action, ActionKind, AgentConfig, Capabilities, Direction, EngineConfig, ExternalDirective,
    TraitProfile,
};
use behavior_tree::Status;

use crate::awareness::{Awareness, ExitClass};
use crate::guard;
use crate::rng::DecisionRng;

/// Per-tick evaluation state.
///
/// Owned rather than borrowed so a single tree can be built once and reused
/// across ticks and agents.
pub struct DecisionContext {
    pub agent: AgentConfig,
    pub awareness: Awareness,
    pub config: EngineConfig,
    pub directive: Option<ExternalDirective>,
    rng: Box<dyn DecisionRng>,
    action: Option<Action>,
}

impl DecisionContext {
    pub fn new(
        agent: AgentConfig,
        awareness: Awareness,
        config: EngineConfig,
        rng: Box<dyn DecisionRng>,
    ) -> Self {
        Self {
            agent,
            awareness,
            config,
            directive: None,
            rng,
            action: None,
        }
    }

    /// Attaches an external directive (builder pattern).
    pub fn with_directive(mut self, directive: Option<ExternalDirective>) -> Self {
        self.directive = directive;
        self
    }

    // ========================================================================
    // Action storage
    // ========================================================================

    /// Records the tick's action and reports success.
    ///
    /// A second commit in the same evaluation means two nodes both claimed
    /// the tick. The first one stands.
    pub fn commit(&mut self, action: Action) -> Status {
        if let Some(existing) = &self.action {
            tracing::warn!(
                agent = %self.agent.id,
                kept = %existing.kind,
                dropped = %action.kind,
                "action already committed this tick"
            );
            return Status::Success;
        }
        self.action = Some(action);
        Status::Success
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// Extracts the committed action, if any.
    pub fn take_action(&mut self) -> Option<Action> {
        self.action.take()
    }

    // ========================================================================
    // Agent queries
    // ========================================================================

    #[inline]
    pub fn can(&self, required: Capabilities) -> bool {
        self.agent.can(required)
    }

    #[inline]
    pub fn traits(&self) -> TraitProfile {
        self.agent.traits
    }

    pub fn on_cooldown(&self, kind: ActionKind) -> bool {
        let hit = guard::is_on_cooldown(kind, &self.awareness, &self.config.cooldowns);
        if hit {
            tracing::trace!(agent = %self.agent.id, action = %kind, "on cooldown");
        }
        hit
    }

    pub fn looping(&self, kind: ActionKind) -> bool {
        let hit = guard::is_looping(kind, &self.awareness, self.config.loop_max_repeats);
        if hit {
            tracing::trace!(agent = %self.agent.id, action = %kind, "loop guard");
        }
        hit
    }

    // ========================================================================
    // Randomness
    // ========================================================================

    pub fn chance(&mut self, probability: f32) -> bool {
        self.rng.chance(probability)
    }

    pub fn unit(&mut self) -> f32 {
        self.rng.unit()
    }

    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        self.rng.pick(len)
    }

    /// Uniformly picks an exit from `class`. `Known` is ordered, so it
    /// always yields its first entry.
    pub fn pick_exit(&mut self, class: ExitClass) -> Option<Direction> {
        let exits = self.awareness.exits(class);
        if class == ExitClass::Known {
            return exits.first().copied();
        }
        let index = self.rng.pick(exits.len())?;
        exits.get(index).copied()
    }
}
