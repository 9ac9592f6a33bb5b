//! Condition nodes. They read the context and never commit an action.

use agent_core::{ActionKind, Capabilities};
use behavior_tree::{Behavior, Status};

use crate::context::DecisionContext;

/// Succeeds when the agent holds every flag in the set.
///
/// Placed at the head of a sequence, it gates the branch that follows.
pub struct HasCapability(pub Capabilities);

impl Behavior<DecisionContext> for HasCapability {
    fn tick(&self, ctx: &mut DecisionContext) -> Status {
        ctx.can(self.0).into()
    }

    fn name(&self) -> &'static str {
        "has_capability"
    }
}

/// Succeeds while the action type is inside its cooldown window.
///
/// Usually wrapped in an inverter to mean "off cooldown".
pub struct OnCooldown(pub ActionKind);

impl Behavior<DecisionContext> for OnCooldown {
    fn tick(&self, ctx: &mut DecisionContext) -> Status {
        ctx.on_cooldown(self.0).into()
    }

    fn name(&self) -> &'static str {
        "on_cooldown"
    }
}
