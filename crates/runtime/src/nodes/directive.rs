use behavior_tree::{Behavior, Status};

use crate::context::DecisionContext;

/// Emits a pending external directive verbatim. Outranks every other node.
pub struct FollowDirective;

impl Behavior<DecisionContext> for FollowDirective {
    fn tick(&self, ctx: &mut DecisionContext) -> Status {
        let Some(directive) = ctx.directive.as_ref() else {
            return Status::Failure;
        };
        let action = directive.to_action();
        ctx.commit(action)
    }

    fn name(&self) -> &'static str {
        "directive"
    }
}

/// Idles when the snapshot had no player or no location.
pub struct RequireWorld;

impl Behavior<DecisionContext> for RequireWorld {
    fn tick(&self, ctx: &mut DecisionContext) -> Status {
        if ctx.awareness.has_world {
            return Status::Failure;
        }
        ctx.commit(agent_core::Action::idle("no player or location in snapshot"))
    }

    fn name(&self) -> &'static str {
        "no_world"
    }
}
