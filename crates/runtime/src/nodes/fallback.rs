use agent_core::Action;
use behavior_tree::{Behavior, Status};

use crate::context::DecisionContext;

/// Last resort. Always commits `idle`.
pub struct Fallback;

impl Behavior<DecisionContext> for Fallback {
    fn tick(&self, ctx: &mut DecisionContext) -> Status {
        ctx.commit(Action::idle("nothing worth doing"))
    }

    fn name(&self) -> &'static str {
        "fallback"
    }
}
