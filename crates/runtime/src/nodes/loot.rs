use agent_core::{Action, ActionKind, Payload};
use behavior_tree::{Behavior, Status};

use crate::context::DecisionContext;

/// Picks up the first ground item once the room is quiet.
pub struct CollectLoot;

impl Behavior<DecisionContext> for CollectLoot {
    fn tick(&self, ctx: &mut DecisionContext) -> Status {
        if ctx.awareness.in_combat {
            return Status::Failure;
        }
        let Some(item) = ctx.awareness.loot.first().cloned() else {
            return Status::Failure;
        };
        ctx.commit(Action::new(ActionKind::Loot, format!("picking up {item}")).with_payload(Payload::Item(item)))
    }

    fn name(&self) -> &'static str {
        "loot"
    }
}
