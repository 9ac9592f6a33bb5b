use agent_core::{Action, ActionKind, Payload};
use behavior_tree::{Behavior, Status};

use crate::context::DecisionContext;

/// Harvests ready plots, else crafts the first satisfiable recipe.
/// Only fires at a base camp.
pub struct TendBaseCamp;

impl Behavior<DecisionContext> for TendBaseCamp {
    fn tick(&self, ctx: &mut DecisionContext) -> Status {
        if !ctx.awareness.at_base_camp {
            return Status::Failure;
        }
        if let Some(plot) = ctx.awareness.ready_plot {
            return ctx.commit(
                Action::new(ActionKind::Harvest, "resource plot ready").with_payload(Payload::Plot(plot)),
            );
        }
        if let Some(recipe) = ctx.awareness.craftable_recipe.clone() {
            return ctx.commit(
                Action::new(ActionKind::Craft, "ingredients on hand")
                    .with_payload(Payload::Recipe(recipe)),
            );
        }
        Status::Failure
    }

    fn name(&self) -> &'static str {
        "base_camp"
    }
}
