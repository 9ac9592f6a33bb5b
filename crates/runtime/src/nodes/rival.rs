use agent_core::{Action, ActionKind, Payload};
use behavior_tree::{Behavior, Status};

use crate::context::DecisionContext;
use crate::rival::best_target;

/// Steers a rival toward the most lucrative kill in the room.
///
/// Falls through to ordinary combat unless the best score clears the
/// configured threshold.
pub struct RivalOverride;

impl Behavior<DecisionContext> for RivalOverride {
    fn tick(&self, ctx: &mut DecisionContext) -> Status {
        let awareness = &ctx.awareness;
        if awareness.is_dead || !awareness.has_hostiles {
            return Status::Failure;
        }
        let Some((target, score)) = best_target(&awareness.hostiles) else {
            return Status::Failure;
        };
        if score <= ctx.config.rival_threshold {
            tracing::trace!(score, threshold = ctx.config.rival_threshold, "rival target below threshold");
            return Status::Failure;
        }
        let action = Action::new(
            ActionKind::Engage,
            format!("rival claim on {} (score {score:.0})", target.tag),
        )
        .with_payload(Payload::Target(target.id));
        ctx.commit(action)
    }

    fn name(&self) -> &'static str {
        "rival"
    }
}
