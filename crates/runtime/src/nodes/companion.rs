use agent_core::{Action, ActionKind, ItemKind, Payload};
use behavior_tree::{Behavior, Status};

use crate::context::DecisionContext;

/// Hires help before a fight: buys the cheapest affordable contract when a
/// vendor and hostiles share the room and no companion is along yet.
///
/// The buy cooldown is checked by the enclosing branch.
pub struct HireCompanion;

impl Behavior<DecisionContext> for HireCompanion {
    fn tick(&self, ctx: &mut DecisionContext) -> Status {
        let awareness = &ctx.awareness;
        if !awareness.has_vendor || !awareness.has_hostiles || awareness.has_companion {
            return Status::Failure;
        }
        let Some(contract) = awareness
            .affordable(ItemKind::Contract)
            .next()
            .map(|offer| offer.item.clone())
        else {
            return Status::Failure;
        };
        ctx.commit(
            Action::new(ActionKind::Buy, "hiring a companion before the fight")
                .with_payload(Payload::Item(contract)),
        )
    }

    fn name(&self) -> &'static str {
        "companion_prep"
    }
}
