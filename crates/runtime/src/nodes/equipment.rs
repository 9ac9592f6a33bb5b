use agent_core::{Action, ActionKind, Payload};
use behavior_tree::{Behavior, Status};

use crate::context::DecisionContext;

/// Fills an empty weapon or armor slot from inventory. Weapon first.
pub struct EquipGear;

impl Behavior<DecisionContext> for EquipGear {
    fn tick(&self, ctx: &mut DecisionContext) -> Status {
        if let Some(item) = ctx.awareness.unequipped_weapon.clone() {
            return ctx.commit(
                Action::new(ActionKind::EquipWeapon, "weapon slot empty").with_payload(Payload::Item(item)),
            );
        }
        if let Some(item) = ctx.awareness.unequipped_armor.clone() {
            return ctx.commit(
                Action::new(ActionKind::EquipArmor, "armor slot empty").with_payload(Payload::Item(item)),
            );
        }
        Status::Failure
    }

    fn name(&self) -> &'static str {
        "equipment"
    }
}
