use agent_core::{Action, ActionKind, Capabilities, Payload};
use behavior_tree::{Behavior, Status};

use crate::awareness::ExitClass;
use crate::context::DecisionContext;

/// Gets a freshly respawned agent back on its feet.
///
/// Equip missing gear, then leave a hazardous respawn point, then scan,
/// then top off health once. Each step is skipped if its capability is
/// missing.
pub struct PostRespawnPrep;

impl Behavior<DecisionContext> for PostRespawnPrep {
    fn tick(&self, ctx: &mut DecisionContext) -> Status {
        if !ctx.awareness.just_respawned {
            return Status::Failure;
        }

        if ctx.can(Capabilities::EQUIP) {
            if let Some(item) = ctx.awareness.unequipped_weapon.clone() {
                return ctx.commit(
                    Action::new(ActionKind::EquipWeapon, "rearming after respawn")
                        .with_payload(Payload::Item(item)),
                );
            }
            if let Some(item) = ctx.awareness.unequipped_armor.clone() {
                return ctx.commit(
                    Action::new(ActionKind::EquipArmor, "re-armoring after respawn")
                        .with_payload(Payload::Item(item)),
                );
            }
        }

        let mobile = ctx
            .agent
            .capabilities
            .intersects(Capabilities::FLEE | Capabilities::EXPLORE);
        if ctx.awareness.in_danger && mobile {
            let direction = ctx
                .pick_exit(ExitClass::Safe)
                .or_else(|| ctx.pick_exit(ExitClass::Available));
            if let Some(direction) = direction {
                return ctx.commit(Action::travel(direction, "leaving hazardous respawn point"));
            }
        }

        if ctx.can(Capabilities::AWARENESS)
            && !ctx.awareness.recently_scanned
            && !ctx.on_cooldown(ActionKind::Scan)
        {
            return ctx.commit(Action::new(ActionKind::Scan, "surveying after respawn"));
        }

        // One top-off per respawn, even if the caller never clears the flag.
        let topped_off = ctx
            .awareness
            .history
            .iter()
            .rev()
            .take_while(|kind| **kind != ActionKind::Respawn)
            .any(|kind| *kind == ActionKind::Heal);
        if ctx.can(Capabilities::HEAL) && ctx.awareness.hp_ratio < 1.0 && !topped_off {
            if let Some(item) = ctx.awareness.healing_item.clone() {
                return ctx.commit(
                    Action::new(ActionKind::Heal, "topping off after respawn")
                        .with_payload(Payload::Item(item)),
                );
            }
        }

        Status::Failure
    }

    fn name(&self) -> &'static str {
        "post_respawn"
    }
}
