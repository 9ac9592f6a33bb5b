//! Survival: staying alive outranks everything but a directive.

use agent_core::{Action, ActionKind, Capabilities, Payload};
use behavior_tree::{Behavior, Status};

use crate::awareness::ExitClass;
use crate::context::DecisionContext;
use crate::nodes::retreat_exit;

const FLEE_HP: f32 = 0.25;
const FLEE_MIN_CAUTION: f32 = 0.5;
const EVACUATE_HP: f32 = 0.5;
const RETREAT_HP: f32 = 0.35;

/// Respawn, consume consumables, or run.
///
/// Sub-branches in order:
/// 1. dead → `respawn` (or `idle` while a respawn is already in flight)
/// 2. hp below `0.4 + caution * 0.2` with a healing item → `heal` (HEAL)
/// 3. stress above `0.6 - caution * 0.2` with a calming item → `reduce_stress` (HEAL)
/// 4. hostiles, hp < 0.25 and caution >= 0.5 → flee through any exit (FLEE)
/// 5. dangerous hazard, hp < 0.5, no hostiles → evacuate (FLEE)
/// 6. hp < 0.35, no healing item, away from camp → retreat (FLEE)
pub struct Survival;

impl Behavior<DecisionContext> for Survival {
    fn tick(&self, ctx: &mut DecisionContext) -> Status {
        let awareness = &ctx.awareness;
        if awareness.is_dead {
            if awareness.respawn_pending {
                return ctx.commit(Action::idle("respawn already in progress"));
            }
            return ctx.commit(Action::new(ActionKind::Respawn, "hit points depleted"));
        }

        let caution = ctx.traits().caution;
        let hp = awareness.hp_ratio;

        if ctx.can(Capabilities::HEAL) {
            let heal_with = awareness
                .healing_item
                .clone()
                .filter(|_| hp < 0.4 + caution * 0.2);
            if let Some(item) = heal_with {
                return ctx.commit(
                    Action::new(ActionKind::Heal, "health critical").with_payload(Payload::Item(item)),
                );
            }
            let calm_with = ctx
                .awareness
                .calming_item
                .clone()
                .filter(|_| ctx.awareness.stress_ratio > 0.6 - caution * 0.2);
            if let Some(item) = calm_with {
                return ctx.commit(
                    Action::new(ActionKind::ReduceStress, "stress too high")
                        .with_payload(Payload::Item(item)),
                );
            }
        }

        if !ctx.can(Capabilities::FLEE) {
            return Status::Failure;
        }

        let awareness = &ctx.awareness;
        let has_hostiles = awareness.has_hostiles;
        let in_danger = awareness.in_danger;
        let retreat_needed =
            hp < RETREAT_HP && awareness.healing_item.is_none() && !awareness.at_base_camp;

        if has_hostiles && hp < FLEE_HP && caution >= FLEE_MIN_CAUTION {
            if let Some(direction) = ctx.pick_exit(ExitClass::Available) {
                return ctx.commit(Action::travel(direction, "fleeing outmatched hostiles"));
            }
        }

        if in_danger && hp < EVACUATE_HP && !has_hostiles {
            let direction = ctx
                .pick_exit(ExitClass::Safe)
                .or_else(|| ctx.pick_exit(ExitClass::Available));
            if let Some(direction) = direction {
                return ctx.commit(Action::travel(direction, "evacuating hazard"));
            }
        }

        if retreat_needed {
            if let Some(direction) = retreat_exit(ctx) {
                return ctx.commit(Action::travel(direction, "wounded without healing, retreating"));
            }
        }

        Status::Failure
    }

    fn name(&self) -> &'static str {
        "survival"
    }
}
