//! Generic combat: cast a capability or swing at the primary target.

use agent_core::{Action, ActionKind, Capabilities, CapabilityId, Payload};
use behavior_tree::{Behavior, Status};

use crate::context::DecisionContext;

const MIN_HP: f32 = 0.25;
const CAST_MIN_AGGRESSION: f32 = 0.3;

const BASE_SCORE: f32 = 5.0;
const MULTI_HOSTILE_BONUS: f32 = 3.0;
const HEALTHY_BONUS: f32 = 2.0;
const HEALTHY_HP: f32 = 0.7;
const JITTER: f32 = 2.0;

pub struct Combat;

impl Behavior<DecisionContext> for Combat {
    fn tick(&self, ctx: &mut DecisionContext) -> Status {
        let awareness = &ctx.awareness;
        if !awareness.has_hostiles || awareness.hp_ratio <= MIN_HP {
            return Status::Failure;
        }
        let Some(target) = awareness.primary_target else {
            return Status::Failure;
        };

        let may_cast = ctx.traits().aggression > CAST_MIN_AGGRESSION
            && ctx.can(Capabilities::CAST)
            && !ctx.awareness.castables.is_empty();
        if may_cast && ctx.chance(ctx.config.cast_chance) {
            if let Some(capability) = choose_capability(ctx) {
                return ctx.commit(
                    Action::new(ActionKind::CastCapability, format!("casting {capability}"))
                        .with_payload(Payload::Capability {
                            id: capability,
                            target: Some(target),
                        }),
                );
            }
        }

        ctx.commit(
            Action::new(ActionKind::Engage, "engaging primary target").with_payload(Payload::Target(target)),
        )
    }

    fn name(&self) -> &'static str {
        "combat"
    }
}

/// Scores every known capability and keeps the best. The situational
/// bonuses are shared, so the jitter decides between capabilities.
fn choose_capability(ctx: &mut DecisionContext) -> Option<CapabilityId> {
    let mut situational = BASE_SCORE;
    if ctx.awareness.hostile_count > 1 {
        situational += MULTI_HOSTILE_BONUS;
    }
    if ctx.awareness.hp_ratio > HEALTHY_HP {
        situational += HEALTHY_BONUS;
    }

    let candidates = ctx.awareness.castables.clone();
    let mut best: Option<(CapabilityId, f32)> = None;
    for capability in candidates {
        let score = situational + ctx.unit() * JITTER;
        tracing::trace!(%capability, score, "capability scored");
        if best.as_ref().is_none_or(|(_, top)| score > *top) {
            best = Some((capability, score));
        }
    }
    best.map(|(capability, _)| capability)
}
