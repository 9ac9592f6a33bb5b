use agent_core::{Action, ActionKind, Capabilities};
use behavior_tree::{Behavior, Status};

use crate::context::DecisionContext;

/// Scans unsurveyed rooms and occasionally consults an oracle.
///
/// Oracle requests need ORACLE, must be clear of both oracle cooldowns, and
/// are hard-suppressed while either oracle action is looping.
pub struct Recon;

impl Behavior<DecisionContext> for Recon {
    fn tick(&self, ctx: &mut DecisionContext) -> Status {
        if ctx.can(Capabilities::AWARENESS)
            && !ctx.awareness.recently_scanned
            && !ctx.on_cooldown(ActionKind::Scan)
        {
            return ctx.commit(Action::new(ActionKind::Scan, "location not yet surveyed"));
        }

        let oracle_ready = ctx.can(Capabilities::ORACLE)
            && !ctx.looping(ActionKind::Inquire)
            && !ctx.looping(ActionKind::Commune)
            && !ctx.on_cooldown(ActionKind::Inquire)
            && !ctx.on_cooldown(ActionKind::Commune);
        if !oracle_ready {
            return Status::Failure;
        }

        let probability = ctx.traits().mysticism * ctx.config.inquiry_factor;
        if !ctx.chance(probability) {
            return Status::Failure;
        }
        let kind = if ctx.chance(0.5) {
            ActionKind::Inquire
        } else {
            ActionKind::Commune
        };
        ctx.commit(Action::new(kind, "seeking oracle guidance"))
    }

    fn name(&self) -> &'static str {
        "recon"
    }
}
