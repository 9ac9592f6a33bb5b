//! Exploration and compromised-state pathfinding.

use agent_core::{Action, ActionKind, AgentKind, Capabilities, Direction, Payload};
use behavior_tree::{Behavior, Status};

use crate::awareness::ExitClass;
use crate::context::DecisionContext;

/// Best exit for a wounded agent: toward base camp, else a known-safe
/// destination, else the most recently explored one, else anywhere.
pub fn retreat_exit(ctx: &mut DecisionContext) -> Option<Direction> {
    ctx.pick_exit(ExitClass::BaseCamp)
        .or_else(|| ctx.pick_exit(ExitClass::Safe))
        .or_else(|| ctx.pick_exit(ExitClass::Known))
        .or_else(|| ctx.pick_exit(ExitClass::Available))
}

/// Moves through an open exit.
///
/// Healthy agents favour unvisited exits. Below the compromised threshold
/// the choice cascades: base camp, known-safe, forced evacuation of a
/// dangerous room, last explored, heal in place, then the unknown.
///
/// Companions with SERVE stay with their leader and never wander.
pub struct Explore;

impl Behavior<DecisionContext> for Explore {
    fn tick(&self, ctx: &mut DecisionContext) -> Status {
        if ctx.awareness.available_exits.is_empty() {
            return Status::Failure;
        }
        if ctx.agent.kind == AgentKind::Companion && ctx.can(Capabilities::SERVE) {
            return Status::Failure;
        }

        let action = if ctx.awareness.hp_ratio < ctx.config.compromised_hp_ratio {
            compromised_step(ctx)
        } else {
            let (direction, reason) = match ctx.pick_exit(ExitClass::Unvisited) {
                Some(direction) => (Some(direction), "exploring unvisited exit"),
                None => (ctx.pick_exit(ExitClass::Available), "wandering known ground"),
            };
            direction.map(|direction| Action::travel(direction, reason))
        };

        match action {
            Some(action) => ctx.commit(action),
            None => Status::Failure,
        }
    }

    fn name(&self) -> &'static str {
        "exploration"
    }
}

fn compromised_step(ctx: &mut DecisionContext) -> Option<Action> {
    // Camp is where a retreat ends; leaving it only to be sent back loops.
    if ctx.awareness.at_base_camp {
        return heal_in_place(ctx, "recovering at base camp");
    }
    if let Some(direction) = ctx.pick_exit(ExitClass::BaseCamp) {
        return Some(Action::travel(direction, "retreating toward base camp"));
    }
    if let Some(direction) = ctx.pick_exit(ExitClass::Safe) {
        return Some(Action::travel(direction, "retreating through a known-safe exit"));
    }
    if ctx.awareness.in_danger {
        if let Some(direction) = ctx.pick_exit(ExitClass::Available) {
            return Some(Action::travel(direction, "forced evacuation of a dangerous room"));
        }
    }
    if let Some(direction) = ctx.pick_exit(ExitClass::Known) {
        return Some(Action::travel(direction, "backtracking to the last explored location"));
    }
    if let Some(action) = heal_in_place(ctx, "no safe way out, healing in place") {
        return Some(action);
    }
    ctx.pick_exit(ExitClass::Available)
        .map(|direction| Action::travel(direction, "forced into the unknown"))
}

fn heal_in_place(ctx: &DecisionContext, reason: &str) -> Option<Action> {
    if !ctx.can(Capabilities::HEAL) {
        return None;
    }
    ctx.awareness
        .healing_item
        .clone()
        .map(|item| Action::new(ActionKind::Heal, reason).with_payload(Payload::Item(item)))
}

#[cfg(test)]
mod tests {
    use agent_core::{AgentConfig, AgentId, EngineConfig, ItemId, TraitProfile};

    use super::*;
    use crate::awareness::Awareness;
    use crate::rng::FixedRng;

    fn run(awareness: Awareness, kind: AgentKind, capabilities: Capabilities) -> Option<Action> {
        let agent = AgentConfig::new(AgentId(2), kind, capabilities, TraitProfile::default());
        let mut ctx =
            DecisionContext::new(agent, awareness, EngineConfig::default(), Box::new(FixedRng(0.0)));
        Explore.tick(&mut ctx);
        ctx.take_action()
    }

    fn corridor(hp_ratio: f32) -> Awareness {
        Awareness {
            has_world: true,
            hp_ratio,
            available_exits: vec![Direction::North, Direction::East, Direction::West],
            unvisited_exits: vec![Direction::West],
            known_exits: vec![Direction::East, Direction::North],
            ..Awareness::default()
        }
    }

    #[test]
    fn healthy_agent_prefers_unvisited() {
        let action = run(corridor(0.9), AgentKind::Player, Capabilities::EXPLORE);
        assert_eq!(action.and_then(|a| a.direction()), Some(Direction::West));
    }

    #[test]
    fn compromised_cascade_order() {
        let mut awareness = Awareness {
            base_camp_exits: vec![Direction::North],
            safe_exits: vec![Direction::East],
            ..corridor(0.3)
        };
        let step = |awareness: &Awareness| {
            run(awareness.clone(), AgentKind::Player, Capabilities::EXPLORE | Capabilities::HEAL)
                .and_then(|a| a.direction())
        };
        assert_eq!(step(&awareness), Some(Direction::North));

        awareness.base_camp_exits.clear();
        assert_eq!(step(&awareness), Some(Direction::East));

        awareness.safe_exits.clear();
        assert_eq!(step(&awareness), Some(Direction::East), "most recently explored");

        awareness.known_exits.clear();
        awareness.healing_item = Some(ItemId::new("tonic"));
        let heal = run(awareness.clone(), AgentKind::Player, Capabilities::EXPLORE | Capabilities::HEAL);
        assert_eq!(heal.map(|a| a.kind), Some(ActionKind::Heal));

        awareness.healing_item = None;
        assert_eq!(step(&awareness), Some(Direction::North), "forced into the unknown");
    }

    #[test]
    fn compromised_agent_stays_at_base_camp() {
        let mut awareness = Awareness {
            at_base_camp: true,
            safe_exits: vec![Direction::North],
            ..corridor(0.3)
        };
        let caps = Capabilities::EXPLORE | Capabilities::HEAL;
        assert!(run(awareness.clone(), AgentKind::Player, caps).is_none());

        awareness.healing_item = Some(ItemId::new("tonic"));
        let action = run(awareness, AgentKind::Player, caps);
        assert_eq!(action.map(|a| a.kind), Some(ActionKind::Heal));
    }

    #[test]
    fn serving_companion_stays_put() {
        let action = run(
            corridor(0.9),
            AgentKind::Companion,
            Capabilities::EXPLORE | Capabilities::SERVE,
        );
        assert!(action.is_none());
    }

    #[test]
    fn no_exits_no_move() {
        let awareness = Awareness {
            has_world: true,
            hp_ratio: 1.0,
            ..Awareness::default()
        };
        assert!(run(awareness, AgentKind::Player, Capabilities::EXPLORE).is_none());
    }
}
