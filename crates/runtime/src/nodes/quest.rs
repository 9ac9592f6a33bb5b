//! Quest pursuit: act on the most advanced incomplete quest.

use agent_core::{Action, ActionKind, Payload, QuestKind};
use behavior_tree::{Behavior, Status};

use crate::awareness::ExitClass;
use crate::context::DecisionContext;
use crate::nodes::economy::{buy_cheapest, sell_cheapest};

const ENGAGE_MIN_HP: f32 = 0.25;

pub struct PursueQuest;

impl Behavior<DecisionContext> for PursueQuest {
    fn tick(&self, ctx: &mut DecisionContext) -> Status {
        let Some(quest) = ctx.awareness.quests.first().cloned() else {
            return Status::Failure;
        };
        tracing::trace!(quest = quest.id.0, kind = %quest.kind, ratio = quest.ratio, "pursuing quest");

        let action = match quest.kind {
            QuestKind::Reconnaissance => {
                if !ctx.awareness.recently_scanned && !ctx.on_cooldown(ActionKind::Scan) {
                    Some(Action::new(ActionKind::Scan, "surveying for a reconnaissance quest"))
                } else {
                    head_out(ctx, ExitClass::Unvisited, "scouting new ground for a quest")
                }
            }
            QuestKind::Hostiles => match ctx
                .awareness
                .primary_target
                .filter(|_| ctx.awareness.hp_ratio > ENGAGE_MIN_HP)
            {
                Some(target) => Some(
                    Action::new(ActionKind::Engage, "hunting quest hostiles")
                        .with_payload(Payload::Target(target)),
                ),
                _ => head_out(ctx, ExitClass::Unvisited, "searching for quest hostiles")
                    .or_else(|| head_out(ctx, ExitClass::Available, "searching for quest hostiles")),
            },
            QuestKind::Vendor if ctx.awareness.has_vendor => {
                let sale = (!ctx.on_cooldown(ActionKind::Sell))
                    .then(|| sell_cheapest(ctx))
                    .flatten();
                sale.or_else(|| (!ctx.on_cooldown(ActionKind::Buy)).then(|| buy_cheapest(ctx)).flatten())
            }
            QuestKind::Vendor => head_out(ctx, ExitClass::Unvisited, "looking for a vendor")
                .or_else(|| head_out(ctx, ExitClass::Available, "looking for a vendor")),
            QuestKind::Rescue => head_out(ctx, ExitClass::Unvisited, "searching for the missing")
                .or_else(|| head_out(ctx, ExitClass::Available, "searching for the missing")),
        };

        match action {
            Some(action) => ctx.commit(action),
            None => Status::Failure,
        }
    }

    fn name(&self) -> &'static str {
        "quest"
    }
}

fn head_out(ctx: &mut DecisionContext, class: ExitClass, reason: &str) -> Option<Action> {
    ctx.pick_exit(class).map(|direction| Action::travel(direction, reason))
}

#[cfg(test)]
mod tests {
    use agent_core::{
        AgentConfig, AgentId, AgentKind, Capabilities, Direction, EngineConfig,
        EntityId, ItemId, QuestId, TraitProfile,
    };

    use super::*;
    use crate::awareness::{Awareness, QuestView, SellableView};
    use crate::rng::FixedRng;

    fn questing(kind: QuestKind) -> Awareness {
        Awareness {
            has_world: true,
            hp_ratio: 1.0,
            available_exits: vec![Direction::East, Direction::West],
            unvisited_exits: vec![Direction::West],
            quests: vec![QuestView {
                id: QuestId(1),
                kind,
                ratio: 0.5,
            }],
            ..Awareness::default()
        }
    }

    fn run(awareness: Awareness) -> Option<Action> {
        let agent = AgentConfig::new(
            AgentId(1),
            AgentKind::Player,
            Capabilities::QUEST,
            TraitProfile::default(),
        );
        let mut ctx =
            DecisionContext::new(agent, awareness, EngineConfig::default(), Box::new(FixedRng(0.0)));
        PursueQuest.tick(&mut ctx);
        ctx.take_action()
    }

    #[test]
    fn reconnaissance_scans_then_moves_on() {
        assert_eq!(
            run(questing(QuestKind::Reconnaissance)).map(|a| a.kind),
            Some(ActionKind::Scan)
        );
        let scanned = Awareness {
            recently_scanned: true,
            ..questing(QuestKind::Reconnaissance)
        };
        assert_eq!(run(scanned).and_then(|a| a.direction()), Some(Direction::West));
    }

    #[test]
    fn hostiles_quest_engages_present_target() {
        let awareness = Awareness {
            has_hostiles: true,
            primary_target: Some(EntityId(8)),
            ..questing(QuestKind::Hostiles)
        };
        assert_eq!(run(awareness).and_then(|a| a.target()), Some(EntityId(8)));
    }

    #[test]
    fn hostiles_quest_searches_when_no_target() {
        let action = run(questing(QuestKind::Hostiles));
        assert_eq!(action.as_ref().map(|a| a.kind), Some(ActionKind::Move));
        assert_eq!(action.and_then(|a| a.direction()), Some(Direction::West));
    }

    #[test]
    fn hostiles_quest_does_not_engage_when_badly_hurt() {
        let awareness = Awareness {
            has_hostiles: true,
            primary_target: Some(EntityId(8)),
            hp_ratio: 0.2,
            unvisited_exits: Vec::new(),
            ..questing(QuestKind::Hostiles)
        };
        let action = run(awareness);
        assert_eq!(action.as_ref().map(|a| a.kind), Some(ActionKind::Move));
        assert_eq!(action.and_then(|a| a.direction()), Some(Direction::East));
    }

    #[test]
    fn vendor_quest_looks_for_a_vendor() {
        let action = run(questing(QuestKind::Vendor));
        assert_eq!(action.and_then(|a| a.direction()), Some(Direction::West));

        let explored = Awareness {
            unvisited_exits: Vec::new(),
            ..questing(QuestKind::Vendor)
        };
        assert_eq!(run(explored).and_then(|a| a.direction()), Some(Direction::East));
    }

    #[test]
    fn vendor_quest_trades_at_a_vendor() {
        let awareness = Awareness {
            has_vendor: true,
            sellable: vec![SellableView {
                item: ItemId::new("rusty_blade"),
                value: 2,
            }],
            ..questing(QuestKind::Vendor)
        };
        let action = run(awareness.clone());
        assert_eq!(action.map(|a| a.kind), Some(ActionKind::Sell));

        // A recent sale leaves nothing else to trade, so the quest yields.
        let sold = Awareness {
            history: vec![ActionKind::Sell],
            ..awareness
        };
        assert!(run(sold).is_none());
    }

    #[test]
    fn rescue_falls_back_to_any_exit() {
        let awareness = Awareness {
            unvisited_exits: Vec::new(),
            ..questing(QuestKind::Rescue)
        };
        assert_eq!(run(awareness).and_then(|a| a.direction()), Some(Direction::East));
    }

    #[test]
    fn no_quest_no_action() {
        let awareness = Awareness {
            quests: Vec::new(),
            ..questing(QuestKind::Rescue)
        };
        assert!(run(awareness).is_none());
    }
}
