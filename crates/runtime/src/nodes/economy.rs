//! Trading with vendors in the current location.

use agent_core::{Action, ActionKind, ItemId, ItemKind, Payload};
use behavior_tree::{Behavior, Status};

use crate::context::DecisionContext;

const CROWDED_INVENTORY: usize = 6;
const POOR_CURRENCY: u32 = 15;
const POOR_MIN_INVENTORY: usize = 2;
const RESTOCK_HP: f32 = 0.6;
const UPGRADE_MIN_CURRENCY: u32 = 20;
const UPGRADE_MIN_RESOURCEFULNESS: f32 = 0.5;

/// Sell, restock, upgrade or browse, in that order.
///
/// Each branch is gated by the cooldown of the action it would emit, so a
/// recent `buy` still leaves selling open.
pub struct Trade;

impl Behavior<DecisionContext> for Trade {
    fn tick(&self, ctx: &mut DecisionContext) -> Status {
        if !ctx.awareness.has_vendor {
            return Status::Failure;
        }

        if !ctx.on_cooldown(ActionKind::Sell) {
            if let Some(item) = excess_item(ctx) {
                return ctx.commit(sell(item, "clearing excess inventory"));
            }
        }

        if ctx.on_cooldown(ActionKind::Buy) {
            return Status::Failure;
        }

        let awareness = &ctx.awareness;
        let restock = if awareness.hp_ratio < RESTOCK_HP && awareness.healing_item.is_none() {
            awareness
                .affordable(ItemKind::Healing)
                .next()
                .map(|offer| offer.item.clone())
        } else {
            None
        };
        if let Some(item) = restock {
            return ctx.commit(buy(item, "restocking healing"));
        }

        let resourcefulness = ctx.traits().resourcefulness;
        let upgrade = if ctx.awareness.currency >= UPGRADE_MIN_CURRENCY
            && resourcefulness > UPGRADE_MIN_RESOURCEFULNESS
        {
            ctx.awareness.upgrade_offer().map(|offer| offer.item.clone())
        } else {
            None
        };
        if let Some(item) = upgrade {
            return ctx.commit(buy(item, "buying an equipment upgrade"));
        }

        let browse_chance = resourcefulness * ctx.config.browse_factor;
        let affordable: Vec<ItemId> = ctx
            .awareness
            .offers
            .iter()
            .filter(|offer| offer.price <= ctx.awareness.currency)
            .map(|offer| offer.item.clone())
            .collect();
        if affordable.is_empty() || !ctx.chance(browse_chance) {
            return Status::Failure;
        }
        match ctx.pick_index(affordable.len()).and_then(|index| affordable.get(index)) {
            Some(item) => ctx.commit(buy(item.clone(), "browsing the vendor")),
            None => Status::Failure,
        }
    }

    fn name(&self) -> &'static str {
        "economy"
    }
}

/// Cheapest sellable item, when the pack is crowded or funds are short.
fn excess_item(ctx: &DecisionContext) -> Option<ItemId> {
    let awareness = &ctx.awareness;
    let crowded = awareness.inventory_size > CROWDED_INVENTORY;
    let broke = awareness.currency < POOR_CURRENCY && awareness.inventory_size > POOR_MIN_INVENTORY;
    if !crowded && !broke {
        return None;
    }
    awareness.sellable.first().map(|entry| entry.item.clone())
}

fn sell(item: ItemId, reason: &str) -> Action {
    Action::new(ActionKind::Sell, reason).with_payload(Payload::Item(item))
}

fn buy(item: ItemId, reason: &str) -> Action {
    Action::new(ActionKind::Buy, reason).with_payload(Payload::Item(item))
}

/// Sell action for the cheapest sellable item regardless of crowding.
/// Shared with quest pursuit.
pub(super) fn sell_cheapest(ctx: &DecisionContext) -> Option<Action> {
    ctx.awareness
        .sellable
        .first()
        .map(|entry| sell(entry.item.clone(), "trading for a quest"))
}

/// Buy action for the cheapest affordable offer of any kind.
/// Shared with quest pursuit.
pub(super) fn buy_cheapest(ctx: &DecisionContext) -> Option<Action> {
    ctx.awareness
        .offers
        .iter()
        .filter(|offer| offer.price <= ctx.awareness.currency)
        .min_by_key(|offer| offer.price)
        .map(|offer| buy(offer.item.clone(), "trading for a quest"))
}

#[cfg(test)]
mod tests {
    use agent_core::{AgentConfig, AgentId, AgentKind, Capabilities, EngineConfig, TraitKind, TraitProfile};

    use super::*;
    use crate::awareness::{Awareness, OfferView, SellableView};
    use crate::rng::FixedRng;

    fn offer(item: &str, kind: ItemKind, price: u32, value: u32) -> OfferView {
        OfferView {
            item: ItemId::new(item),
            kind,
            price,
            value,
        }
    }

    fn shop(history: Vec<ActionKind>) -> Awareness {
        Awareness {
            has_world: true,
            has_vendor: true,
            hp_ratio: 0.5,
            currency: 10,
            inventory_size: 3,
            sellable: vec![SellableView {
                item: ItemId::new("pebble"),
                value: 1,
            }],
            offers: vec![offer("tonic", ItemKind::Healing, 5, 3)],
            history,
            ..Awareness::default()
        }
    }

    fn run(awareness: Awareness, resourcefulness: f32, draw: f32) -> Option<Action> {
        let agent = AgentConfig::new(
            AgentId(1),
            AgentKind::Player,
            Capabilities::TRADE,
            TraitProfile::uniform(0.5).with(TraitKind::Resourcefulness, resourcefulness),
        );
        let mut ctx =
            DecisionContext::new(agent, awareness, EngineConfig::default(), Box::new(FixedRng(draw)));
        Trade.tick(&mut ctx);
        ctx.take_action()
    }

    #[test]
    fn selling_outranks_buying() {
        let action = run(shop(Vec::new()), 0.5, 0.99);
        assert_eq!(action.map(|a| a.kind), Some(ActionKind::Sell));
    }

    #[test]
    fn recent_sale_lets_restock_through() {
        let action = run(shop(vec![ActionKind::Sell]), 0.5, 0.99);
        let action = action.unwrap_or_else(|| Action::idle("none"));
        assert_eq!(action.kind, ActionKind::Buy);
        assert_eq!(action.payload, Some(Payload::Item(ItemId::new("tonic"))));
    }

    #[test]
    fn recent_buy_suppresses_every_purchase() {
        let mut awareness = shop(vec![ActionKind::Buy, ActionKind::Sell]);
        awareness.currency = 100;
        awareness.offers.push(offer("blade", ItemKind::Weapon, 30, 12));
        assert!(run(awareness, 1.0, 0.0).is_none());
    }

    #[test]
    fn upgrades_need_resourcefulness() {
        let awareness = Awareness {
            currency: 40,
            hp_ratio: 1.0,
            inventory_size: 1,
            offers: vec![offer("blade", ItemKind::Weapon, 30, 12)],
            ..shop(Vec::new())
        };
        let thrifty = run(awareness.clone(), 0.9, 0.99);
        assert_eq!(
            thrifty.and_then(|a| a.payload),
            Some(Payload::Item(ItemId::new("blade")))
        );
        assert!(run(awareness, 0.4, 0.99).is_none());
    }

    #[test]
    fn browsing_is_probabilistic() {
        let awareness = Awareness {
            hp_ratio: 1.0,
            inventory_size: 1,
            offers: vec![offer("charm", ItemKind::Trinket, 4, 2)],
            ..shop(Vec::new())
        };
        assert_eq!(
            run(awareness.clone(), 0.5, 0.0).map(|a| a.kind),
            Some(ActionKind::Buy)
        );
        assert!(run(awareness, 0.5, 0.5).is_none());
    }
}
