//! Awareness extraction.
//!
//! [`compute_awareness`] turns a [`WorldSnapshot`] into the flat
//! [`Awareness`] record that every decision node reads. It is a pure
//! function: same snapshot, hint and config in, same record out.
//!
//! When the snapshot has no player or no location the result is
//! [`Awareness::default()`], the zero-value record with `has_world == false`.

mod exits;
mod narration;

use std::collections::BTreeMap;

use agent_core::{
    ActionKind, ActorState, CapabilityId, Direction, EngineConfig, EntityId, HISTORY_CAPACITY,
    ItemId, ItemKind, Location, PlotId, QuestId, QuestKind, RecipeId, WorldSnapshot,
};
use serde::Serialize;

/// A live hostile in the current location.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HostileView {
    pub id: EntityId,
    pub tag: String,
    pub hp: i32,
    pub max_hp: i32,
    pub distance: u32,
}

impl HostileView {
    pub fn hp_ratio(&self) -> f32 {
        ratio(self.hp, self.max_hp)
    }
}

/// An item offered by a vendor in the current location.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OfferView {
    pub item: ItemId,
    pub kind: ItemKind,
    pub price: u32,
    pub value: u32,
}

/// An item the agent could sell without losing equipment or consumables.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SellableView {
    pub item: ItemId,
    pub value: u32,
}

/// An incomplete quest with its completion ratio.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QuestView {
    pub id: QuestId,
    pub kind: QuestKind,
    pub ratio: f32,
}

/// Which exit list a node wants to draw from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitClass {
    Available,
    Unvisited,
    Safe,
    BaseCamp,
    /// Explored destinations, most recently visited first.
    Known,
}

/// Derived per-tick features. Read-only to every node.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Awareness {
    /// False when the snapshot lacked a player or a location.
    pub has_world: bool,

    // ===== threats =====
    pub has_hostiles: bool,
    pub hostile_count: usize,
    pub hostiles: Vec<HostileView>,
    /// Closest live hostile, weakest first on ties.
    pub primary_target: Option<EntityId>,
    /// Hostiles present and combat chatter in the recent log.
    pub in_combat: bool,
    pub recently_damaged: bool,

    // ===== location =====
    pub hazard_count: usize,
    /// At least one hazard carries a dangerous tag.
    pub in_danger: bool,
    pub has_vendor: bool,
    pub offers: Vec<OfferView>,
    pub loot: Vec<ItemId>,
    pub at_base_camp: bool,
    pub ready_plot: Option<PlotId>,
    pub craftable_recipe: Option<RecipeId>,

    // ===== exits =====
    pub available_exits: Vec<Direction>,
    pub unvisited_exits: Vec<Direction>,
    pub safe_exits: Vec<Direction>,
    pub base_camp_exits: Vec<Direction>,
    pub known_exits: Vec<Direction>,

    // ===== vitals =====
    pub hp_ratio: f32,
    pub stress_ratio: f32,
    pub is_dead: bool,
    pub respawn_pending: bool,
    pub just_respawned: bool,

    // ===== inventory =====
    pub currency: u32,
    pub inventory_size: usize,
    pub healing_item: Option<ItemId>,
    pub calming_item: Option<ItemId>,
    /// Best weapon in inventory while the weapon slot is empty.
    pub unequipped_weapon: Option<ItemId>,
    /// Best armor in inventory while the armor slot is empty.
    pub unequipped_armor: Option<ItemId>,
    pub equipped_weapon_value: u32,
    pub equipped_armor_value: u32,
    /// Cheapest first.
    pub sellable: Vec<SellableView>,
    pub castables: Vec<CapabilityId>,
    pub has_companion: bool,

    // ===== history =====
    /// Recent action types, oldest first, at most [`HISTORY_CAPACITY`].
    pub history: Vec<ActionKind>,
    pub last_action: Option<ActionKind>,
    /// A scan happened since the last move.
    pub recently_scanned: bool,

    // ===== quests =====
    /// Most advanced first, ties broken by kind priority.
    pub quests: Vec<QuestView>,
    pub quest_progress: BTreeMap<QuestId, f32>,
}

impl Awareness {
    pub fn exits(&self, class: ExitClass) -> &[Direction] {
        match class {
            ExitClass::Available => &self.available_exits,
            ExitClass::Unvisited => &self.unvisited_exits,
            ExitClass::Safe => &self.safe_exits,
            ExitClass::BaseCamp => &self.base_camp_exits,
            ExitClass::Known => &self.known_exits,
        }
    }

    pub fn has_equipment_gap(&self) -> bool {
        self.unequipped_weapon.is_some() || self.unequipped_armor.is_some()
    }

    pub fn has_loot(&self) -> bool {
        !self.loot.is_empty()
    }

    /// Offers of `kind` the agent can pay for, cheapest first.
    pub fn affordable(&self, kind: ItemKind) -> impl Iterator<Item = &OfferView> {
        let mut offers: Vec<&OfferView> = self
            .offers
            .iter()
            .filter(|offer| offer.kind == kind && offer.price <= self.currency)
            .collect();
        offers.sort_by_key(|offer| offer.price);
        offers.into_iter()
    }

    /// Affordable weapon or armor worth more than what is equipped in that
    /// slot. Highest value wins.
    pub fn upgrade_offer(&self) -> Option<&OfferView> {
        self.offers
            .iter()
            .filter(|offer| offer.price <= self.currency)
            .filter(|offer| match offer.kind {
                ItemKind::Weapon => offer.value > self.equipped_weapon_value,
                ItemKind::Armor => offer.value > self.equipped_armor_value,
                _ => false,
            })
            .max_by_key(|offer| offer.value)
    }
}

/// Derives the awareness record for one tick.
///
/// `last_action_hint` stands in for the history when neither the structured
/// record nor the log yields anything.
pub fn compute_awareness(
    snapshot: &WorldSnapshot,
    last_action_hint: Option<ActionKind>,
    config: &EngineConfig,
) -> Awareness {
    let (Some(player), Some(location)) = (snapshot.player.as_ref(), snapshot.location.as_ref())
    else {
        tracing::trace!("snapshot lacks player or location; zero awareness");
        return Awareness::default();
    };

    let mut awareness = Awareness {
        has_world: true,
        ..Awareness::default()
    };

    read_threats(&mut awareness, location, snapshot, config);
    read_location(&mut awareness, location, player);
    read_vitals(&mut awareness, player, snapshot, config);

    let compromised = awareness.hp_ratio < config.compromised_hp_ratio;
    let classes = exits::classify(location, snapshot, compromised);
    awareness.available_exits = classes.available;
    awareness.unvisited_exits = classes.unvisited;
    awareness.safe_exits = classes.safe;
    awareness.base_camp_exits = classes.base_camp;
    awareness.known_exits = classes.known;

    read_inventory(&mut awareness, player);
    read_history(&mut awareness, snapshot, last_action_hint, config);
    read_quests(&mut awareness, snapshot);

    tracing::trace!(
        hp = awareness.hp_ratio,
        hostiles = awareness.hostile_count,
        in_combat = awareness.in_combat,
        exits = awareness.available_exits.len(),
        last_action = ?awareness.last_action,
        "awareness computed"
    );

    awareness
}

fn ratio(current: i32, maximum: i32) -> f32 {
    if maximum <= 0 {
        return if current > 0 { 1.0 } else { 0.0 };
    }
    (current as f32 / maximum as f32).clamp(0.0, 1.0)
}

fn read_threats(
    awareness: &mut Awareness,
    location: &Location,
    snapshot: &WorldSnapshot,
    config: &EngineConfig,
) {
    awareness.hostiles = location
        .hostiles()
        .map(|occupant| HostileView {
            id: occupant.id,
            tag: occupant.tag.clone(),
            hp: occupant.hp,
            max_hp: occupant.max_hp,
            distance: occupant.distance,
        })
        .collect();
    awareness.hostile_count = awareness.hostiles.len();
    awareness.has_hostiles = awareness.hostile_count > 0;
    awareness.primary_target = awareness
        .hostiles
        .iter()
        .min_by_key(|hostile| (hostile.distance, hostile.hp))
        .map(|hostile| hostile.id);

    let recent = narration::tail(&snapshot.log, config.combat_log_window);
    awareness.in_combat = awareness.has_hostiles && recent.iter().any(narration::mentions_combat);
    awareness.recently_damaged = recent.iter().any(narration::mentions_damage);
}

fn read_location(awareness: &mut Awareness, location: &Location, player: &ActorState) {
    awareness.hazard_count = location.hazards.len();
    awareness.in_danger = location.is_dangerous();

    awareness.has_vendor = !location.vendors.is_empty();
    awareness.offers = location
        .vendors
        .iter()
        .flat_map(|vendor| vendor.offers.iter())
        .map(|offer| OfferView {
            item: offer.item.id.clone(),
            kind: offer.item.kind,
            price: offer.price,
            value: offer.item.value,
        })
        .collect();
    awareness.loot = location.ground_loot.iter().map(|item| item.id.clone()).collect();

    if let Some(camp) = location.base_camp.as_ref() {
        awareness.at_base_camp = true;
        awareness.ready_plot = camp.plots.iter().find(|plot| plot.ready).map(|plot| plot.id);
        awareness.craftable_recipe = camp
            .recipes
            .iter()
            .find(|recipe| {
                !recipe.ingredients.is_empty()
                    && recipe
                        .ingredients
                        .iter()
                        .all(|(item, needed)| player.count_of(item) >= *needed)
            })
            .map(|recipe| recipe.id.clone());
    }
}

fn read_vitals(
    awareness: &mut Awareness,
    player: &ActorState,
    snapshot: &WorldSnapshot,
    config: &EngineConfig,
) {
    awareness.hp_ratio = ratio(player.hp, player.max_hp);
    awareness.stress_ratio = if player.max_stress > 0 {
        ratio(player.stress, player.max_stress)
    } else {
        0.0
    };
    awareness.is_dead = player.hp <= 0;
    awareness.respawn_pending = player.respawn_pending;
    awareness.just_respawned = player.just_respawned
        || narration::tail(&snapshot.log, config.respawn_log_window)
            .iter()
            .any(narration::mentions_respawn);
}

fn read_inventory(awareness: &mut Awareness, player: &ActorState) {
    awareness.currency = player.currency;
    awareness.inventory_size = player.inventory.len();
    awareness.castables = player.castables.clone();
    awareness.has_companion = player.companions > 0;

    let held = || player.inventory.iter().filter(|item| item.quantity > 0);
    let first_of = |kind: ItemKind| {
        held()
            .find(|item| item.kind == kind)
            .map(|item| item.id.clone())
    };
    let best_of = |kind: ItemKind| {
        held()
            .filter(|item| item.kind == kind)
            .max_by_key(|item| item.value)
            .map(|item| item.id.clone())
    };
    let value_of = |slot: Option<&ItemId>| {
        slot.and_then(|id| held().find(|item| &item.id == id))
            .map_or(0, |item| item.value)
    };

    awareness.healing_item = first_of(ItemKind::Healing);
    awareness.calming_item = first_of(ItemKind::Calming);
    if player.equipped_weapon.is_none() {
        awareness.unequipped_weapon = best_of(ItemKind::Weapon);
    }
    if player.equipped_armor.is_none() {
        awareness.unequipped_armor = best_of(ItemKind::Armor);
    }
    awareness.equipped_weapon_value = value_of(player.equipped_weapon.as_ref());
    awareness.equipped_armor_value = value_of(player.equipped_armor.as_ref());

    let mut sellable: Vec<SellableView> = held()
        .filter(|item| {
            matches!(
                item.kind,
                ItemKind::Weapon | ItemKind::Armor | ItemKind::Material | ItemKind::Trinket
            )
        })
        .filter(|item| !player.is_equipped(&item.id))
        .map(|item| SellableView {
            item: item.id.clone(),
            value: item.value,
        })
        .collect();
    sellable.sort_by_key(|entry| entry.value);
    awareness.sellable = sellable;
}

fn read_history(
    awareness: &mut Awareness,
    snapshot: &WorldSnapshot,
    last_action_hint: Option<ActionKind>,
    config: &EngineConfig,
) {
    let mut history: Vec<ActionKind> = if snapshot.history.is_empty() {
        narration::tail(&snapshot.log, config.log_scan_window)
            .iter()
            .filter_map(narration::classify)
            .collect()
    } else {
        snapshot.history.entries().iter().map(|entry| entry.kind).collect()
    };
    let overflow = history.len().saturating_sub(HISTORY_CAPACITY);
    history.drain(..overflow);

    awareness.last_action = history.last().copied().or(last_action_hint);
    awareness.recently_scanned = history
        .iter()
        .rev()
        .find(|kind| matches!(kind, ActionKind::Scan | ActionKind::Move))
        .is_some_and(|kind| *kind == ActionKind::Scan);
    awareness.history = history;
}

fn read_quests(awareness: &mut Awareness, snapshot: &WorldSnapshot) {
    let mut quests: Vec<QuestView> = snapshot
        .quests
        .iter()
        .filter(|quest| !quest.complete)
        .map(|quest| QuestView {
            id: quest.id,
            kind: quest.kind,
            ratio: quest.ratio(),
        })
        .collect();
    quests.sort_by(|a, b| {
        b.ratio
            .total_cmp(&a.ratio)
            .then(a.kind.priority().cmp(&b.kind.priority()))
    });
    awareness.quest_progress = quests.iter().map(|quest| (quest.id, quest.ratio)).collect();
    awareness.quests = quests;
}
