//! End-to-end decisions for representative situations.

use agent_core::{
    ActionKind, ActorState, AgentConfig, AgentId, BaseCamp, CapabilityId, Direction, EntityId, Exit, Item, ItemId,
    ItemKind, Location, Occupant, Payload, PlotId, Quest, QuestKind, Recipe, TraitKind, Vendor,
    WorldSnapshot,
};
use agent_runtime::{
    ActionProvider, BehaviorTreeProvider, Decision, DecisionRequest, FixedRng, Preset, decide,
};

fn player() -> AgentConfig {
    Preset::Autoplay.config(AgentId::PLAYER)
}

fn tick(agent: &AgentConfig, snapshot: &WorldSnapshot) -> agent_core::Action {
    decide(agent, snapshot, None, &mut FixedRng(0.0)).action
}

#[test]
fn empty_snapshot_idles() {
    let action = tick(&player(), &WorldSnapshot::default());
    assert_eq!(action.kind, ActionKind::Idle);
}

#[test]
fn zero_hp_respawns() {
    let snapshot = WorldSnapshot::new(ActorState::new(0, 100), Location::new(1, "ossuary"));
    assert_eq!(tick(&player(), &snapshot).kind, ActionKind::Respawn);
}

#[test]
fn aggressive_caster_opens_with_a_capability() {
    let mut agent = player();
    agent.traits = agent.traits.with(TraitKind::Aggression, 0.8);
    let here = Location::new(1, "vault").with_occupant(Occupant::hostile(4, "ghoul", 10, 100));
    let snapshot = WorldSnapshot::new(ActorState::new(90, 100).with_castable("spark"), here);

    let action = tick(&agent, &snapshot);
    assert_eq!(action.kind, ActionKind::CastCapability);
    assert_eq!(
        action.payload,
        Some(Payload::Capability {
            id: CapabilityId::new("spark"),
            target: Some(EntityId(4)),
        })
    );
}

#[test]
fn harvest_comes_before_craft() {
    let camp = BaseCamp::default()
        .with_plot(1, true)
        .with_recipe(Recipe::new("salve", &[("herb", 1)]));
    let snapshot = WorldSnapshot::new(
        ActorState::new(100, 100).with_item(Item::new("herb", ItemKind::Material)),
        Location::new(1, "camp").with_base_camp(camp),
    );
    let action = tick(&player(), &snapshot);
    assert_eq!(action.kind, ActionKind::Harvest);
    assert_eq!(action.payload, Some(Payload::Plot(PlotId(1))));
}

#[test]
fn craft_once_plots_are_spent() {
    let camp = BaseCamp::default()
        .with_plot(1, false)
        .with_recipe(Recipe::new("salve", &[("herb", 1)]));
    let snapshot = WorldSnapshot::new(
        ActorState::new(100, 100).with_item(Item::new("herb", ItemKind::Material)),
        Location::new(1, "camp").with_base_camp(camp),
    );
    assert_eq!(tick(&player(), &snapshot).kind, ActionKind::Craft);
}

#[test]
fn respawned_agent_rearms_first() {
    let snapshot = WorldSnapshot::new(
        ActorState::new(100, 100)
            .with_item(Item::new("sabre", ItemKind::Weapon).with_value(8))
            .respawned(),
        Location::new(1, "shrine").with_hazard("toxic fog"),
    );
    let decision: Decision = BehaviorTreeProvider::default().provide_action(
        &DecisionRequest::new(&player(), &snapshot),
        &mut FixedRng(0.0),
    );
    assert_eq!(decision.node, "post_respawn");
    assert_eq!(decision.action.kind, ActionKind::EquipWeapon);
    assert!(decision.respawn_acknowledged);
}

#[test]
fn respawn_top_off_happens_once_without_flag_clearing() {
    let mut world = WorldSnapshot::new(
        ActorState::new(95, 100)
            .with_item(Item::new("tonic", ItemKind::Healing).with_quantity(5))
            .respawned(),
        Location::new(1, "shrine"),
    );
    world.history.record(ActionKind::Respawn, 0);

    let mut heals = 0;
    for step in 1..=4 {
        let decision = decide(&player(), &world, None, &mut FixedRng(0.99));
        assert!(decision.respawn_acknowledged);
        if decision.action.kind == ActionKind::Heal {
            heals += 1;
        }
        world.history.record(decision.action.kind, step);
    }
    assert_eq!(heals, 1);
}

#[test]
fn companion_is_hired_before_a_fight() {
    let here = Location::new(1, "gatehouse")
        .with_occupant(Occupant::hostile(2, "brigand", 30, 30).at_distance(5))
        .with_vendor(Vendor::new(3).selling(Item::new("mercenary_contract", ItemKind::Contract), 10));
    let snapshot = WorldSnapshot::new(ActorState::new(100, 100).with_currency(25), here);
    let action = tick(&player(), &snapshot);
    assert_eq!(action.kind, ActionKind::Buy);
    assert_eq!(action.payload, Some(Payload::Item(ItemId::new("mercenary_contract"))));
}

#[test]
fn loot_waits_for_combat_to_end() {
    let quiet = Location::new(1, "hall").with_loot(Item::new("gold_tooth", ItemKind::Trinket));
    let snapshot = WorldSnapshot::new(ActorState::new(100, 100), quiet);
    assert_eq!(tick(&player(), &snapshot).kind, ActionKind::Loot);

    let follower = Preset::Follower.config(AgentId(2));
    assert_ne!(tick(&follower, &snapshot).kind, ActionKind::Loot);
}

#[test]
fn log_narration_stands_in_for_missing_history() {
    let here = Location::new(1, "hall").with_exit(Exit::unknown(Direction::North));
    let snapshot = WorldSnapshot::new(ActorState::new(100, 100), here.clone());
    assert_eq!(tick(&player(), &snapshot).kind, ActionKind::Scan);

    let narrated = WorldSnapshot::new(ActorState::new(100, 100), here).with_log(4, "You scan the hall.");
    let action = decide(&player(), &narrated, None, &mut FixedRng(0.99)).action;
    assert_eq!(action.kind, ActionKind::Move);
    assert_eq!(action.direction(), Some(Direction::North));
}

#[test]
fn quest_steers_movement() {
    let here = Location::new(1, "hall").with_exit(Exit::unknown(Direction::Down));
    let snapshot = WorldSnapshot::new(ActorState::new(100, 100), here)
        .with_log(1, "You scan the hall.")
        .with_quest(Quest::new(1, QuestKind::Rescue, 1, 3));
    let action = decide(&player(), &snapshot, None, &mut FixedRng(0.99)).action;
    assert_eq!(action.kind, ActionKind::Move);
    assert!(action.reason.contains("missing"));
}

#[test]
fn follower_holds_position_when_idle() {
    let here = Location::new(1, "hall").with_exit(Exit::unknown(Direction::North));
    let snapshot = WorldSnapshot::new(ActorState::new(100, 100), here).with_log(1, "You scan the hall.");
    let follower = Preset::Follower.config(AgentId(2));
    assert_eq!(tick(&follower, &snapshot).kind, ActionKind::Idle);
}

#[test]
fn toxic_room_is_evacuated_when_hurt() {
    let here = Location::new(1, "vent")
        .with_hazard("Toxic Fumes")
        .with_exit(Exit::unknown(Direction::Up));
    let snapshot = WorldSnapshot::new(ActorState::new(45, 100), here);
    let action = tick(&player(), &snapshot);
    assert_eq!(action.kind, ActionKind::Move);
    assert_eq!(action.direction(), Some(Direction::Up));
    assert!(action.reason.contains("hazard"));
}
