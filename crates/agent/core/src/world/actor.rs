//! The controlled actor and its belongings.

/// Identifier of an entity standing in a location.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EntityId(pub u32);

/// Content key of an item definition.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content key of a castable capability (spell, technique, prayer).
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CapabilityId(pub String);

impl CapabilityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl core::fmt::Display for CapabilityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Broad item category the engine reasons about.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemKind {
    Weapon,
    Armor,
    /// Restores health.
    Healing,
    /// Reduces stress.
    Calming,
    /// Hires a companion when used.
    Contract,
    /// Crafting ingredient.
    Material,
    #[default]
    Trinket,
}

/// A stack of items.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub kind: ItemKind,
    pub quantity: u32,
    /// Base trade value of one unit.
    pub value: u32,
}

impl Default for Item {
    fn default() -> Self {
        Self {
            id: ItemId::default(),
            name: String::new(),
            kind: ItemKind::default(),
            quantity: 1,
            value: 0,
        }
    }
}

impl Item {
    pub fn new(id: impl Into<String>, kind: ItemKind) -> Self {
        let id = id.into();
        Self {
            name: id.replace('_', " "),
            id: ItemId(id),
            kind,
            quantity: 1,
            value: 0,
        }
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: u32) -> Self {
        self.value = value;
        self
    }
}

/// The actor controlled by the agent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ActorState {
    pub id: EntityId,
    pub hp: i32,
    pub max_hp: i32,
    pub stress: i32,
    pub max_stress: i32,
    /// Spendable resource balance.
    pub currency: u32,
    pub inventory: Vec<Item>,
    pub equipped_weapon: Option<ItemId>,
    pub equipped_armor: Option<ItemId>,
    pub companions: u32,
    /// Capabilities the actor knows how to cast.
    pub castables: Vec<CapabilityId>,
    /// One-shot signal set by the world after a respawn. The caller clears it
    /// once a decision acknowledges it.
    pub just_respawned: bool,
    /// The caller is already handling a respawn for this actor.
    pub respawn_pending: bool,
}

impl Default for ActorState {
    fn default() -> Self {
        Self {
            id: EntityId::default(),
            hp: 0,
            max_hp: 0,
            stress: 0,
            max_stress: 100,
            currency: 0,
            inventory: Vec::new(),
            equipped_weapon: None,
            equipped_armor: None,
            companions: 0,
            castables: Vec::new(),
            just_respawned: false,
            respawn_pending: false,
        }
    }
}

impl ActorState {
    pub fn new(hp: i32, max_hp: i32) -> Self {
        Self {
            hp,
            max_hp,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: EntityId) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub fn with_stress(mut self, stress: i32, max_stress: i32) -> Self {
        self.stress = stress;
        self.max_stress = max_stress;
        self
    }

    #[must_use]
    pub fn with_currency(mut self, currency: u32) -> Self {
        self.currency = currency;
        self
    }

    #[must_use]
    pub fn with_item(mut self, item: Item) -> Self {
        self.inventory.push(item);
        self
    }

    #[must_use]
    pub fn with_weapon_equipped(mut self, id: impl Into<String>) -> Self {
        self.equipped_weapon = Some(ItemId(id.into()));
        self
    }

    #[must_use]
    pub fn with_armor_equipped(mut self, id: impl Into<String>) -> Self {
        self.equipped_armor = Some(ItemId(id.into()));
        self
    }

    #[must_use]
    pub fn with_castable(mut self, id: impl Into<String>) -> Self {
        self.castables.push(CapabilityId(id.into()));
        self
    }

    #[must_use]
    pub fn with_companions(mut self, companions: u32) -> Self {
        self.companions = companions;
        self
    }

    #[must_use]
    pub fn respawned(mut self) -> Self {
        self.just_respawned = true;
        self
    }

    /// True if `id` is in either equipment slot.
    pub fn is_equipped(&self, id: &ItemId) -> bool {
        self.equipped_weapon.as_ref() == Some(id) || self.equipped_armor.as_ref() == Some(id)
    }

    /// Total units held of `id`.
    pub fn count_of(&self, id: &ItemId) -> u32 {
        self.inventory
            .iter()
            .filter(|item| &item.id == id)
            .map(|item| item.quantity)
            .sum()
    }
}
