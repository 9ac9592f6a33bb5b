//! Locations, their exits and what stands in them.

use super::{EntityId, Item, ItemId};
use crate::action::Direction;

/// Identifier of a location.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LocationId(pub u32);

/// Identifier of a resource plot at a base camp.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlotId(pub u32);

/// Content key of a crafting recipe.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RecipeId(pub String);

impl RecipeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// Hazard tag fragments that make a location dangerous to enter.
const DANGEROUS_FRAGMENTS: &[&str] = &[
    "lethal",
    "toxic",
    "fire",
    "radiation",
    "collapse",
    "void",
    "acid",
    "storm",
];

/// An environmental hazard present in a location.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Hazard {
    pub tag: String,
}

impl Hazard {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    /// True if the tag contains one of the danger fragments (case-insensitive).
    pub fn is_dangerous(&self) -> bool {
        let tag = self.tag.to_ascii_lowercase();
        DANGEROUS_FRAGMENTS.iter().any(|fragment| tag.contains(fragment))
    }
}

/// A way out of a location.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exit {
    pub direction: Direction,
    /// Where the exit leads, when the world has generated it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub destination: Option<LocationId>,
    #[cfg_attr(feature = "serde", serde(default = "open_by_default"))]
    pub open: bool,
}

#[cfg(feature = "serde")]
fn open_by_default() -> bool {
    true
}

impl Exit {
    /// An open exit whose destination has not been generated yet.
    pub fn unknown(direction: Direction) -> Self {
        Self {
            direction,
            destination: None,
            open: true,
        }
    }

    /// An open exit leading to `destination`.
    pub fn to(direction: Direction, destination: LocationId) -> Self {
        Self {
            direction,
            destination: Some(destination),
            open: true,
        }
    }

    #[must_use]
    pub fn closed(mut self) -> Self {
        self.open = false;
        self
    }
}

/// How an occupant regards the agent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Disposition {
    Hostile,
    #[default]
    Neutral,
    Friendly,
}

/// Someone or something standing in a location.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Occupant {
    pub id: EntityId,
    pub name: String,
    /// Type tag from content data, e.g. `cave_troll` or `bone_lord`.
    pub tag: String,
    pub disposition: Disposition,
    pub hp: i32,
    pub max_hp: i32,
    /// Rough distance within the location; 0 means adjacent.
    pub distance: u32,
}

impl Occupant {
    pub fn hostile(id: u32, tag: impl Into<String>, hp: i32, max_hp: i32) -> Self {
        let tag = tag.into();
        Self {
            id: EntityId(id),
            name: tag.replace('_', " "),
            tag,
            disposition: Disposition::Hostile,
            hp,
            max_hp,
            distance: 0,
        }
    }

    #[must_use]
    pub fn at_distance(mut self, distance: u32) -> Self {
        self.distance = distance;
        self
    }

    #[must_use]
    pub fn with_disposition(mut self, disposition: Disposition) -> Self {
        self.disposition = disposition;
        self
    }

    pub fn is_hostile(&self) -> bool {
        self.disposition == Disposition::Hostile
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

/// An item for sale.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offer {
    pub item: Item,
    pub price: u32,
}

impl Offer {
    pub fn new(item: Item, price: u32) -> Self {
        Self { item, price }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Vendor {
    pub id: EntityId,
    pub offers: Vec<Offer>,
}

impl Vendor {
    pub fn new(id: u32) -> Self {
        Self {
            id: EntityId(id),
            offers: Vec::new(),
        }
    }

    #[must_use]
    pub fn selling(mut self, item: Item, price: u32) -> Self {
        self.offers.push(Offer::new(item, price));
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourcePlot {
    pub id: PlotId,
    pub ready: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recipe {
    pub id: RecipeId,
    /// Required item ids and unit counts.
    pub ingredients: Vec<(ItemId, u32)>,
}

impl Recipe {
    pub fn new(id: impl Into<String>, ingredients: &[(&str, u32)]) -> Self {
        Self {
            id: RecipeId(id.into()),
            ingredients: ingredients
                .iter()
                .map(|(item, count)| (ItemId::new(*item), *count))
                .collect(),
        }
    }
}

/// Base-camp features of a location.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BaseCamp {
    pub plots: Vec<ResourcePlot>,
    pub recipes: Vec<Recipe>,
}

impl BaseCamp {
    #[must_use]
    pub fn with_plot(mut self, id: u32, ready: bool) -> Self {
        self.plots.push(ResourcePlot {
            id: PlotId(id),
            ready,
        });
        self
    }

    #[must_use]
    pub fn with_recipe(mut self, recipe: Recipe) -> Self {
        self.recipes.push(recipe);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub hazards: Vec<Hazard>,
    pub exits: Vec<Exit>,
    pub occupants: Vec<Occupant>,
    pub vendors: Vec<Vendor>,
    pub ground_loot: Vec<Item>,
    pub base_camp: Option<BaseCamp>,
    /// Tick of the agent's most recent visit; 0 if never visited.
    pub last_visited: u64,
}

impl Location {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: LocationId(id),
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_exit(mut self, exit: Exit) -> Self {
        self.exits.push(exit);
        self
    }

    #[must_use]
    pub fn with_hazard(mut self, tag: impl Into<String>) -> Self {
        self.hazards.push(Hazard::new(tag));
        self
    }

    #[must_use]
    pub fn with_occupant(mut self, occupant: Occupant) -> Self {
        self.occupants.push(occupant);
        self
    }

    #[must_use]
    pub fn with_vendor(mut self, vendor: Vendor) -> Self {
        self.vendors.push(vendor);
        self
    }

    #[must_use]
    pub fn with_loot(mut self, item: Item) -> Self {
        self.ground_loot.push(item);
        self
    }

    #[must_use]
    pub fn with_base_camp(mut self, camp: BaseCamp) -> Self {
        self.base_camp = Some(camp);
        self
    }

    #[must_use]
    pub fn visited_at(mut self, tick: u64) -> Self {
        self.last_visited = tick;
        self
    }

    pub fn is_base_camp(&self) -> bool {
        self.base_camp.is_some()
    }

    /// Live hostile occupants.
    pub fn hostiles(&self) -> impl Iterator<Item = &Occupant> {
        self.occupants
            .iter()
            .filter(|occupant| occupant.is_hostile() && occupant.is_alive())
    }

    pub fn has_hostiles(&self) -> bool {
        self.hostiles().next().is_some()
    }

    pub fn is_dangerous(&self) -> bool {
        self.hazards.iter().any(Hazard::is_dangerous)
    }
}
