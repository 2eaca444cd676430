//! World content: the JSON shape world files are written in, and the
//! bundled starter world.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::creature::Creature;
use crate::error::CoreResult;
use crate::item::{DEFAULT_ITEM_WEIGHT, Item, ItemCategory};
use crate::room::Room;
use crate::world::World;

/// The bundled starter world, as JSON.
pub const STARTER_WORLD_JSON: &str = include_str!("../worlds/white_house.json");

/// A complete world file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSpec {
    /// World name.
    pub name: String,
    /// ID of the room the player starts in.
    pub start: String,
    /// Rooms, in authoring order.
    pub rooms: Vec<RoomSpec>,
}

/// One room in a world file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSpec {
    /// Unique room ID.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Narrative description.
    pub description: String,
    /// Whether the room is lit.
    #[serde(default = "default_true")]
    pub lit: bool,
    /// Whether the room refuses entry.
    #[serde(default)]
    pub locked: bool,
    /// Exits: direction to target room ID.
    #[serde(default)]
    pub exits: BTreeMap<String, String>,
    /// Items lying in the room.
    #[serde(default)]
    pub items: Vec<ItemSpec>,
    /// Creatures lurking in the room.
    #[serde(default)]
    pub creatures: Vec<CreatureSpec>,
}

/// One item in a world file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSpec {
    /// Display name.
    pub name: String,
    /// Text shown when examined.
    pub description: String,
    /// Weight in pounds.
    #[serde(default = "default_weight")]
    pub weight: u32,
    /// Whether the item can be picked up.
    #[serde(default = "default_true")]
    pub takeable: bool,
    /// Item category.
    #[serde(default)]
    pub category: ItemCategory,
    /// Trade value.
    #[serde(default)]
    pub value: i32,
    /// Weapon damage bonus.
    #[serde(default)]
    pub damage: u32,
    /// Armor defense bonus.
    #[serde(default)]
    pub defense: u32,
}

/// One creature in a world file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureSpec {
    /// Display name.
    pub name: String,
    /// Text shown when examined.
    pub description: String,
    /// Maximum health.
    pub health: u32,
    /// Attack power.
    pub attack: u32,
    /// Defense.
    #[serde(default)]
    pub defense: u32,
    /// Whether it fights back.
    #[serde(default = "default_true")]
    pub hostile: bool,
    /// Score for defeating it; defaults to the session's award.
    #[serde(default)]
    pub reward: Option<u32>,
}

fn default_true() -> bool {
    true
}

fn default_weight() -> u32 {
    DEFAULT_ITEM_WEIGHT
}

impl WorldSpec {
    /// Parse a world file.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize back to pretty JSON.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The bundled starter world.
    pub fn starter() -> CoreResult<Self> {
        Self::from_json(STARTER_WORLD_JSON)
    }

    /// Build and validate a [`World`].
    pub fn build(&self) -> CoreResult<World> {
        let mut world = World::new(&self.name);
        for spec in &self.rooms {
            world.add_room(spec.build())?;
        }
        world.validate()?;
        world.set_start(self.start.as_str())?;
        Ok(world)
    }
}

impl RoomSpec {
    fn build(&self) -> Room {
        let mut room = Room::new(self.id.as_str(), &self.name, &self.description);
        room.set_lit(self.lit);
        room.set_locked(self.locked);
        for (direction, target) in &self.exits {
            room.add_exit(direction, target.as_str());
        }
        for item in &self.items {
            room.add_item(item.build());
        }
        for creature in &self.creatures {
            room.add_creature(creature.build());
        }
        room
    }
}

impl ItemSpec {
    fn build(&self) -> Item {
        let mut item = Item::new(&self.name, &self.description)
            .with_weight(self.weight)
            .with_takeable(self.takeable)
            .with_category(self.category);
        item.set_value(self.value);
        item.set_damage(self.damage);
        item.set_defense(self.defense);
        item
    }
}

impl CreatureSpec {
    fn build(&self) -> Creature {
        let creature = Creature::new(
            &self.name,
            &self.description,
            self.health,
            self.attack,
            self.defense,
        )
        .with_hostile(self.hostile);
        match self.reward {
            Some(reward) => creature.with_reward(reward),
            None => creature,
        }
    }
}

/// Build the bundled starter world.
pub fn starter_world() -> CoreResult<World> {
    WorldSpec::starter()?.build()
}
