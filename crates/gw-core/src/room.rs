use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::creature::Creature;
use crate::item::{Item, Items};

/// Stable, globally unique identifier of a room (e.g. `west_of_house`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    /// Wrap an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RoomId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for RoomId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A node in the room graph.
///
/// Exits store target IDs, resolved through the [`World`](crate::World)
/// registry at traversal time.
#[derive(Debug)]
pub struct Room {
    id: RoomId,
    name: String,
    description: String,
    lit: bool,
    locked: bool,
    visited: bool,
    items: Items,
    creatures: Vec<Creature>,
    exits: BTreeMap<String, RoomId>,
}

impl Room {
    /// Create a lit, unlocked, unvisited room with no exits.
    pub fn new(
        id: impl Into<RoomId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            lit: true,
            locked: false,
            visited: false,
            items: Items::new(),
            creatures: Vec::new(),
            exits: BTreeMap::new(),
        }
    }

    /// Room ID.
    pub fn id(&self) -> &RoomId {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Narrative description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the room is lit.
    pub fn is_lit(&self) -> bool {
        self.lit
    }

    /// Whether the room refuses entry.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Whether the player has ever entered.
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// Light or darken the room.
    pub fn set_lit(&mut self, lit: bool) {
        self.lit = lit;
    }

    /// Lock or unlock the room.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Mark the room visited. Returns `true` only on the first call.
    pub fn mark_visited(&mut self) -> bool {
        let first = !self.visited;
        self.visited = true;
        first
    }

    pub(crate) fn restore_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    // -----------------------------------------------------------------------
    // Exits
    // -----------------------------------------------------------------------

    /// Add (or replace) an exit. The direction is stored lower-cased.
    pub fn add_exit(&mut self, direction: &str, target: impl Into<RoomId>) {
        self.exits.insert(direction.to_lowercase(), target.into());
    }

    /// The room an exit leads to (case-insensitive direction).
    pub fn exit(&self, direction: &str) -> Option<&RoomId> {
        self.exits.get(&direction.to_lowercase())
    }

    /// Exit directions, sorted.
    pub fn exit_directions(&self) -> Vec<&str> {
        self.exits.keys().map(String::as_str).collect()
    }

    /// All exits as `(direction, target)` pairs, sorted by direction.
    pub fn exits(&self) -> impl Iterator<Item = (&str, &RoomId)> {
        self.exits.iter().map(|(dir, id)| (dir.as_str(), id))
    }

    // -----------------------------------------------------------------------
    // Contents
    // -----------------------------------------------------------------------

    /// Place an item on the floor (world setup).
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Items on the floor, in display order.
    pub fn items(&self) -> &Items {
        &self.items
    }

    /// Find an item by name.
    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.find(name)
    }

    /// Whether an item with this name lies here.
    pub fn has_item(&self, name: &str) -> bool {
        self.items.contains(name)
    }

    pub(crate) fn items_mut(&mut self) -> &mut Items {
        &mut self.items
    }

    /// Place a creature in the room (world setup).
    pub fn add_creature(&mut self, creature: Creature) {
        self.creatures.push(creature);
    }

    /// Creatures present, in placement order.
    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    /// Find a living creature by name.
    pub fn creature(&self, name: &str) -> Option<&Creature> {
        self.creatures
            .iter()
            .find(|c| c.is_alive() && c.is_named(name))
    }

    /// Find a living creature by name, mutably.
    pub fn creature_mut(&mut self, name: &str) -> Option<&mut Creature> {
        self.creatures
            .iter_mut()
            .find(|c| c.is_alive() && c.is_named(name))
    }

    /// Remove creatures whose health reached zero, returning them.
    pub fn remove_fallen(&mut self) -> Vec<Creature> {
        let (fallen, standing): (Vec<Creature>, Vec<Creature>) =
            self.creatures.drain(..).partition(|c| !c.is_alive());
        self.creatures = standing;
        fallen
    }
}
