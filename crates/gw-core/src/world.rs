use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::error::{CoreError, CoreResult};
use crate::item::Item;
use crate::player::Player;
use crate::room::{Room, RoomId};

/// Minimum similarity for a "did you mean" room suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Where the player ended up after a successful move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrival {
    /// The room entered.
    pub room: RoomId,
    /// True if this was the first time the room was entered.
    pub first_visit: bool,
}

/// The room registry. Owns every room; exits refer to rooms by ID.
#[derive(Debug)]
pub struct World {
    name: String,
    start: Option<RoomId>,
    rooms: HashMap<RoomId, Room>,

    // Index
    order: Vec<RoomId>,
}

impl World {
    /// Create an empty world.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: None,
            rooms: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// World name.
    pub fn name(&self) -> &str {
        &self.name
    }

    // -----------------------------------------------------------------------
    // Room registry
    // -----------------------------------------------------------------------

    /// Register a room. The first room added becomes the default start.
    pub fn add_room(&mut self, room: Room) -> CoreResult<()> {
        let id = room.id().clone();
        if self.rooms.contains_key(&id) {
            return Err(CoreError::DuplicateRoom(id));
        }
        if self.start.is_none() {
            self.start = Some(id.clone());
        }
        self.order.push(id.clone());
        self.rooms.insert(id, room);
        Ok(())
    }

    /// Choose the starting room.
    pub fn set_start(&mut self, id: impl Into<RoomId>) -> CoreResult<()> {
        let id = id.into();
        if !self.rooms.contains_key(&id) {
            return Err(CoreError::RoomNotFound(id));
        }
        self.start = Some(id);
        Ok(())
    }

    /// The starting room.
    pub fn start(&self) -> CoreResult<&RoomId> {
        self.start.as_ref().ok_or(CoreError::EmptyWorld)
    }

    /// Look up a room.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Look up a room mutably.
    pub fn room_mut(&mut self, id: &str) -> Option<&mut Room> {
        self.rooms.get_mut(id)
    }

    /// Look up a room or fail with [`CoreError::RoomNotFound`].
    pub fn require(&self, id: &RoomId) -> CoreResult<&Room> {
        self.rooms
            .get(id)
            .ok_or_else(|| CoreError::RoomNotFound(id.clone()))
    }

    fn require_mut(&mut self, id: &RoomId) -> CoreResult<&mut Room> {
        self.rooms
            .get_mut(id)
            .ok_or_else(|| CoreError::RoomNotFound(id.clone()))
    }

    /// Whether a room with this ID exists.
    pub fn contains(&self, id: &str) -> bool {
        self.rooms.contains_key(id)
    }

    /// Rooms in registration order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.order.iter().filter_map(|id| self.rooms.get(id))
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Total number of items lying in rooms.
    pub fn item_count(&self) -> usize {
        self.rooms.values().map(|r| r.items().len()).sum()
    }

    /// Add an exit from one registered room to another.
    pub fn connect(&mut self, from: &str, direction: &str, to: &str) -> CoreResult<()> {
        if !self.rooms.contains_key(to) {
            return Err(CoreError::RoomNotFound(RoomId::new(to)));
        }
        let room = self.require_mut(&RoomId::new(from))?;
        room.add_exit(direction, to);
        Ok(())
    }

    /// Check that every exit leads somewhere and a start room exists.
    pub fn validate(&self) -> CoreResult<()> {
        if self.rooms.is_empty() {
            return Err(CoreError::EmptyWorld);
        }
        for room in self.rooms() {
            for (direction, target) in room.exits() {
                if !self.rooms.contains_key(target) {
                    return Err(CoreError::UnknownExitTarget {
                        room: room.id().clone(),
                        direction: direction.to_string(),
                        target: target.clone(),
                        suggestion: self.suggest_room(target.as_str()),
                    });
                }
            }
        }
        self.start().map(|_| ())
    }

    /// The registered room ID closest to `id`, if any is close enough.
    pub fn suggest_room(&self, id: &str) -> Option<String> {
        self.order
            .iter()
            .map(|known| (known, jaro_winkler(id, known.as_str())))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(known, _)| known.to_string())
    }

    // -----------------------------------------------------------------------
    // Player transitions
    // -----------------------------------------------------------------------

    /// Move the player through an exit of their current room.
    ///
    /// Missing exits and locked targets both leave the player where they
    /// are. The target is marked visited on first entry.
    pub fn travel(&mut self, player: &mut Player, direction: &str) -> CoreResult<Arrival> {
        let target = self
            .require(player.location())?
            .exit(direction)
            .cloned()
            .ok_or_else(|| CoreError::NoExit(direction.to_lowercase()))?;

        let room = self.require_mut(&target)?;
        if room.is_locked() {
            return Err(CoreError::Locked(target));
        }
        let first_visit = room.mark_visited();
        player.set_location(target.clone());
        Ok(Arrival {
            room: target,
            first_visit,
        })
    }

    /// Place the player in a room without traversing an exit.
    pub fn place(&mut self, player: &mut Player, room: &RoomId) -> CoreResult<bool> {
        let first_visit = self.require_mut(room)?.mark_visited();
        player.set_location(room.clone());
        Ok(first_visit)
    }

    // -----------------------------------------------------------------------
    // Item transfers
    // -----------------------------------------------------------------------

    /// Move an item from the player's room into their inventory.
    ///
    /// Every check runs before anything moves: on error the item is still on
    /// the floor at its original position.
    pub fn take_item<'p>(&mut self, player: &'p mut Player, name: &str) -> CoreResult<&'p Item> {
        let room = self.require_mut(&player.location().clone())?;
        let index = room
            .items()
            .position(name)
            .ok_or_else(|| CoreError::ItemNotFound(name.to_string()))?;

        let candidate = room
            .items()
            .get(index)
            .ok_or_else(|| CoreError::ItemNotFound(name.to_string()))?;
        if !candidate.is_takeable() {
            return Err(CoreError::NotTakeable(candidate.name().to_string()));
        }
        player.check_capacity(candidate)?;

        let item = room.items_mut().remove_at(index);
        player.receive(item);
        player
            .inventory()
            .last()
            .ok_or_else(|| CoreError::ItemNotFound(name.to_string()))
    }

    /// Move an item from the player's inventory onto the floor of their room.
    pub fn drop_item(&mut self, player: &mut Player, name: &str) -> CoreResult<&Item> {
        let location = player.location().clone();
        // Resolve the room first so a failed lookup cannot strand the item.
        self.require(&location)?;
        let item = player
            .release(name)
            .ok_or_else(|| CoreError::NotCarried(name.to_string()))?;

        let room = self.require_mut(&location)?;
        room.items_mut().push(item);
        room.items()
            .last()
            .ok_or_else(|| CoreError::NotCarried(name.to_string()))
    }
}
