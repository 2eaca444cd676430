//! The serializable shape of a session, exchanged with whatever stores it.
//!
//! Only names and flags cross this boundary. Restoring redistributes the
//! world's existing item instances to match the snapshot; items are never
//! created or destroyed.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::item::Item;
use crate::player::Player;
use crate::room::RoomId;
use crate::world::World;

/// Everything needed to put a session back the way it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Player name.
    pub player_name: String,
    /// The room the player stands in.
    pub current_room: RoomId,
    /// Carried item names, in pickup order.
    pub inventory: Vec<String>,
    /// Visited flag per room.
    pub visited: BTreeMap<RoomId, bool>,
    /// Item names per room, in display order.
    pub room_items: BTreeMap<RoomId, Vec<String>>,
    /// Score.
    pub score: u32,
    /// Successful moves.
    pub moves: u32,
    /// Player health.
    pub health: u32,
}

impl SessionSnapshot {
    /// Record the world and player state plus the session counters.
    pub fn capture(world: &World, player: &Player, score: u32, moves: u32) -> Self {
        Self {
            player_name: player.name().to_string(),
            current_room: player.location().clone(),
            inventory: player.inventory().names(),
            visited: world
                .rooms()
                .map(|r| (r.id().clone(), r.is_visited()))
                .collect(),
            room_items: world
                .rooms()
                .map(|r| (r.id().clone(), r.items().names()))
                .collect(),
            score,
            moves,
            health: player.vitality().current(),
        }
    }

    /// Rearrange `world` and `player` to match this snapshot.
    ///
    /// Everything is validated first; on error nothing has changed.
    pub fn apply(&self, world: &mut World, player: &mut Player) -> CoreResult<()> {
        self.validate(world, player)?;
        let placement = self.place(world, player)?;

        // Same order as the pool `place` planned against.
        let mut pool: Vec<Option<Item>> = player.release_all().into_iter().map(Some).collect();
        for (id, _) in &placement.rooms {
            if let Some(room) = world.room_mut(id.as_str()) {
                pool.extend(room.items_mut().drain().map(Some));
            }
        }

        for (id, slots) in &placement.rooms {
            let visited = self.visited.get(id).copied().unwrap_or(false);
            if let Some(room) = world.room_mut(id.as_str()) {
                room.restore_visited(visited);
                for &slot in slots {
                    if let Some(item) = pool.get_mut(slot).and_then(Option::take) {
                        room.items_mut().push(item);
                    }
                }
            }
        }
        for &slot in &placement.inventory {
            if let Some(item) = pool.get_mut(slot).and_then(Option::take) {
                player.receive(item);
            }
        }

        player.set_name(self.player_name.clone());
        player.set_location(self.current_room.clone());
        player.vitality_mut().set(self.health);
        Ok(())
    }

    /// Decide which existing item instance ends up where, and check the
    /// carried weight of that exact assignment.
    ///
    /// Pool slots number the player's items first, then each room's items
    /// in world order. Same-named items are interchangeable, so the pack
    /// takes the lightest matching instance.
    fn place(&self, world: &World, player: &Player) -> CoreResult<Placement> {
        let pool: Vec<&Item> = player
            .inventory()
            .iter()
            .chain(world.rooms().flat_map(|r| r.items().iter()))
            .collect();
        let mut taken = vec![false; pool.len()];

        let inventory: Vec<usize> = self
            .inventory
            .iter()
            .filter_map(|name| claim(&pool, &mut taken, name, true))
            .collect();
        let rooms: Vec<(RoomId, Vec<usize>)> = world
            .rooms()
            .map(|room| {
                let names = self.room_items.get(room.id()).map(Vec::as_slice).unwrap_or(&[]);
                let slots = names
                    .iter()
                    .filter_map(|name| claim(&pool, &mut taken, name, false))
                    .collect();
                (room.id().clone(), slots)
            })
            .collect();

        let weight: u32 = inventory
            .iter()
            .filter_map(|&slot| pool.get(slot))
            .map(|item| item.weight())
            .sum();
        if weight > player.max_weight() {
            return Err(CoreError::InvalidSnapshot(format!(
                "carried weight {weight} exceeds {}",
                player.max_weight()
            )));
        }
        Ok(Placement { rooms, inventory })
    }

    fn validate(&self, world: &World, player: &Player) -> CoreResult<()> {
        world.require(&self.current_room).map_err(|_| {
            CoreError::InvalidSnapshot(format!("unknown room \"{}\"", self.current_room))
        })?;
        if let Some(id) = self
            .visited
            .keys()
            .chain(self.room_items.keys())
            .find(|id| !world.contains(id.as_str()))
        {
            return Err(CoreError::InvalidSnapshot(format!("unknown room \"{id}\"")));
        }

        // Every existing item must be accounted for exactly once.
        let mut expected: HashMap<String, usize> = HashMap::new();
        let existing = world
            .rooms()
            .flat_map(|r| r.items().iter())
            .chain(player.inventory().iter());
        for item in existing {
            *expected.entry(item.name().to_lowercase()).or_default() += 1;
        }
        let mut listed: HashMap<String, usize> = HashMap::new();
        for name in self.room_items.values().flatten().chain(&self.inventory) {
            *listed.entry(name.to_lowercase()).or_default() += 1;
        }
        if let Some(name) = listed.keys().find(|name| !expected.contains_key(*name)) {
            return Err(CoreError::InvalidSnapshot(format!("unknown item \"{name}\"")));
        }
        if let Some((name, _)) = expected
            .iter()
            .find(|(name, count)| listed.get(*name) != Some(*count))
        {
            return Err(CoreError::InvalidSnapshot(format!(
                "item \"{name}\" is not accounted for exactly once"
            )));
        }

        if self.inventory.len() > player.max_items() {
            return Err(CoreError::InvalidSnapshot(format!(
                "{} items exceed the {}-slot inventory",
                self.inventory.len(),
                player.max_items()
            )));
        }
        if self.health > player.vitality().max() {
            return Err(CoreError::InvalidSnapshot(format!(
                "health {} exceeds maximum {}",
                self.health,
                player.vitality().max()
            )));
        }
        Ok(())
    }
}

/// Pool slots assigned to each room, in world order, and to the pack.
struct Placement {
    rooms: Vec<(RoomId, Vec<usize>)>,
    inventory: Vec<usize>,
}

/// Mark a free pool slot holding `name` as taken: the first one, or the
/// lightest when `lightest` is set.
fn claim(pool: &[&Item], taken: &mut [bool], name: &str, lightest: bool) -> Option<usize> {
    let mut free = pool
        .iter()
        .enumerate()
        .filter(|&(slot, item)| !taken[slot] && item.is_named(name));
    let (slot, _) = if lightest {
        free.min_by_key(|(_, item)| item.weight())?
    } else {
        free.next()?
    };
    taken[slot] = true;
    Some(slot)
}
