//! Extension point for item use.

use gw_core::{Item, Player, Room};

use crate::error::ErrorKind;
use crate::outcome::Outcome;

/// Message for items nothing knows how to use.
pub const CANNOT_USE: &str = "You're not sure how to use that right now.";

/// Decides what happens when the player uses an item.
///
/// The session resolves the item first (inventory, then the room), so a
/// hook only ever sees items that are actually within reach.
pub trait ItemUseHook {
    /// React to `use <item>`.
    fn use_item(&mut self, item: &Item, room: &Room, player: &Player) -> Outcome;
}

/// The default hook: nothing has an effect.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoUseEffect;

impl ItemUseHook for NoUseEffect {
    fn use_item(&mut self, _item: &Item, _room: &Room, _player: &Player) -> Outcome {
        Outcome::fail(ErrorKind::InvalidCommand, CANNOT_USE)
    }
}
