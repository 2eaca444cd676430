//! Core types for Grueworks: items, rooms, the player, and the room registry.
//!
//! This crate owns the world model that the interpreter mutates. It knows
//! nothing about commands or text output. Build a [`World`] in code or
//! load one from a JSON world file via [`WorldSpec`].

/// World files and the bundled starter world.
pub mod content;
/// Hostile creatures.
pub mod creature;
/// Error types used throughout the crate.
pub mod error;
/// Items and item collections.
pub mod item;
/// The player.
pub mod player;
/// Rooms and room identifiers.
pub mod room;
/// The serializable session shape.
pub mod snapshot;
/// Clamped health pools.
pub mod vitality;
/// The room registry and atomic transfers.
pub mod world;

/// Re-export content types.
pub use content::{CreatureSpec, ItemSpec, RoomSpec, WorldSpec, starter_world};
/// Re-export creature type.
pub use creature::Creature;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export item types.
pub use item::{Item, ItemCategory, Items};
/// Re-export player type.
pub use player::Player;
/// Re-export room types.
pub use room::{Room, RoomId};
/// Re-export snapshot type.
pub use snapshot::SessionSnapshot;
/// Re-export health pool.
pub use vitality::Vitality;
/// Re-export world model types.
pub use world::{Arrival, World};
