use crate::room::RoomId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building or mutating a world.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested room ID does not exist in the world.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    /// A room with the same ID was already registered.
    #[error("room already exists: \"{0}\"")]
    DuplicateRoom(RoomId),

    /// The world has no rooms at all.
    #[error("world contains no rooms")]
    EmptyWorld,

    /// An exit points at a room that was never registered.
    #[error(
        "exit \"{direction}\" of room \"{room}\" leads to unknown room \"{target}\"{}",
        did_you_mean(.suggestion)
    )]
    UnknownExitTarget {
        /// The room the exit belongs to.
        room: RoomId,
        /// The exit direction.
        direction: String,
        /// The unresolved target ID.
        target: RoomId,
        /// The closest known room ID, if any is similar enough.
        suggestion: Option<String>,
    },

    /// The current room has no exit in the requested direction.
    #[error("no exit \"{0}\"")]
    NoExit(String),

    /// The exit exists but its target room is locked.
    #[error("room \"{0}\" is locked")]
    Locked(RoomId),

    /// No item with this name is in the current room.
    #[error("item not here: {0}")]
    ItemNotFound(String),

    /// No item with this name is in the player's inventory.
    #[error("item not carried: {0}")]
    NotCarried(String),

    /// The item is fixed in place.
    #[error("item cannot be taken: {0}")]
    NotTakeable(String),

    /// Every inventory slot is occupied.
    #[error("inventory is full ({limit} items)")]
    InventoryFull {
        /// The slot limit.
        limit: usize,
    },

    /// Adding the item would exceed the carry limit.
    #[error("too heavy: carrying {carried} of {limit}, item weighs {weight}")]
    TooHeavy {
        /// Weight currently carried.
        carried: u32,
        /// Maximum carry weight.
        limit: u32,
        /// Weight of the rejected item.
        weight: u32,
    },

    /// A saved session does not fit this world.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// World content could not be parsed.
    #[error("invalid world file: {0}")]
    Json(#[from] serde_json::Error),
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|s| format!(" (did you mean \"{s}\"?)"))
        .unwrap_or_default()
}
