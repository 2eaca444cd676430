//! Where saved sessions go.
//!
//! The session hands a [`SessionSnapshot`] to a [`SaveStore`] and gets one
//! back; how the store encodes it is its own business.

use std::collections::HashMap;

use gw_core::SessionSnapshot;
use thiserror::Error;

/// Slot used when `save` or `load` is given no name.
pub const DEFAULT_SLOT: &str = "quicksave";

/// Errors a save store can report.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Nothing has been saved under this slot.
    #[error("no saved game in slot \"{0}\"")]
    NotFound(String),

    /// The slot name cannot be used.
    #[error("invalid slot name \"{0}\"")]
    InvalidSlot(String),

    /// Reading or writing the backing storage failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be decoded or encoded.
    #[error("malformed save data: {0}")]
    Format(String),
}

/// Storage for session snapshots, keyed by slot name.
pub trait SaveStore {
    /// Store a snapshot, replacing whatever the slot held.
    fn save(&mut self, slot: &str, snapshot: &SessionSnapshot) -> Result<(), PersistError>;

    /// Fetch the snapshot stored in a slot.
    fn load(&self, slot: &str) -> Result<SessionSnapshot, PersistError>;
}

/// A store that keeps snapshots in memory for the life of the process.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    slots: HashMap<String, SessionSnapshot>,
}

impl InMemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// No slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl SaveStore for InMemoryStore {
    fn save(&mut self, slot: &str, snapshot: &SessionSnapshot) -> Result<(), PersistError> {
        self.slots.insert(slot.to_string(), snapshot.clone());
        Ok(())
    }

    fn load(&self, slot: &str) -> Result<SessionSnapshot, PersistError> {
        self.slots
            .get(slot)
            .cloned()
            .ok_or_else(|| PersistError::NotFound(slot.to_string()))
    }
}
