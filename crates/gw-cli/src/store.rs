//! Save files on disk: one pretty-printed JSON file per slot.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use gw_core::SessionSnapshot;
use gw_fiction::{PersistError, SaveStore};
use serde::{Deserialize, Serialize};

/// Bumped whenever the save file layout changes.
pub const SAVE_FORMAT_VERSION: u32 = 1;

/// What lands in `<slot>.json`.
#[derive(Debug, Serialize, Deserialize)]
struct SaveFile {
    format: u32,
    saved_at: DateTime<Utc>,
    world: String,
    state: SessionSnapshot,
}

/// A [`SaveStore`] writing `<dir>/<slot>.json`.
pub struct JsonFileStore {
    dir: PathBuf,
    world: String,
}

impl JsonFileStore {
    /// Store saves for `world` under `dir`, creating it on first save.
    pub fn new(dir: impl Into<PathBuf>, world: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            world: world.into(),
        }
    }

    fn path(&self, slot: &str) -> Result<PathBuf, PersistError> {
        let valid = !slot.is_empty()
            && slot
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(PersistError::InvalidSlot(slot.to_string()));
        }
        Ok(self.dir.join(format!("{slot}.json")))
    }
}

impl SaveStore for JsonFileStore {
    fn save(&mut self, slot: &str, snapshot: &SessionSnapshot) -> Result<(), PersistError> {
        let path = self.path(slot)?;
        let file = SaveFile {
            format: SAVE_FORMAT_VERSION,
            saved_at: Utc::now(),
            world: self.world.clone(),
            state: snapshot.clone(),
        };
        let json =
            serde_json::to_string_pretty(&file).map_err(|e| PersistError::Format(e.to_string()))?;
        fs::create_dir_all(&self.dir)?;
        fs::write(&path, json)?;
        log::debug!("wrote {}", path.display());
        Ok(())
    }

    fn load(&self, slot: &str) -> Result<SessionSnapshot, PersistError> {
        let path = self.path(slot)?;
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(PersistError::NotFound(slot.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        let file: SaveFile =
            serde_json::from_str(&json).map_err(|e| PersistError::Format(e.to_string()))?;
        if file.format != SAVE_FORMAT_VERSION {
            return Err(PersistError::Format(format!(
                "unsupported save format {}",
                file.format
            )));
        }
        if file.world != self.world {
            return Err(PersistError::Format(format!(
                "save belongs to world \"{}\"",
                file.world
            )));
        }
        log::debug!("read {} (saved {})", path.display(), file.saved_at);
        Ok(file.state)
    }
}
