pub mod check;
pub mod export;
pub mod play;
pub mod rooms;

use std::path::Path;

use gw_core::{World, WorldSpec};

/// Read and parse a world file, or the bundled starter world when no path
/// is given.
fn read_spec(path: Option<&Path>) -> Result<WorldSpec, String> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            WorldSpec::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))
        }
        None => WorldSpec::starter().map_err(|e| format!("starter world: {e}")),
    }
}

/// Read a world file and build the world it describes.
fn load_world(path: Option<&Path>) -> Result<World, String> {
    let spec = read_spec(path)?;
    let source = path.map_or_else(|| "starter world".to_string(), |p| p.display().to_string());
    spec.build().map_err(|e| format!("{source}: {e}"))
}
