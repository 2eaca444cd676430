use std::path::Path;

pub fn run(world: Option<&Path>, output: Option<&Path>) -> Result<(), String> {
    let spec = super::read_spec(world)?;
    // Export only what would load.
    spec.build().map_err(|e| e.to_string())?;
    let content = spec
        .to_json()
        .map_err(|e| format!("JSON serialization error: {e}"))?;

    if let Some(path) = output {
        std::fs::write(path, format!("{content}\n"))
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        println!("{content}");
    }

    Ok(())
}
