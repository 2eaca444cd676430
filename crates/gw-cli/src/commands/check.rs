use std::path::Path;

pub fn run(path: &Path) -> Result<(), String> {
    let world = super::load_world(Some(path))?;
    let start = world.start().map_err(|e| e.to_string())?;
    let creatures: usize = world.rooms().map(|r| r.creatures().len()).sum();

    println!("  All checks passed for '{}'.", world.name());
    println!(
        "  {} rooms, {} items, {} creatures; start: {start}",
        world.room_count(),
        world.item_count(),
        creatures
    );

    Ok(())
}
