use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(path: Option<&Path>) -> Result<(), String> {
    let world = super::load_world(path)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Name", "Exits", "Items", "Creatures", "Flags"]);

    for room in world.rooms() {
        let exits = room
            .exits()
            .map(|(dir, target)| format!("{dir} -> {target}"))
            .collect::<Vec<_>>()
            .join(", ");
        let items = or_dash(room.items().names().join(", "));
        let creatures = or_dash(
            room.creatures()
                .iter()
                .map(|c| c.name())
                .collect::<Vec<_>>()
                .join(", "),
        );

        let mut flags = Vec::new();
        if !room.is_lit() {
            flags.push("dark");
        }
        if room.is_locked() {
            flags.push("locked");
        }
        if world.start().is_ok_and(|start| start == room.id()) {
            flags.push("start");
        }

        table.add_row(vec![
            room.id().to_string(),
            room.name().to_string(),
            or_dash(exits),
            items,
            creatures,
            or_dash(flags.join(", ")),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} rooms", world.room_count());

    Ok(())
}

fn or_dash(text: String) -> String {
    if text.is_empty() { "-".to_string() } else { text }
}
