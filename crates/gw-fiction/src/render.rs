//! Text shown to the player.
//!
//! Everything here is plain text with `\n` line breaks and no trailing
//! newline. Styling is left to whoever writes it out.

use gw_core::{Player, Room};
use gw_mechanics::Combatant;

/// Shown instead of the description in an unlit room.
pub const PITCH_BLACK: &str = "It is pitch black. You are likely to be eaten by a grue.";

/// The command reference printed by `help`.
pub const HELP_TEXT: &str = "\
=== Available Commands ===
Movement: north, south, east, west, up, down (or n, s, e, w, u, d), go <direction>
Actions: look, examine <item>, take <item>, drop <item>, use <item>
Inventory: inventory (or i, inv)
Combat: attack <enemy> (or kill, fight)
Game: score, status, save [slot], load [slot], help, quit
==========================";

/// Name and description of a room, plus its contents when lit.
pub fn room_description(room: &Room) -> String {
    let mut lines = vec![room.name().to_string()];
    if !room.is_lit() {
        lines.push(PITCH_BLACK.to_string());
        return lines.join("\n");
    }
    lines.push(room.description().to_string());

    if !room.items().is_empty() {
        lines.push(format!("You see: {}", room.items().names().join(", ")));
    }
    for creature in room.creatures().iter().filter(|c| c.is_alive()) {
        lines.push(format!("Lurking here: {}", creature.status()));
    }
    let exits = room.exit_directions();
    if !exits.is_empty() {
        lines.push(format!("Exits: {}", exits.join(", ")));
    }
    lines.join("\n")
}

/// The carried items with their weights.
pub fn inventory(player: &Player) -> String {
    if player.inventory().is_empty() {
        return "You are empty-handed.".to_string();
    }
    let mut lines = vec!["You are carrying:".to_string()];
    for item in player.inventory() {
        lines.push(format!("  - {} ({} lbs)", item.name(), item.weight()));
    }
    lines.push(format!(
        "Total weight: {}/{} lbs",
        player.carried_weight(),
        player.max_weight()
    ));
    lines.join("\n")
}

/// The player's status block.
pub fn status(player: &Player) -> String {
    [
        "=== Player Status ===".to_string(),
        format!("Name: {}", player.name()),
        format!("Health: {}", player.vitality()),
        format!("Attack: {}", Combatant::attack_power(player)),
        format!("Defense: {}", Combatant::defense(player)),
        format!(
            "Inventory: {}/{} items",
            player.inventory().len(),
            player.max_items()
        ),
        format!(
            "Weight: {}/{} lbs",
            player.carried_weight(),
            player.max_weight()
        ),
        "=====================".to_string(),
    ]
    .join("\n")
}

/// Score and move count.
pub fn score(score: u32, moves: u32) -> String {
    format!("Current score: {score} points\nMoves taken: {moves}")
}

/// Banner shown when a session starts.
pub fn welcome(world_name: &str) -> String {
    format!(
        "=== {world_name} ===\nWelcome! You are about to embark on a great adventure.\nType 'help' for a list of commands."
    )
}

/// Final lines after the player falls.
pub fn game_over(score: u32, moves: u32) -> String {
    format!("GAME OVER\nYour final score: {score} points in {moves} moves.")
}
