//! Combat arithmetic for Grueworks.
//!
//! Rolls strikes for the player and for creatures, applies critical hits
//! and defense mitigation, and resolves one exchange of blows at a time.
//! All randomness flows through a caller-supplied seeded RNG so a session
//! can replay deterministically.

pub mod combat;

pub use combat::{
    CombatRules, Combatant, Exchange, Hit, Strike, exchange, land, mitigate, roll_creature_strike,
    roll_player_strike,
};
