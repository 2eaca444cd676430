//! Strike rolls and damage mitigation.

use rand::Rng;
use rand::rngs::StdRng;

/// Chance that a player strike is a critical hit.
pub const CRITICAL_HIT_CHANCE: f64 = 0.2;
/// Damage multiplier of a critical hit.
pub const CRITICAL_HIT_MULTIPLIER: u32 = 2;
/// Creature strikes vary by up to this much either way.
pub const CREATURE_DAMAGE_VARIANCE: u32 = 2;

/// Tunable numbers for combat rolls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombatRules {
    /// Chance (0.0-1.0) that a player strike is critical.
    pub critical_chance: f64,
    /// Damage multiplier on a critical hit.
    pub critical_multiplier: u32,
    /// Maximum deviation of a creature strike from its attack power.
    pub creature_variance: u32,
}

impl Default for CombatRules {
    fn default() -> Self {
        Self {
            critical_chance: CRITICAL_HIT_CHANCE,
            critical_multiplier: CRITICAL_HIT_MULTIPLIER,
            creature_variance: CREATURE_DAMAGE_VARIANCE,
        }
    }
}

/// Raw damage of one blow, before the target's defense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strike {
    /// Damage before mitigation.
    pub raw: u32,
    /// Whether the blow was a critical hit.
    pub critical: bool,
}

/// Roll a player strike: full power, with a chance of a critical hit.
pub fn roll_player_strike(power: u32, rules: &CombatRules, rng: &mut StdRng) -> Strike {
    let critical = rng.random_bool(rules.critical_chance.clamp(0.0, 1.0));
    let raw = if critical {
        power.saturating_mul(rules.critical_multiplier)
    } else {
        power
    };
    Strike { raw, critical }
}

/// Roll a creature strike: power plus or minus the variance, never below 1.
pub fn roll_creature_strike(power: u32, rules: &CombatRules, rng: &mut StdRng) -> Strike {
    let spread = i64::from(rules.creature_variance);
    let variance = rng.random_range(-spread..=spread);
    let raw = (i64::from(power) + variance).max(1);
    Strike {
        raw: u32::try_from(raw).unwrap_or(u32::MAX),
        critical: false,
    }
}

/// Damage left after the target's defense soaks its share (never negative).
pub fn mitigate(raw: u32, defense: u32) -> u32 {
    raw.saturating_sub(defense)
}
