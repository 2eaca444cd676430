//! Configuration for a session.

use gw_core::player::{
    BASE_ATTACK_DAMAGE, BASE_DEFENSE, INITIAL_PLAYER_HEALTH, MAX_CARRY_WEIGHT, MAX_INVENTORY_SIZE,
};
use gw_mechanics::CombatRules;

/// Score for picking up an item.
pub const SCORE_ITEM_PICKUP: u32 = 5;
/// Score for entering a room for the first time.
pub const SCORE_ROOM_DISCOVERED: u32 = 10;
/// Score for defeating a creature without its own reward.
pub const SCORE_ENEMY_DEFEATED: u32 = 50;

/// Default name for the player.
pub const DEFAULT_PLAYER_NAME: &str = "Adventurer";

/// Configuration for a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// The player's name.
    pub player_name: String,
    /// Inventory slots.
    pub max_items: usize,
    /// Carry weight limit in pounds.
    pub max_weight: u32,
    /// Starting and maximum health.
    pub max_health: u32,
    /// Base attack power.
    pub attack: u32,
    /// Base defense.
    pub defense: u32,
    /// Score for each item picked up.
    pub pickup_award: u32,
    /// Score for each room discovered.
    pub discovery_award: u32,
    /// Score for each creature defeated.
    pub defeat_award: u32,
    /// Combat roll tuning.
    pub combat: CombatRules,
    /// RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            max_items: MAX_INVENTORY_SIZE,
            max_weight: MAX_CARRY_WEIGHT,
            max_health: INITIAL_PLAYER_HEALTH,
            attack: BASE_ATTACK_DAMAGE,
            defense: BASE_DEFENSE,
            pickup_award: SCORE_ITEM_PICKUP,
            discovery_award: SCORE_ROOM_DISCOVERED,
            defeat_award: SCORE_ENEMY_DEFEATED,
            combat: CombatRules::default(),
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Set the player's name. Blank names keep the default.
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.trim().is_empty() {
            self.player_name = name.trim().to_string();
        }
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of inventory slots.
    pub fn with_inventory_limit(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    /// Set the carry weight limit.
    pub fn with_carry_limit(mut self, max_weight: u32) -> Self {
        self.max_weight = max_weight;
        self
    }

    /// Set the starting health (at least 1).
    pub fn with_health(mut self, max_health: u32) -> Self {
        self.max_health = max_health.max(1);
        self
    }

    /// Set the score awards for pickups, discoveries and victories.
    pub fn with_awards(mut self, pickup: u32, discovery: u32, defeat: u32) -> Self {
        self.pickup_award = pickup;
        self.discovery_award = discovery;
        self.defeat_award = defeat;
        self
    }

    /// Set the combat rules.
    pub fn with_combat(mut self, combat: CombatRules) -> Self {
        self.combat = combat;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.player_name, "Adventurer");
        assert_eq!(cfg.max_items, 10);
        assert_eq!(cfg.max_weight, 100);
        assert_eq!(cfg.max_health, 100);
        assert_eq!(cfg.pickup_award, 5);
        assert_eq!(cfg.discovery_award, 10);
        assert_eq!(cfg.defeat_award, 50);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn builder_methods() {
        let cfg = SessionConfig::default()
            .with_player_name("Zelda")
            .with_seed(7)
            .with_inventory_limit(3)
            .with_carry_limit(20)
            .with_awards(1, 2, 3);
        assert_eq!(cfg.player_name, "Zelda");
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.max_items, 3);
        assert_eq!(cfg.max_weight, 20);
        assert_eq!(
            (cfg.pickup_award, cfg.discovery_award, cfg.defeat_award),
            (1, 2, 3)
        );
    }

    #[test]
    fn blank_name_and_zero_health_rejected() {
        let cfg = SessionConfig::default()
            .with_player_name("   ")
            .with_health(0);
        assert_eq!(cfg.player_name, "Adventurer");
        assert_eq!(cfg.max_health, 1);
    }
}
