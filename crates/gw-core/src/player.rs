//! The player: location, inventory, capacity counters, and combat stats.

use crate::error::{CoreError, CoreResult};
use crate::item::{Item, ItemCategory, Items};
use crate::room::RoomId;
use crate::vitality::Vitality;

/// Inventory slots available to a new player.
pub const MAX_INVENTORY_SIZE: usize = 10;
/// Carry limit of a new player, in pounds.
pub const MAX_CARRY_WEIGHT: u32 = 100;
/// Starting and maximum health of a new player.
pub const INITIAL_PLAYER_HEALTH: u32 = 100;
/// Unarmed attack power.
pub const BASE_ATTACK_DAMAGE: u32 = 10;
/// Unarmored defense.
pub const BASE_DEFENSE: u32 = 5;

/// The single player of a session.
///
/// `carried_weight` always equals the summed weight of the inventory; the
/// inventory only changes through [`World`](crate::World) transfers and
/// snapshot restores, which keep the two in step.
#[derive(Debug)]
pub struct Player {
    name: String,
    location: RoomId,
    inventory: Items,
    max_items: usize,
    max_weight: u32,
    carried: u32,
    vitality: Vitality,
    attack: u32,
    defense: u32,
}

impl Player {
    /// Create a player standing in `start` with default limits and stats.
    pub fn new(name: impl Into<String>, start: impl Into<RoomId>) -> Self {
        Self {
            name: name.into(),
            location: start.into(),
            inventory: Items::new(),
            max_items: MAX_INVENTORY_SIZE,
            max_weight: MAX_CARRY_WEIGHT,
            carried: 0,
            vitality: Vitality::new(INITIAL_PLAYER_HEALTH),
            attack: BASE_ATTACK_DAMAGE,
            defense: BASE_DEFENSE,
        }
    }

    /// Override the inventory slot and carry weight limits.
    pub fn with_limits(mut self, max_items: usize, max_weight: u32) -> Self {
        self.max_items = max_items;
        self.max_weight = max_weight;
        self
    }

    /// Override health, attack, and defense.
    pub fn with_stats(mut self, max_health: u32, attack: u32, defense: u32) -> Self {
        self.vitality = Vitality::new(max_health);
        self.attack = attack;
        self.defense = defense;
        self
    }

    /// Player name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The room the player stands in.
    pub fn location(&self) -> &RoomId {
        &self.location
    }

    /// Carried items, in pickup order.
    pub fn inventory(&self) -> &Items {
        &self.inventory
    }

    /// Find a carried item by name.
    pub fn item(&self, name: &str) -> Option<&Item> {
        self.inventory.find(name)
    }

    /// Whether an item with this name is carried.
    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.contains(name)
    }

    /// Inventory slot limit.
    pub fn max_items(&self) -> usize {
        self.max_items
    }

    /// Carry weight limit.
    pub fn max_weight(&self) -> u32 {
        self.max_weight
    }

    /// Weight currently carried.
    pub fn carried_weight(&self) -> u32 {
        self.carried
    }

    /// Whether `weight` more pounds fit under the carry limit.
    pub fn can_carry(&self, weight: u32) -> bool {
        self.carried.saturating_add(weight) <= self.max_weight
    }

    /// Health pool.
    pub fn vitality(&self) -> &Vitality {
        &self.vitality
    }

    /// Mutable health pool.
    pub fn vitality_mut(&mut self) -> &mut Vitality {
        &mut self.vitality
    }

    /// Still alive?
    pub fn is_alive(&self) -> bool {
        !self.vitality.is_depleted()
    }

    /// Unarmed attack power.
    pub fn base_attack(&self) -> u32 {
        self.attack
    }

    /// Unarmored defense.
    pub fn base_defense(&self) -> u32 {
        self.defense
    }

    /// Damage bonus of the best carried weapon.
    pub fn weapon_bonus(&self) -> u32 {
        self.best_of(ItemCategory::Weapon, Item::damage)
    }

    /// Defense bonus of the best carried armor.
    pub fn armor_bonus(&self) -> u32 {
        self.best_of(ItemCategory::Armor, Item::defense)
    }

    fn best_of(&self, category: ItemCategory, stat: fn(&Item) -> u32) -> u32 {
        self.inventory
            .iter()
            .filter(|item| item.category() == category)
            .map(stat)
            .max()
            .unwrap_or(0)
    }

    /// Check that an item would fit, without moving anything.
    pub fn check_capacity(&self, item: &Item) -> CoreResult<()> {
        if self.inventory.len() >= self.max_items {
            return Err(CoreError::InventoryFull {
                limit: self.max_items,
            });
        }
        if !self.can_carry(item.weight()) {
            return Err(CoreError::TooHeavy {
                carried: self.carried,
                limit: self.max_weight,
                weight: item.weight(),
            });
        }
        Ok(())
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_location(&mut self, room: RoomId) {
        self.location = room;
    }

    pub(crate) fn receive(&mut self, item: Item) {
        self.carried += item.weight();
        self.inventory.push(item);
    }

    pub(crate) fn release(&mut self, name: &str) -> Option<Item> {
        let item = self.inventory.take(name)?;
        self.carried -= item.weight();
        Some(item)
    }

    pub(crate) fn release_all(&mut self) -> Vec<Item> {
        self.carried = 0;
        self.inventory.drain().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new("Adventurer", "west_of_house")
    }

    #[test]
    fn defaults() {
        let p = player();
        assert_eq!(p.name(), "Adventurer");
        assert_eq!(p.location().as_str(), "west_of_house");
        assert_eq!(p.max_items(), MAX_INVENTORY_SIZE);
        assert_eq!(p.max_weight(), MAX_CARRY_WEIGHT);
        assert_eq!(p.vitality().current(), INITIAL_PLAYER_HEALTH);
        assert_eq!(p.carried_weight(), 0);
        assert!(p.is_alive());
    }

    #[test]
    fn receive_and_release_track_weight() {
        let mut p = player();
        p.receive(Item::new("lamp", "Brass.").with_weight(3));
        p.receive(Item::new("rope", "Coil.").with_weight(5));
        assert_eq!(p.carried_weight(), 8);

        let lamp = p.release("LAMP").unwrap();
        assert_eq!(lamp.name(), "lamp");
        assert_eq!(p.carried_weight(), 5);
        assert!(p.release("lamp").is_none());
        assert_eq!(p.carried_weight(), p.inventory().total_weight());
    }

    #[test]
    fn capacity_by_slots() {
        let mut p = player().with_limits(1, 100);
        p.receive(Item::new("lamp", "Brass."));
        let err = p.check_capacity(&Item::new("rope", "Coil.")).unwrap_err();
        assert!(matches!(err, CoreError::InventoryFull { limit: 1 }));
    }

    #[test]
    fn capacity_by_weight() {
        let p = player().with_limits(10, 4);
        let anvil = Item::new("anvil", "Heavy.").with_weight(5);
        assert!(matches!(
            p.check_capacity(&anvil),
            Err(CoreError::TooHeavy { weight: 5, .. })
        ));
        assert!(p.check_capacity(&Item::new("leaf", "Light.")).is_ok());
    }

    #[test]
    fn exact_limit_fits() {
        let p = player().with_limits(10, 5);
        assert!(p.can_carry(5));
        assert!(!p.can_carry(6));
    }

    #[test]
    fn equipment_bonuses() {
        let mut p = player();
        let mut sword = Item::new("sword", "Elvish.").with_category(ItemCategory::Weapon);
        sword.set_damage(15);
        let mut dagger = Item::new("dagger", "Short.").with_category(ItemCategory::Weapon);
        dagger.set_damage(4);
        let mut mail = Item::new("mail", "Chain.").with_category(ItemCategory::Armor);
        mail.set_defense(3);
        p.receive(dagger);
        p.receive(sword);
        p.receive(mail);
        assert_eq!(p.weapon_bonus(), 15);
        assert_eq!(p.armor_bonus(), 3);
    }
}
