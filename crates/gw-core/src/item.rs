use std::fmt;

use serde::{Deserialize, Serialize};

/// Default weight of an item constructed without an explicit weight.
pub const DEFAULT_ITEM_WEIGHT: u32 = 1;

/// The broad category of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    /// Anything without special handling.
    #[default]
    Misc,
    /// Adds its damage to the holder's attacks.
    Weapon,
    /// Adds its defense to the holder's protection.
    Armor,
    /// Opens something, somewhere.
    Key,
    /// Used up when used.
    Consumable,
    /// Needed to finish a quest.
    QuestItem,
}

impl ItemCategory {
    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Misc => "Miscellaneous",
            Self::Weapon => "Weapon",
            Self::Armor => "Armor",
            Self::Key => "Key",
            Self::Consumable => "Consumable",
            Self::QuestItem => "Quest Item",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A physical object that lives in exactly one container.
///
/// Items are deliberately not `Clone`: moving an item between a room and the
/// inventory moves the value itself.
#[derive(Debug, PartialEq, Eq)]
pub struct Item {
    name: String,
    description: String,
    weight: u32,
    takeable: bool,
    category: ItemCategory,
    value: i32,
    damage: u32,
    defense: u32,
}

impl Item {
    /// Create a takeable miscellaneous item of weight 1.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            weight: DEFAULT_ITEM_WEIGHT,
            takeable: true,
            category: ItemCategory::Misc,
            value: 0,
            damage: 0,
            defense: 0,
        }
    }

    /// Set the weight.
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    /// Set whether the item can be picked up.
    pub fn with_takeable(mut self, takeable: bool) -> Self {
        self.takeable = takeable;
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: ItemCategory) -> Self {
        self.category = category;
        self
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text shown when the item is examined.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Weight in pounds.
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Whether the item can be picked up.
    pub fn is_takeable(&self) -> bool {
        self.takeable
    }

    /// The item category.
    pub fn category(&self) -> ItemCategory {
        self.category
    }

    /// Trade value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Bonus damage when carried as a weapon.
    pub fn damage(&self) -> u32 {
        self.damage
    }

    /// Bonus defense when carried as armor.
    pub fn defense(&self) -> u32 {
        self.defense
    }

    /// Set the trade value (world setup only).
    pub fn set_value(&mut self, value: i32) {
        self.value = value;
    }

    /// Set the weapon damage bonus (world setup only).
    pub fn set_damage(&mut self, damage: u32) {
        self.damage = damage;
    }

    /// Set the armor defense bonus (world setup only).
    pub fn set_defense(&mut self, defense: u32) {
        self.defense = defense;
    }

    /// Case-insensitive name comparison.
    pub fn is_named(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }
}

/// Compare two item names the way every container does.
pub fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// An ordered collection of items: a room's floor or a player's pack.
///
/// Insertion order is display order. Lookups return the first item whose
/// name matches, so two items sharing a name shadow each other.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Items(Vec<Item>);

impl Items {
    /// An empty collection.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the collection holds nothing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.0.iter()
    }

    /// Find the first item with the given name.
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.0.iter().find(|item| item.is_named(name))
    }

    /// Position of the first item with the given name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|item| item.is_named(name))
    }

    /// Whether an item with the given name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Display names in order.
    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(|item| item.name.clone()).collect()
    }

    /// Sum of all item weights.
    pub fn total_weight(&self) -> u32 {
        self.0.iter().map(|item| item.weight).sum()
    }

    /// The most recently added item.
    pub fn last(&self) -> Option<&Item> {
        self.0.last()
    }

    pub(crate) fn push(&mut self, item: Item) {
        self.0.push(item);
    }

    pub(crate) fn get(&self, index: usize) -> Option<&Item> {
        self.0.get(index)
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> Item {
        self.0.remove(index)
    }

    pub(crate) fn take(&mut self, name: &str) -> Option<Item> {
        self.position(name).map(|index| self.0.remove(index))
    }

    pub(crate) fn drain(&mut self) -> std::vec::Drain<'_, Item> {
        self.0.drain(..)
    }
}

impl<'a> IntoIterator for &'a Items {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lamp() -> Item {
        Item::new("Brass Lamp", "A brass lantern.").with_weight(3)
    }

    #[test]
    fn defaults() {
        let item = Item::new("leaflet", "A small leaflet.");
        assert_eq!(item.weight(), DEFAULT_ITEM_WEIGHT);
        assert!(item.is_takeable());
        assert_eq!(item.category(), ItemCategory::Misc);
        assert_eq!(item.damage(), 0);
    }

    #[test]
    fn name_match_ignores_case() {
        let item = lamp();
        assert!(item.is_named("brass lamp"));
        assert!(item.is_named("BRASS LAMP"));
        assert!(!item.is_named("lamp"));
    }

    #[test]
    fn setup_stats() {
        let mut sword = Item::new("sword", "Elvish.").with_category(ItemCategory::Weapon);
        sword.set_damage(15);
        sword.set_value(100);
        assert_eq!(sword.damage(), 15);
        assert_eq!(sword.value(), 100);
        assert_eq!(sword.category().label(), "Weapon");
    }

    #[test]
    fn category_labels() {
        assert_eq!(ItemCategory::QuestItem.to_string(), "Quest Item");
        assert_eq!(ItemCategory::Misc.to_string(), "Miscellaneous");
    }

    #[test]
    fn items_take_first_match() {
        let mut items = Items::new();
        items.push(lamp());
        items.push(Item::new("rope", "Sturdy.").with_weight(5));
        assert_eq!(items.total_weight(), 8);

        let taken = items.take("ROPE").unwrap();
        assert_eq!(taken.name(), "rope");
        assert_eq!(items.len(), 1);
        assert!(items.take("rope").is_none());
    }

    #[test]
    fn duplicate_names_shadow() {
        let mut items = Items::new();
        items.push(Item::new("coin", "first"));
        items.push(Item::new("Coin", "second"));
        assert_eq!(items.find("coin").unwrap().description(), "first");
        assert_eq!(items.names(), vec!["coin", "Coin"]);
    }
}
