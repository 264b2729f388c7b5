//! Hunter contract and the reference hunter.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::game::Treasure;

/// Operations a town needs from the hunter occupying it.
pub trait Hunter {
    /// Display name.
    fn name(&self) -> &str;

    /// Whether the item is currently in the hunter's kit.
    fn has_item(&self, item: &str) -> bool;

    /// Remove an item from the kit. Does nothing if the item is absent.
    fn remove_item_from_kit(&mut self, item: &str);

    /// Current gold balance.
    fn gold(&self) -> i64;

    /// Adjust the gold balance. The implementation decides how to treat
    /// balances that would go negative.
    fn change_gold(&mut self, delta: i64);

    /// Add an item to the kit.
    fn add_item_to_kit(&mut self, item: &str);

    /// Items currently carried, in a stable order.
    fn kit_items(&self) -> Vec<String>;

    /// Record a discovered treasure.
    fn add_treasure(&mut self, treasure: Treasure);
}

/// A straightforward hunter: a name, a purse, a kit and a trophy shelf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Adventurer {
    name: String,
    gold: u32,
    kit: BTreeSet<String>,
    treasures: Vec<Treasure>,
}

impl Adventurer {
    /// Create a hunter with an empty kit.
    #[must_use]
    pub fn new(name: impl Into<String>, gold: u32) -> Self {
        Self {
            name: name.into(),
            gold,
            kit: BTreeSet::new(),
            treasures: Vec::new(),
        }
    }

    /// Create a hunter carrying the given items.
    #[must_use]
    pub fn with_kit<I, S>(name: impl Into<String>, gold: u32, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut hunter = Self::new(name, gold);
        hunter.kit.extend(items.into_iter().map(Into::into));
        hunter
    }

    /// Put an item in the kit. Returns false if it was already there.
    pub fn add_item(&mut self, item: impl Into<String>) -> bool {
        self.kit.insert(item.into())
    }

    /// Gold on hand.
    #[must_use]
    pub const fn purse(&self) -> u32 {
        self.gold
    }

    /// Items carried.
    #[must_use]
    pub fn kit(&self) -> &BTreeSet<String> {
        &self.kit
    }

    /// Treasures collected, in discovery order.
    #[must_use]
    pub fn treasures(&self) -> &[Treasure] {
        &self.treasures
    }

    /// True once a crown, a trophy and a gem have all been collected.
    #[must_use]
    pub fn has_full_collection(&self) -> bool {
        Treasure::ALL.iter().all(|t| self.treasures.contains(t))
    }
}

impl Hunter for Adventurer {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_item(&self, item: &str) -> bool {
        self.kit.contains(item)
    }

    fn remove_item_from_kit(&mut self, item: &str) {
        self.kit.remove(item);
    }

    fn gold(&self) -> i64 {
        i64::from(self.gold)
    }

    /// Gold never drops below zero; a losing brawl takes whatever is left.
    fn change_gold(&mut self, delta: i64) {
        let updated = i64::from(self.gold).saturating_add(delta).max(0);
        self.gold = u32::try_from(updated).unwrap_or(u32::MAX);
    }

    fn add_item_to_kit(&mut self, item: &str) {
        self.kit.insert(item.to_string());
    }

    fn kit_items(&self) -> Vec<String> {
        self.kit.iter().cloned().collect()
    }

    fn add_treasure(&mut self, treasure: Treasure) {
        self.treasures.push(treasure);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adventurer_creation() {
        let hunter = Adventurer::with_kit("Quinn", 25, ["Rope", "Water"]);
        assert_eq!(hunter.name(), "Quinn");
        assert_eq!(hunter.purse(), 25);
        assert!(hunter.has_item("Rope"));
        assert!(hunter.has_item("Water"));
        assert!(!hunter.has_item("Boat"));
        assert!(hunter.treasures().is_empty());
    }

    #[test]
    fn test_remove_missing_item_is_noop() {
        let mut hunter = Adventurer::with_kit("Quinn", 0, ["Rope"]);
        hunter.remove_item_from_kit("Boat");
        assert_eq!(hunter.kit_items(), vec!["Rope".to_string()]);

        hunter.remove_item_from_kit("Rope");
        assert!(hunter.kit().is_empty());
    }

    #[test]
    fn test_gold_saturates_at_zero() {
        let mut hunter = Adventurer::new("Quinn", 5);
        hunter.change_gold(7);
        assert_eq!(hunter.gold(), 12);

        hunter.change_gold(-20);
        assert_eq!(hunter.gold(), 0);
    }

    #[test]
    fn test_full_collection() {
        let mut hunter = Adventurer::new("Quinn", 0);
        hunter.add_treasure(Treasure::Crown);
        hunter.add_treasure(Treasure::Gem);
        assert!(!hunter.has_full_collection());

        hunter.add_treasure(Treasure::Trophy);
        assert!(hunter.has_full_collection());
    }
}
