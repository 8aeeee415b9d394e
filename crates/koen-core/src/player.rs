//! The player character.

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::item::{normalize_name, same_item};

/// Health a new character starts with.
pub const STARTING_HEALTH: u32 = 100;

/// The player character: vitals, progression, purse, and inventory.
///
/// Fields are private so that `health <= max_health` holds after every
/// mutation and `max_health` never shrinks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    name: String,
    health: u32,
    max_health: u32,
    level: u32,
    experience: u32,
    gold: u32,
    inventory: Vec<String>,
    equipped_weapon: Option<String>,
}

impl Player {
    /// Create a level 1 character at full health with an empty purse.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: STARTING_HEALTH,
            max_health: STARTING_HEALTH,
            level: 1,
            experience: 0,
            gold: 0,
            inventory: Vec::new(),
            equipped_weapon: None,
        }
    }

    /// The character's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current health.
    pub fn health(&self) -> u32 {
        self.health
    }

    /// Maximum health.
    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    /// Current level, starting at 1.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Total experience earned.
    pub fn experience(&self) -> u32 {
        self.experience
    }

    /// Gold (koen) held.
    pub fn gold(&self) -> u32 {
        self.gold
    }

    /// Items carried, in acquisition order.
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    /// The equipped weapon, if any.
    pub fn equipped_weapon(&self) -> Option<&str> {
        self.equipped_weapon.as_deref()
    }

    /// Returns true while health is above zero.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Returns true if health is at its maximum.
    pub fn is_full_health(&self) -> bool {
        self.health == self.max_health
    }

    /// Append an item to the inventory under its canonical name.
    pub fn add_item(&mut self, name: &str) {
        self.inventory.push(normalize_name(name));
    }

    /// Remove the first matching item. Returns false if none was carried.
    pub fn remove_item(&mut self, name: &str) -> bool {
        if let Some(pos) = self.inventory.iter().position(|i| same_item(i, name)) {
            self.inventory.remove(pos);
            true
        } else {
            false
        }
    }

    /// Check whether at least one matching item is carried.
    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.iter().any(|i| same_item(i, name))
    }

    /// Count carried items with the given name.
    pub fn count_item(&self, name: &str) -> usize {
        self.inventory.iter().filter(|i| same_item(i, name)).count()
    }

    /// Equip a weapon by name.
    pub fn equip(&mut self, name: &str) {
        self.equipped_weapon = Some(normalize_name(name));
    }

    /// Restore health, capped at the maximum. Returns the amount restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = self.health.saturating_add(amount).min(self.max_health);
        self.health - before
    }

    /// Apply damage, flooring health at zero. Returns the damage taken.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.health);
        self.health -= taken;
        taken
    }

    /// Add gold to the purse.
    pub fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Pay `amount` gold, failing without change if the purse is short.
    pub fn spend_gold(&mut self, amount: u32) -> CoreResult<()> {
        if self.gold < amount {
            return Err(CoreError::InsufficientGold {
                needed: amount,
                available: self.gold,
            });
        }
        self.gold -= amount;
        Ok(())
    }

    /// Add experience.
    pub fn gain_experience(&mut self, amount: u32) {
        self.experience = self.experience.saturating_add(amount);
    }

    /// Advance one level, raise max health by `health_bonus` and refill health.
    pub fn level_up(&mut self, health_bonus: u32) {
        self.level += 1;
        self.max_health = self.max_health.saturating_add(health_bonus);
        self.health = self.max_health;
    }
}
