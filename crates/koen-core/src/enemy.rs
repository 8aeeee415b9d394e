//! Enemies encountered while exploring.

use serde::{Deserialize, Serialize};

/// A hostile creature, created fresh for each encounter.
///
/// Health may drop below zero after a heavy hit; anything at or below
/// zero counts as defeated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    /// Archetype name (e.g. "Goblin").
    pub name: String,
    /// Current health.
    pub health: i32,
    /// Health at creation.
    pub max_health: i32,
    /// Base damage per counter-attack, before per-hit spread.
    pub damage: u32,
    /// Gold granted on defeat.
    pub gold_reward: u32,
    /// Experience granted on defeat.
    pub exp_reward: u32,
}

impl Enemy {
    /// Create an enemy at full health.
    pub fn new(
        name: impl Into<String>,
        health: i32,
        damage: u32,
        gold_reward: u32,
        exp_reward: u32,
    ) -> Self {
        Self {
            name: name.into(),
            health,
            max_health: health,
            damage,
            gold_reward,
            exp_reward,
        }
    }

    /// Returns true while health is above zero.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Subtract damage from health without flooring.
    pub fn take_damage(&mut self, amount: u32) {
        let amount = i32::try_from(amount).unwrap_or(i32::MAX);
        self.health = self.health.saturating_sub(amount);
    }
}

impl std::fmt::Display for Enemy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}/{} HP)", self.name, self.health, self.max_health)
    }
}
