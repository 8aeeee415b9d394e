//! Random encounter generation from a fixed bestiary.

use serde::Serialize;

use koen_core::Enemy;

use crate::dice::Roller;

/// Spread applied to an archetype's base health.
pub const HEALTH_VARIANCE: i32 = 5;
/// Spread applied to an archetype's base damage.
pub const DAMAGE_VARIANCE: i32 = 2;

/// A named template of base enemy stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Archetype {
    /// Display name shared by every instance.
    pub name: &'static str,
    /// Base health before variance.
    pub health: i32,
    /// Base damage before variance.
    pub damage: u32,
    /// Gold granted on defeat.
    pub gold_reward: u32,
    /// Experience granted on defeat.
    pub exp_reward: u32,
}

/// The bestiary encounters are drawn from.
pub const ARCHETYPES: [Archetype; 6] = [
    Archetype {
        name: "Goblin",
        health: 30,
        damage: 5,
        gold_reward: 10,
        exp_reward: 20,
    },
    Archetype {
        name: "Skeleton",
        health: 40,
        damage: 8,
        gold_reward: 15,
        exp_reward: 25,
    },
    Archetype {
        name: "Orc",
        health: 60,
        damage: 12,
        gold_reward: 25,
        exp_reward: 25,
    },
    Archetype {
        name: "Dark Wizard",
        health: 45,
        damage: 15,
        gold_reward: 30,
        exp_reward: 40,
    },
    Archetype {
        name: "Cave Troll",
        health: 100,
        damage: 20,
        gold_reward: 50,
        exp_reward: 60,
    },
    Archetype {
        name: "Zombie Army",
        health: 150,
        damage: 30,
        gold_reward: 90,
        exp_reward: 200,
    },
];

impl Archetype {
    /// Create an instance with rolled health and damage variance.
    ///
    /// Both stats are floored at 1.
    pub fn spawn<R: Roller + ?Sized>(&self, rng: &mut R) -> Enemy {
        let health = self
            .health
            .saturating_add(rng.roll(-HEALTH_VARIANCE..=HEALTH_VARIANCE))
            .max(1);
        let damage = self
            .damage
            .saturating_add_signed(rng.roll(-DAMAGE_VARIANCE..=DAMAGE_VARIANCE))
            .max(1);
        Enemy::new(
            self.name,
            health,
            damage,
            self.gold_reward,
            self.exp_reward,
        )
    }
}

/// Pick an archetype uniformly and spawn a fresh enemy from it.
pub fn generate_encounter<R: Roller + ?Sized>(rng: &mut R) -> Enemy {
    let archetype = &ARCHETYPES[rng.pick(ARCHETYPES.len())];
    let enemy = archetype.spawn(rng);
    tracing::debug!(
        name = %enemy.name,
        health = enemy.health,
        damage = enemy.damage,
        "generated encounter"
    );
    enemy
}
