//! One-round combat resolution.
//!
//! A round is the player's action followed, if the enemy still stands and
//! the player has not escaped, by one enemy counter-attack. The caller
//! repeats rounds until the outcome is anything but
//! [`RoundOutcome::Continuing`].

pub mod action;

pub use action::{CombatAction, CombatEvent};

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use koen_core::{Enemy, HEALTH_POTION, Player};

use crate::dice::Roller;
use crate::error::{MechError, MechResult};
use crate::progression::{apply_progression, grant_rewards};

/// Damage range of an unarmed or armed strike, before the weapon bonus.
pub const ATTACK_ROLL: RangeInclusive<u32> = 1..=20;
/// Flat bonus added to strikes while a weapon is equipped.
pub const WEAPON_BONUS: u32 = 5;
/// Health restored by a potion.
pub const POTION_ROLL: RangeInclusive<u32> = 20..=70;
/// Probability that fleeing succeeds.
pub const FLEE_CHANCE: f64 = 0.5;
/// Spread around an enemy's base damage on each counter-attack.
pub const ENEMY_DAMAGE_SPREAD: u32 = 2;

/// How the encounter stands after a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Both sides are still standing.
    Continuing,
    /// The enemy fell; rewards have been granted.
    Victory,
    /// The player fell.
    Defeat,
    /// The player escaped.
    Fled,
}

impl RoundOutcome {
    /// Returns true if the encounter is over.
    pub fn is_over(self) -> bool {
        self != Self::Continuing
    }
}

/// The outcome of a round together with what happened in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// Whether the encounter goes on.
    pub outcome: RoundOutcome,
    /// Events in the order they happened.
    pub events: Vec<CombatEvent>,
}

impl RoundReport {
    fn new(outcome: RoundOutcome, events: Vec<CombatEvent>) -> Self {
        Self { outcome, events }
    }

    /// Total damage the enemy dealt this round.
    pub fn damage_taken(&self) -> u32 {
        self.events
            .iter()
            .map(|e| match e {
                CombatEvent::EnemyHit { damage } => *damage,
                _ => 0,
            })
            .sum()
    }
}

/// Resolve a single round between a live player and a live enemy.
///
/// Fails only if either combatant is already down when the round starts.
pub fn resolve_round<R: Roller + ?Sized>(
    player: &mut Player,
    enemy: &mut Enemy,
    action: CombatAction,
    rng: &mut R,
) -> MechResult<RoundReport> {
    if !player.is_alive() {
        return Err(MechError::PlayerDown(player.name().to_string()));
    }
    if !enemy.is_alive() {
        return Err(MechError::EnemyDefeated(enemy.name.clone()));
    }

    let mut events = Vec::new();

    match action {
        CombatAction::Attack => {
            let mut damage = rng.roll_amount(ATTACK_ROLL);
            if player.equipped_weapon().is_some() {
                damage += WEAPON_BONUS;
            }
            enemy.take_damage(damage);
            events.push(CombatEvent::PlayerHit { damage });
        }
        CombatAction::UseHealthPotion => {
            if !player.remove_item(HEALTH_POTION) {
                tracing::debug!(player = player.name(), "no potion to drink");
                events.push(CombatEvent::NoPotion);
                return Ok(RoundReport::new(RoundOutcome::Continuing, events));
            }
            let healed = player.heal(rng.roll_amount(POTION_ROLL));
            events.push(CombatEvent::PotionUsed { healed });
        }
        CombatAction::Flee => {
            if rng.chance(FLEE_CHANCE) {
                tracing::debug!(player = player.name(), enemy = %enemy.name, "fled");
                events.push(CombatEvent::FleeSucceeded);
                return Ok(RoundReport::new(RoundOutcome::Fled, events));
            }
            events.push(CombatEvent::FleeFailed);
        }
    }

    if enemy.is_alive() {
        let low = enemy.damage.saturating_sub(ENEMY_DAMAGE_SPREAD);
        let high = enemy.damage.saturating_add(ENEMY_DAMAGE_SPREAD);
        let damage = player.take_damage(rng.roll_amount(low..=high));
        events.push(CombatEvent::EnemyHit { damage });
    }

    let outcome = if !player.is_alive() {
        RoundOutcome::Defeat
    } else if !enemy.is_alive() {
        events.push(CombatEvent::Rewarded(grant_rewards(player, enemy)));
        if let Some(up) = apply_progression(player) {
            events.push(CombatEvent::LevelledUp(up));
        }
        RoundOutcome::Victory
    } else {
        RoundOutcome::Continuing
    };

    tracing::debug!(
        %action,
        ?outcome,
        player_health = player.health(),
        enemy_health = enemy.health,
        "round resolved"
    );

    Ok(RoundReport::new(outcome, events))
}
