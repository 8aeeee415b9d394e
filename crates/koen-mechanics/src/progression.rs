//! Victory rewards and levelling.

use serde::{Deserialize, Serialize};

use koen_core::{Enemy, Player};

/// Experience needed per level: the threshold for level `n` is `n * 100`.
pub const EXPERIENCE_PER_LEVEL: u32 = 100;
/// Max health gained on each level-up.
pub const LEVEL_HEALTH_BONUS: u32 = 20;

/// Gold and experience handed out for a defeated enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rewards {
    /// Gold granted.
    pub gold: u32,
    /// Experience granted.
    pub experience: u32,
}

/// The result of a level-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUp {
    /// The level just reached.
    pub level: u32,
    /// The new maximum (and current) health.
    pub max_health: u32,
}

/// Experience at which a character of `level` advances.
pub fn level_threshold(level: u32) -> u32 {
    level.saturating_mul(EXPERIENCE_PER_LEVEL)
}

/// Grant an enemy's gold and experience rewards to the player.
pub fn grant_rewards(player: &mut Player, enemy: &Enemy) -> Rewards {
    player.add_gold(enemy.gold_reward);
    player.gain_experience(enemy.exp_reward);
    Rewards {
        gold: enemy.gold_reward,
        experience: enemy.exp_reward,
    }
}

/// Advance the player one level if experience has reached the threshold.
///
/// Only a single step is taken per call, even when experience already
/// exceeds the following threshold as well.
pub fn apply_progression(player: &mut Player) -> Option<LevelUp> {
    if player.experience() < level_threshold(player.level()) {
        return None;
    }
    player.level_up(LEVEL_HEALTH_BONUS);
    tracing::info!(
        player = player.name(),
        level = player.level(),
        max_health = player.max_health(),
        "level up"
    );
    Some(LevelUp {
        level: player.level(),
        max_health: player.max_health(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds() {
        assert_eq!(level_threshold(1), 100);
        assert_eq!(level_threshold(4), 400);
    }

    #[test]
    fn rewards_added_once() {
        let mut p = Player::new("Aria");
        let e = Enemy::new("Orc", 60, 12, 25, 25);
        let r = grant_rewards(&mut p, &e);
        assert_eq!(
            r,
            Rewards {
                gold: 25,
                experience: 25
            }
        );
        assert_eq!(p.gold(), 25);
        assert_eq!(p.experience(), 25);
    }

    #[test]
    fn no_level_below_threshold() {
        let mut p = Player::new("Aria");
        p.gain_experience(99);
        assert_eq!(apply_progression(&mut p), None);
        assert_eq!(p.level(), 1);
    }

    #[test]
    fn level_up_at_threshold() {
        let mut p = Player::new("Aria");
        p.take_damage(60);
        p.gain_experience(100);
        let up = apply_progression(&mut p);
        assert_eq!(
            up,
            Some(LevelUp {
                level: 2,
                max_health: 120
            })
        );
        assert_eq!(p.health(), 120);
    }

    #[test]
    fn double_threshold_still_single_step() {
        let mut p = Player::new("Aria");
        p.gain_experience(350);
        assert!(apply_progression(&mut p).is_some());
        assert_eq!(p.level(), 2);
        assert_eq!(p.max_health(), 120);
        assert_eq!(p.experience(), 350);
    }
}
