//! Combat actions and round events.

use serde::{Deserialize, Serialize};

use crate::progression::{LevelUp, Rewards};

/// An action the player can take on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatAction {
    /// Strike the enemy.
    Attack,
    /// Drink a Health Potion from the inventory.
    UseHealthPotion,
    /// Try to run away.
    Flee,
}

impl CombatAction {
    /// All actions in menu order.
    pub const ALL: [CombatAction; 3] = [Self::Attack, Self::UseHealthPotion, Self::Flee];

    /// Parse a combat menu entry: its number ("1"-"3") or a keyword.
    pub fn from_menu_code(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" | "attack" => Some(Self::Attack),
            "2" | "potion" | "heal" => Some(Self::UseHealthPotion),
            "3" | "flee" | "run" => Some(Self::Flee),
            _ => None,
        }
    }
}

impl std::fmt::Display for CombatAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Attack => write!(f, "Attack"),
            Self::UseHealthPotion => write!(f, "Use Health Potion"),
            Self::Flee => write!(f, "Try to Run"),
        }
    }
}

/// Something that happened during a round, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatEvent {
    /// The player struck the enemy.
    PlayerHit {
        /// Damage dealt, weapon bonus included.
        damage: u32,
    },
    /// The player drank a potion.
    PotionUsed {
        /// Health actually restored after capping.
        healed: u32,
    },
    /// The player reached for a potion but had none.
    NoPotion,
    /// The player escaped.
    FleeSucceeded,
    /// The player tried to escape and was caught.
    FleeFailed,
    /// The enemy counter-attacked.
    EnemyHit {
        /// Damage taken by the player.
        damage: u32,
    },
    /// The enemy fell and dropped its rewards.
    Rewarded(Rewards),
    /// The player reached a new level.
    LevelledUp(LevelUp),
}

impl CombatEvent {
    /// Narrate the event for the given combatants.
    pub fn describe(&self, player: &str, enemy: &str) -> String {
        match self {
            Self::PlayerHit { damage } => {
                format!("You hit the {enemy} and it lost {damage} HP!")
            }
            Self::PotionUsed { healed } => {
                format!("You drink a Health Potion and recover {healed} HP.")
            }
            Self::NoPotion => "You don't have any health potions!".to_string(),
            Self::FleeSucceeded => format!("You outran the {enemy}!"),
            Self::FleeFailed => format!("The {enemy} has caught up!"),
            Self::EnemyHit { damage } => {
                format!("The {enemy} hits you for {damage} HP!")
            }
            Self::Rewarded(r) => format!(
                "You defeated the {enemy}! You gained {} koen and {} experience.",
                r.gold, r.experience
            ),
            Self::LevelledUp(up) => format!(
                "Congratulations {player}! You reached level {}. Max health is now {} HP.",
                up.level, up.max_health
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_menu_codes() {
        assert_eq!(CombatAction::from_menu_code("1"), Some(CombatAction::Attack));
        assert_eq!(
            CombatAction::from_menu_code(" 2 "),
            Some(CombatAction::UseHealthPotion)
        );
        assert_eq!(CombatAction::from_menu_code("Flee"), Some(CombatAction::Flee));
        assert_eq!(CombatAction::from_menu_code("4"), None);
        assert_eq!(CombatAction::from_menu_code(""), None);
    }

    #[test]
    fn action_display() {
        assert_eq!(CombatAction::Attack.to_string(), "Attack");
        assert_eq!(CombatAction::UseHealthPotion.to_string(), "Use Health Potion");
        assert_eq!(CombatAction::Flee.to_string(), "Try to Run");
    }

    #[test]
    fn describe_events() {
        assert_eq!(
            CombatEvent::PlayerHit { damage: 12 }.describe("Aria", "Goblin"),
            "You hit the Goblin and it lost 12 HP!"
        );
        assert_eq!(
            CombatEvent::Rewarded(Rewards {
                gold: 10,
                experience: 20
            })
            .describe("Aria", "Goblin"),
            "You defeated the Goblin! You gained 10 koen and 20 experience."
        );
        assert!(
            CombatEvent::LevelledUp(LevelUp {
                level: 2,
                max_health: 120
            })
            .describe("Aria", "Goblin")
            .starts_with("Congratulations Aria!")
        );
    }
}
