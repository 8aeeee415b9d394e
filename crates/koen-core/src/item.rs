//! Item catalog and name normalization.
//!
//! Inventories store plain item names. Every name that enters an
//! inventory goes through [`normalize_name`] so that "sword", "SWORD" and
//! "Sword" all land as the same canonical string.

use serde::{Deserialize, Serialize};

/// Canonical name of the healing item consumed in combat.
pub const HEALTH_POTION: &str = "Health Potion";

/// An item known to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Item {
    /// One-handed blade.
    Sword,
    /// Short blade.
    Dagger,
    /// Firearm.
    Pistol,
    /// Off-hand protection. Carried, never equipped.
    Shield,
    /// Restores health when used in combat.
    HealthPotion,
}

impl Item {
    /// Every catalog item, in shop order.
    pub const ALL: [Item; 5] = [
        Self::Sword,
        Self::HealthPotion,
        Self::Shield,
        Self::Dagger,
        Self::Pistol,
    ];

    /// The canonical display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sword => "Sword",
            Self::Dagger => "Dagger",
            Self::Pistol => "Pistol",
            Self::Shield => "Shield",
            Self::HealthPotion => HEALTH_POTION,
        }
    }

    /// Returns true if buying this item equips it.
    pub fn is_weapon(self) -> bool {
        matches!(self, Self::Sword | Self::Dagger | Self::Pistol)
    }

    /// Look up an item by name, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|item| item.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalize an item name to its canonical spelling.
///
/// Unknown names are returned trimmed but otherwise untouched.
pub fn normalize_name(name: &str) -> String {
    match Item::from_name(name) {
        Some(item) => item.name().to_string(),
        None => name.trim().to_string(),
    }
}

/// Case-insensitive comparison of two item names.
pub fn same_item(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}
