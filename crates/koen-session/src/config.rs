//! Configuration for a game session.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Tunable parameters of a game session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// RNG seed for reproducible play. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Probability that exploring leads to a fight.
    pub encounter_chance: f64,
    /// Probability of finding a Health Potion after a won or escaped fight.
    pub potion_find_chance: f64,
    /// Health restored by resting in town.
    pub rest_heal: u32,
    /// Consecutive invalid inputs tolerated before the session gives up.
    pub max_invalid_inputs: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            encounter_chance: 0.75,
            potion_find_chance: 0.35,
            rest_heal: 40,
            max_invalid_inputs: 5,
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the encounter chance (clamped to 0.0-1.0).
    pub fn with_encounter_chance(mut self, chance: f64) -> Self {
        self.encounter_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Set the potion find chance (clamped to 0.0-1.0).
    pub fn with_potion_find_chance(mut self, chance: f64) -> Self {
        self.potion_find_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Set the health restored by resting.
    pub fn with_rest_heal(mut self, amount: u32) -> Self {
        self.rest_heal = amount;
        self
    }

    /// Set the invalid input limit (at least 1).
    pub fn with_max_invalid_inputs(mut self, limit: u32) -> Self {
        self.max_invalid_inputs = limit.max(1);
        self
    }

    /// Build the session RNG from the configured seed.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn default_config() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.encounter_chance, 0.75);
        assert_eq!(cfg.potion_find_chance, 0.35);
        assert_eq!(cfg.rest_heal, 40);
        assert_eq!(cfg.max_invalid_inputs, 5);
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default()
            .with_seed(123)
            .with_encounter_chance(0.5)
            .with_potion_find_chance(1.0)
            .with_rest_heal(25)
            .with_max_invalid_inputs(3);
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.encounter_chance, 0.5);
        assert_eq!(cfg.potion_find_chance, 1.0);
        assert_eq!(cfg.rest_heal, 25);
        assert_eq!(cfg.max_invalid_inputs, 3);
    }

    #[test]
    fn values_clamped() {
        let cfg = GameConfig::default()
            .with_encounter_chance(-1.0)
            .with_potion_find_chance(4.0)
            .with_max_invalid_inputs(0);
        assert_eq!(cfg.encounter_chance, 0.0);
        assert_eq!(cfg.potion_find_chance, 1.0);
        assert_eq!(cfg.max_invalid_inputs, 1);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let cfg = GameConfig::default().with_seed(9);
        let a: u64 = cfg.rng().random();
        let b: u64 = cfg.rng().random();
        assert_eq!(a, b);
    }
}
