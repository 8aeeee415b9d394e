//! Non-interactive play for simulations.
//!
//! A fixed policy fights a series of encounters: rest to full between
//! fights, drink a potion when badly hurt, otherwise attack. It never
//! flees, so every encounter ends in victory or defeat.

use koen_core::{HEALTH_POTION, Player};
use koen_mechanics::{
    CombatAction, MechResult, Roller, RoundOutcome, generate_encounter, resolve_round,
};

use crate::config::GameConfig;
use crate::session::EncounterTally;

/// Health fraction under which the policy reaches for a potion.
pub const POTION_THRESHOLD: f64 = 0.3;

/// One finished encounter of a simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncounterSummary {
    /// Enemy archetype fought.
    pub enemy: String,
    /// How it ended.
    pub outcome: RoundOutcome,
    /// Rounds it took.
    pub rounds: u32,
    /// Player health afterwards.
    pub health_after: u32,
}

/// The result of a simulation run.
#[derive(Debug, Clone)]
pub struct SimulationReport {
    /// The character at the end of the run.
    pub player: Player,
    /// Finished encounters, in order.
    pub encounters: Vec<EncounterSummary>,
    /// Outcome counts.
    pub tally: EncounterTally,
}

/// Pick the policy's action for the current state.
pub fn choose_action(player: &Player) -> CombatAction {
    let hurt = f64::from(player.health()) < f64::from(player.max_health()) * POTION_THRESHOLD;
    if hurt && player.has_item(HEALTH_POTION) {
        CombatAction::UseHealthPotion
    } else {
        CombatAction::Attack
    }
}

/// Fight up to `encounters` encounters, stopping at the first defeat.
pub fn run_simulation(
    name: impl Into<String>,
    config: &GameConfig,
    encounters: u32,
) -> MechResult<SimulationReport> {
    let mut rng = config.rng();
    let mut player = Player::new(name);
    let mut summaries = Vec::new();
    let mut tally = EncounterTally::default();

    for _ in 0..encounters {
        while !player.is_full_health() {
            player.heal(config.rest_heal.max(1));
        }

        let summary = fight(&mut player, config, &mut rng)?;
        tally.record(summary.outcome);
        let defeated = summary.outcome == RoundOutcome::Defeat;
        summaries.push(summary);
        if defeated {
            break;
        }
    }

    tracing::info!(
        victories = tally.victories,
        defeats = tally.defeats,
        level = player.level(),
        "simulation finished"
    );

    Ok(SimulationReport {
        player,
        encounters: summaries,
        tally,
    })
}

fn fight<R: Roller + ?Sized>(
    player: &mut Player,
    config: &GameConfig,
    rng: &mut R,
) -> MechResult<EncounterSummary> {
    let mut enemy = generate_encounter(rng);
    let mut rounds = 0;
    let outcome = loop {
        rounds += 1;
        let action = choose_action(player);
        let report = resolve_round(player, &mut enemy, action, rng)?;
        if report.outcome.is_over() {
            break report.outcome;
        }
    };

    if outcome == RoundOutcome::Victory && rng.chance(config.potion_find_chance) {
        player.add_item(HEALTH_POTION);
    }

    Ok(EncounterSummary {
        enemy: enemy.name,
        outcome,
        rounds,
        health_after: player.health(),
    })
}

#[cfg(test)]
mod tests {
    use koen_mechanics::ScriptedRoller;

    use super::*;

    fn two_hit_goblin(find_potion: bool) -> ScriptedRoller {
        ScriptedRoller::new()
            .with_rolls([0, 0, 0, 20, 5, 20])
            .with_chances([find_potion])
    }

    #[test]
    fn policy_drinks_when_hurt() {
        let mut p = Player::new("Bot");
        assert_eq!(choose_action(&p), CombatAction::Attack);
        p.take_damage(75);
        assert_eq!(choose_action(&p), CombatAction::Attack);
        p.add_item(HEALTH_POTION);
        assert_eq!(choose_action(&p), CombatAction::UseHealthPotion);
        p.heal(10);
        assert_eq!(choose_action(&p), CombatAction::Attack);
    }

    #[test]
    fn simulation_is_deterministic() {
        let cfg = GameConfig::default().with_seed(11);
        let a = run_simulation("Bot", &cfg, 10).unwrap();
        let b = run_simulation("Bot", &cfg, 10).unwrap();
        assert_eq!(a.encounters, b.encounters);
        assert_eq!(a.player, b.player);
    }

    #[test]
    fn simulation_stops_at_first_defeat() {
        let cfg = GameConfig::default().with_seed(5);
        let report = run_simulation("Bot", &cfg, 200).unwrap();
        let defeats: Vec<_> = report
            .encounters
            .iter()
            .enumerate()
            .filter(|(_, e)| e.outcome == RoundOutcome::Defeat)
            .map(|(i, _)| i)
            .collect();
        assert!(defeats.len() <= 1);
        if let Some(&i) = defeats.first() {
            assert_eq!(i, report.encounters.len() - 1);
            assert!(!report.player.is_alive());
        }
        assert_eq!(report.tally.total() as usize, report.encounters.len());
    }

    #[test]
    fn tally_matches_rewards() {
        let cfg = GameConfig::default().with_seed(21);
        let report = run_simulation("Bot", &cfg, 5).unwrap();
        assert_eq!(report.tally.escapes, 0);
        if report.tally.victories > 0 {
            assert!(report.player.gold() > 0);
            assert!(report.player.experience() > 0);
        }
    }

    #[test]
    fn zero_encounters() {
        let report = run_simulation("Bot", &GameConfig::default().with_seed(1), 0).unwrap();
        assert!(report.encounters.is_empty());
        assert_eq!(report.player.level(), 1);
    }

    #[test]
    fn victory_rolls_for_a_potion() {
        let cfg = GameConfig::default();
        let mut player = Player::new("Bot");
        let summary = fight(&mut player, &cfg, &mut two_hit_goblin(true)).unwrap();
        assert_eq!(summary.outcome, RoundOutcome::Victory);
        assert_eq!(summary.rounds, 2);
        assert_eq!(summary.health_after, 95);
        assert_eq!(player.count_item(HEALTH_POTION), 1);

        let mut player = Player::new("Bot");
        fight(&mut player, &cfg, &mut two_hit_goblin(false)).unwrap();
        assert_eq!(player.count_item(HEALTH_POTION), 0);
    }

    #[test]
    fn no_potions_without_find_chance() {
        let cfg = GameConfig::default()
            .with_seed(11)
            .with_potion_find_chance(0.0);
        let report = run_simulation("Bot", &cfg, 10).unwrap();
        assert!(!report.player.has_item(HEALTH_POTION));
    }
}
