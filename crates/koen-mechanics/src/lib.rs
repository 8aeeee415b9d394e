//! Combat mechanics for the Koen text adventure.
//!
//! Provides the randomness seam ([`Roller`]), the encounter generator,
//! the one-round combat resolver, and the level-up progression rule.

pub mod combat;
pub mod dice;
pub mod encounter;
pub mod error;
pub mod progression;

pub use combat::{CombatAction, CombatEvent, RoundOutcome, RoundReport, resolve_round};
pub use dice::{Roller, ScriptedRoller};
pub use encounter::{ARCHETYPES, Archetype, generate_encounter};
pub use error::{MechError, MechResult};
pub use progression::{LevelUp, Rewards, apply_progression, grant_rewards};
