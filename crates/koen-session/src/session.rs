//! Game session management.
//!
//! `GameSession` owns the player, the RNG and the configuration, and
//! processes one line of input at a time against the current [`Mode`].
//! It never reads or writes the terminal; the caller shows [`GameSession::menu`]
//! and the text returned by [`GameSession::process`].

use rand::rngs::StdRng;

use koen_core::{Enemy, HEALTH_POTION, Player};
use koen_mechanics::{CombatAction, Roller, RoundOutcome, generate_encounter, resolve_round};

use crate::config::GameConfig;
use crate::error::{SessionError, SessionResult};
use crate::explore::explore_location;
use crate::sheet::render_stats;
use crate::vendor::{BLACKSMITH, SHOP, Vendor, VendorChoice};

/// Where the player currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// The town menu.
    Town,
    /// Browsing a vendor's wares.
    Trading(&'static Vendor),
    /// Fighting an enemy.
    Combat(Enemy),
    /// The player was defeated.
    GameOver,
    /// The player left the game.
    Exited,
}

/// Running count of finished encounters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncounterTally {
    /// Enemies defeated.
    pub victories: u32,
    /// Fights lost.
    pub defeats: u32,
    /// Fights escaped.
    pub escapes: u32,
}

impl EncounterTally {
    /// Count a finished encounter.
    pub fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Victory => self.victories += 1,
            RoundOutcome::Defeat => self.defeats += 1,
            RoundOutcome::Fled => self.escapes += 1,
            RoundOutcome::Continuing => {}
        }
    }

    /// Total finished encounters.
    pub fn total(&self) -> u32 {
        self.victories + self.defeats + self.escapes
    }
}

/// An interactive game session.
pub struct GameSession {
    player: Player,
    mode: Mode,
    config: GameConfig,
    rng: StdRng,
    invalid_streak: u32,
    tally: EncounterTally,
}

impl GameSession {
    /// Start a session in town with a fresh character.
    pub fn new(name: impl Into<String>, config: GameConfig) -> Self {
        let rng = config.rng();
        Self {
            player: Player::new(name),
            mode: Mode::Town,
            config,
            rng,
            invalid_streak: 0,
            tally: EncounterTally::default(),
        }
    }

    /// Get the player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Get the current mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Get the enemy being fought, if any.
    pub fn enemy(&self) -> Option<&Enemy> {
        match &self.mode {
            Mode::Combat(enemy) => Some(enemy),
            _ => None,
        }
    }

    /// Get the session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get the encounter tally.
    pub fn tally(&self) -> EncounterTally {
        self.tally
    }

    /// Returns true once the player has exited or been defeated.
    pub fn is_finished(&self) -> bool {
        matches!(self.mode, Mode::GameOver | Mode::Exited)
    }

    /// The menu for the current mode.
    pub fn menu(&self) -> String {
        match &self.mode {
            Mode::Town => format!(
                "What would you like to do?\n1. Explore\n2. Visit the shop\n3. Check stats\n4. Visit the blacksmith\n5. Rest (heal {} HP)\n6. Exit",
                self.config.rest_heal
            ),
            Mode::Trading(vendor) => vendor.menu(self.player.gold()),
            Mode::Combat(enemy) => format!(
                "{enemy} | You: {}/{} HP\n1. Attack\n2. Use Health Potion (x{})\n3. Try to Run",
                self.player.health(),
                self.player.max_health(),
                self.player.count_item(HEALTH_POTION),
            ),
            Mode::GameOver | Mode::Exited => String::new(),
        }
    }

    /// Process a line of user input and return a response.
    ///
    /// Invalid choices are reported as [`SessionError::InvalidChoice`]
    /// until `max_invalid_inputs` arrive in a row, at which point the
    /// session gives up with [`SessionError::TooManyInvalidInputs`].
    pub fn process(&mut self, input: &str) -> SessionResult<String> {
        if self.is_finished() {
            return Err(SessionError::SessionOver);
        }

        let result = match self.mode {
            Mode::Town => self.do_town(input),
            Mode::Trading(vendor) => self.do_trade(vendor, input),
            Mode::Combat(_) => self.do_combat(input),
            Mode::GameOver | Mode::Exited => Err(SessionError::SessionOver),
        };

        if let Err(SessionError::InvalidChoice(_)) = &result {
            self.invalid_streak += 1;
            tracing::debug!(streak = self.invalid_streak, "invalid input");
            if self.invalid_streak >= self.config.max_invalid_inputs {
                return Err(SessionError::TooManyInvalidInputs(self.invalid_streak));
            }
        } else {
            self.invalid_streak = 0;
        }
        result
    }

    fn do_town(&mut self, input: &str) -> SessionResult<String> {
        match input.trim().to_lowercase().as_str() {
            "1" | "explore" => Ok(self.do_explore()),
            "2" | "shop" => Ok(self.enter_vendor(&SHOP)),
            "3" | "stats" => Ok(render_stats(&self.player)),
            "4" | "blacksmith" | "forge" => Ok(self.enter_vendor(&BLACKSMITH)),
            "5" | "rest" => Ok(self.do_rest()),
            "6" | "exit" | "quit" | "q" => {
                self.mode = Mode::Exited;
                Ok("Thanks, young adventurer!".to_string())
            }
            _ => Err(invalid(input)),
        }
    }

    fn do_explore(&mut self) -> String {
        let mut out = explore_location(&mut self.rng).to_string();
        if self.rng.chance(self.config.encounter_chance) {
            let enemy = generate_encounter(&mut self.rng);
            tracing::info!(enemy = %enemy.name, health = enemy.health, "encounter started");
            out.push_str(&format!(
                "\nWatch out, {}. The {} appears!",
                self.player.name(),
                enemy.name
            ));
            self.mode = Mode::Combat(enemy);
        }
        out
    }

    fn enter_vendor(&mut self, vendor: &'static Vendor) -> String {
        self.mode = Mode::Trading(vendor);
        format!("Welcome to the {}.", vendor.name)
    }

    fn do_rest(&mut self) -> String {
        if self.player.is_full_health() {
            return format!("{}, you are already at full health!", self.player.name());
        }
        let healed = self.player.heal(self.config.rest_heal);
        format!(
            "You rest and recover {healed} HP. Current health: {}/{}",
            self.player.health(),
            self.player.max_health()
        )
    }

    fn do_trade(&mut self, vendor: &'static Vendor, input: &str) -> SessionResult<String> {
        match vendor.parse_choice(input).ok_or_else(|| invalid(input))? {
            VendorChoice::Leave => {
                self.mode = Mode::Town;
                Ok(format!("You leave the {}.", vendor.name))
            }
            VendorChoice::Buy(offer) => {
                vendor.sell(&mut self.player, offer)?;
                let mut out = format!("Added {} to inventory!", offer.item);
                if offer.item.is_weapon() {
                    out.push_str(&format!(" You equip the {}.", offer.item));
                }
                Ok(out)
            }
        }
    }

    fn do_combat(&mut self, input: &str) -> SessionResult<String> {
        let action = CombatAction::from_menu_code(input).ok_or_else(|| invalid(input))?;
        let Mode::Combat(enemy) = &mut self.mode else {
            return Err(invalid(input));
        };

        let report = resolve_round(&mut self.player, enemy, action, &mut self.rng)?;
        let mut lines: Vec<String> = report
            .events
            .iter()
            .map(|e| e.describe(self.player.name(), &enemy.name))
            .collect();

        self.tally.record(report.outcome);
        match report.outcome {
            RoundOutcome::Continuing => {
                lines.push(format!(
                    "The {enemy}. Your health: {}/{} HP",
                    self.player.health(),
                    self.player.max_health()
                ));
            }
            RoundOutcome::Victory | RoundOutcome::Fled => {
                tracing::info!(enemy = %enemy.name, outcome = ?report.outcome, "encounter ended");
                self.mode = Mode::Town;
                if self.rng.chance(self.config.potion_find_chance) {
                    self.player.add_item(HEALTH_POTION);
                    lines.push(format!(
                        "Congrats, {}, you found a Health Potion!",
                        self.player.name()
                    ));
                }
            }
            RoundOutcome::Defeat => {
                tracing::info!(enemy = %enemy.name, "player defeated");
                lines.push(format!("You have been defeated by the {}!", enemy.name));
                lines.push("Game Over!".to_string());
                lines.push(format!("Final {}", render_stats(&self.player)));
                self.mode = Mode::GameOver;
            }
        }

        Ok(lines.join("\n"))
    }
}

fn invalid(input: &str) -> SessionError {
    SessionError::InvalidChoice(input.trim().to_string())
}
