//! Interactive game session for the Koen text adventure.
//!
//! [`GameSession`] turns lines of user input into game actions: the town
//! menu, the shop and blacksmith, resting, exploring, and fighting through
//! the combat resolver from `koen-mechanics`. [`autoplay`] drives the same
//! mechanics without a human for simulations.

pub mod autoplay;
pub mod config;
pub mod error;
pub mod explore;
pub mod session;
pub mod sheet;
pub mod vendor;

pub use autoplay::{SimulationReport, run_simulation};
pub use config::GameConfig;
pub use error::{SessionError, SessionResult};
pub use session::{EncounterTally, GameSession, Mode};
pub use vendor::{BLACKSMITH, Offer, SHOP, Vendor};
