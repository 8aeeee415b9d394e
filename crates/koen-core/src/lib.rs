//! Core types for the Koen text adventure.
//!
//! Provides the player and enemy records, the item catalog with
//! case-insensitive name normalization, and the error type shared by
//! operations that mutate them.

pub mod enemy;
pub mod error;
pub mod item;
pub mod player;

pub use enemy::Enemy;
pub use error::{CoreError, CoreResult};
pub use item::{HEALTH_POTION, Item};
pub use player::Player;
