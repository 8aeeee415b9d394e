pub mod archetypes;
pub mod play;
pub mod simulate;
