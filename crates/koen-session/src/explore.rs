//! Flavour text for exploring the wilds.

use koen_mechanics::Roller;

/// What the player may stumble upon while exploring.
pub const LOCATION_EVENTS: [&str; 6] = [
    "You found a hidden treasure chest!",
    "You discovered an ancient shrine!",
    "You stumbled upon a mysterious cave!",
    "You found an abandoned camp!",
    "You discovered a peaceful clearing!",
    "You have trespassed into a haunted graveyard!",
];

/// Pick a location event uniformly.
pub fn explore_location<R: Roller + ?Sized>(rng: &mut R) -> &'static str {
    LOCATION_EVENTS[rng.pick(LOCATION_EVENTS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use koen_mechanics::ScriptedRoller;

    #[test]
    fn picks_by_index() {
        let mut rng = ScriptedRoller::new().with_rolls([5, 0]);
        assert_eq!(
            explore_location(&mut rng),
            "You have trespassed into a haunted graveyard!"
        );
        assert_eq!(
            explore_location(&mut rng),
            "You found a hidden treasure chest!"
        );
    }
}
