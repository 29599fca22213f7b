//! Opponent models for forward simulation.
//!
//! An opponent model answers a simulated state with at most one order for
//! the enemy. The simulator applies it with the source planet's owner tag,
//! so the model never needs to know which enemy it plays.

use crate::core::{GameState, Order, Planet};

/// Predicts the enemy's reply in a simulated state.
pub trait OpponentModel: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// The enemy's order, or `None` if it has no legal or sensible move.
    fn respond(&self, state: &GameState) -> Option<Order>;
}

/// Greedy opponent: strongest enemy planet attacks the weakest non-enemy one.
///
/// This is a modeling assumption about the real opponent, not a guarantee.
#[derive(Clone, Copy, Debug, Default)]
pub struct BullyOpponent;

impl OpponentModel for BullyOpponent {
    fn name(&self) -> &'static str {
        "bully"
    }

    fn respond(&self, state: &GameState) -> Option<Order> {
        let source = strongest_planet(state.enemy_planets())?;
        let destination = weakest_planet(state.planets().filter(|p| !p.owner().is_enemy()))?;
        Some(Order::between(source, destination))
    }
}

/// Opponent that never moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassiveOpponent;

impl OpponentModel for PassiveOpponent {
    fn name(&self) -> &'static str {
        "passive"
    }

    fn respond(&self, _state: &GameState) -> Option<Order> {
        None
    }
}

/// Planet with the strictly largest garrison among those holding more than
/// one ship. The earliest of equal maxima wins.
pub fn strongest_planet<'a>(planets: impl Iterator<Item = &'a Planet>) -> Option<&'a Planet> {
    let mut best: Option<&Planet> = None;
    for planet in planets.filter(|p| p.ship_count() > 1) {
        if best.map_or(true, |b| planet.ship_count() > b.ship_count()) {
            best = Some(planet);
        }
    }
    best
}

/// Planet with the strictly smallest garrison. The earliest of equal minima
/// wins.
pub fn weakest_planet<'a>(planets: impl Iterator<Item = &'a Planet>) -> Option<&'a Planet> {
    let mut best: Option<&Planet> = None;
    for planet in planets {
        if best.map_or(true, |b| planet.ship_count() < b.ship_count()) {
            best = Some(planet);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlanetId, PlayerId};

    fn state(planets: &[(u32, u32)]) -> GameState {
        let mut state = GameState::new();
        for &(owner, ships) in planets {
            state.push_planet(PlayerId::new(owner), ships, 1, 0.0, 0.0);
        }
        state
    }

    #[test]
    fn test_strongest_keeps_first_maximum() {
        let s = state(&[(2, 8), (2, 12), (2, 12)]);
        let best = strongest_planet(s.planets()).unwrap();
        assert_eq!(best.id(), PlanetId::new(1));
    }

    #[test]
    fn test_strongest_skips_single_ship_planets() {
        let s = state(&[(2, 1), (2, 0)]);
        assert!(strongest_planet(s.planets()).is_none());
    }

    #[test]
    fn test_weakest_keeps_first_minimum() {
        let s = state(&[(0, 5), (1, 2), (0, 2)]);
        let best = weakest_planet(s.planets()).unwrap();
        assert_eq!(best.id(), PlanetId::new(1));
    }

    #[test]
    fn test_bully_opponent() {
        let s = state(&[(1, 10), (2, 20), (0, 4), (2, 30)]);
        let order = BullyOpponent.respond(&s).unwrap();
        assert_eq!(order, Order::new(PlanetId::new(3), PlanetId::new(2)));
    }

    #[test]
    fn test_bully_opponent_without_army() {
        let s = state(&[(1, 10), (2, 1), (0, 4)]);
        assert!(BullyOpponent.respond(&s).is_none());
    }

    #[test]
    fn test_bully_opponent_without_target() {
        let s = state(&[(2, 10), (3, 4)]);
        assert!(BullyOpponent.respond(&s).is_none());
    }

    #[test]
    fn test_passive_opponent() {
        let s = state(&[(1, 10), (2, 20)]);
        assert!(PassiveOpponent.respond(&s).is_none());
    }
}
