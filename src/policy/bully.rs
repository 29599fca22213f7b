//! Strongest-source / weakest-target heuristic.

use tracing::trace;

use crate::core::{GameState, Order};
use crate::protocol::{ClientResult, Diagnostics};
use crate::sim::{strongest_planet, weakest_planet};

use super::Policy;

/// Sends half of our largest garrison (more than one ship) at the foreign
/// planet with the smallest garrison. Earliest planet wins ties.
#[derive(Clone, Copy, Debug, Default)]
pub struct BullyPolicy;

impl BullyPolicy {
    /// The order this policy would issue.
    #[must_use]
    pub fn choose(state: &GameState) -> Option<Order> {
        let source = strongest_planet(state.my_planets())?;
        let destination = weakest_planet(state.not_my_planets())?;
        trace!(
            source = %source.id(),
            destination = %destination.id(),
            "bully picked"
        );
        Some(Order::between(source, destination))
    }
}

impl Policy for BullyPolicy {
    fn name(&self) -> &str {
        "BullyBot"
    }

    fn do_turn(
        &mut self,
        state: &GameState,
        _diagnostics: &mut Diagnostics<'_>,
    ) -> ClientResult<Option<Order>> {
        Ok(Self::choose(state))
    }
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
    fn test_strongest_to_weakest() {
        let s = state(&[(1, 5), (0, 9), (1, 30), (2, 4), (0, 6)]);
        assert_eq!(
            BullyPolicy::choose(&s),
            Some(Order::new(PlanetId::new(2), PlanetId::new(3)))
        );
    }

    #[test]
    fn test_ignores_single_ship_planets() {
        let s = state(&[(1, 1), (2, 0)]);
        assert!(BullyPolicy::choose(&s).is_none());
    }

    #[test]
    fn test_no_foreign_planets() {
        let s = state(&[(1, 10), (1, 4)]);
        assert!(BullyPolicy::choose(&s).is_none());
    }
}
