//! Forward simulation of orders and growth.
//!
//! Every function takes a state by reference and returns a new one; the
//! input is never touched. Fleets are resolved instantly, without travel
//! time.

use tracing::trace;

use crate::core::{GameState, Order, PlanetId, PlayerId};

use super::opponent::OpponentModel;

/// Apply one order for `player`.
///
/// Half the source's garrison (rounded down) lands on the destination. The
/// destination changes hands only if the attackers strictly outnumber the
/// defenders; a tie leaves it with zero ships and its old owner.
///
/// The state is returned unchanged if either planet is unknown or the source
/// is not owned by `player`. An order from a planet to itself goes through
/// the same arithmetic: the destination result is written last, so the
/// planet ends with `ships - sent`.
#[must_use]
pub fn apply_order(
    state: &GameState,
    player: PlayerId,
    source: PlanetId,
    destination: PlanetId,
) -> GameState {
    let (Some(src), Some(dst)) = (state.planet(source), state.planet(destination)) else {
        return state.clone();
    };
    if src.owner() != player {
        return state.clone();
    }

    let sent = src.ship_count() / 2;
    let new_source = src.with_ship_count(src.ship_count() - sent);
    let new_destination = if sent > dst.ship_count() {
        trace!(%source, %destination, %player, "simulated capture");
        dst.with_owner(player)
            .with_ship_count(sent - dst.ship_count())
    } else {
        dst.with_ship_count(dst.ship_count() - sent)
    };

    let mut next = state.clone();
    next.replace(new_source);
    next.replace(new_destination);
    next
}

/// Apply an `Order` for `player`. See [`apply_order`].
#[must_use]
pub fn apply(state: &GameState, player: PlayerId, order: Order) -> GameState {
    apply_order(state, player, order.source, order.destination)
}

/// One turn of production: every owned planet gains its growth rate.
#[must_use]
pub fn apply_growth(state: &GameState) -> GameState {
    let mut next = state.clone();
    for planet in state.planets().filter(|p| !p.owner().is_neutral()) {
        next.replace(planet.with_ship_count(planet.ship_count().saturating_add(planet.growth_rate())));
    }
    next
}

/// Let the opponent model move once.
///
/// The order is applied with the source planet's owner as the acting
/// player, so the model's choice of enemy planet decides who moves.
#[must_use]
pub fn apply_opponent_policy(state: &GameState, opponent: &dyn OpponentModel) -> GameState {
    let Some(order) = opponent.respond(state) else {
        return state.clone();
    };
    let Some(owner) = state.planet(order.source).map(|p| p.owner()) else {
        return state.clone();
    };
    trace!(model = opponent.name(), %order, "simulated opponent order");
    apply(state, owner, order)
}

/// Two plies: our order, growth, the opponent's reply, growth.
#[must_use]
pub fn two_ply(
    state: &GameState,
    player: PlayerId,
    order: Order,
    opponent: &dyn OpponentModel,
) -> GameState {
    let after_order = apply(state, player, order);
    let after_growth = apply_growth(&after_order);
    let after_reply = apply_opponent_policy(&after_growth, opponent);
    apply_growth(&after_reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{BullyOpponent, PassiveOpponent};

    fn state(planets: &[(u32, u32, u32)]) -> GameState {
        let mut state = GameState::new();
        for &(owner, ships, growth) in planets {
            state.push_planet(PlayerId::new(owner), ships, growth, 0.0, 0.0);
        }
        state
    }

    fn ships(state: &GameState, id: u32) -> u32 {
        state.planet(PlanetId::new(id)).unwrap().ship_count()
    }

    fn owner(state: &GameState, id: u32) -> PlayerId {
        state.planet(PlanetId::new(id)).unwrap().owner()
    }

    #[test]
    fn test_order_against_weaker_planet_captures() {
        let s = state(&[(1, 10, 1), (2, 3, 1)]);
        let next = apply_order(&s, PlayerId::ME, PlanetId::new(0), PlanetId::new(1));

        assert_eq!(ships(&next, 0), 5);
        assert_eq!(owner(&next, 0), PlayerId::ME);
        assert_eq!(ships(&next, 1), 2);
        assert_eq!(owner(&next, 1), PlayerId::ME);
    }

    #[test]
    fn test_order_against_stronger_planet_defends() {
        let s = state(&[(1, 10, 1), (2, 10, 1)]);
        let next = apply_order(&s, PlayerId::ME, PlanetId::new(0), PlanetId::new(1));

        assert_eq!(ships(&next, 0), 5);
        assert_eq!(ships(&next, 1), 5);
        assert_eq!(owner(&next, 1), PlayerId::ENEMY);
    }

    #[test]
    fn test_tie_favors_defender() {
        let s = state(&[(1, 10, 1), (0, 5, 1)]);
        let next = apply_order(&s, PlayerId::ME, PlanetId::new(0), PlanetId::new(1));

        assert_eq!(ships(&next, 1), 0);
        assert_eq!(owner(&next, 1), PlayerId::NEUTRAL);
    }

    #[test]
    fn test_odd_garrison_keeps_larger_half() {
        let s = state(&[(1, 11, 1), (0, 1, 1)]);
        let next = apply_order(&s, PlayerId::ME, PlanetId::new(0), PlanetId::new(1));

        assert_eq!(ships(&next, 0), 6);
        assert_eq!(ships(&next, 1), 4);
    }

    #[test]
    fn test_order_from_foreign_planet_is_noop() {
        let s = state(&[(2, 10, 1), (0, 1, 1)]);
        let next = apply_order(&s, PlayerId::ME, PlanetId::new(0), PlanetId::new(1));
        assert_eq!(next, s);
    }

    #[test]
    fn test_order_with_unknown_planet_is_noop() {
        let s = state(&[(1, 10, 1)]);
        assert_eq!(apply_order(&s, PlayerId::ME, PlanetId::new(4), PlanetId::new(0)), s);
        assert_eq!(apply_order(&s, PlayerId::ME, PlanetId::new(0), PlanetId::new(4)), s);
    }

    #[test]
    fn test_order_to_self_halves_garrison() {
        let s = state(&[(1, 10, 1), (2, 4, 1)]);
        let next = apply_order(&s, PlayerId::ME, PlanetId::new(0), PlanetId::new(0));

        assert_eq!(ships(&next, 0), 5);
        assert_eq!(owner(&next, 0), PlayerId::ME);
        assert_eq!(ships(&next, 1), 4);
    }

    #[test]
    fn test_order_leaves_input_untouched() {
        let s = state(&[(1, 10, 1), (2, 3, 1), (0, 7, 2)]);
        let before = s.clone();
        let next = apply_order(&s, PlayerId::ME, PlanetId::new(0), PlanetId::new(1));

        assert_eq!(s, before);
        assert_eq!(next.planet(PlanetId::new(2)), s.planet(PlanetId::new(2)));
    }

    #[test]
    fn test_growth_skips_neutral() {
        let s = state(&[(0, 5, 3), (1, 5, 2), (2, 5, 4)]);
        let next = apply_growth(&s);

        assert_eq!(ships(&next, 0), 5);
        assert_eq!(ships(&next, 1), 7);
        assert_eq!(ships(&next, 2), 9);
    }

    #[test]
    fn test_opponent_policy_uses_enemy_tag() {
        let s = state(&[(1, 10, 1), (3, 20, 1), (0, 4, 1)]);
        let next = apply_opponent_policy(&s, &BullyOpponent);

        // Strongest enemy (planet 1) sends 10 at the weakest non-enemy (planet 2).
        assert_eq!(ships(&next, 1), 10);
        assert_eq!(owner(&next, 2), PlayerId::new(3));
        assert_eq!(ships(&next, 2), 6);
    }

    #[test]
    fn test_passive_opponent_changes_nothing() {
        let s = state(&[(1, 10, 1), (2, 20, 1)]);
        assert_eq!(apply_opponent_policy(&s, &PassiveOpponent), s);
    }

    #[test]
    fn test_two_ply_sequence() {
        // me: 10 ships (+1), enemy: 6 ships (+2), neutral: 1 ship.
        let s = state(&[(1, 10, 1), (2, 6, 2), (0, 1, 5)]);
        let order = Order::new(PlanetId::new(0), PlanetId::new(2));
        let next = two_ply(&s, PlayerId::ME, order, &BullyOpponent);

        // Order: planet 0 -> 5, planet 2 captured with 4.
        // Growth: 0 -> 6, 1 -> 8, 2 -> 9.
        // Opponent: planet 1 sends 4 at planet 0 (weakest non-enemy, 6 ships) -> 2 left.
        // Growth: 0 -> 3, 1 -> 6, 2 -> 14.
        assert_eq!(ships(&next, 0), 3);
        assert_eq!(owner(&next, 0), PlayerId::ME);
        assert_eq!(ships(&next, 1), 6);
        assert_eq!(ships(&next, 2), 14);
        assert_eq!(owner(&next, 2), PlayerId::ME);
    }
}
