//! State evaluation.

use crate::core::{GameState, Ownership};

/// Ratio of own ships to enemy ships, each offset by one.
///
/// The offsets keep the score finite when either side has been wiped out.
/// Neutral garrisons do not count.
#[must_use]
pub fn evaluate(state: &GameState) -> f64 {
    let mine = state.ships_of(Ownership::Me) as f64;
    let enemy = state.ships_of(Ownership::Enemy) as f64;
    (1.0 + mine) / (1.0 + enemy)
}
