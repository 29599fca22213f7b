//! Uniformly random source and target.

use smallvec::SmallVec;

use crate::core::{GameRng, GameState, Order, Planet};
use crate::protocol::{ClientResult, Diagnostics};

use super::Policy;

/// Picks a random own planet and a random foreign planet.
///
/// Seeded, so a session is reproducible from the same seed and input.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    /// Create a policy with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Create a policy drawing from an existing RNG stream.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Draw an order without logging.
    pub fn choose(&mut self, state: &GameState) -> Option<Order> {
        let mine: SmallVec<[&Planet; 16]> = state.my_planets().collect();
        let foreign: SmallVec<[&Planet; 32]> = state.not_my_planets().collect();

        let source = self.rng.choose(&mine)?;
        let destination = self.rng.choose(&foreign)?;
        Some(Order::between(source, destination))
    }
}

impl Policy for RandomPolicy {
    fn name(&self) -> &str {
        "RandomBot"
    }

    fn do_turn(
        &mut self,
        state: &GameState,
        diagnostics: &mut Diagnostics<'_>,
    ) -> ClientResult<Option<Order>> {
        diagnostics.log(&[&"I have", &state.my_planets().count(), &"planets."])?;
        Ok(self.choose(state))
    }
}
