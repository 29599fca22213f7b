//! Decision policies.
//!
//! A policy looks at one turn's `GameState` and returns at most one order.
//! Policies may write free-form lines to the diagnostic channel.
//!
//! - `EmptyPolicy`: never moves
//! - `BullyPolicy`: strongest own planet attacks the weakest foreign one
//! - `RandomPolicy`: random own planet attacks a random foreign one
//! - `AdaptivePolicy`: picks one of the above per turn from a feature table
//! - `LookaheadSearch` (in `search`): two-ply forward simulation

pub mod adaptive;
pub mod bully;
pub mod empty;
pub mod random;

pub use adaptive::{features, AdaptivePolicy, AdaptivityKey, AdaptivityMap};
pub use bully::BullyPolicy;
pub use empty::EmptyPolicy;
pub use random::RandomPolicy;

use crate::core::{ClientConfig, GameState, Order, PolicyKind};
use crate::protocol::{ClientResult, Diagnostics};
use crate::search::LookaheadSearch;

/// Per-turn decision function.
pub trait Policy {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Decide this turn's order.
    ///
    /// `Ok(None)` means "no order this turn" and is not an error.
    fn do_turn(
        &mut self,
        state: &GameState,
        diagnostics: &mut Diagnostics<'_>,
    ) -> ClientResult<Option<Order>>;
}

/// Build the policy a configuration asks for.
#[must_use]
pub fn build_policy(config: &ClientConfig) -> Box<dyn Policy> {
    match config.policy {
        PolicyKind::Empty => Box::new(EmptyPolicy),
        PolicyKind::Bully => Box::new(BullyPolicy),
        PolicyKind::Random => Box::new(RandomPolicy::new(config.seed)),
        PolicyKind::Lookahead => Box::new(LookaheadSearch::new()),
        PolicyKind::Adaptive => Box::new(AdaptivePolicy::new(config.seed)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_policy_names() {
        let cases = [
            (PolicyKind::Empty, "EmptyBot"),
            (PolicyKind::Bully, "BullyBot"),
            (PolicyKind::Random, "RandomBot"),
            (PolicyKind::Lookahead, "LookaheadBot"),
            (PolicyKind::Adaptive, "AdaptiveBot"),
        ];
        for (kind, name) in cases {
            let policy = build_policy(&ClientConfig::default().with_policy(kind));
            assert_eq!(policy.name(), name);
            assert_eq!(kind.name(), name);
        }
    }
}
