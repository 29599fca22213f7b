//! A policy that never moves.

use crate::core::{GameState, Order};
use crate::protocol::{ClientResult, Diagnostics};

use super::Policy;

/// Always passes. Useful as a baseline opponent and for protocol checks.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyPolicy;

impl Policy for EmptyPolicy {
    fn name(&self) -> &str {
        "EmptyBot"
    }

    fn do_turn(
        &mut self,
        _state: &GameState,
        _diagnostics: &mut Diagnostics<'_>,
    ) -> ClientResult<Option<Order>> {
        Ok(None)
    }
}
