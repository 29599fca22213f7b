//! Exhaustive two-ply lookahead.
//!
//! Every (own planet with more than one ship) × (foreign planet) pair is
//! simulated from the original snapshot through order, growth, opponent
//! reply and growth, then scored with [`evaluate`]. Branches share nothing
//! mutable with each other or with the snapshot.

use std::time::Instant;

use smallvec::SmallVec;
use tracing::debug;

use crate::core::{GameState, Order, Planet, PlayerId};
use crate::policy::Policy;
use crate::protocol::{ClientResult, Diagnostics};
use crate::sim::{two_ply, BullyOpponent, OpponentModel};

use super::eval::evaluate;
use super::stats::SearchStats;

/// An order together with the score of the state it leads to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoredOrder {
    /// The candidate order.
    pub order: Order,
    /// Evaluation after two plies.
    pub score: f64,
}

/// Lookahead search context.
///
/// Owns the opponent model and the statistics of the last search.
pub struct LookaheadSearch {
    /// Player the search moves for.
    player: PlayerId,

    /// Model of the enemy's reply.
    opponent: Box<dyn OpponentModel>,

    /// Statistics of the last `search` call.
    stats: SearchStats,
}

impl Default for LookaheadSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl LookaheadSearch {
    /// Search for this client against the greedy opponent model.
    #[must_use]
    pub fn new() -> Self {
        Self {
            player: PlayerId::ME,
            opponent: Box::new(BullyOpponent),
            stats: SearchStats::default(),
        }
    }

    /// Set a custom opponent model.
    #[must_use]
    pub fn with_opponent<O: OpponentModel + 'static>(mut self, opponent: O) -> Self {
        self.opponent = Box::new(opponent);
        self
    }

    /// Get statistics from the last `search`.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Pick the best order, or `None` if nothing is eligible.
    ///
    /// Pure: the same state always yields the same order.
    #[must_use]
    pub fn choose(&self, state: &GameState) -> Option<Order> {
        self.choose_scored(state).map(|scored| scored.order)
    }

    /// Pick the best order together with its score.
    #[must_use]
    pub fn choose_scored(&self, state: &GameState) -> Option<ScoredOrder> {
        self.run(state).0
    }

    /// Like `choose`, recording statistics for `stats()`.
    pub fn search(&mut self, state: &GameState) -> Option<Order> {
        let start = Instant::now();
        let (best, mut stats) = self.run(state);
        stats.time_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
        self.stats = stats;

        debug!(
            branches = self.stats.branches,
            sources = self.stats.sources,
            targets = self.stats.targets,
            best_score = ?self.stats.best_score,
            time_us = self.stats.time_us,
            branches_per_second = self.stats.branches_per_second(),
            "lookahead finished"
        );
        best.map(|scored| scored.order)
    }

    fn run(&self, state: &GameState) -> (Option<ScoredOrder>, SearchStats) {
        let sources: SmallVec<[&Planet; 16]> = state
            .planets()
            .filter(|p| p.owner() == self.player && p.ship_count() > 1)
            .collect();
        let targets: SmallVec<[&Planet; 32]> = state
            .planets()
            .filter(|p| p.owner() != self.player)
            .collect();

        let mut stats = SearchStats {
            sources: count(sources.len()),
            targets: count(targets.len()),
            ..SearchStats::default()
        };
        let mut best: Option<ScoredOrder> = None;

        for source in &sources {
            for target in &targets {
                let order = Order::between(source, target);
                let future = two_ply(state, self.player, order, self.opponent.as_ref());
                let score = evaluate(&future);
                stats.branches += 1;

                if best.map_or(true, |b| score > b.score) {
                    best = Some(ScoredOrder { order, score });
                }
            }
        }

        stats.best_score = best.map(|b| b.score);
        (best, stats)
    }
}

fn count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

impl std::fmt::Debug for LookaheadSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookaheadSearch")
            .field("player", &self.player)
            .field("opponent", &self.opponent.name())
            .field("stats", &self.stats)
            .finish()
    }
}

impl Policy for LookaheadSearch {
    fn name(&self) -> &str {
        "LookaheadBot"
    }

    fn do_turn(
        &mut self,
        state: &GameState,
        _diagnostics: &mut Diagnostics<'_>,
    ) -> ClientResult<Option<Order>> {
        Ok(self.search(state))
    }
}
