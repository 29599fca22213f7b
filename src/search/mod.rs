//! Shallow search over candidate orders.
//!
//! ## Overview
//!
//! `LookaheadSearch` tries every (own planet with more than one ship) ×
//! (foreign planet) order, simulates two plies with an opponent model, and
//! keeps the order whose resulting state scores highest under
//! [`evaluate`]. Depth is fixed at two plies; there is no pruning.
//!
//! ## Usage
//!
//! ```rust
//! use planet_wars::core::{GameState, Order, PlanetId, PlayerId};
//! use planet_wars::search::LookaheadSearch;
//!
//! let mut state = GameState::new();
//! state.push_planet(PlayerId::ME, 10, 1, 0.0, 0.0);
//! state.push_planet(PlayerId::ENEMY, 3, 1, 1.0, 0.0);
//!
//! let mut search = LookaheadSearch::new();
//! let order = search.search(&state);
//!
//! assert_eq!(order, Some(Order::new(PlanetId::new(0), PlanetId::new(1))));
//! assert_eq!(search.stats().branches, 1);
//! ```
//!
//! ## Custom Opponents
//!
//! ```rust
//! use planet_wars::search::LookaheadSearch;
//! use planet_wars::sim::PassiveOpponent;
//!
//! let search = LookaheadSearch::new().with_opponent(PassiveOpponent);
//! ```

pub mod eval;
pub mod lookahead;
pub mod stats;

pub use eval::evaluate;
pub use lookahead::{LookaheadSearch, ScoredOrder};
pub use stats::SearchStats;
