//! Forward simulation for lookahead.
//!
//! ## Overview
//!
//! - `apply_order`: resolve one order instantly (no travel time)
//! - `apply_growth`: one turn of production on owned planets
//! - `apply_opponent_policy`: let an `OpponentModel` reply once
//! - `two_ply`: order, growth, reply, growth
//!
//! ```rust
//! use planet_wars::core::{GameState, Order, PlanetId, PlayerId};
//! use planet_wars::sim::{two_ply, BullyOpponent};
//!
//! let mut state = GameState::new();
//! state.push_planet(PlayerId::ME, 10, 1, 0.0, 0.0);
//! state.push_planet(PlayerId::ENEMY, 3, 1, 1.0, 0.0);
//!
//! let order = Order::new(PlanetId::new(0), PlanetId::new(1));
//! let future = two_ply(&state, PlayerId::ME, order, &BullyOpponent);
//!
//! // The original snapshot is untouched.
//! assert_eq!(state.planet(PlanetId::new(1)).unwrap().owner(), PlayerId::ENEMY);
//! assert_eq!(future.planet(PlanetId::new(1)).unwrap().owner(), PlayerId::ME);
//! ```

pub mod forward;
pub mod opponent;

pub use forward::{apply, apply_growth, apply_opponent_policy, apply_order, two_ply};
pub use opponent::{strongest_planet, weakest_planet, BullyOpponent, OpponentModel, PassiveOpponent};
