//! Core client types: ownership tags, planets, orders, state, RNG, configuration.
//!
//! This module holds the data model every other module works on. Nothing
//! here talks to the engine or decides moves.

pub mod config;
pub mod order;
pub mod planet;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{ClientConfig, ConfigError, ParseErrorMode, PolicyKind};
pub use order::Order;
pub use planet::{Planet, PlanetId};
pub use player::{Ownership, PlayerId};
pub use rng::GameRng;
pub use state::{GameState, StateError};
