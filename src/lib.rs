//! # planet-wars
//!
//! A turn client for the Planet Wars engine protocol.
//!
//! ## Design Principles
//!
//! 1. **Snapshots are values**: a `GameState` is never mutated once handed
//!    to a policy. Simulation returns new states built on persistent
//!    vectors, so branching is cheap and branches never share mutable data.
//!
//! 2. **Pluggable decisions**: the turn loop drives any `Policy`; the
//!    lookahead search drives any `OpponentModel`.
//!
//! 3. **Deterministic**: the lookahead is a pure function of the snapshot,
//!    and randomized policies are seeded.
//!
//! ## Modules
//!
//! - `core`: ownership tags, planets, orders, state, RNG, configuration
//! - `protocol`: text codec, turn loop, diagnostics
//! - `sim`: forward simulation and opponent models
//! - `search`: two-ply lookahead and state evaluation
//! - `policy`: empty, bully, random and adaptive policies

pub mod core;
pub mod policy;
pub mod protocol;
pub mod search;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    ClientConfig, ConfigError, GameRng, GameState, Order, Ownership, ParseErrorMode, Planet,
    PlanetId, PlayerId, PolicyKind, StateError,
};

pub use crate::protocol::{
    parse, serialize_log, serialize_order, serialize_planet, serialize_state, ClientError,
    ClientResult, Diagnostics, GameClient, ParseError, SessionSummary, TurnOutcome,
};

pub use crate::sim::{
    apply_growth, apply_opponent_policy, apply_order, two_ply, BullyOpponent, OpponentModel,
    PassiveOpponent,
};

pub use crate::search::{evaluate, LookaheadSearch, ScoredOrder, SearchStats};

pub use crate::policy::{
    build_policy, AdaptivePolicy, AdaptivityKey, AdaptivityMap, BullyPolicy, EmptyPolicy, Policy,
    RandomPolicy,
};
