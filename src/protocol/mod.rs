//! Engine protocol: text codec and the turn loop.
//!
//! ## Overview
//!
//! The engine writes one block of `P` lines per turn, closed by `go`. The
//! client answers with at most one order line followed by `go`. Free-form
//! diagnostics go to a separate channel the engine never reads.
//!
//! ## Usage
//!
//! ```rust
//! use planet_wars::policy::BullyPolicy;
//! use planet_wars::protocol::GameClient;
//!
//! let input = "P 0 0 1 10 2\nP 1 1 2 3 1\ngo\n";
//! let mut output = Vec::new();
//! let mut diagnostics = Vec::new();
//!
//! let mut client = GameClient::new(Box::new(BullyPolicy));
//! client.run(input.as_bytes(), &mut output, &mut diagnostics).unwrap();
//!
//! assert_eq!(String::from_utf8(output).unwrap(), "0 1\ngo\n");
//! ```

pub mod client;
pub mod codec;
pub mod error;

pub use client::{Diagnostics, GameClient, Phase, SessionSummary, TurnOutcome, TurnReader, GO};
pub use codec::{parse, serialize_log, serialize_order, serialize_planet, serialize_state};
pub use error::{ClientError, ClientResult, ParseError};
