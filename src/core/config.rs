//! Client configuration.
//!
//! `ClientConfig` decides which policy plays, how randomized policies are
//! seeded, and what the turn loop does with a malformed block. It can be
//! built in code, loaded from a JSON file, or assembled from CLI flags.

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Available decision policies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    /// Never issues an order.
    Empty,
    /// Strongest own planet attacks the weakest foreign planet.
    Bully,
    /// Uniformly random source and destination.
    Random,
    /// Two-ply forward simulation against a greedy opponent.
    Lookahead,
    /// Picks bully or random each turn from a feature table.
    Adaptive,
}

impl PolicyKind {
    /// Stable display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PolicyKind::Empty => "EmptyBot",
            PolicyKind::Bully => "BullyBot",
            PolicyKind::Random => "RandomBot",
            PolicyKind::Lookahead => "LookaheadBot",
            PolicyKind::Adaptive => "AdaptiveBot",
        }
    }
}

impl std::fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What the turn loop does when a block fails to parse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ParseErrorMode {
    /// Stop the session with an error.
    #[default]
    Abort,
    /// Log a warning and answer the turn with a bare `go`.
    SkipTurn,
}

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid configuration JSON.
    #[error("invalid config file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Client configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Policy deciding each turn's order.
    pub policy: PolicyKind,

    /// Seed for randomized policies.
    /// Same seed produces the same sequence of orders.
    pub seed: u64,

    /// Reaction to a malformed game-state block.
    pub on_parse_error: ParseErrorMode,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            policy: PolicyKind::Lookahead,
            seed: 42,
            on_parse_error: ParseErrorMode::Abort,
        }
    }
}

impl ClientConfig {
    /// Load a configuration from a JSON file. Missing fields keep defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Create a new config with a different policy.
    #[must_use]
    pub fn with_policy(mut self, policy: PolicyKind) -> Self {
        self.policy = policy;
        self
    }

    /// Create a new config with a different seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a different parse error mode.
    #[must_use]
    pub fn with_parse_error_mode(mut self, mode: ParseErrorMode) -> Self {
        self.on_parse_error = mode;
        self
    }
}
