//! Per-turn policy selection from map features.
//!
//! `features` reduces a state to an `AdaptivityKey`; `AdaptivityMap` turns
//! the key into a `PolicyKind`. Keys outside the table, and kinds this
//! policy cannot run, fall back to a fixed default with a warning on the
//! diagnostic channel.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::core::{GameRng, GameState, Order, PolicyKind};
use crate::protocol::{ClientResult, Diagnostics};

use super::{BullyPolicy, Policy, RandomPolicy};

/// Coarse description of the map used to pick a policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AdaptivityKey {
    /// Number of neutral planets.
    pub neutral_planets: usize,
    /// Integer average growth rate of the neutral planets (0 if none).
    pub average_growth: u32,
}

/// Extract the selection key from a state.
#[must_use]
pub fn features(state: &GameState) -> AdaptivityKey {
    let (count, total) = state
        .neutral_planets()
        .fold((0u32, 0u32), |(n, sum), p| (n + 1, sum.saturating_add(p.growth_rate())));
    let average_growth = if count == 0 { 0 } else { total / count };

    AdaptivityKey {
        neutral_planets: count as usize,
        average_growth,
    }
}

const B: PolicyKind = PolicyKind::Bully;
const R: PolicyKind = PolicyKind::Random;

/// Rows: neutral planet count. Columns: average neutral growth rate 0..=5.
const DEFAULT_TABLE: [[PolicyKind; 6]; 26] = [
    [R, B, B, R, B, B],
    [R, B, B, R, B, B],
    [B, R, B, B, R, B],
    [R, B, B, R, B, R],
    [R, B, B, R, B, B],
    [R, B, R, R, B, R],
    [R, B, B, B, B, B],
    [R, B, B, R, R, R],
    [B, B, R, B, B, B],
    [R, B, B, R, B, R],
    [R, B, B, R, B, B],
    [B, B, R, R, B, R],
    [R, B, B, R, B, B],
    [R, B, B, B, B, B],
    [R, B, B, R, B, R],
    [R, B, B, R, R, B],
    [R, B, R, R, B, R],
    [R, B, B, R, B, B],
    [R, B, B, R, B, B],
    [B, B, B, R, B, R],
    [R, B, R, R, B, B],
    [R, B, B, R, B, B],
    [B, R, B, R, B, R],
    [R, B, B, R, B, B],
    [R, B, B, R, B, B],
    [B, R, B, B, B, B],
];

/// Lookup table from `AdaptivityKey` to policy.
#[derive(Clone, Debug)]
pub struct AdaptivityMap {
    rows: Vec<Vec<PolicyKind>>,
}

impl Default for AdaptivityMap {
    fn default() -> Self {
        Self::from_rows(DEFAULT_TABLE.iter().map(|row| row.to_vec()).collect())
    }
}

impl AdaptivityMap {
    /// Build a table from rows indexed by neutral planet count.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<PolicyKind>>) -> Self {
        Self { rows }
    }

    /// Policy for `key`, or `None` if the table has no entry for it.
    #[must_use]
    pub fn get(&self, key: AdaptivityKey) -> Option<PolicyKind> {
        self.rows
            .get(key.neutral_planets)?
            .get(key.average_growth as usize)
            .copied()
    }
}

/// Runs whichever registered policy the adaptivity map selects this turn.
pub struct AdaptivePolicy {
    map: AdaptivityMap,
    policies: FxHashMap<PolicyKind, Box<dyn Policy>>,
    fallback: PolicyKind,
}

impl AdaptivePolicy {
    /// Default table with bully and random registered, random as fallback.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let mut policies: FxHashMap<PolicyKind, Box<dyn Policy>> = FxHashMap::default();
        policies.insert(PolicyKind::Bully, Box::new(BullyPolicy));
        policies.insert(
            PolicyKind::Random,
            Box::new(RandomPolicy::from_rng(rng.fork())),
        );

        Self {
            map: AdaptivityMap::default(),
            policies,
            fallback: PolicyKind::Random,
        }
    }

    /// Replace the lookup table.
    #[must_use]
    pub fn with_map(mut self, map: AdaptivityMap) -> Self {
        self.map = map;
        self
    }

    /// Register (or replace) the policy run for `kind`.
    #[must_use]
    pub fn with_policy(mut self, kind: PolicyKind, policy: Box<dyn Policy>) -> Self {
        self.policies.insert(kind, policy);
        self
    }

    /// Pick the policy kind for this state, logging any fallback.
    fn select(&self, state: &GameState, diagnostics: &mut Diagnostics<'_>) -> ClientResult<PolicyKind> {
        let key = features(state);
        let kind = match self.map.get(key) {
            Some(kind) if self.policies.contains_key(&kind) => {
                diagnostics.log(&[&kind, &"is going to play this turn"])?;
                kind
            }
            Some(kind) => {
                warn!(?key, wanted = %kind, fallback = %self.fallback, "selected policy not registered");
                diagnostics.log(&[
                    &"WARNING: adaptivity map selected",
                    &kind,
                    &"which this bot cannot run; falling back to",
                    &self.fallback,
                ])?;
                self.fallback
            }
            None => {
                warn!(?key, fallback = %self.fallback, "no adaptivity entry");
                diagnostics.log(&[
                    &"WARNING: no adaptivity entry for",
                    &key.neutral_planets,
                    &"neutral planets with average growth",
                    &key.average_growth,
                    &"- falling back to",
                    &self.fallback,
                ])?;
                self.fallback
            }
        };
        debug!(?key, %kind, "adaptive selection");
        Ok(kind)
    }
}

impl std::fmt::Debug for AdaptivePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdaptivePolicy")
            .field("map", &self.map)
            .field("policies", &self.policies.keys().collect::<Vec<_>>())
            .field("fallback", &self.fallback)
            .finish()
    }
}

impl Policy for AdaptivePolicy {
    fn name(&self) -> &str {
        "AdaptiveBot"
    }

    fn do_turn(
        &mut self,
        state: &GameState,
        diagnostics: &mut Diagnostics<'_>,
    ) -> ClientResult<Option<Order>> {
        let kind = self.select(state, diagnostics)?;
        match self.policies.get_mut(&kind) {
            Some(policy) => policy.do_turn(state, diagnostics),
            // The fallback is registered by every constructor.
            None => Ok(None),
        }
    }
}
