//! Game state: the planets of one snapshot.
//!
//! ## Storage
//!
//! Planets live in an `im::Vector` indexed by `PlanetId`. The vector is a
//! persistent structure, so cloning a state for a simulated branch is O(1)
//! and replacing a planet only copies the touched chunk.
//!
//! Invariant: the planet at index `k` has id `k`. Every constructor checks
//! it, and `replace` writes a planet back at its own id.
//!
//! ## Partitions
//!
//! `my_planets`, `enemy_planets`, `neutral_planets` and `not_my_planets` are
//! recomputed from the vector on every call. Nothing is memoized, so a
//! partition can never go stale after `replace`.

use im::Vector;
use serde::Serialize;
use std::collections::BTreeSet;
use thiserror::Error;

use super::planet::{Planet, PlanetId};
use super::player::{Ownership, PlayerId};

/// Errors raised when a planet sequence breaks the id layout.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StateError {
    /// A planet sits at an index that differs from its id.
    #[error("planet with id {id} found at index {index}")]
    MisplacedPlanet {
        /// Id carried by the planet.
        id: PlanetId,
        /// Position it was inserted at.
        index: usize,
    },
}

/// All planets of one turn, real or simulated.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GameState {
    planets: Vector<Planet>,
}

impl GameState {
    /// Create an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from planets that already carry their ids.
    ///
    /// Fails if any planet's id differs from its position.
    pub fn from_planets(planets: impl IntoIterator<Item = Planet>) -> Result<Self, StateError> {
        let mut state = Self::new();
        for (index, planet) in planets.into_iter().enumerate() {
            if planet.id().index() != index {
                return Err(StateError::MisplacedPlanet {
                    id: planet.id(),
                    index,
                });
            }
            state.planets.push_back(planet);
        }
        Ok(state)
    }

    /// Append a planet, assigning it the next free id.
    pub fn push_planet(
        &mut self,
        owner: PlayerId,
        ship_count: u32,
        growth_rate: u32,
        x: f64,
        y: f64,
    ) -> PlanetId {
        let id = self.next_id();
        self.planets
            .push_back(Planet::new(id, owner, ship_count, growth_rate, x, y));
        id
    }

    fn next_id(&self) -> PlanetId {
        PlanetId::new(u32::try_from(self.planets.len()).unwrap_or(u32::MAX))
    }

    /// Number of planets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.planets.len()
    }

    /// Check if the state holds no planets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    /// Look up a planet by id.
    #[must_use]
    pub fn planet(&self, id: PlanetId) -> Option<&Planet> {
        self.planets.get(id.index())
    }

    /// Write `planet` back at its own id, returning the planet it replaced.
    ///
    /// Returns `None` and leaves the state untouched if the id is unknown.
    pub fn replace(&mut self, planet: Planet) -> Option<Planet> {
        let index = planet.id().index();
        if index >= self.planets.len() {
            return None;
        }
        let previous = self.planets.set(index, planet);
        debug_assert_eq!(previous.id(), planet.id());
        Some(previous)
    }

    /// All planets in id order.
    pub fn planets(&self) -> impl Iterator<Item = &Planet> + '_ {
        self.planets.iter()
    }

    /// Planets whose owner falls in the given class, in id order.
    pub fn planets_with(&self, ownership: Ownership) -> impl Iterator<Item = &Planet> + '_ {
        self.planets
            .iter()
            .filter(move |p| p.owner().ownership() == ownership)
    }

    /// Planets owned by this client.
    pub fn my_planets(&self) -> impl Iterator<Item = &Planet> + '_ {
        self.planets_with(Ownership::Me)
    }

    /// Planets owned by any enemy.
    pub fn enemy_planets(&self) -> impl Iterator<Item = &Planet> + '_ {
        self.planets_with(Ownership::Enemy)
    }

    /// Planets owned by nobody.
    pub fn neutral_planets(&self) -> impl Iterator<Item = &Planet> + '_ {
        self.planets_with(Ownership::Neutral)
    }

    /// Neutral and enemy planets.
    pub fn not_my_planets(&self) -> impl Iterator<Item = &Planet> + '_ {
        self.planets.iter().filter(|p| !p.owner().is_me())
    }

    /// Total garrison of planets owned by exactly `player`.
    #[must_use]
    pub fn num_ships(&self, player: PlayerId) -> u64 {
        self.planets
            .iter()
            .filter(|p| p.owner() == player)
            .map(|p| u64::from(p.ship_count()))
            .sum()
    }

    /// Total garrison of planets in an ownership class.
    #[must_use]
    pub fn ships_of(&self, ownership: Ownership) -> u64 {
        self.planets_with(ownership)
            .map(|p| u64::from(p.ship_count()))
            .sum()
    }

    /// Check if `player` still owns at least one planet.
    #[must_use]
    pub fn is_player_alive(&self, player: PlayerId) -> bool {
        self.planets.iter().any(|p| p.owner() == player)
    }

    /// The single remaining owner, if exactly one is left.
    ///
    /// An empty state reports `PlayerId::NEUTRAL`; a state with two or more
    /// distinct owners (neutral included) has no winner yet.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        let owners: BTreeSet<PlayerId> = self.planets.iter().map(Planet::owner).collect();
        match owners.len() {
            0 => Some(PlayerId::NEUTRAL),
            1 => owners.into_iter().next(),
            _ => None,
        }
    }
}
