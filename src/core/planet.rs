//! Planet identification and the immutable planet record.
//!
//! ## ID Layout
//!
//! Planet IDs are dense: the engine never sends them, so the codec assigns
//! `0..n` in the order `P` lines are accepted. Inside a `GameState` the
//! planet with id `k` always sits at index `k`.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Dense planet identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlanetId(pub u32);

impl PlanetId {
    /// Create a new planet ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Index of this planet inside a `GameState`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for PlanetId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlanetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One planet in a snapshot.
///
/// Planets are values: every change (ships arriving, growth, capture)
/// produces a new `Planet` through the `with_*` methods.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    id: PlanetId,
    owner: PlayerId,
    ship_count: u32,
    growth_rate: u32,
    x: f64,
    y: f64,
}

impl Planet {
    /// Create a new planet.
    #[must_use]
    pub const fn new(
        id: PlanetId,
        owner: PlayerId,
        ship_count: u32,
        growth_rate: u32,
        x: f64,
        y: f64,
    ) -> Self {
        Self {
            id,
            owner,
            ship_count,
            growth_rate,
            x,
            y,
        }
    }

    #[must_use]
    pub const fn id(&self) -> PlanetId {
        self.id
    }

    #[must_use]
    pub const fn owner(&self) -> PlayerId {
        self.owner
    }

    /// Current garrison.
    #[must_use]
    pub const fn ship_count(&self) -> u32 {
        self.ship_count
    }

    /// Ships added per turn while the planet is owned.
    #[must_use]
    pub const fn growth_rate(&self) -> u32 {
        self.growth_rate
    }

    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Copy of this planet with a different owner.
    #[must_use]
    pub const fn with_owner(self, owner: PlayerId) -> Self {
        Self { owner, ..self }
    }

    /// Copy of this planet with a different garrison.
    #[must_use]
    pub const fn with_ship_count(self, ship_count: u32) -> Self {
        Self { ship_count, ..self }
    }
}

impl std::fmt::Display for Planet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Planet(id={}, owner={}, ships={}, growth={}, position=[{:.6}, {:.6}])",
            self.id, self.owner, self.ship_count, self.growth_rate, self.x, self.y
        )
    }
}
