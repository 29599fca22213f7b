//! Ownership tags.
//!
//! ## PlayerId
//!
//! The engine tags every planet with an integer owner:
//! - `0`: neutral
//! - `1`: this client
//! - `2..`: an enemy (every value from 2 upwards is treated as "the enemy")
//!
//! ## Ownership
//!
//! Coarse classification of a `PlayerId` used by the state partitions.

use serde::{Deserialize, Serialize};

/// Owner tag as sent by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Nobody owns the planet.
    pub const NEUTRAL: Self = Self(0);

    /// The planet belongs to this client.
    pub const ME: Self = Self(1);

    /// The canonical enemy tag in a two-player game.
    pub const ENEMY: Self = Self(2);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw tag.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this tag is neutral.
    #[must_use]
    pub const fn is_neutral(self) -> bool {
        self.0 == Self::NEUTRAL.0
    }

    /// Check if this tag is this client.
    #[must_use]
    pub const fn is_me(self) -> bool {
        self.0 == Self::ME.0
    }

    /// Check if this tag denotes any enemy.
    #[must_use]
    pub const fn is_enemy(self) -> bool {
        self.0 >= Self::ENEMY.0
    }

    /// Classify the tag.
    #[must_use]
    pub const fn ownership(self) -> Ownership {
        match self.0 {
            0 => Ownership::Neutral,
            1 => Ownership::Me,
            _ => Ownership::Enemy,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PlayerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Coarse ownership class of a planet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ownership {
    /// Owner tag 0.
    Neutral,
    /// Owner tag 1.
    Me,
    /// Owner tag 2 or above.
    Enemy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert!(PlayerId::NEUTRAL.is_neutral());
        assert!(PlayerId::ME.is_me());
        assert!(PlayerId::ENEMY.is_enemy());
        assert!(!PlayerId::ME.is_enemy());
        assert!(!PlayerId::NEUTRAL.is_enemy());
    }

    #[test]
    fn test_every_tag_above_one_is_enemy() {
        for raw in 2..10 {
            let id = PlayerId::new(raw);
            assert!(id.is_enemy());
            assert_eq!(id.ownership(), Ownership::Enemy);
        }
    }

    #[test]
    fn test_ownership() {
        assert_eq!(PlayerId::new(0).ownership(), Ownership::Neutral);
        assert_eq!(PlayerId::new(1).ownership(), Ownership::Me);
        assert_eq!(PlayerId::new(2).ownership(), Ownership::Enemy);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", PlayerId::new(3)), "3");
    }

    #[test]
    fn test_serialization() {
        let id = PlayerId::ENEMY;
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
