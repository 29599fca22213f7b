//! Order representation: a (source, destination) pair.
//!
//! An order sends half of the source's garrison to the destination. Orders
//! are produced by a policy, serialized once and forgotten.

use serde::{Deserialize, Serialize};

use super::planet::{Planet, PlanetId};

/// A fleet movement order.
///
/// ## Example
///
/// ```
/// use planet_wars::core::{Order, PlanetId};
///
/// let order = Order::new(PlanetId::new(1), PlanetId::new(4));
/// assert_eq!(order.to_string(), "1 4");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    /// Planet the ships leave from.
    pub source: PlanetId,

    /// Planet the ships are sent to.
    pub destination: PlanetId,
}

impl Order {
    /// Create an order between two planet ids.
    #[must_use]
    pub const fn new(source: PlanetId, destination: PlanetId) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Create an order between two planets.
    #[must_use]
    pub const fn between(source: &Planet, destination: &Planet) -> Self {
        Self::new(source.id(), destination.id())
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.source, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    #[test]
    fn test_between_uses_planet_ids() {
        let a = Planet::new(PlanetId::new(2), PlayerId::ME, 10, 1, 0.0, 0.0);
        let b = Planet::new(PlanetId::new(5), PlayerId::ENEMY, 3, 1, 1.0, 1.0);

        let order = Order::between(&a, &b);
        assert_eq!(order.source, PlanetId::new(2));
        assert_eq!(order.destination, PlanetId::new(5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Order::new(PlanetId::new(0), PlanetId::new(12)).to_string(), "0 12");
    }

    #[test]
    fn test_serialization() {
        let order = Order::new(PlanetId::new(3), PlanetId::new(1));
        let json = serde_json::to_string(&order).unwrap();
        let deserialized: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(order, deserialized);
    }
}
