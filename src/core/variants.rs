//! Concrete entity variants.
//!
//! | Variant     | takable | valuable | damaging | blocking |
//! |-------------|---------|----------|----------|----------|
//! | `Key`       | yes     | no       | no       | no       |
//! | `Coin`      | yes     | value    | no       | no       |
//! | `Thornbush` | no      | no       | level    | yes      |
//! | `Wall`      | no      | no       | no       | yes      |
//!
//! Payloads are fixed at construction; there are no setters. Variants are
//! neither `Clone` nor `Deserialize`: `new` is the only way to make one.

use serde::Serialize;

use super::capability::{Capabilities, EntityKind};

/// Opens doors. Takable, nothing else.
#[derive(Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Key;

impl Key {
    #[must_use]
    pub fn new() -> Self {
        tracing::trace!(kind = %EntityKind::Key, "entity created");
        Self
    }
}

impl Default for Key {
    fn default() -> Self {
        Self::new()
    }
}

impl Capabilities for Key {
    fn kind(&self) -> EntityKind {
        EntityKind::Key
    }

    fn is_takable(&self) -> bool {
        true
    }
}

/// A takable, valuable coin.
#[derive(Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Coin {
    value: i32,
}

impl Coin {
    /// Create a coin worth `value`.
    #[must_use]
    pub fn new(value: i32) -> Self {
        tracing::trace!(kind = %EntityKind::Coin, value, "entity created");
        Self { value }
    }
}

impl Capabilities for Coin {
    fn kind(&self) -> EntityKind {
        EntityKind::Coin
    }

    fn is_valuable(&self) -> bool {
        true
    }

    fn value(&self) -> i32 {
        self.value
    }

    fn is_takable(&self) -> bool {
        true
    }
}

/// Blocks movement and hurts whoever touches it.
#[derive(Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Thornbush {
    damage_level: i32,
}

impl Thornbush {
    /// Create a thornbush dealing `damage_level` on contact.
    #[must_use]
    pub fn new(damage_level: i32) -> Self {
        tracing::trace!(kind = %EntityKind::Thornbush, damage_level, "entity created");
        Self { damage_level }
    }
}

impl Capabilities for Thornbush {
    fn kind(&self) -> EntityKind {
        EntityKind::Thornbush
    }

    fn is_damaging(&self) -> bool {
        true
    }

    fn damage_level(&self) -> i32 {
        self.damage_level
    }

    fn is_blocking(&self) -> bool {
        true
    }
}

/// Blocks movement.
#[derive(Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Wall;

impl Wall {
    #[must_use]
    pub fn new() -> Self {
        tracing::trace!(kind = %EntityKind::Wall, "entity created");
        Self
    }
}

impl Default for Wall {
    fn default() -> Self {
        Self::new()
    }
}

impl Capabilities for Wall {
    fn kind(&self) -> EntityKind {
        EntityKind::Wall
    }

    fn is_blocking(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::capability::Capability;

    #[test]
    fn test_key() {
        let key = Key::new();
        assert_eq!(key.kind(), EntityKind::Key);
        assert!(key.is_takable());
        assert!(!key.is_valuable());
        assert!(!key.is_damaging());
        assert!(!key.is_blocking());
        assert_eq!(key.value(), 0);
    }

    #[test]
    fn test_coin() {
        let coin = Coin::new(22);
        assert_eq!(coin.kind(), EntityKind::Coin);
        assert!(coin.is_valuable());
        assert_eq!(coin.value(), 22);
        assert!(coin.is_takable());
        assert!(!coin.is_damaging());
        assert_eq!(coin.damage_level(), 0);
        assert!(!coin.is_blocking());
    }

    #[test]
    fn test_thornbush() {
        let bush = Thornbush::new(2);
        assert_eq!(bush.kind(), EntityKind::Thornbush);
        assert!(bush.is_damaging());
        assert_eq!(bush.damage_level(), 2);
        assert!(bush.is_blocking());
        assert!(!bush.is_takable());
        assert!(!bush.is_valuable());
        assert_eq!(bush.value(), 0);
    }

    #[test]
    fn test_wall() {
        let wall = Wall::new();
        assert_eq!(wall.kind(), EntityKind::Wall);
        assert!(wall.is_blocking());
        assert!(!wall.is_takable());
        assert!(!wall.is_valuable());
        assert!(!wall.is_damaging());
    }

    #[test]
    fn test_capability_lists() {
        assert_eq!(Key::new().capabilities().as_slice(), &[Capability::Takable]);
        assert_eq!(
            Coin::new(1).capabilities().as_slice(),
            &[Capability::Valuable, Capability::Takable]
        );
        assert_eq!(
            Thornbush::new(1).capabilities().as_slice(),
            &[Capability::Damaging, Capability::Blocking]
        );
        assert_eq!(Wall::new().capabilities().as_slice(), &[Capability::Blocking]);
    }

    #[test]
    fn test_negative_payloads_kept_verbatim() {
        assert_eq!(Coin::new(-3).value(), -3);
        assert_eq!(Thornbush::new(0).damage_level(), 0);
        assert!(Thornbush::new(0).is_damaging());
    }
}
