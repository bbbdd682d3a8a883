//! Capability queries shared by every entity variant.
//!
//! A capability is a boolean-gated behavior, sometimes with an associated
//! number:
//!
//! - `Valuable`: worth `value()` when collected
//! - `Takable`: can be picked up into an inventory
//! - `Damaging`: hurts by `damage_level()` on contact
//! - `Blocking`: cannot be walked through
//!
//! The `Capabilities` trait supplies the "has nothing" answer for every
//! query. Variants override only what applies to them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Stable discriminant for an entity variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Key,
    Coin,
    Thornbush,
    Wall,
}

impl EntityKind {
    /// Every kind, in declaration order.
    pub const ALL: [EntityKind; 4] = [Self::Key, Self::Coin, Self::Thornbush, Self::Wall];

    /// Display name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Key => "Key",
            Self::Coin => "Coin",
            Self::Thornbush => "Thornbush",
            Self::Wall => "Wall",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known entity kind.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown entity kind: {0}")]
pub struct UnknownKind(pub String);

impl std::str::FromStr for EntityKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// A capability named as data, for filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    Valuable,
    Takable,
    Damaging,
    Blocking,
}

impl Capability {
    pub const ALL: [Capability; 4] = [
        Self::Valuable,
        Self::Takable,
        Self::Damaging,
        Self::Blocking,
    ];
}

/// Capability query surface.
///
/// Every method is a pure function of the implementor's type and its
/// construction-time payload. `value()` and `damage_level()` return 0 unless
/// the matching predicate is true.
pub trait Capabilities {
    /// Discriminant of the implementing variant.
    fn kind(&self) -> EntityKind;

    fn is_valuable(&self) -> bool {
        false
    }

    /// Worth of the entity. Only meaningful when `is_valuable()`.
    fn value(&self) -> i32 {
        0
    }

    fn is_takable(&self) -> bool {
        false
    }

    fn is_damaging(&self) -> bool {
        false
    }

    /// Damage dealt on contact. Only meaningful when `is_damaging()`.
    fn damage_level(&self) -> i32 {
        0
    }

    fn is_blocking(&self) -> bool {
        false
    }

    /// Check a single capability by name.
    fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::Valuable => self.is_valuable(),
            Capability::Takable => self.is_takable(),
            Capability::Damaging => self.is_damaging(),
            Capability::Blocking => self.is_blocking(),
        }
    }

    /// All capabilities this entity has, in `Capability::ALL` order.
    fn capabilities(&self) -> SmallVec<[Capability; 4]> {
        Capability::ALL
            .into_iter()
            .filter(|&cap| self.has(cap))
            .collect()
    }
}
