//! The polymorphic entity and capability narrowing.
//!
//! `Entity` is a sum type over the concrete variants. It answers every
//! capability query by delegating to the variant it holds, so collections
//! store the full variant and never lose payload data.
//!
//! ## Narrowing
//!
//! Recovering a concrete variant from an `Entity` is fallible and cheap:
//!
//! ```
//! use rust_holdings::core::{Capabilities, Coin, Entity, Thornbush};
//!
//! let bush = Entity::from(Thornbush::new(2));
//! let coin = Entity::from(Coin::new(22));
//!
//! assert_eq!(bush.narrow::<Thornbush>().map(|t| t.damage_level()), Some(2));
//! assert!(coin.narrow::<Thornbush>().is_none());
//!
//! // A failed narrowing leaves the entity untouched.
//! assert_eq!(coin.value(), 22);
//! ```

use serde::Serialize;

use super::capability::{Capabilities, EntityKind};
use super::variants::{Coin, Key, Thornbush, Wall};

/// One object in the world.
///
/// Entities come only from the variant constructors. There is no `Clone`
/// and no `Deserialize`, so an entity in a collection can't be duplicated:
///
/// ```compile_fail
/// use rust_holdings::core::{Coin, Entity};
///
/// let coin = Entity::from(Coin::new(22));
/// let twin = coin.clone();
/// ```
///
/// ```compile_fail
/// use rust_holdings::core::Entity;
///
/// let coin: Entity = serde_json::from_str(r#"{"Coin":{"value":22}}"#).unwrap();
/// ```
///
/// Serialization is one-way, for diagnostics snapshots.
#[derive(Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Entity {
    Key(Key),
    Coin(Coin),
    Thornbush(Thornbush),
    Wall(Wall),
}

impl Entity {
    fn inner(&self) -> &dyn Capabilities {
        match self {
            Self::Key(key) => key,
            Self::Coin(coin) => coin,
            Self::Thornbush(bush) => bush,
            Self::Wall(wall) => wall,
        }
    }

    /// Borrow the concrete variant `T`, or `None` if this is another kind.
    #[must_use]
    pub fn narrow<T: Variant>(&self) -> Option<&T> {
        T::narrow(self)
    }

    /// Check whether this entity is a `T` without borrowing it.
    #[must_use]
    pub fn is<T: Variant>(&self) -> bool {
        self.kind() == T::KIND
    }

    /// Convert into the concrete variant `T`.
    ///
    /// On mismatch the entity is handed back unchanged.
    pub fn into_variant<T: Variant>(self) -> Result<T, Entity> {
        T::from_entity(self)
    }
}

impl Capabilities for Entity {
    fn kind(&self) -> EntityKind {
        self.inner().kind()
    }

    fn is_valuable(&self) -> bool {
        self.inner().is_valuable()
    }

    fn value(&self) -> i32 {
        self.inner().value()
    }

    fn is_takable(&self) -> bool {
        self.inner().is_takable()
    }

    fn is_damaging(&self) -> bool {
        self.inner().is_damaging()
    }

    fn damage_level(&self) -> i32 {
        self.inner().damage_level()
    }

    fn is_blocking(&self) -> bool {
        self.inner().is_blocking()
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Coin(coin) => write!(f, "Coin({})", coin.value()),
            Self::Thornbush(bush) => write!(f, "Thornbush({})", bush.damage_level()),
            other => f.write_str(other.kind().as_str()),
        }
    }
}

/// A concrete variant that an `Entity` can be narrowed to.
pub trait Variant: Capabilities + Into<Entity> + Sized {
    const KIND: EntityKind;

    /// Borrow `Self` out of `entity` if it holds one.
    fn narrow(entity: &Entity) -> Option<&Self>;

    /// Take `Self` out of `entity`, returning the entity on mismatch.
    fn from_entity(entity: Entity) -> Result<Self, Entity>;
}

impl Variant for Key {
    const KIND: EntityKind = EntityKind::Key;

    fn narrow(entity: &Entity) -> Option<&Self> {
        match entity {
            Entity::Key(key) => Some(key),
            _ => None,
        }
    }

    fn from_entity(entity: Entity) -> Result<Self, Entity> {
        match entity {
            Entity::Key(key) => Ok(key),
            other => Err(other),
        }
    }
}

impl Variant for Coin {
    const KIND: EntityKind = EntityKind::Coin;

    fn narrow(entity: &Entity) -> Option<&Self> {
        match entity {
            Entity::Coin(coin) => Some(coin),
            _ => None,
        }
    }

    fn from_entity(entity: Entity) -> Result<Self, Entity> {
        match entity {
            Entity::Coin(coin) => Ok(coin),
            other => Err(other),
        }
    }
}

impl Variant for Thornbush {
    const KIND: EntityKind = EntityKind::Thornbush;

    fn narrow(entity: &Entity) -> Option<&Self> {
        match entity {
            Entity::Thornbush(bush) => Some(bush),
            _ => None,
        }
    }

    fn from_entity(entity: Entity) -> Result<Self, Entity> {
        match entity {
            Entity::Thornbush(bush) => Ok(bush),
            other => Err(other),
        }
    }
}

impl Variant for Wall {
    const KIND: EntityKind = EntityKind::Wall;

    fn narrow(entity: &Entity) -> Option<&Self> {
        match entity {
            Entity::Wall(wall) => Some(wall),
            _ => None,
        }
    }

    fn from_entity(entity: Entity) -> Result<Self, Entity> {
        match entity {
            Entity::Wall(wall) => Ok(wall),
            other => Err(other),
        }
    }
}

impl From<Key> for Entity {
    fn from(key: Key) -> Self {
        Self::Key(key)
    }
}

impl From<Coin> for Entity {
    fn from(coin: Coin) -> Self {
        Self::Coin(coin)
    }
}

impl From<Thornbush> for Entity {
    fn from(bush: Thornbush) -> Self {
        Self::Thornbush(bush)
    }
}

impl From<Wall> for Entity {
    fn from(wall: Wall) -> Self {
        Self::Wall(wall)
    }
}
