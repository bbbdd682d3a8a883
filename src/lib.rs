//! # rust-holdings
//!
//! Capability queries and exclusive ownership for game-world objects.
//!
//! ## Design Principles
//!
//! 1. **One Query Surface**: Keys, coins, thornbushes and walls all answer
//!    the same capability questions (valuable, takable, damaging, blocking).
//!    Variants override only what applies to them.
//!
//! 2. **One Owner**: An entity lives in exactly one collection slot. It
//!    leaves by being destroyed, released to the caller, or moved to another
//!    collection. Nothing is ever duplicated or leaked along the way.
//!
//! 3. **No Lossy Storage**: Collections hold the full `Entity` variant, so a
//!    coin never forgets its value by being stored.
//!
//! ## Modules
//!
//! - `core`: Entity variants, capability queries, narrowing, IDs, errors
//! - `collections`: `OwnedCollection` and the `World` registry
//! - `events`: Ownership events and observers

pub mod core;
pub mod collections;
pub mod events;

// Re-export commonly used types
pub use crate::core::{
    Capabilities, Capability, EntityKind, UnknownKind,
    Entity, Variant,
    Key, Coin, Thornbush, Wall,
    CollectionId, CollectionError, Result,
};

pub use crate::collections::{CollectionConfig, OwnedCollection, World};

pub use crate::events::{EntityObserver, EventLog, OwnershipEvent, TransferSide};
