//! Core types: entity variants, capability queries, IDs, errors.
//!
//! Nothing here owns entities. Ownership lives in `collections`.

pub mod capability;
pub mod entity;
pub mod error;
pub mod ids;
pub mod variants;

pub use capability::{Capabilities, Capability, EntityKind, UnknownKind};
pub use entity::{Entity, Variant};
pub use error::{CollectionError, Result};
pub use ids::CollectionId;
pub use variants::{Coin, Key, Thornbush, Wall};
