//! Entity ownership.
//!
//! ## Key Types
//!
//! - `OwnedCollection`: Ordered, exclusively-owning sequence of entities
//! - `CollectionConfig`: Label, reserved space, observer
//! - `World`: Collections addressed by `CollectionId`, with transfers

pub mod config;
pub mod owned;
pub mod world;

pub use config::CollectionConfig;
pub use owned::OwnedCollection;
pub use world::World;

// Re-export ID type from core for convenience
pub use crate::core::CollectionId;
