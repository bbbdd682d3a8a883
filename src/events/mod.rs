//! Observability hooks for entity ownership.
//!
//! ## Key Types
//!
//! - `OwnershipEvent`: What changed hands, and where
//! - `EntityObserver`: Callback attached to collections
//! - `EventLog`: Recording observer for hosts and tests

pub mod observer;

pub use observer::{EntityObserver, EventLog, OwnershipEvent, TransferSide};
