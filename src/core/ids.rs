//! Collection identification.
//!
//! Every `OwnedCollection` carries a `CollectionId`, allocated from a
//! process-wide counter when the collection is built. IDs cannot be minted
//! outside this crate, so two IDs are equal only if they were handed out
//! for the same collection.
//!
//! ```
//! use rust_holdings::core::CollectionId;
//!
//! let level = CollectionId::fresh();
//! let inventory = CollectionId::fresh();
//!
//! assert_ne!(level, inventory);
//! assert!(level < inventory);
//! assert_eq!(inventory.to_string(), format!("Collection({})", inventory.raw()));
//! ```

use std::sync::atomic::{AtomicU32, Ordering};

use serde::Serialize;

static NEXT_COLLECTION_ID: AtomicU32 = AtomicU32::new(0);

/// Opaque identifier for a collection of entities.
///
/// Only `fresh` creates one. Serialization is one-way, for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CollectionId(pub(crate) u32);

impl CollectionId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Allocate an ID no other call has returned.
    #[must_use]
    pub fn fresh() -> Self {
        Self(NEXT_COLLECTION_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for CollectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Collection({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_is_unique_and_increasing() {
        let ids: Vec<_> = (0..16).map(|_| CollectionId::fresh()).collect();
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(CollectionId(7).raw(), 7);
    }

    #[test]
    fn test_ordering_follows_raw() {
        assert!(CollectionId(1) < CollectionId(2));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CollectionId(42)), "Collection(42)");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&CollectionId(123)).unwrap();
        assert_eq!(json, "123");
    }
}
