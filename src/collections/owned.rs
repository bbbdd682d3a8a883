//! Exclusively-owning entity collections.
//!
//! An `OwnedCollection` is the only owner of the entities in its slots.
//! Entities leave it in exactly three ways:
//!
//! - destroyed (`remove_at`, `remove_range`, `remove_last`, `clear`, drop)
//! - released to the caller (`take`)
//! - moved to another collection (`move_out`, `move_matching`)
//!
//! Every removal shifts the later slots left, so relative order is kept.
//! A failed operation leaves every collection involved untouched.

use std::sync::Arc;

use smallvec::SmallVec;

use crate::core::{Capabilities, Capability, CollectionError, CollectionId, Entity, Result};
use crate::events::{EntityObserver, OwnershipEvent, TransferSide};

use super::config::CollectionConfig;

/// Slots kept inline before spilling to the heap.
const INLINE_SLOTS: usize = 8;

type Slots = SmallVec<[Entity; INLINE_SLOTS]>;

/// Ordered collection that exclusively owns its entities.
///
/// ## Usage
///
/// ```
/// use rust_holdings::collections::{CollectionConfig, OwnedCollection};
/// use rust_holdings::core::{Capabilities, Coin, Key, Thornbush};
///
/// let mut level = OwnedCollection::new(CollectionConfig::new("level"));
/// let mut inventory = OwnedCollection::new(CollectionConfig::new("inventory"));
///
/// level.append(Key::new());
/// level.append(Coin::new(22));
/// level.append(Thornbush::new(2));
///
/// // Pick up the coin.
/// level.move_out(1, &mut inventory).unwrap();
///
/// assert_eq!(level.len(), 2);
/// assert_eq!(inventory.get(0).unwrap().value(), 22);
/// ```
pub struct OwnedCollection {
    id: CollectionId,
    label: String,
    slots: Slots,
    observer: Option<Arc<dyn EntityObserver>>,
}

impl OwnedCollection {
    /// Create an empty collection with a fresh ID.
    #[must_use]
    pub fn new(config: CollectionConfig) -> Self {
        Self {
            id: CollectionId::fresh(),
            label: config.label,
            slots: Slots::with_capacity(config.reserve),
            observer: config.observer,
        }
    }

    #[must_use]
    pub fn id(&self) -> CollectionId {
        self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Append an entity at the tail. Returns the index it landed on.
    pub fn append(&mut self, entity: impl Into<Entity>) -> usize {
        let entity = entity.into();
        let kind = entity.kind();
        let index = self.slots.len();
        self.slots.push(entity);
        self.emit(OwnershipEvent::Acquired {
            collection: self.id,
            index,
            kind,
        });
        index
    }

    /// Borrow the entity at `index`.
    ///
    /// The borrow ends before the collection can be mutated again.
    pub fn get(&self, index: usize) -> Result<&Entity> {
        self.slots
            .get(index)
            .ok_or_else(|| CollectionError::index_out_of_range(index, self.len()))
    }

    /// Iterate entities in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.slots.iter()
    }

    /// Iterate entities that have `capability`.
    pub fn with_capability(&self, capability: Capability) -> impl Iterator<Item = &Entity> + '_ {
        self.iter().filter(move |entity| entity.has(capability))
    }

    /// Index of the first entity matching `predicate`.
    pub fn position(&self, predicate: impl Fn(&Entity) -> bool) -> Option<usize> {
        self.iter().position(predicate)
    }

    /// Sum of `value()` over valuable entities.
    #[must_use]
    pub fn total_value(&self) -> i64 {
        self.with_capability(Capability::Valuable)
            .map(|entity| i64::from(entity.value()))
            .sum()
    }

    /// Remove and destroy the entity at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<()> {
        let entity = self.detach(index)?;
        self.destroy(entity);
        Ok(())
    }

    /// Remove and destroy every entity in `start..end`.
    ///
    /// Returns how many were destroyed.
    pub fn remove_range(&mut self, start: usize, end: usize) -> Result<usize> {
        let len = self.len();
        if start > end || end > len {
            return Err(CollectionError::range_out_of_bounds(start, end, len));
        }

        let removed: Slots = self.slots.drain(start..end).collect();
        let count = removed.len();
        for entity in removed {
            self.destroy(entity);
        }
        Ok(count)
    }

    /// Remove and destroy the tail entity.
    pub fn remove_last(&mut self) -> Result<()> {
        let entity = self
            .slots
            .pop()
            .ok_or_else(|| CollectionError::index_out_of_range(0, 0))?;
        self.destroy(entity);
        Ok(())
    }

    /// Destroy every entity.
    pub fn clear(&mut self) {
        for entity in std::mem::take(&mut self.slots) {
            self.destroy(entity);
        }
    }

    /// Remove the entity at `index` and hand ownership to the caller.
    pub fn take(&mut self, index: usize) -> Result<Entity> {
        let entity = self.detach(index)?;
        self.emit(OwnershipEvent::Released {
            collection: self.id,
            index,
            kind: entity.kind(),
        });
        Ok(entity)
    }

    /// Move the entity at `index` onto the tail of `destination`.
    ///
    /// The entity is never destroyed and never owned by both collections.
    /// `&mut` on both sides already guarantees they are distinct.
    pub fn move_out(&mut self, index: usize, destination: &mut OwnedCollection) -> Result<()> {
        let entity = self.detach(index)?;
        self.hand_over(entity, destination);
        Ok(())
    }

    /// Move every entity matching `predicate` onto `destination`, keeping
    /// their relative order. Returns how many moved.
    pub fn move_matching(
        &mut self,
        predicate: impl Fn(&Entity) -> bool,
        destination: &mut OwnedCollection,
    ) -> usize {
        let (moving, staying): (Slots, Slots) = std::mem::take(&mut self.slots)
            .into_iter()
            .partition(|entity| predicate(entity));
        self.slots = staying;

        let count = moving.len();
        for entity in moving {
            self.hand_over(entity, destination);
        }
        count
    }

    /// Remove the entity at `index` without reporting it.
    fn detach(&mut self, index: usize) -> Result<Entity> {
        if index >= self.len() {
            return Err(CollectionError::index_out_of_range(index, self.len()));
        }
        Ok(self.slots.remove(index))
    }

    /// Push a detached entity onto `destination` and report the transfer.
    ///
    /// A shared observer hears it once as `Both`; otherwise each side's
    /// observer hears the side it watches.
    fn hand_over(&self, entity: Entity, destination: &mut OwnedCollection) {
        let kind = entity.kind();
        destination.slots.push(entity);

        let transferred = |watched| OwnershipEvent::Transferred {
            from: self.id,
            to: destination.id,
            kind,
            watched,
        };
        transferred(TransferSide::Both).trace();

        match (&self.observer, &destination.observer) {
            (Some(source), Some(dest)) if Arc::ptr_eq(source, dest) => {
                source.observe(&transferred(TransferSide::Both));
            }
            (source, dest) => {
                if let Some(observer) = source {
                    observer.observe(&transferred(TransferSide::Source));
                }
                if let Some(observer) = dest {
                    observer.observe(&transferred(TransferSide::Destination));
                }
            }
        }
    }

    fn destroy(&self, entity: Entity) {
        self.emit(OwnershipEvent::Destroyed {
            collection: self.id,
            kind: entity.kind(),
        });
    }

    fn emit(&self, event: OwnershipEvent) {
        event.trace();
        if let Some(observer) = &self.observer {
            observer.observe(&event);
        }
    }
}

impl Drop for OwnedCollection {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<'a> IntoIterator for &'a OwnedCollection {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for OwnedCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OwnedCollection")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("slots", &self.slots.as_slice())
            .finish()
    }
}
