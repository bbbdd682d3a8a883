//! World registry of collections.
//!
//! The `World` owns every collection it creates and addresses them by
//! `CollectionId`. It supports:
//! - Creating and adopting collections
//! - Transferring an entity between two collections by ID
//! - Counting live entities across all collections
//! - Locating entities by predicate

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::core::{CollectionError, CollectionId, Entity, Result};
use crate::events::EntityObserver;

use super::config::CollectionConfig;
use super::owned::OwnedCollection;

/// Owns a set of collections keyed by ID.
///
/// ## Usage
///
/// ```
/// use rust_holdings::collections::{CollectionConfig, World};
/// use rust_holdings::core::{Coin, Wall};
///
/// let mut world = World::new();
/// let level = world.create(CollectionConfig::new("level"));
/// let inventory = world.create(CollectionConfig::new("inventory"));
///
/// let room = world.collection_mut(level).unwrap();
/// room.append(Wall::new());
/// room.append(Coin::new(22));
///
/// world.transfer(level, 1, inventory).unwrap();
///
/// assert_eq!(world.collection(inventory).unwrap().total_value(), 22);
/// assert_eq!(world.live_entities(), 2);
/// ```
#[derive(Default)]
pub struct World {
    collections: FxHashMap<CollectionId, OwnedCollection>,

    /// Attached to created collections that don't bring their own.
    observer: Option<Arc<dyn EntityObserver>>,
}

impl World {
    /// Create an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default observer for collections created from now on.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn EntityObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Create a collection and return its ID.
    pub fn create(&mut self, mut config: CollectionConfig) -> CollectionId {
        if config.observer.is_none() {
            config.observer = self.observer.clone();
        }
        self.adopt(OwnedCollection::new(config))
    }

    /// Take ownership of an existing collection.
    pub fn adopt(&mut self, collection: OwnedCollection) -> CollectionId {
        let id = collection.id();
        tracing::debug!(%id, label = collection.label(), "collection added to world");
        self.collections.insert(id, collection);
        id
    }

    /// Remove a collection, handing it (and its entities) to the caller.
    pub fn remove_collection(&mut self, id: CollectionId) -> Option<OwnedCollection> {
        self.collections.remove(&id)
    }

    #[must_use]
    pub fn collection(&self, id: CollectionId) -> Option<&OwnedCollection> {
        self.collections.get(&id)
    }

    pub fn collection_mut(&mut self, id: CollectionId) -> Option<&mut OwnedCollection> {
        self.collections.get_mut(&id)
    }

    #[must_use]
    pub fn contains(&self, id: CollectionId) -> bool {
        self.collections.contains_key(&id)
    }

    /// Number of collections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// Collection IDs in ascending order.
    #[must_use]
    pub fn ids(&self) -> Vec<CollectionId> {
        let mut ids: Vec<_> = self.collections.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Total entities owned by all collections.
    #[must_use]
    pub fn live_entities(&self) -> usize {
        self.collections.values().map(OwnedCollection::len).sum()
    }

    /// Find the first entity matching `predicate`, scanning collections in
    /// ID order.
    pub fn locate(&self, predicate: impl Fn(&Entity) -> bool) -> Option<(CollectionId, usize)> {
        self.ids().into_iter().find_map(|id| {
            self.collections[&id]
                .position(&predicate)
                .map(|index| (id, index))
        })
    }

    /// Move the entity at `index` in `from` onto the tail of `to`.
    ///
    /// Fails without changing anything if either ID is unknown, if they are
    /// the same collection, or if `index` is out of range.
    pub fn transfer(&mut self, from: CollectionId, index: usize, to: CollectionId) -> Result<()> {
        if from == to {
            return Err(if self.contains(from) {
                CollectionError::InvalidTransfer { collection: from }
            } else {
                CollectionError::UnknownCollection(from)
            });
        }
        if !self.contains(to) {
            return Err(CollectionError::UnknownCollection(to));
        }

        let mut source = self
            .collections
            .remove(&from)
            .ok_or(CollectionError::UnknownCollection(from))?;
        let outcome = match self.collections.get_mut(&to) {
            Some(destination) => source.move_out(index, destination),
            None => Err(CollectionError::UnknownCollection(to)),
        };
        self.collections.insert(from, source);
        outcome
    }
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ordered: Vec<_> = self.ids().into_iter().map(|id| &self.collections[&id]).collect();
        f.debug_struct("World")
            .field("collections", &ordered)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Capabilities, Coin, EntityKind, Key, Thornbush, Wall};
    use crate::events::{EventLog, OwnershipEvent};

    fn level_and_inventory() -> (World, CollectionId, CollectionId) {
        let mut world = World::new();
        let level = world.create(CollectionConfig::new("level"));
        let inventory = world.create(CollectionConfig::new("inventory"));

        let room = world.collection_mut(level).unwrap();
        room.append(Key::new());
        room.append(Coin::new(22));
        room.append(Thornbush::new(2));

        (world, level, inventory)
    }

    #[test]
    fn test_create_and_lookup() {
        let (world, level, inventory) = level_and_inventory();

        assert_eq!(world.len(), 2);
        assert!(world.contains(level));
        assert_eq!(world.collection(level).unwrap().label(), "level");
        assert_eq!(world.collection(inventory).unwrap().label(), "inventory");
        assert_eq!(world.ids(), vec![level, inventory]);
        assert!(world.collection(CollectionId(u32::MAX)).is_none());
    }

    #[test]
    fn test_transfer_between_collections() {
        let (mut world, level, inventory) = level_and_inventory();

        world.transfer(level, 0, inventory).unwrap();

        assert_eq!(world.collection(level).unwrap().len(), 2);
        assert_eq!(world.collection(inventory).unwrap().len(), 1);
        assert_eq!(
            world.collection(inventory).unwrap().get(0).unwrap().kind(),
            EntityKind::Key
        );
        assert_eq!(world.live_entities(), 3);
    }

    #[test]
    fn test_transfer_to_self_is_rejected() {
        let (mut world, level, _) = level_and_inventory();

        let err = world.transfer(level, 0, level).unwrap_err();

        assert_eq!(err, CollectionError::InvalidTransfer { collection: level });
        assert_eq!(world.collection(level).unwrap().len(), 3);
    }

    #[test]
    fn test_transfer_unknown_collections() {
        let (mut world, level, inventory) = level_and_inventory();
        let missing = CollectionId(u32::MAX);

        assert_eq!(
            world.transfer(missing, 0, inventory).unwrap_err(),
            CollectionError::UnknownCollection(missing)
        );
        assert_eq!(
            world.transfer(level, 0, missing).unwrap_err(),
            CollectionError::UnknownCollection(missing)
        );
        assert_eq!(
            world.transfer(missing, 0, missing).unwrap_err(),
            CollectionError::UnknownCollection(missing)
        );
        assert_eq!(world.collection(level).unwrap().len(), 3);
        assert_eq!(world.live_entities(), 3);
    }

    #[test]
    fn test_transfer_bad_index_keeps_source() {
        let (mut world, level, inventory) = level_and_inventory();

        let err = world.transfer(level, 3, inventory).unwrap_err();

        assert_eq!(err, CollectionError::IndexOutOfRange { index: 3, len: 3 });
        assert!(world.contains(level));
        assert_eq!(world.collection(level).unwrap().len(), 3);
        assert!(world.collection(inventory).unwrap().is_empty());
    }

    #[test]
    fn test_locate() {
        let (mut world, level, inventory) = level_and_inventory();
        world.collection_mut(inventory).unwrap().append(Wall::new());

        assert_eq!(world.locate(|e| e.is_damaging()), Some((level, 2)));
        assert_eq!(world.locate(|e| e.kind() == EntityKind::Wall), Some((inventory, 0)));
        assert_eq!(world.locate(|e| e.value() == 1), None);
    }

    #[test]
    fn test_world_observer_attached_to_created_collections() {
        let log = Arc::new(EventLog::new());
        let mut world = World::new().with_observer(log.clone());
        let level = world.create(CollectionConfig::new("level"));
        let inventory = world.create(CollectionConfig::new("inventory"));

        world.collection_mut(level).unwrap().append(Coin::new(1));
        world.transfer(level, 0, inventory).unwrap();

        assert_eq!(log.count(|e| matches!(e, OwnershipEvent::Transferred { .. })), 1);
        assert_eq!(log.owned_count(), 1);

        drop(world);
        assert_eq!(log.owned_count(), 0);
    }

    #[test]
    fn test_remove_collection_hands_over_entities() {
        let (mut world, level, _) = level_and_inventory();

        let room = world.remove_collection(level).unwrap();

        assert_eq!(room.len(), 3);
        assert!(!world.contains(level));
        assert_eq!(world.live_entities(), 0);
        assert!(world.remove_collection(level).is_none());
    }
}
