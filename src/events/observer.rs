//! Ownership events and the observers that receive them.
//!
//! Collections report every change of ownership:
//!
//! - `Acquired`: an entity was appended to a collection
//! - `Released`: an entity left a collection intact, handed to the caller
//! - `Destroyed`: an entity was dropped by its collection
//! - `Transferred`: an entity moved from one collection to another
//!
//! A transfer between collections with different observers reaches each
//! of them with its own `TransferSide`, so a log watching only one side
//! still counts ownership correctly.
//!
//! The library never prints. Hosts that want narration attach an
//! `EntityObserver` or install a `tracing` subscriber.

use std::sync::{Mutex, PoisonError};

use serde::Serialize;

use crate::core::{CollectionId, EntityKind};

/// Which end of a transfer the receiving observer watches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TransferSide {
    /// Both collections report to this observer.
    Both,
    /// Only the collection the entity left.
    Source,
    /// Only the collection the entity joined.
    Destination,
}

/// A change of ownership.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum OwnershipEvent {
    /// Entity appended to `collection` at `index`.
    Acquired {
        collection: CollectionId,
        index: usize,
        kind: EntityKind,
    },
    /// Entity removed from `collection` at `index` and returned to the caller.
    Released {
        collection: CollectionId,
        index: usize,
        kind: EntityKind,
    },
    /// Entity dropped by `collection`.
    Destroyed {
        collection: CollectionId,
        kind: EntityKind,
    },
    /// Entity moved out of `from` onto the tail of `to`, as seen from
    /// `watched`.
    Transferred {
        from: CollectionId,
        to: CollectionId,
        kind: EntityKind,
        watched: TransferSide,
    },
}

impl OwnershipEvent {
    /// Kind of the entity the event is about.
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Acquired { kind, .. }
            | Self::Released { kind, .. }
            | Self::Destroyed { kind, .. }
            | Self::Transferred { kind, .. } => *kind,
        }
    }

    /// Change in the number of entities owned by the collections the
    /// receiving observer watches.
    #[must_use]
    pub fn owned_delta(&self) -> i64 {
        match self {
            Self::Acquired { .. }
            | Self::Transferred { watched: TransferSide::Destination, .. } => 1,
            Self::Released { .. }
            | Self::Destroyed { .. }
            | Self::Transferred { watched: TransferSide::Source, .. } => -1,
            Self::Transferred { watched: TransferSide::Both, .. } => 0,
        }
    }

    pub(crate) fn trace(&self) {
        match self {
            Self::Acquired { collection, index, kind } => {
                tracing::debug!(%collection, index, %kind, "entity acquired");
            }
            Self::Released { collection, index, kind } => {
                tracing::debug!(%collection, index, %kind, "entity released");
            }
            Self::Destroyed { collection, kind } => {
                tracing::debug!(%collection, %kind, "entity destroyed");
            }
            Self::Transferred { from, to, kind, .. } => {
                tracing::debug!(%from, %to, %kind, "entity transferred");
            }
        }
    }
}

/// Receives ownership events from collections.
///
/// Observers are called synchronously, after the change they describe has
/// taken effect.
pub trait EntityObserver: Send + Sync {
    fn observe(&self, event: &OwnershipEvent);
}

impl<F> EntityObserver for F
where
    F: Fn(&OwnershipEvent) + Send + Sync,
{
    fn observe(&self, event: &OwnershipEvent) {
        self(event)
    }
}

/// Observer that records every event in order.
///
/// ```
/// use std::sync::Arc;
/// use rust_holdings::collections::{CollectionConfig, OwnedCollection};
/// use rust_holdings::core::Coin;
/// use rust_holdings::events::EventLog;
///
/// let log = Arc::new(EventLog::new());
/// {
///     let config = CollectionConfig::new("purse").with_observer(log.clone());
///     let mut purse = OwnedCollection::new(config);
///     purse.append(Coin::new(5));
///     assert_eq!(log.owned_count(), 1);
/// }
/// // Dropping the purse destroyed the coin.
/// assert_eq!(log.owned_count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct EventLog {
    events: Mutex<Vec<OwnershipEvent>>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<OwnershipEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Count recorded events matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&OwnershipEvent) -> bool) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|event| predicate(event))
            .count()
    }

    /// Entities currently owned by the observed collections, net of all
    /// events. Only exact if the log saw those collections from creation.
    #[must_use]
    pub fn owned_count(&self) -> i64 {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(OwnershipEvent::owned_delta)
            .sum()
    }

    /// Forget all recorded events.
    pub fn clear(&self) {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl EntityObserver for EventLog {
    fn observe(&self, event: &OwnershipEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}
