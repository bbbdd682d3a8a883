//! Collection configuration.
//!
//! A `CollectionConfig` names a collection, optionally reserves slot space,
//! and attaches an observer. IDs are never configured: every collection
//! allocates a fresh `CollectionId` when it is built.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::events::EntityObserver;

/// Configuration for a single collection.
#[derive(Clone, Serialize, Deserialize)]
pub struct CollectionConfig {
    /// Human-readable name (for debugging/display), e.g. "level" or "inventory".
    pub label: String,

    /// Slots to reserve up front.
    pub reserve: usize,

    /// Receives ownership events. Not serialized.
    #[serde(skip)]
    pub observer: Option<Arc<dyn EntityObserver>>,
}

impl CollectionConfig {
    /// Create a new collection configuration.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            reserve: 0,
            observer: None,
        }
    }

    /// Reserve space for `slots` entities.
    #[must_use]
    pub fn with_reserve(mut self, slots: usize) -> Self {
        self.reserve = slots;
        self
    }

    /// Attach an observer.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn EntityObserver>) -> Self {
        self.observer = Some(observer);
        self
    }
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self::new("collection")
    }
}

impl std::fmt::Debug for CollectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionConfig")
            .field("label", &self.label)
            .field("reserve", &self.reserve)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventLog;

    #[test]
    fn test_builder() {
        let config = CollectionConfig::new("inventory")
            .with_reserve(16)
            .with_observer(Arc::new(EventLog::new()));

        assert_eq!(config.label, "inventory");
        assert_eq!(config.reserve, 16);
        assert!(config.observer.is_some());
    }

    #[test]
    fn test_defaults() {
        let config = CollectionConfig::default();
        assert_eq!(config.label, "collection");
        assert_eq!(config.reserve, 0);
        assert!(config.observer.is_none());
    }

    #[test]
    fn test_serialization_skips_observer() {
        let config = CollectionConfig::new("level")
            .with_observer(Arc::new(EventLog::new()));

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: CollectionConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.label, "level");
        assert!(deserialized.observer.is_none());
    }
}
