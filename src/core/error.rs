//! Errors reported by collection operations.
//!
//! Every error is local and recoverable: the operation that reports it has
//! left all collections exactly as they were.

use thiserror::Error;

use super::ids::CollectionId;

/// Error type for collection and world operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// Index does not name an occupied slot.
    #[error("index {index} out of range for collection of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Range is reversed or runs past the end.
    #[error("range {start}..{end} out of range for collection of length {len}")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },

    /// Source and destination of a transfer are the same collection.
    #[error("cannot transfer within {collection}")]
    InvalidTransfer { collection: CollectionId },

    /// No collection with this ID exists in the world.
    #[error("unknown collection: {0}")]
    UnknownCollection(CollectionId),
}

impl CollectionError {
    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create a range out of bounds error
    pub fn range_out_of_bounds(start: usize, end: usize, len: usize) -> Self {
        Self::RangeOutOfBounds { start, end, len }
    }

    /// True for both bad indices and bad ranges.
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfRange { .. } | Self::RangeOutOfBounds { .. }
        )
    }
}

/// Result alias for collection operations.
pub type Result<T> = std::result::Result<T, CollectionError>;
