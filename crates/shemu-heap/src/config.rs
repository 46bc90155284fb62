//! Heap configuration parameters.

use thiserror::Error;

/// Configuration for a [`TypedHeap`](crate::TypedHeap).
///
/// Bounds how much the host can make the heap hold. Validated at heap
/// construction; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeapConfig {
    /// Slots reserved up front.
    ///
    /// Default: 64. Must not exceed `max_live_vectors`.
    pub initial_slots: usize,

    /// Maximum number of vectors alive at once.
    ///
    /// Default: `u32::MAX` (the slot index space). Must be nonzero and fit in
    /// a `u32`.
    pub max_live_vectors: usize,

    /// Maximum element count of a single vector.
    ///
    /// Default: `usize::MAX`, i.e. limited only by the allocator.
    pub max_vector_len: usize,
}

impl HeapConfig {
    /// Default number of pre-reserved slots.
    pub const DEFAULT_INITIAL_SLOTS: usize = 64;

    /// Default live-vector cap.
    pub const DEFAULT_MAX_LIVE_VECTORS: usize = u32::MAX as usize;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            initial_slots: Self::DEFAULT_INITIAL_SLOTS,
            max_live_vectors: Self::DEFAULT_MAX_LIVE_VECTORS,
            max_vector_len: usize::MAX,
        }
    }

    /// Set the number of pre-reserved slots.
    pub fn with_initial_slots(mut self, n: usize) -> Self {
        self.initial_slots = n;
        self
    }

    /// Set the live-vector cap.
    pub fn with_max_live_vectors(mut self, n: usize) -> Self {
        self.max_live_vectors = n;
        self
    }

    /// Set the per-vector length cap.
    pub fn with_max_vector_len(mut self, n: usize) -> Self {
        self.max_vector_len = n;
        self
    }

    /// Check all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_live_vectors == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.max_live_vectors > Self::DEFAULT_MAX_LIVE_VECTORS {
            return Err(ConfigError::CapacityTooLarge {
                requested: self.max_live_vectors,
                limit: Self::DEFAULT_MAX_LIVE_VECTORS,
            });
        }
        if self.initial_slots > self.max_live_vectors {
            return Err(ConfigError::InitialSlotsExceedCapacity {
                initial_slots: self.initial_slots,
                max_live_vectors: self.max_live_vectors,
            });
        }
        Ok(())
    }
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors from [`HeapConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `max_live_vectors` is zero.
    #[error("max_live_vectors must be nonzero")]
    ZeroCapacity,
    /// `max_live_vectors` does not fit the handle's slot index.
    #[error("max_live_vectors {requested} exceeds the slot index limit {limit}")]
    CapacityTooLarge {
        /// Requested cap.
        requested: usize,
        /// Largest representable cap.
        limit: usize,
    },
    /// More slots reserved than may ever be used.
    #[error("initial_slots {initial_slots} exceeds max_live_vectors {max_live_vectors}")]
    InitialSlotsExceedCapacity {
        /// Requested reservation.
        initial_slots: usize,
        /// Configured cap.
        max_live_vectors: usize,
    },
}
