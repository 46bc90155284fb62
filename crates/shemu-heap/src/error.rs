//! Heap-specific error types.

use shemu_core::{HeapTypeId, RawHandle};
use thiserror::Error;

/// Errors from heap lookups and lifecycle operations.
///
/// A failing call leaves the heap exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The handle was never issued, or its vector has been erased.
    #[error("handle {handle} not found")]
    HandleNotFound {
        /// The unresolved handle.
        handle: RawHandle,
    },
    /// The handle names a vector of a different tag.
    #[error("handle {handle} holds {found}, not {expected}")]
    TypeMismatch {
        /// The handle.
        handle: RawHandle,
        /// Tag the caller claimed.
        expected: HeapTypeId,
        /// Tag the vector was registered with.
        found: HeapTypeId,
    },
    /// The vector is checked out as the output of a running operation.
    #[error("handle {handle} is in use as an operation output")]
    HandleBusy {
        /// The handle.
        handle: RawHandle,
    },
    /// The live-vector cap has been reached.
    #[error("heap holds {live} vectors, cap is {max}")]
    CapacityExceeded {
        /// Vectors currently alive.
        live: usize,
        /// Configured cap.
        max: usize,
    },
    /// A vector longer than the configured per-vector cap.
    #[error("vector of {len} elements exceeds the cap of {max}")]
    VectorTooLong {
        /// Requested length.
        len: usize,
        /// Configured cap.
        max: usize,
    },
}

impl HeapError {
    /// The handle involved, if the error concerns one.
    pub fn handle(&self) -> Option<RawHandle> {
        match self {
            Self::HandleNotFound { handle }
            | Self::TypeMismatch { handle, .. }
            | Self::HandleBusy { handle } => Some(*handle),
            Self::CapacityExceeded { .. } | Self::VectorTooLong { .. } => None,
        }
    }
}
