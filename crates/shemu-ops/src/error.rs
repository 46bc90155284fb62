//! Errors from running an operation against heap-resident operands.

use shemu_core::OpError;
use shemu_heap::HeapError;
use thiserror::Error;

/// Either a handle failed to resolve or the operation itself was rejected.
///
/// Returned by closures passed to
/// [`TypedHeap::with_output`](shemu_heap::TypedHeap::with_output), which
/// resolve input handles and then run an operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExecError {
    /// An operand handle was unknown, stale, mistyped, or aliased the output.
    #[error(transparent)]
    Heap(#[from] HeapError),
    /// The operation rejected its operands.
    #[error(transparent)]
    Op(#[from] OpError),
}
