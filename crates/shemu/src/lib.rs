//! shemu: a plaintext emulator for secret-shared vector computation.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! shemu sub-crates. For most users, adding `shemu` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use shemu::prelude::*;
//!
//! let mut heap = TypedHeap::new();
//! let a = heap.insert(OwnedVector::<Int32>::from_vec(vec![1, 2, 3])).unwrap();
//! let b = heap.insert(OwnedVector::<Int32>::from_vec(vec![10, 20, 30])).unwrap();
//! let r = heap.alloc::<Int32>(3).unwrap();
//!
//! heap.with_output::<Int32, _, ExecError, _>(r, |heap, out| {
//!     shemu::ops::add(heap.get(a)?, heap.get(b)?, out)?;
//!     Ok(())
//! })
//! .unwrap();
//! assert_eq!(heap.get(r).unwrap().as_slice(), &[11, 22, 33]);
//!
//! // Wrong tag: the vector stays registered.
//! assert!(heap.erase::<Int64>(a.raw()).is_err());
//! assert!(heap.contains::<Int32>(a));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `shemu-core` | Value tags, representation traits, ids, `OpError` |
//! | [`heap`] | `shemu-heap` | `TypedHeap`, handles, vectors, host views |
//! | [`ops`] | `shemu-ops` | Every operation, grouped by family |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Value tags, representation traits, ids, and errors (`shemu-core`).
pub use shemu_core as types;

/// The typed vector heap and host memory views (`shemu-heap`).
///
/// [`heap::TypedHeap`] owns share vectors; [`heap::MutableView`] and
/// [`heap::ImmutableView`] borrow host memory for one call.
pub use shemu_heap as heap;

/// Shape-validated operations (`shemu-ops`).
pub use shemu_ops as ops;

/// Common imports for typical shemu usage.
///
/// ```rust
/// use shemu::prelude::*;
/// ```
///
/// Brings in the value tags, the heap and its handle types, operand traits,
/// and the error types. Operations themselves stay under [`ops`](crate::ops)
/// since several share names with std items (`and`, `or`, `sum`).
pub mod prelude {
    // Tags and representation traits
    pub use shemu_core::{
        Arithmetic, Bool, ConvertTo, Float32, Float64, Int16, Int32, Int64, Int8, Repr, Uint16, Uint32,
        Uint64, Uint8, ValueTag, Xor16, Xor32, Xor64, Xor8,
    };

    // Ids and context
    pub use shemu_core::{ExecutionContext, HeapTypeId, RawHandle};

    // Heap and operands
    pub use shemu_heap::{
        Handle, HandleOf, HeapConfig, ImmutableView, MutableView, OwnedVector, ShareSink,
        ShareSource, TypedHeap,
    };

    // Errors
    pub use shemu_core::{OpError, ShapeViolation};
    pub use shemu_heap::{ConfigError, HeapError};
    pub use shemu_ops::ExecError;
}
