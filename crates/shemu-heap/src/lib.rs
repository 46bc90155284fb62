//! Type-tagged share vector heap and host memory views.
//!
//! Owns every heap-resident share vector and hands out generation-checked
//! handles for them. Also provides the zero-copy views through which
//! operations read and write memory owned by the host VM. This is the only
//! crate in the workspace that may contain `unsafe` code, confined to
//! turning host references into slices.
//!
//! # Architecture
//!
//! ```text
//! TypedHeap
//! ├── HeapConfig (capacity limits, validated at construction)
//! └── SlotTable<Entry> (slot + generation, free list)
//!     └── Entry { type id, len, Box<OwnedVector<T>> }
//!
//! MutableView / ImmutableView (borrowed from VmRef / VmCRef per call)
//! ```
//!
//! Operations are written against [`ShareSource`] and [`ShareSink`], which
//! both vectors and views implement.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod handle;
pub mod heap;
pub mod operand;
mod slots;
pub mod vector;
pub mod view;

pub use config::{ConfigError, HeapConfig};
pub use error::HeapError;
pub use handle::{Handle, HandleOf};
pub use heap::{TypeStats, TypedHeap};
pub use operand::{ShareSink, ShareSource};
pub use vector::OwnedVector;
pub use view::{HostRepr, ImmutableView, MutableView, VmCRef, VmRef};
