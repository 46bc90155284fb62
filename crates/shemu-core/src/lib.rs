//! Core types and traits for the shemu share emulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the workspace: value
//! tags and their representation traits, runtime type ids, opaque
//! handles, the operation error type, and the execution-context trait
//! that lends a randomness source to operations.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod error;
pub mod id;
pub mod value;

pub use context::ExecutionContext;
pub use error::{OpError, ShapeViolation};
pub use id::{HeapTypeId, RawHandle};
pub use value::{
    type_name, Arithmetic, Bool, ConvertTo, Float32, Float64, Int16, Int32, Int64, Int8, Repr,
    Uint16, Uint32, Uint64, Uint8, ValueTag, Xor16, Xor32, Xor64, Xor8,
};
