//! Runtime type ids and opaque handles.

use std::fmt;

/// Runtime identifier of a value tag.
///
/// Each [`ValueTag`](crate::ValueTag) carries a unique `HeapTypeId`. The heap
/// stores it alongside every vector so that an untrusted handle can be checked
/// against the tag a caller claims for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HeapTypeId(pub u8);

impl fmt::Display for HeapTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match crate::value::type_name(*self) {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "type#{}", self.0),
        }
    }
}

impl From<u8> for HeapTypeId {
    fn from(v: u8) -> Self {
        Self(v)
    }
}

/// Opaque, address-sized identifier for a heap-resident vector.
///
/// Encoding: upper 32 bits = slot index, lower 32 bits = generation. The value
/// is meaningless on its own; it only resolves through the heap that minted
/// it, and only while the generation still matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RawHandle(pub u64);

impl RawHandle {
    /// Build a handle from its slot index and generation.
    pub const fn new(slot: u32, generation: u32) -> Self {
        Self(((slot as u64) << 32) | generation as u64)
    }

    /// Slot index encoded in the handle.
    pub const fn slot(self) -> u32 {
        (self.0 >> 32) as u32
    }

    /// Generation encoded in the handle.
    pub const fn generation(self) -> u32 {
        self.0 as u32
    }
}

impl fmt::Display for RawHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.slot(), self.generation())
    }
}

impl From<u64> for RawHandle {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
