//! Typed vector handles.
//!
//! A [`Handle<T>`] is a [`RawHandle`] that carries the tag it was minted
//! for. It is what Rust callers hold; the raw form is what crosses the host
//! boundary. Neither is proof of validity: the heap re-checks slot,
//! generation, and type id on every use.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use shemu_core::{RawHandle, ValueTag};

/// Handle to a heap vector of tag `T`.
#[must_use]
pub struct Handle<T: ValueTag> {
    raw: RawHandle,
    _tag: PhantomData<fn() -> T>,
}

impl<T: ValueTag> Handle<T> {
    /// Claim that `raw` names a vector of tag `T`.
    ///
    /// The claim is unchecked; the heap validates it on use.
    pub fn from_raw(raw: RawHandle) -> Self {
        Self {
            raw,
            _tag: PhantomData,
        }
    }

    /// The untyped handle.
    pub fn raw(self) -> RawHandle {
        self.raw
    }
}

impl<T: ValueTag> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ValueTag> Copy for Handle<T> {}

impl<T: ValueTag> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<T: ValueTag> Eq for Handle<T> {}

impl<T: ValueTag> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<T: ValueTag> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle<{}>({})", T::NAME, self.raw)
    }
}

/// Anything that names a heap vector claimed to hold tag `T`.
///
/// Heap accessors take this so that a [`Handle<T>`] fixes the tag by
/// inference, while a [`RawHandle`] from the host needs the tag spelled out.
pub trait HandleOf<T: ValueTag> {
    /// The untyped handle.
    fn to_raw(&self) -> RawHandle;
}

impl<T: ValueTag> HandleOf<T> for Handle<T> {
    fn to_raw(&self) -> RawHandle {
        self.raw
    }
}

impl<T: ValueTag> HandleOf<T> for RawHandle {
    fn to_raw(&self) -> RawHandle {
        *self
    }
}

impl<T: ValueTag> From<Handle<T>> for RawHandle {
    fn from(h: Handle<T>) -> Self {
        h.raw
    }
}
