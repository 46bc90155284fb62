//! Uniform operand access for the operation engine.
//!
//! Heap vectors and host views expose their shares through these traits so
//! that every operation is written once, whatever mix of storage its
//! operands live in.

use shemu_core::ValueTag;

use crate::vector::OwnedVector;
use crate::view::{ImmutableView, MutableView};

/// Readable shares of tag `T`.
pub trait ShareSource<T: ValueTag> {
    /// The shares, in order.
    fn shares(&self) -> &[T::Repr];
}

/// Writable, pre-sized shares of tag `T`.
pub trait ShareSink<T: ValueTag> {
    /// The shares, in order. The length is fixed by the container.
    fn shares_mut(&mut self) -> &mut [T::Repr];
}

impl<T: ValueTag> ShareSource<T> for OwnedVector<T> {
    fn shares(&self) -> &[T::Repr] {
        self.as_slice()
    }
}

impl<T: ValueTag> ShareSink<T> for OwnedVector<T> {
    fn shares_mut(&mut self) -> &mut [T::Repr] {
        self.as_mut_slice()
    }
}

impl<T: ValueTag> ShareSource<T> for ImmutableView<'_, T> {
    fn shares(&self) -> &[T::Repr] {
        self.as_slice()
    }
}

impl<T: ValueTag> ShareSource<T> for MutableView<'_, T> {
    fn shares(&self) -> &[T::Repr] {
        self.as_slice()
    }
}

impl<T: ValueTag> ShareSink<T> for MutableView<'_, T> {
    fn shares_mut(&mut self) -> &mut [T::Repr] {
        self.as_mut_slice()
    }
}
