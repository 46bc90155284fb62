//! Reusable vector and heap fixtures.
//!
//! - [`owned`]: an [`OwnedVector`] from a slice literal.
//! - [`heap_with`]: a fresh heap holding one vector.
//! - [`vm_ref`] / [`vm_cref`]: host references over a Rust buffer.

use shemu_core::ValueTag;
use shemu_heap::{Handle, OwnedVector, TypedHeap, VmCRef, VmRef};

pub fn owned<T: ValueTag>(data: &[T::Repr]) -> OwnedVector<T> {
    OwnedVector::from_slice(data)
}

/// A heap holding `data` under tag `T`, plus its handle.
pub fn heap_with<T: ValueTag>(data: &[T::Repr]) -> (TypedHeap, Handle<T>) {
    let mut heap = TypedHeap::new();
    let handle = heap
        .insert(owned::<T>(data))
        .expect("default heap accepts one vector");
    (heap, handle)
}

/// Allocate a zeroed output of `len` shares on `heap`.
pub fn alloc_out<T: ValueTag>(heap: &mut TypedHeap, len: usize) -> Handle<T> {
    heap.alloc::<T>(len).expect("default heap accepts allocation")
}

/// Describe `data` the way the host VM would pass writable memory.
pub fn vm_ref<R>(data: &mut [R]) -> VmRef {
    VmRef {
        ptr: data.as_mut_ptr().cast(),
        size: std::mem::size_of_val(data),
    }
}

/// Describe `data` the way the host VM would pass read-only memory.
pub fn vm_cref<R>(data: &[R]) -> VmCRef {
    VmCRef {
        ptr: data.as_ptr().cast(),
        size: std::mem::size_of_val(data),
    }
}
