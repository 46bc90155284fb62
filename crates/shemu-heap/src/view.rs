//! Zero-copy views over host-owned memory.
//!
//! The host VM passes memory to a call as a `(pointer, byte length)` pair.
//! [`MutableView`] and [`ImmutableView`] wrap such a pair as a borrowed slice
//! whose lifetime is scoped to the call. A view never owns, frees, or
//! outlives the memory, and there is no way to turn one into a heap vector
//! handle.
//!
//! A reference that cannot be viewed soundly (byte length not a multiple
//! of the element size, null base with a positive length, or a base not
//! aligned for the element type) produces an empty view. The operation engine
//! then rejects it through its ordinary shape checks.

use std::ffi::c_void;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use shemu_core::{Repr, ValueTag};

/// Representations for which every bit pattern is a valid value.
///
/// Only these may be viewed directly in host memory. `bool` is excluded:
/// a host byte other than 0 or 1 would be undefined behaviour.
///
/// # Safety
///
/// Implementors must be plain data with no invalid bit patterns and no
/// padding.
#[allow(unsafe_code)]
pub unsafe trait HostRepr: Repr {}

macro_rules! host_repr {
    ($($t:ty),* $(,)?) => {$(
        // SAFETY: primitive numbers accept every bit pattern.
        #[allow(unsafe_code)]
        unsafe impl HostRepr for $t {}
    )*};
}

host_repr!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

/// Mutable host memory reference, as laid out at the module boundary.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct VmRef {
    /// Base address of the memory.
    pub ptr: *mut c_void,
    /// Length in bytes.
    pub size: usize,
}

/// Read-only host memory reference, as laid out at the module boundary.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct VmCRef {
    /// Base address of the memory.
    pub ptr: *const c_void,
    /// Length in bytes.
    pub size: usize,
}

/// Element count of a host reference, or `None` if it cannot be viewed.
fn element_count<R>(ptr: *const c_void, size: usize) -> Option<usize> {
    let width = std::mem::size_of::<R>();
    if width == 0 || size % width != 0 {
        return None;
    }
    let count = size / width;
    if count == 0 {
        return Some(0);
    }
    if ptr.is_null() || (ptr as usize) % std::mem::align_of::<R>() != 0 {
        return None;
    }
    Some(count)
}

/// Writable window over host-owned shares of tag `T`.
pub struct MutableView<'a, T: ValueTag> {
    data: &'a mut [T::Repr],
    _tag: PhantomData<T>,
}

impl<'a, T: ValueTag> MutableView<'a, T> {
    /// View a Rust slice.
    pub fn new(data: &'a mut [T::Repr]) -> Self {
        Self {
            data,
            _tag: PhantomData,
        }
    }

    /// Number of shares in the window.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the window is empty (including invalid references).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read-only access to the shares.
    pub fn as_slice(&self) -> &[T::Repr] {
        &*self.data
    }

    /// Mutable access to the shares.
    pub fn as_mut_slice(&mut self) -> &mut [T::Repr] {
        &mut *self.data
    }

    /// Reborrow as a read-only view without copying.
    pub fn as_immutable(&self) -> ImmutableView<'_, T> {
        ImmutableView::new(&*self.data)
    }

    /// Iterate over the shares.
    pub fn iter(&self) -> std::slice::Iter<'_, T::Repr> {
        self.data.iter()
    }
}

impl<'a, T: ValueTag> MutableView<'a, T>
where
    T::Repr: HostRepr,
{
    /// View host memory described by `r`.
    ///
    /// Returns an empty view if `r` cannot be viewed as `T` shares.
    ///
    /// # Safety
    ///
    /// If `r.ptr` is non-null, it must point to `r.size` bytes that are valid
    /// for reads and writes for `'a` and not accessed through any other
    /// pointer while the view lives.
    #[allow(unsafe_code)]
    pub unsafe fn from_vm_ref(r: VmRef) -> Self {
        match element_count::<T::Repr>(r.ptr, r.size) {
            Some(count) if count > 0 => {
                // SAFETY: non-null and aligned (checked by element_count),
                // exact element count, validity and exclusivity per caller
                // contract; HostRepr accepts any bit pattern.
                let data =
                    unsafe { std::slice::from_raw_parts_mut(r.ptr.cast::<T::Repr>(), count) };
                Self::new(data)
            }
            _ => Self::new(Default::default()),
        }
    }
}

impl<T: ValueTag> Index<usize> for MutableView<'_, T> {
    type Output = T::Repr;

    fn index(&self, i: usize) -> &T::Repr {
        &self.data[i]
    }
}

impl<T: ValueTag> IndexMut<usize> for MutableView<'_, T> {
    fn index_mut(&mut self, i: usize) -> &mut T::Repr {
        &mut self.data[i]
    }
}

/// Read-only window over host-owned shares of tag `T`.
pub struct ImmutableView<'a, T: ValueTag> {
    data: &'a [T::Repr],
    _tag: PhantomData<T>,
}

impl<'a, T: ValueTag> ImmutableView<'a, T> {
    /// View a Rust slice.
    pub fn new(data: &'a [T::Repr]) -> Self {
        Self {
            data,
            _tag: PhantomData,
        }
    }

    /// Number of shares in the window.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the window is empty (including invalid references).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Access the shares.
    pub fn as_slice(&self) -> &'a [T::Repr] {
        self.data
    }

    /// Iterate over the shares.
    pub fn iter(&self) -> std::slice::Iter<'a, T::Repr> {
        self.data.iter()
    }
}

impl<'a, T: ValueTag> ImmutableView<'a, T>
where
    T::Repr: HostRepr,
{
    /// View read-only host memory described by `r`.
    ///
    /// Returns an empty view if `r` cannot be viewed as `T` shares.
    ///
    /// # Safety
    ///
    /// If `r.ptr` is non-null, it must point to `r.size` bytes that are valid
    /// for reads for `'a` and not written through any other pointer while the
    /// view lives.
    #[allow(unsafe_code)]
    pub unsafe fn from_vm_cref(r: VmCRef) -> Self {
        match element_count::<T::Repr>(r.ptr, r.size) {
            Some(count) if count > 0 => {
                // SAFETY: non-null and aligned (checked by element_count),
                // exact element count, validity per caller contract.
                let data =
                    unsafe { std::slice::from_raw_parts(r.ptr.cast::<T::Repr>(), count) };
                Self::new(data)
            }
            _ => Self::new(&[]),
        }
    }
}

impl<T: ValueTag> Clone for ImmutableView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ValueTag> Copy for ImmutableView<'_, T> {}

impl<T: ValueTag> Index<usize> for ImmutableView<'_, T> {
    type Output = T::Repr;

    fn index(&self, i: usize) -> &T::Repr {
        &self.data[i]
    }
}

impl<'a, T: ValueTag> From<MutableView<'a, T>> for ImmutableView<'a, T> {
    fn from(view: MutableView<'a, T>) -> Self {
        ImmutableView::new(view.data)
    }
}
