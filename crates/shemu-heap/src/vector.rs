//! Heap-resident share vectors.

use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use rand::RngCore;
use shemu_core::{Repr, ValueTag};

/// Owned, fixed-length buffer of shares of tag `T`.
///
/// The length is set at construction and never changes. Once inserted into
/// a [`TypedHeap`](crate::TypedHeap) the heap owns it until erase or drop.
#[derive(Clone, Debug, PartialEq)]
pub struct OwnedVector<T: ValueTag> {
    data: Box<[T::Repr]>,
    _tag: PhantomData<T>,
}

impl<T: ValueTag> OwnedVector<T> {
    /// Allocate `len` default-valued (zero / `false`) shares.
    pub fn new(len: usize) -> Self {
        Self::from_vec(vec![T::Repr::default(); len])
    }

    /// Take ownership of existing shares.
    pub fn from_vec(data: Vec<T::Repr>) -> Self {
        Self {
            data: data.into_boxed_slice(),
            _tag: PhantomData,
        }
    }

    /// Copy shares out of a slice.
    pub fn from_slice(data: &[T::Repr]) -> Self {
        Self::from_vec(data.to_vec())
    }

    /// Number of shares.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector holds no shares.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read-only view of the shares.
    pub fn as_slice(&self) -> &[T::Repr] {
        &self.data
    }

    /// Mutable view of the shares. The length stays fixed.
    pub fn as_mut_slice(&mut self) -> &mut [T::Repr] {
        &mut self.data
    }

    /// Iterate over the shares.
    pub fn iter(&self) -> std::slice::Iter<'_, T::Repr> {
        self.data.iter()
    }

    /// Iterate mutably over the shares.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T::Repr> {
        self.data.iter_mut()
    }

    /// Overwrite every share with fresh randomness from `rng`.
    ///
    /// The source is borrowed for the call only.
    pub fn randomize<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        for v in self.data.iter_mut() {
            *v = T::Repr::random(rng);
        }
    }

    /// Release the shares.
    pub fn into_vec(self) -> Vec<T::Repr> {
        self.data.into_vec()
    }

    /// Size of the share buffer in bytes.
    pub fn byte_len(&self) -> usize {
        std::mem::size_of_val(&*self.data)
    }
}

impl<T: ValueTag> Index<usize> for OwnedVector<T> {
    type Output = T::Repr;

    fn index(&self, i: usize) -> &T::Repr {
        &self.data[i]
    }
}

impl<T: ValueTag> IndexMut<usize> for OwnedVector<T> {
    fn index_mut(&mut self, i: usize) -> &mut T::Repr {
        &mut self.data[i]
    }
}

impl<'a, T: ValueTag> IntoIterator for &'a OwnedVector<T> {
    type Item = &'a T::Repr;
    type IntoIter = std::slice::Iter<'a, T::Repr>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: ValueTag> FromIterator<T::Repr> for OwnedVector<T> {
    fn from_iter<I: IntoIterator<Item = T::Repr>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: ValueTag> From<Vec<T::Repr>> for OwnedVector<T> {
    fn from(data: Vec<T::Repr>) -> Self {
        Self::from_vec(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use shemu_core::{Bool, Float64, Int16, Uint64};

    #[test]
    fn new_is_default_filled() {
        let v: OwnedVector<Int16> = OwnedVector::new(5);
        assert_eq!(v.len(), 5);
        assert!(v.iter().all(|&x| x == 0));

        let b: OwnedVector<Bool> = OwnedVector::new(3);
        assert_eq!(b.as_slice(), &[false, false, false]);
    }

    #[test]
    fn empty_vector() {
        let v: OwnedVector<Float64> = OwnedVector::new(0);
        assert!(v.is_empty());
        assert_eq!(v.byte_len(), 0);
    }

    #[test]
    fn indexed_read_write() {
        let mut v: OwnedVector<Int16> = OwnedVector::new(3);
        v[1] = -7;
        v.as_mut_slice()[2] = 9;
        assert_eq!(v.into_vec(), vec![0, -7, 9]);
    }

    #[test]
    fn byte_len_tracks_repr_width() {
        let v: OwnedVector<Uint64> = OwnedVector::new(4);
        assert_eq!(v.byte_len(), 32);
    }

    #[test]
    fn randomize_keeps_length_and_is_seed_deterministic() {
        let mut a: OwnedVector<Uint64> = OwnedVector::new(32);
        let mut b: OwnedVector<Uint64> = OwnedVector::new(32);
        a.randomize(&mut ChaCha8Rng::seed_from_u64(11));
        b.randomize(&mut ChaCha8Rng::seed_from_u64(11));
        assert_eq!(a.len(), 32);
        assert_eq!(a, b);
        assert!(a.iter().any(|&x| x != 0));
    }

    #[test]
    fn collect_from_iterator() {
        let v: OwnedVector<Int16> = (1..=4).collect();
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
        let total: i32 = (&v).into_iter().map(|&x| x as i32).sum();
        assert_eq!(total, 10);
    }
}
